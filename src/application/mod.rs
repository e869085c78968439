//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers write (items, stacks, outfits, favorites); query handlers read.

pub mod handlers;

pub use handlers::{
    CreateStackCommand, CreateStackHandler, CreateStackResult, DeleteUserStacksCommand,
    DeleteUserStacksHandler, GenerateOutfitSetCommand, GenerateOutfitSetHandler,
    GenerateOutfitSetResult, GenerateUniqueOutfitCommand, GenerateUniqueOutfitHandler,
    GenerateUniqueOutfitResult, GenerationSettings, GetOutfitHandler, GetOutfitQuery,
    GetTodaysOutfitHandler, GetTodaysOutfitQuery, ListItemsHandler, ListItemsQuery,
    ListOutfitsHandler, ListOutfitsQuery, ListUserStacksHandler, ListUserStacksQuery,
    RegisterItemCommand, RegisterItemHandler, ReplaceOutfitItemCommand, ReplaceOutfitItemHandler,
    SetFavoriteCommand, SetFavoriteHandler, StackWithOutfits, TodaysOutfit, UpdateItemCommand,
    UpdateItemHandler,
};
