//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations over ports.

pub mod item;
pub mod outfit;
pub mod stack;

pub use item::{
    ListItemsHandler, ListItemsQuery, RegisterItemCommand, RegisterItemHandler,
    UpdateItemCommand, UpdateItemHandler,
};
pub use outfit::{
    GenerateOutfitSetCommand, GenerateOutfitSetHandler, GenerateOutfitSetResult,
    GenerateUniqueOutfitCommand, GenerateUniqueOutfitHandler, GenerateUniqueOutfitResult,
    GenerationSettings, GetOutfitHandler, GetOutfitQuery, ListOutfitsHandler, ListOutfitsQuery,
    ReplaceOutfitItemCommand, ReplaceOutfitItemHandler, SetFavoriteCommand, SetFavoriteHandler,
};
pub use stack::{
    CreateStackCommand, CreateStackHandler, CreateStackResult, DeleteUserStacksCommand,
    DeleteUserStacksHandler, GetTodaysOutfitHandler, GetTodaysOutfitQuery, ListUserStacksHandler,
    ListUserStacksQuery, StackWithOutfits, TodaysOutfit,
};
