//! Stack handlers: creation, listing, deletion, today's outfit.

mod create_stack;
mod delete_user_stacks;
mod get_todays_outfit;
mod list_user_stacks;

pub use create_stack::{CreateStackCommand, CreateStackHandler, CreateStackResult};
pub use delete_user_stacks::{DeleteUserStacksCommand, DeleteUserStacksHandler};
pub use get_todays_outfit::{
    GetTodaysOutfitHandler, GetTodaysOutfitQuery, TodaysOutfit, DEFAULT_STACK_DAYS,
};
pub use list_user_stacks::{ListUserStacksHandler, ListUserStacksQuery, StackWithOutfits};
