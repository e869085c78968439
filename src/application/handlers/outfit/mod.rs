//! Outfit handlers: set generation, unique outfits, listings, favorites, replacement.

mod generate_outfit_set;
mod generate_unique_outfit;
mod get_outfit;
mod list_outfits;
mod replace_outfit_item;
mod set_favorite;

pub use generate_outfit_set::{
    GenerateOutfitSetCommand, GenerateOutfitSetHandler, GenerateOutfitSetResult,
    GenerationSettings, DEFAULT_ATTEMPTS_PER_OUTFIT, DEFAULT_GENERATION_DEADLINE,
};
pub use generate_unique_outfit::{
    GenerateUniqueOutfitCommand, GenerateUniqueOutfitHandler, GenerateUniqueOutfitResult,
};
pub use get_outfit::{GetOutfitHandler, GetOutfitQuery};
pub use list_outfits::{ListOutfitsHandler, ListOutfitsQuery};
pub use replace_outfit_item::{ReplaceOutfitItemCommand, ReplaceOutfitItemHandler};
pub use set_favorite::{SetFavoriteCommand, SetFavoriteHandler};
