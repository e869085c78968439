//! Outfit module - composing garments into outfits.
//!
//! The pieces here are pure: grouping and availability analysis over an
//! already-fetched inventory, and a randomized composer driven by an
//! injected random source. Persistence and orchestration live in the
//! application layer.

mod availability;
mod composer;
mod errors;
mod entity;
mod filter;
mod policy;
mod weekday;

pub use availability::{
    calculate_max_outfits, check_availability, group_by_style_and_category, Availability,
    CategoryBuckets, GroupedInventory,
};
pub use composer::{ComposeError, OutfitComposer, DEFAULT_OUTERWEAR_PROBABILITY};
pub use errors::{GenerationError, OutfitError};
pub use entity::{dedup_key, NewOutfit, Outfit};
pub use filter::{listing_order, OutfitFilter, OutfitKind};
pub use policy::CategorySelectionPolicy;
pub use weekday::{parse_weekday, weekday_label};
