//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, authenticated user)
//! - `wardrobe` - Clothing items, categories, styles and colors
//! - `outfit` - Availability analysis, outfit composition and outfit errors
//! - `stack` - Multi-day outfit schedules

pub mod foundation;
pub mod outfit;
pub mod stack;
pub mod wardrobe;
