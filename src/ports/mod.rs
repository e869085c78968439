//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the wardrobe core and the outside world. Adapters implement these ports;
//! handlers receive them as `Arc<dyn Port>` at construction time.
//!
//! ## Storage Ports
//!
//! - `InventoryReader` - Active clothing items of a user
//! - `ItemRepository` - Item registration, edits and soft delete
//! - `OutfitRepository` - Outfits and their item links
//! - `StackRepository` - Date-ranged stacks, cascade delete
//!
//! ## Other Ports
//!
//! - `SeedSource` - Seeds for the per-call random generator
//! - `SessionValidator` - Bearer token validation

mod inventory_reader;
mod item_repository;
mod outfit_repository;
mod seed_source;
mod session_validator;
mod stack_repository;

pub use inventory_reader::InventoryReader;
pub use item_repository::{ItemRepository, ItemWrite};
pub use outfit_repository::{ItemReplacement, OutfitRepository};
pub use seed_source::SeedSource;
pub use session_validator::SessionValidator;
pub use stack_repository::StackRepository;
