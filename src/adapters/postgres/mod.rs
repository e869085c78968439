//! PostgreSQL adapters - Database implementations for the storage ports.
//!
//! - `PostgresInventoryReader` - Active garments with catalogue names joined
//! - `PostgresItemRepository` - Item registration and edits, catalogue names resolved in-transaction
//! - `PostgresOutfitRepository` - Outfits and `outfit_prenda` links, one transaction per write
//! - `PostgresStackRepository` - Stacks with explicit cascade deletes

mod inventory_reader;
mod item_repository;
mod outfit_repository;
mod rows;
mod stack_repository;

pub use inventory_reader::PostgresInventoryReader;
pub use item_repository::PostgresItemRepository;
pub use outfit_repository::PostgresOutfitRepository;
pub use stack_repository::PostgresStackRepository;
