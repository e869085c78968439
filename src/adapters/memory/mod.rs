//! In-memory adapters for the storage ports.
//!
//! Useful for tests and local development without PostgreSQL.

mod wardrobe_store;

pub use wardrobe_store::InMemoryWardrobe;
