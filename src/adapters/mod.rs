//! Adapters - Implementations of port interfaces.
//!
//! - `postgres` - sqlx implementations of the storage ports
//! - `memory` - in-memory wardrobe for tests and local runs
//! - `random` - seed sources for outfit generation
//! - `auth` - session token validators
//! - `http` - axum routers over the application handlers

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod random;
