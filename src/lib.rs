//! Lookmatch - wardrobe backend.
//!
//! Keeps a user's clothing inventory and composes outfits from it: one-off
//! outfits, multi-day stacks with one dated outfit per day, favorites and
//! item swaps.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
