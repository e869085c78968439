//! Seed sources for outfit generation.

use rand::Rng;

use crate::ports::SeedSource;

/// Draws every seed from the thread-local OS-seeded generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSeedSource;

impl SeedSource for OsSeedSource {
    fn next_seed(&self) -> u64 {
        rand::rng().random()
    }
}

/// Always returns the same seed. Makes generation runs reproducible.
#[derive(Debug, Clone, Copy)]
pub struct FixedSeedSource(pub u64);

impl SeedSource for FixedSeedSource {
    fn next_seed(&self) -> u64 {
        self.0
    }
}
