//! Random seed port.

/// Supplies one seed per generation call.
///
/// Handlers build a fresh seeded generator from it, so injecting a fixed
/// source makes a whole generation run reproducible.
pub trait SeedSource: Send + Sync {
    fn next_seed(&self) -> u64;
}
