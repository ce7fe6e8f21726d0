//! Randomness port for drawing identifier suffix digits.

/// Provides uniformly distributed alphabet indexes.
///
/// Abstracting randomness lets tests script exact suffix digits. No
/// cryptographic strength is required; the suffix only guards against
/// collisions between independent generators.
pub trait RandomSource: Send + Sync {
    /// Returns a uniform random index in `[0, 64)`.
    ///
    /// Implementations must stay below [`crate::alphabet::BASE`]; the
    /// generator indexes the alphabet with the returned value directly.
    fn next_index(&self) -> usize;
}
