//! Port traits defining the generator's external boundaries.
//!
//! The generator touches exactly two external systems: the wall clock and a
//! source of uniform randomness. Each is a trait here so tests can substitute
//! deterministic implementations. Implementations live in `src/adapters/`.

pub mod clock;
pub mod random;

pub use clock::Clock;
pub use random::RandomSource;
