//! Deterministic adapters for tests.
//!
//! These substitute for the live clock and RNG so that `generate()` becomes
//! a pure function of scripted inputs and its exact output can be asserted.

pub mod clock;
pub mod random;

pub use clock::FixedClock;
pub use random::SequenceRandomSource;
