//! Implementations of the clock and randomness ports.

pub mod fixed;
pub mod live;
