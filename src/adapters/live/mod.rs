//! Live adapters backed by the system clock and thread-local RNG.

pub mod clock;
pub mod random;

pub use clock::LiveClock;
pub use random::LiveRandomSource;
