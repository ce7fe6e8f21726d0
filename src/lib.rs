//! Sortable, monotonically increasing string identifiers.
//!
//! Each identifier is a 20-character ASCII string: an 8-character base-64
//! encoding of the current Unix time in milliseconds, followed by a
//! 12-character (72-bit) random suffix. Byte-wise comparison of two
//! identifiers matches the order in which they were generated: later
//! timestamps sort after earlier ones, and two identifiers generated within
//! the same millisecond stay ordered because the second reuses the first's
//! suffix incremented by one.
//!
//! Time and randomness are ports ([`Clock`], [`RandomSource`]) injected into
//! the [`Generator`], so tests can drive it deterministically. Production
//! code can use the live adapters via [`Generator::default`]:
//!
//! ```
//! use pushkey::Generator;
//!
//! let generator = Generator::default();
//! let id = generator.generate();
//! assert_eq!(id.len(), 20);
//! ```

pub mod adapters;
pub mod alphabet;
pub mod generator;
pub mod ports;

pub use generator::Generator;
pub use ports::{Clock, RandomSource};
