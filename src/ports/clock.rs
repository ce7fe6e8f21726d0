//! Clock port for obtaining the current time.

use chrono::{DateTime, Utc};

/// Provides the current time.
///
/// Abstracting time access lets tests supply fixed or sequential instants
/// and assert exact identifier output. The generator only needs millisecond
/// resolution; it does not require monotonicity, though a clock that jumps
/// backwards weakens the ordering guarantee for ids generated across the
/// jump.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
