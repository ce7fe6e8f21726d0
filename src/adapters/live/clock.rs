//! Live adapter for the `Clock` port.

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;

/// Live clock reading the system wall clock.
///
/// The generator truncates readings to whole milliseconds, so sub-millisecond
/// precision of the underlying clock is irrelevant.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_the_system_clock() {
        let clock = LiveClock;
        let before = Utc::now();
        let now = clock.now();
        assert!(now >= before);
        assert!(Utc::now() >= now);
    }
}
