//! The identifier generator.

use std::sync::Mutex;

use crate::adapters::live::{LiveClock, LiveRandomSource};
use crate::alphabet;
use crate::ports::{Clock, RandomSource};

/// Number of base-64 digits in the timestamp prefix. Eight 6-bit digits
/// cover 48 bits of milliseconds, enough until roughly the year 10889.
const TIMESTAMP_DIGITS: usize = 8;

/// Number of base-64 digits in the random suffix (72 bits).
const SUFFIX_DIGITS: usize = 12;

/// State carried from one generation to the next: the millisecond reading
/// and the suffix digits of the previous call.
struct Previous {
    millis: u64,
    indexes: [usize; SUFFIX_DIGITS],
}

/// Generates 20-character sortable string identifiers.
///
/// Identifiers sort lexicographically in generation order. When two calls
/// land in the same millisecond the second reuses the first's random suffix
/// incremented by one, so ids stay monotonically increasing even within a
/// single clock tick. The previous-call state lives behind a mutex, and the
/// clock read, duplicate check, and state update all run under that one
/// lock, so ids from a shared generator sort in the order the calls
/// completed.
///
/// ```
/// use pushkey::Generator;
///
/// let generator = Generator::default();
/// let a = generator.generate();
/// let b = generator.generate();
/// assert!(a < b);
/// ```
pub struct Generator {
    clock: Box<dyn Clock>,
    random: Box<dyn RandomSource>,
    previous: Mutex<Option<Previous>>,
}

impl Generator {
    /// Creates a generator using the given clock and randomness source.
    #[must_use]
    pub fn new(clock: Box<dyn Clock>, random: Box<dyn RandomSource>) -> Self {
        Self { clock, random, previous: Mutex::new(None) }
    }

    /// Generates the next identifier.
    ///
    /// Always returns a 20-character string over the identifier alphabet.
    /// Clock readings before the Unix epoch clamp to 0 ms.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut previous = self.previous.lock().expect("generator state lock poisoned");

        // The clock read is part of the critical section: a reading taken
        // outside the lock could be handed out after a later one.
        let now_ms = u64::try_from(self.clock.now().timestamp_millis()).unwrap_or(0);
        let indexes = match previous.as_ref() {
            Some(prev) if prev.millis == now_ms => increment(prev.indexes),
            _ => self.draw_suffix(),
        };
        *previous = Some(Previous { millis: now_ms, indexes });

        let mut id = String::with_capacity(TIMESTAMP_DIGITS + SUFFIX_DIGITS);
        for shift in (0..TIMESTAMP_DIGITS).rev() {
            let digit = (now_ms >> (6 * shift)) % alphabet::BASE as u64;
            id.push(alphabet::char_at(digit as usize));
        }
        for &index in &indexes {
            id.push(alphabet::char_at(index));
        }
        id
    }

    fn draw_suffix(&self) -> [usize; SUFFIX_DIGITS] {
        let mut indexes = [0; SUFFIX_DIGITS];
        for slot in &mut indexes {
            *slot = self.random.next_index();
        }
        indexes
    }
}

impl Default for Generator {
    /// Creates a generator backed by the system clock and thread-local RNG.
    fn default() -> Self {
        Self::new(Box::new(LiveClock), Box::new(LiveRandomSource))
    }
}

/// Adds one to the suffix, treated as a base-64 number with its
/// most-significant digit first.
///
/// A suffix already at the maximum (all digits 63) wraps to all zeros.
/// That forfeits ordering for that one id, but only after 2^72 - 1
/// increments inside a single millisecond.
fn increment(mut indexes: [usize; SUFFIX_DIGITS]) -> [usize; SUFFIX_DIGITS] {
    for digit in indexes.iter_mut().rev() {
        if *digit < alphabet::BASE - 1 {
            *digit += 1;
            return indexes;
        }
        *digit = 0;
    }
    indexes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_adds_one_to_the_last_digit() {
        assert_eq!(increment([0; 12]), [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(
            increment([5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55, 60]),
            [5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55, 61]
        );
    }

    #[test]
    fn increment_carries_past_max_digits() {
        assert_eq!(
            increment([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 63]),
            [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0]
        );
        assert_eq!(
            increment([0, 0, 0, 0, 0, 0, 0, 0, 0, 7, 63, 63]),
            [0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 0, 0]
        );
    }

    #[test]
    fn increment_wraps_at_the_maximum_suffix() {
        assert_eq!(increment([63; 12]), [0; 12]);
    }
}
