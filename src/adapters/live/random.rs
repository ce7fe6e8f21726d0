//! Live adapter for the `RandomSource` port.

use rand::Rng;

use crate::alphabet;
use crate::ports::random::RandomSource;

/// Live randomness source drawing from the thread-local RNG.
pub struct LiveRandomSource;

impl RandomSource for LiveRandomSource {
    fn next_index(&self) -> usize {
        rand::thread_rng().gen_range(0..alphabet::BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_within_the_alphabet() {
        let source = LiveRandomSource;
        for _ in 0..1000 {
            assert!(source.next_index() < alphabet::BASE);
        }
    }
}
