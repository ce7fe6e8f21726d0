//! The 64-character alphabet identifiers are spelled in.
//!
//! Modeled after base64 web-safe characters but reordered so that character
//! order matches ASCII order, which is what makes byte-wise comparison of
//! identifiers agree with numeric comparison of their timestamps.

/// Number of characters in the alphabet. Identifier digits are base-64
/// numerals indexed into [`ALPHABET`].
pub const BASE: usize = 64;

/// The alphabet, strictly increasing by ASCII code. Index 0 is `-`,
/// index 63 is `z`.
pub const ALPHABET: &[u8; BASE] =
    b"-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

/// Returns the alphabet character at `index`.
///
/// # Panics
///
/// Panics if `index` is [`BASE`] or greater.
#[must_use]
pub fn char_at(index: usize) -> char {
    char::from(ALPHABET[index])
}

/// Returns `true` if `c` is a member of the alphabet.
#[must_use]
pub fn contains(c: char) -> bool {
    u8::try_from(c).is_ok_and(|byte| ALPHABET.contains(&byte))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_64_distinct_characters() {
        let mut seen = [false; 256];
        for &byte in ALPHABET {
            assert!(!seen[byte as usize], "duplicate character {}", byte as char);
            seen[byte as usize] = true;
        }
    }

    #[test]
    fn is_strictly_increasing_by_ascii_code() {
        for pair in ALPHABET.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort before {}", pair[0] as char, pair[1] as char);
        }
    }

    #[test]
    fn endpoints() {
        assert_eq!(char_at(0), '-');
        assert_eq!(char_at(1), '0');
        assert_eq!(char_at(63), 'z');
    }

    #[test]
    fn membership() {
        assert!(contains('-'));
        assert!(contains('A'));
        assert!(contains('z'));
        assert!(!contains('+'));
        assert!(!contains('/'));
        assert!(!contains('é'));
    }
}
