//! Exact combination counting over length ranges
//!
//! Counts routinely exceed 64-bit range (62^11 already overflows), so all
//! arithmetic runs on `BigUint` with no precision loss.

use num_bigint::BigUint;

use crate::charset::Alphabet;
use crate::error::{Result, WordForgeError};

/// Number of words of exactly `length` characters over `alphabet`.
///
/// This is |alphabet| ^ length, computed exactly.
pub fn count_for_length(alphabet: &Alphabet, length: usize) -> BigUint {
    BigUint::from(alphabet.len()).pow(length as u32)
}

/// Total number of words across all lengths in `[min_len, max_len]` inclusive.
///
/// Length 0 (the empty word) is not permitted: `min_len` must be at least 1.
pub fn total_for_range(alphabet: &Alphabet, min_len: usize, max_len: usize) -> Result<BigUint> {
    validate_range(min_len, max_len)?;

    let mut total = BigUint::from(0u32);
    for length in min_len..=max_len {
        total += count_for_length(alphabet, length);
    }
    Ok(total)
}

/// Validate a length range: `1 <= min_len <= max_len`
pub fn validate_range(min_len: usize, max_len: usize) -> Result<()> {
    if min_len < 1 {
        return Err(WordForgeError::config(
            "Minimum length must be at least 1.",
        ));
    }
    if min_len > max_len {
        return Err(WordForgeError::config(format!(
            "Invalid length range: min {} exceeds max {}.",
            min_len, max_len
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CharClasses;

    fn alphabet_of_size(n: usize) -> Alphabet {
        let chars = (0..n).map(|i| char::from_u32(0x21 + i as u32).unwrap());
        Alphabet::from_chars(chars).unwrap()
    }

    #[test]
    fn test_count_matches_pow() {
        for size in [1usize, 2, 62] {
            let alphabet = alphabet_of_size(size);
            for length in 1..=12usize {
                let expected = BigUint::from(size).pow(length as u32);
                assert_eq!(count_for_length(&alphabet, length), expected);
            }
        }
    }

    #[test]
    fn test_count_exceeds_u64() {
        let classes = CharClasses {
            lower: true,
            upper: true,
            digits: true,
            ..Default::default()
        };
        let alphabet = Alphabet::build(&classes, "").unwrap();
        let count = count_for_length(&alphabet, 20);
        // 62^20 ~ 7e35, far past u64::MAX
        assert!(count > BigUint::from(u64::MAX));
        assert_eq!(count, BigUint::from(62u32).pow(20));
    }

    #[test]
    fn test_total_is_sum_of_lengths() {
        let alphabet = alphabet_of_size(2);
        // 2 + 4 + 8
        assert_eq!(
            total_for_range(&alphabet, 1, 3).unwrap(),
            BigUint::from(14u32)
        );
    }

    #[test]
    fn test_single_length_range() {
        let alphabet = alphabet_of_size(26);
        assert_eq!(
            total_for_range(&alphabet, 4, 4).unwrap(),
            count_for_length(&alphabet, 4)
        );
    }

    #[test]
    fn test_invalid_ranges() {
        let alphabet = alphabet_of_size(2);
        assert!(total_for_range(&alphabet, 3, 2).is_err());
        assert!(total_for_range(&alphabet, 0, 2).is_err());
    }
}
