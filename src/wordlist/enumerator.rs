//! Streaming word enumerator
//!
//! Walks every word in a length range without materializing the set. Words
//! come out lengths ascending, and within a length in odometer order: each
//! position is a digit in base |alphabet| with the rightmost position
//! cycling fastest. The index vector is the only state, so memory stays
//! O(max_len) no matter how large the word space is.

use crate::charset::Alphabet;
use crate::combinatorics::validate_range;
use crate::error::Result;

/// Lazy generator of every word across a length range.
///
/// A fresh enumerator always starts at the first word of the minimum
/// length; it is consumed once, start to exhaustion or early drop.
pub struct Enumerator {
    alphabet: Alphabet,
    max_len: usize,
    /// Digit indices of the current word; its length is the current word length
    odometer: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl Enumerator {
    /// Create an enumerator over `[min_len, max_len]`.
    ///
    /// The caller is expected to have authorized the run against the safety
    /// cap; this only validates the range itself.
    pub fn new(alphabet: Alphabet, min_len: usize, max_len: usize) -> Result<Self> {
        validate_range(min_len, max_len)?;
        Ok(Self {
            alphabet,
            max_len,
            odometer: vec![0; min_len],
            started: false,
            exhausted: false,
        })
    }

    /// Length of the word the enumerator is currently positioned at
    pub fn current_length(&self) -> usize {
        self.odometer.len()
    }

    /// True once every word in the range has been emitted
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    fn current_word(&self) -> String {
        let chars = self.alphabet.chars();
        self.odometer.iter().map(|&i| chars[i]).collect()
    }

    /// Advance the odometer one step; returns false when the range is done
    fn advance(&mut self) -> bool {
        let base = self.alphabet.len();

        for slot in self.odometer.iter_mut().rev() {
            *slot += 1;
            if *slot < base {
                return true;
            }
            *slot = 0;
        }

        // Carried past the leftmost digit: move to the next length
        let next_len = self.odometer.len() + 1;
        if next_len > self.max_len {
            return false;
        }
        self.odometer = vec![0; next_len];
        true
    }
}

impl Iterator for Enumerator {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current_word());
        }
        if !self.advance() {
            self.exhausted = true;
            return None;
        }
        Some(self.current_word())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinatorics::total_for_range;
    use crate::types::CharClasses;
    use std::collections::HashSet;

    fn letters() -> Alphabet {
        let classes = CharClasses {
            lower: true,
            ..Default::default()
        };
        Alphabet::build(&classes, "").unwrap()
    }

    #[test]
    fn test_first_words() {
        let mut words = Enumerator::new(letters(), 2, 2).unwrap();
        assert_eq!(words.next(), Some("aa".to_string()));
        assert_eq!(words.next(), Some("ab".to_string()));
    }

    #[test]
    fn test_rightmost_cycles_fastest() {
        let words: Vec<String> = Enumerator::new(letters(), 4, 4).unwrap().take(27).collect();
        assert_eq!(words[0], "aaaa");
        assert_eq!(words[1], "aaab");
        assert_eq!(words[25], "aaaz");
        assert_eq!(words[26], "aaba");
    }

    #[test]
    fn test_lengths_ascend_across_boundary() {
        let alphabet = Alphabet::from_chars("ab".chars()).unwrap();
        let words: Vec<String> = Enumerator::new(alphabet, 1, 2).unwrap().collect();
        assert_eq!(words, vec!["a", "b", "aa", "ab", "ba", "bb"]);
    }

    #[test]
    fn test_full_coverage_no_duplicates() {
        let alphabet = Alphabet::from_chars("ab".chars()).unwrap();
        let words: Vec<String> =
            Enumerator::new(alphabet.clone(), 1, 3).unwrap().collect();

        let expected_total = total_for_range(&alphabet, 1, 3).unwrap();
        assert_eq!(num_bigint::BigUint::from(words.len()), expected_total);
        assert_eq!(words.len(), 14);

        let unique: HashSet<&String> = words.iter().collect();
        assert_eq!(unique.len(), words.len());

        // Brute-force cross product for comparison
        let mut expected = HashSet::new();
        for a in ['a', 'b'] {
            expected.insert(a.to_string());
            for b in ['a', 'b'] {
                expected.insert(format!("{}{}", a, b));
                for c in ['a', 'b'] {
                    expected.insert(format!("{}{}{}", a, b, c));
                }
            }
        }
        let emitted: HashSet<String> = words.into_iter().collect();
        assert_eq!(emitted, expected);
    }

    #[test]
    fn test_deterministic_across_invocations() {
        let alphabet = Alphabet::from_chars("xyz".chars()).unwrap();
        let first: Vec<String> = Enumerator::new(alphabet.clone(), 1, 3).unwrap().collect();
        let second: Vec<String> = Enumerator::new(alphabet, 1, 3).unwrap().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_char_alphabet() {
        let alphabet = Alphabet::from_chars(std::iter::once('x')).unwrap();
        let words: Vec<String> = Enumerator::new(alphabet, 1, 4).unwrap().collect();
        assert_eq!(words, vec!["x", "xx", "xxx", "xxxx"]);
    }

    #[test]
    fn test_exhaustion_is_final() {
        let alphabet = Alphabet::from_chars("ab".chars()).unwrap();
        let mut words = Enumerator::new(alphabet, 1, 1).unwrap();
        assert!(!words.is_exhausted());
        assert_eq!(words.next(), Some("a".to_string()));
        assert_eq!(words.next(), Some("b".to_string()));
        assert_eq!(words.next(), None);
        assert!(words.is_exhausted());
        assert_eq!(words.next(), None);
    }

    #[test]
    fn test_invalid_range_rejected() {
        assert!(Enumerator::new(letters(), 3, 2).is_err());
        assert!(Enumerator::new(letters(), 0, 2).is_err());
    }

    #[test]
    fn test_current_length_tracks_position() {
        let alphabet = Alphabet::from_chars("ab".chars()).unwrap();
        let mut words = Enumerator::new(alphabet, 1, 2).unwrap();
        assert_eq!(words.current_length(), 1);
        words.nth(2); // "a", "b", "aa"
        assert_eq!(words.current_length(), 2);
    }
}
