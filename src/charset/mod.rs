//! Alphabet construction from character categories

use crate::error::{Result, WordForgeError};
use crate::types::CharClasses;

/// Lowercase letters (a-z)
pub const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase letters (A-Z)
pub const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Decimal digits (0-9)
pub const DIGITS: &str = "0123456789";

/// Conservative common special characters; extend via extra specials
pub const SPECIAL: &str = "!@#$%^&*()-_=+[]{};:,.<>/?";

/// The ordered, unique set of characters eligible to appear in generated words.
///
/// Built from category flags plus caller-supplied extra characters. Category
/// sets concatenate in lower, upper, digits, special order; extras follow in
/// caller order. Duplicates are removed keeping the first occurrence, so
/// overlapping extras never inflate combination counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from category flags and extra special characters.
    ///
    /// Fails when the result would be empty (no category selected and no
    /// extras supplied).
    pub fn build(classes: &CharClasses, extra_special: &str) -> Result<Self> {
        let mut chars: Vec<char> = Vec::new();

        if classes.lower {
            chars.extend(LOWER.chars());
        }
        if classes.upper {
            chars.extend(UPPER.chars());
        }
        if classes.digits {
            chars.extend(DIGITS.chars());
        }
        if classes.special {
            chars.extend(SPECIAL.chars());
        }
        chars.extend(extra_special.chars());

        // Dedup preserving first-occurrence order
        let mut seen = std::collections::HashSet::new();
        chars.retain(|c| seen.insert(*c));

        if chars.is_empty() {
            return Err(WordForgeError::config(
                "No character classes selected. Use --lower, --upper, --digits, and/or --special.",
            ));
        }

        tracing::debug!(size = chars.len(), "Alphabet built");
        Ok(Self { chars })
    }

    /// Build an alphabet from an explicit character sequence (mainly for tests
    /// and library callers); duplicates are removed keeping first occurrence.
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Result<Self> {
        let mut chars: Vec<char> = chars.into_iter().collect();
        let mut seen = std::collections::HashSet::new();
        chars.retain(|c| seen.insert(*c));

        if chars.is_empty() {
            return Err(WordForgeError::config("Alphabet must not be empty."));
        }
        Ok(Self { chars })
    }

    /// The characters, in enumeration order
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters in the alphabet
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Alphabets are never empty by construction, but Clippy insists
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// True when the alphabet contains the character
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
