//! Core types and structures for word-forge

use serde::{Deserialize, Serialize};

/// Default cap on total combinations before exhaustive enumeration is refused.
///
/// A named constant of configuration construction, not hidden process-wide
/// state, so callers and tests can override it per invocation.
pub const DEFAULT_CAP: u64 = 1_000_000;

/// Which character categories go into the alphabet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharClasses {
    pub lower: bool,
    pub upper: bool,
    pub digits: bool,
    pub special: bool,
}

impl CharClasses {
    /// True when no category is selected
    pub fn is_empty(&self) -> bool {
        !(self.lower || self.upper || self.digits || self.special)
    }
}

impl std::fmt::Display for CharClasses {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names = Vec::new();
        if self.lower {
            names.push("lower");
        }
        if self.upper {
            names.push("upper");
        }
        if self.digits {
            names.push("digits");
        }
        if self.special {
            names.push("special");
        }
        write!(f, "{}", names.join("+"))
    }
}

/// How generated words leave the process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Stdout,
    File(String),
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputMode::Stdout => write!(f, "stdout"),
            OutputMode::File(path) => write!(f, "{}", path),
        }
    }
}

/// Fully resolved generation configuration.
///
/// Constructed once per invocation and never mutated. The binary builds it
/// from command line flags; library callers can build it directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Selected character categories
    pub classes: CharClasses,
    /// Extra special characters appended verbatim to the alphabet
    pub extra_special: String,
    /// Minimum word length (inclusive, >= 1)
    pub min_len: usize,
    /// Maximum word length (inclusive, >= min_len)
    pub max_len: usize,
    /// Cap on total combinations for exhaustive enumeration
    pub cap: u64,
    /// Override the cap and enumerate anyway
    pub force: bool,
    /// Draw N random samples instead of enumerating
    pub sample: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            classes: CharClasses {
                lower: true,
                ..Default::default()
            },
            extra_special: String::new(),
            min_len: 1,
            max_len: 1,
            cap: DEFAULT_CAP,
            force: false,
            sample: None,
        }
    }
}

impl Config {
    /// True when this invocation samples rather than enumerates
    pub fn is_sampling(&self) -> bool {
        self.sample.is_some()
    }

    /// True when the length range is a single fixed length
    pub fn has_fixed_length(&self) -> bool {
        self.min_len == self.max_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.classes.lower);
        assert!(!config.classes.special);
        assert_eq!(config.cap, 1_000_000);
        assert!(!config.force);
        assert!(config.sample.is_none());
    }

    #[test]
    fn test_char_classes_display() {
        let classes = CharClasses {
            lower: true,
            digits: true,
            ..Default::default()
        };
        assert_eq!(classes.to_string(), "lower+digits");
        assert!(!classes.is_empty());
        assert!(CharClasses::default().is_empty());
    }
}
