//! Charset and combination-count reporting

use chrono::{DateTime, Utc};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::charset::Alphabet;
use crate::error::Result;

/// Snapshot of an invocation's alphabet and word-space size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    /// The alphabet, in enumeration order
    pub charset: String,
    /// Number of unique characters
    pub charset_size: usize,
    /// Minimum word length (inclusive)
    pub min_len: usize,
    /// Maximum word length (inclusive)
    pub max_len: usize,
    /// Exact total combinations across the range, as a decimal string
    /// (kept textual because the value routinely exceeds u64)
    pub total_combinations: String,
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
}

impl StatsReport {
    pub fn new(alphabet: &Alphabet, min_len: usize, max_len: usize, total: &BigUint) -> Self {
        Self {
            charset: alphabet.to_string(),
            charset_size: alphabet.len(),
            min_len,
            max_len,
            total_combinations: total.to_string(),
            generated_at: Utc::now(),
        }
    }

    /// Render as a JSON object
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl std::fmt::Display for StatsReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "CHARSET ({} chars): {}", self.charset_size, self.charset)?;
        writeln!(f, "LENGTH RANGE: {} .. {}", self.min_len, self.max_len)?;
        write!(
            f,
            "TOTAL COMBINATIONS: {}",
            group_thousands(&self.total_combinations)
        )
    }
}

/// Insert thousands separators into a decimal string ("1234567" -> "1,234,567")
pub fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
