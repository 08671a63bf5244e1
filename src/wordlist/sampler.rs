//! Random word sampling
//!
//! Draws characters with a cryptographically secure source, never the
//! general-purpose thread RNG. Sampling cost is O(n * length), so no cap
//! check applies.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};

use crate::charset::Alphabet;
use crate::combinatorics::validate_range;
use crate::error::{Result, WordForgeError};

/// Default cryptographically secure RNG
fn csprng() -> impl CryptoRng + Rng {
    OsRng
}

/// Draw `n` independent random words of exactly `length` characters.
///
/// Each position is chosen uniformly from the alphabet with replacement;
/// the same character may recur within one word and across words.
pub fn sample(alphabet: &Alphabet, length: usize, n: u64) -> Result<Vec<String>> {
    if n == 0 {
        return Err(WordForgeError::config(
            "Sample count must be a positive integer.",
        ));
    }
    validate_range(length, length)?;

    tracing::debug!(n = n, length = length, "Drawing random samples");

    let mut rng = csprng();
    let words = (0..n).map(|_| sample_one(alphabet, length, &mut rng)).collect();
    Ok(words)
}

fn sample_one(alphabet: &Alphabet, length: usize, rng: &mut impl Rng) -> String {
    let chars = alphabet.chars();
    (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect()
}
