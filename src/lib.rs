//! Word Forge - safe exhaustive wordlist enumeration and secure random sampling
//!
//! Generates words over a configurable alphabet: either every string within a
//! length range (streamed, guarded by a combination-count safety cap) or a
//! fixed number of cryptographically random samples.

pub mod charset;
pub mod cli;
pub mod combinatorics;
pub mod error;
pub mod gate;
pub mod output;
pub mod stats;
pub mod types;
pub mod wordlist;

// Re-export commonly used types
pub use charset::Alphabet;
pub use error::{Result, WordForgeError};
pub use gate::{authorize, Decision};
pub use stats::StatsReport;
pub use types::{CharClasses, Config, OutputMode, DEFAULT_CAP};
pub use wordlist::{sample, Enumerator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
