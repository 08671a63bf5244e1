//! Command line surface for word-forge
//!
//! Parses flags and resolves them into the immutable core [`Config`]. All
//! validation that can fail lives in [`Cli::resolve`] so the pipeline never
//! starts producing with a half-checked configuration.

use clap::Parser;

use crate::combinatorics::validate_range;
use crate::config_error;
use crate::error::Result;
use crate::types::{CharClasses, Config, OutputMode, DEFAULT_CAP};

#[derive(Parser, Debug)]
#[command(name = "word-forge")]
#[command(version)]
#[command(about = "Safe word enumerator / generator")]
pub struct Cli {
    /// Minimum length (inclusive)
    #[arg(long, value_name = "N", conflicts_with = "length")]
    pub min: Option<usize>,

    /// Maximum length (inclusive)
    #[arg(long, value_name = "N", conflicts_with = "length")]
    pub max: Option<usize>,

    /// Exact length (shorthand for --min and --max equal)
    #[arg(long, value_name = "N")]
    pub length: Option<usize>,

    /// Include lowercase letters (a-z)
    #[arg(long)]
    pub lower: bool,

    /// Include uppercase letters (A-Z)
    #[arg(long)]
    pub upper: bool,

    /// Include digits (0-9)
    #[arg(long)]
    pub digits: bool,

    /// Include common special characters
    #[arg(long)]
    pub special: bool,

    /// Extra special characters to include
    #[arg(long, value_name = "CHARS", default_value = "")]
    pub extra_special: String,

    /// Write output to file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub out: Option<String>,

    /// Do not enumerate; instead output N random sample words
    #[arg(long, value_name = "N")]
    pub sample: Option<u64>,

    /// Enumeration cap (default 1,000,000)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_CAP)]
    pub cap: u64,

    /// Override cap and force enumeration (use responsibly)
    #[arg(long)]
    pub force: bool,

    /// Show charset and total combinations and exit
    #[arg(long)]
    pub stats: bool,

    /// Render stats as JSON
    #[arg(long, requires = "stats")]
    pub json: bool,
}

impl Cli {
    /// Resolve flags into a validated [`Config`]
    pub fn resolve(&self) -> Result<Config> {
        let (min_len, max_len) = match self.length {
            Some(length) => (length, length),
            None => match (self.min, self.max) {
                (Some(min), Some(max)) => (min, max),
                _ => {
                    return Err(config_error!(
                        "specify either --length or both --min and --max."
                    ))
                }
            },
        };
        validate_range(min_len, max_len)?;

        if self.sample.is_some() && self.length.is_none() {
            return Err(config_error!(
                "--sample requires a single --length to be set."
            ));
        }
        if self.sample == Some(0) {
            return Err(config_error!("--sample must be a positive integer."));
        }

        Ok(Config {
            classes: CharClasses {
                lower: self.lower,
                upper: self.upper,
                digits: self.digits,
                special: self.special,
            },
            extra_special: self.extra_special.clone(),
            min_len,
            max_len,
            cap: self.cap,
            force: self.force,
            sample: self.sample,
        })
    }

    /// Where output goes for this invocation
    pub fn output_mode(&self) -> OutputMode {
        match &self.out {
            Some(path) => OutputMode::File(path.clone()),
            None => OutputMode::Stdout,
        }
    }
}
