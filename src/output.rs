//! Output sinks for generated words
//!
//! The core hands words to a sink one at a time; the sink owns buffering,
//! newline joining, and progress display. Stdout stays clean (no bar), file
//! writes get an indicatif progress bar when the total fits in u64.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{Result, WordForgeError};
use crate::types::OutputMode;

/// Destination for generated words, one word per line
pub struct OutputSink {
    writer: Box<dyn Write>,
    progress: Option<ProgressBar>,
    path: Option<String>,
    written: u64,
}

impl std::fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputSink")
            .field("path", &self.path)
            .field("written", &self.written)
            .finish_non_exhaustive()
    }
}

impl OutputSink {
    /// Open a sink for the given mode. `expected_total` drives the progress
    /// bar in file mode; pass `None` when unknown or beyond u64 (spinner).
    pub fn create(mode: &OutputMode, expected_total: Option<u64>) -> Result<Self> {
        match mode {
            OutputMode::Stdout => Ok(Self {
                writer: Box::new(BufWriter::new(io::stdout())),
                progress: None,
                path: None,
                written: 0,
            }),
            OutputMode::File(path) => {
                let file = File::create(path)
                    .map_err(|e| WordForgeError::io(e.to_string(), Some(path.clone())))?;

                let progress = match expected_total {
                    Some(total) => {
                        let bar = ProgressBar::new(total);
                        bar.set_style(
                            ProgressStyle::with_template(
                                "{bar:40.cyan/blue} {pos}/{len} ({eta})",
                            )
                            .unwrap_or_else(|_| ProgressStyle::default_bar()),
                        );
                        bar
                    }
                    None => ProgressBar::new_spinner(),
                };

                Ok(Self {
                    writer: Box::new(BufWriter::new(file)),
                    progress: Some(progress),
                    path: Some(path.clone()),
                    written: 0,
                })
            }
        }
    }

    /// Write one word followed by a newline
    pub fn write_word(&mut self, word: &str) -> Result<()> {
        self.writer
            .write_all(word.as_bytes())
            .and_then(|_| self.writer.write_all(b"\n"))
            .map_err(|e| WordForgeError::io(e.to_string(), self.path.clone()))?;
        self.written += 1;
        if let Some(bar) = &self.progress {
            bar.inc(1);
        }
        Ok(())
    }

    /// Number of words written so far
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Where this sink writes, for completion messages
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Flush buffers, clear the progress bar, and return the final count
    pub fn finish(mut self) -> Result<u64> {
        self.writer
            .flush()
            .map_err(|e| WordForgeError::io(e.to_string(), self.path.clone()))?;
        if let Some(bar) = &self.progress {
            bar.finish_and_clear();
        }
        Ok(self.written)
    }
}
