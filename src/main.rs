//! Word Forge - safe exhaustive wordlist enumeration and secure random sampling
//!
//! A small CLI tool that enumerates every word in a length range over a
//! chosen alphabet, refusing combinatorially explosive runs unless forced,
//! or draws cryptographically random sample words instead.

use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

use word_forge::{
    charset::Alphabet,
    cli::Cli,
    combinatorics::total_for_range,
    gate::{self, Decision},
    output::OutputSink,
    stats::{group_thousands, StatsReport},
    types::{Config, OutputMode},
    wordlist::{sample, Enumerator},
    Result,
};

fn main() {
    setup_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}

/// Logs go to stderr so stdout stays a clean wordlist stream
fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

/// Main word forge workflow: configure, compute, decide, produce
fn run(cli: &Cli) -> Result<()> {
    let config = cli.resolve()?;

    let alphabet = Alphabet::build(&config.classes, &config.extra_special)?;
    let total = total_for_range(&alphabet, config.min_len, config.max_len)?;
    tracing::info!(
        charset_size = alphabet.len(),
        min = config.min_len,
        max = config.max_len,
        total = %total,
        "Word space computed"
    );

    if cli.stats {
        let report = StatsReport::new(&alphabet, config.min_len, config.max_len, &total);
        if cli.json {
            println!("{}", report.to_json()?);
        } else {
            println!("{}", report);
        }
        return Ok(());
    }

    if let Some(n) = config.sample {
        return run_sampling(&alphabet, &config, n, &cli.output_mode());
    }

    // Exhaustive enumeration passes through the safety gate; sampling never does
    if let Decision::Denied { total, cap } = gate::authorize(&total, config.cap, config.force) {
        eprintln!(
            "Refusing to enumerate: total combinations = {} exceed cap {}.\n\
             Use --stats to inspect the parameters, or use --sample N to get random samples.\n\
             If you really want to force enumeration, rerun with --force (dangerous).",
            group_thousands(&total.to_string()),
            group_thousands(&cap.to_string()),
        );
        process::exit(1);
    }

    run_enumeration(alphabet, &config, &cli.output_mode(), &total)
}

/// Stream every word in the authorized range to the sink
fn run_enumeration(
    alphabet: Alphabet,
    config: &Config,
    mode: &OutputMode,
    total: &num_bigint::BigUint,
) -> Result<()> {
    // Progress bar only when the total fits in u64; beyond that a forced
    // run gets a spinner
    let expected = u64::try_from(total).ok();
    let mut sink = OutputSink::create(mode, expected)?;

    let words = Enumerator::new(alphabet, config.min_len, config.max_len)?;
    for word in words {
        sink.write_word(&word)?;
    }

    let path = sink.path().map(str::to_owned);
    let written = sink.finish()?;
    tracing::info!(written = written, "Enumeration complete");
    if let Some(path) = path {
        println!(
            "✅ Enumeration complete. Wrote {} words to {}",
            group_thousands(&written.to_string()),
            path
        );
    }
    Ok(())
}

/// Draw random samples and write them to the sink
fn run_sampling(alphabet: &Alphabet, config: &Config, n: u64, mode: &OutputMode) -> Result<()> {
    let words = sample(alphabet, config.min_len, n)?;

    let mut sink = OutputSink::create(mode, Some(n))?;
    for word in &words {
        sink.write_word(word)?;
    }

    let path = sink.path().map(str::to_owned);
    let written = sink.finish()?;
    if let Some(path) = path {
        println!("✅ Wrote {} samples to {}", written, path);
    }
    Ok(())
}
