//! rnaviz CLI entry point.
//!
//! Fetches the DP score table for a sequence from the Nussinov scoring
//! service, reconstructs an optimal secondary structure, and opens the
//! interactive player.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};

use rnaviz::api::ScoringClient;
use rnaviz::cli::{Cli, Command};
use rnaviz::player::run_player;
use rnaviz::run::Run;

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

#[cfg(not(tarpaulin_include))]
fn run() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if let Some(Command::Completions { shell }) = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "rnaviz", &mut std::io::stdout());
        return Ok(());
    }

    let Some(sequence) = cli.sequence else {
        bail!("no RNA sequence given (see --help)");
    };
    // The scoring service uppercases too; do it here so pairing-rule
    // lookups during the traceback agree with it.
    let sequence = sequence.to_uppercase();
    if sequence.is_empty() || !sequence.chars().all(|c| c.is_ascii_alphabetic()) {
        bail!("sequence must be a non-empty string of bases (got {sequence:?})");
    }

    let client = ScoringClient::new(&cli.api_url);
    let response = client
        .nussinov(&sequence, cli.min_loop)
        .with_context(|| format!("scoring request to {} failed", cli.api_url))?;
    let run = Run::from_response(sequence, cli.min_loop, response)?;

    run_player(&run, Duration::from_millis(cli.period_ms))
}

/// Route tracing output to a file when `RNAVIZ_LOG` is set.
///
/// The TUI owns the terminal, so logs never go to stdout/stderr.
fn init_tracing() {
    if let Ok(filter) = std::env::var("RNAVIZ_LOG") {
        if let Ok(file) = std::fs::File::create("rnaviz.log") {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .try_init();
        }
    }
}
