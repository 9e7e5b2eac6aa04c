//! Command-line interface definition.
//!
//! Lives in the library so xtask can reuse it for man page generation.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::api::DEFAULT_API_URL;
use crate::player::BASE_STEP_PERIOD;

/// Version string with git hash and build date for dev builds.
pub fn version_string() -> String {
    format!(
        "{} ({} {})",
        env!("CARGO_PKG_VERSION"),
        option_env!("VERGEN_GIT_SHA").unwrap_or("release"),
        env!("RNAVIZ_BUILD_DATE")
    )
}

#[derive(Parser)]
#[command(
    name = "rnaviz",
    version = version_string(),
    about = "Interactive RNA secondary-structure traceback visualizer",
    long_about = "Sends an RNA sequence to the Nussinov scoring service, reconstructs an \
                  optimal secondary structure from the returned DP table, and animates \
                  the traceback in the terminal.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// RNA sequence to fold (A, U, G, C; case-insensitive)
    pub sequence: Option<String>,

    /// Minimum hairpin loop length passed to the scoring service
    #[arg(long, default_value_t = 0)]
    pub min_loop: u32,

    /// Base URL of the Nussinov scoring service
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Animation period per step in milliseconds (at 1x speed)
    #[arg(long, default_value_t = BASE_STEP_PERIOD.as_millis() as u64)]
    pub period_ms: u64,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
