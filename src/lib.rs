//! rnaviz - interactive Nussinov traceback visualizer for the terminal.
//!
//! The scoring service fills the DP table remotely; this crate reconstructs
//! one optimal secondary structure from it and animates the reconstruction:
//!
//! - [`api`]: blocking client for the scoring service
//! - [`traceback`]: the deterministic traceback and its step sequence
//! - [`run`]: one immutable visualization run (table + steps + summary)
//! - [`player`]: cursor/timer state machine, input, and rendering
//! - [`tui`]: theme and layout helpers
//!
//! # Example
//!
//! ```no_run
//! use rnaviz::api::ScoringClient;
//! use rnaviz::player::{run_player, BASE_STEP_PERIOD};
//! use rnaviz::run::Run;
//!
//! let client = ScoringClient::new("http://127.0.0.1:5000");
//! let response = client.nussinov("GCAU", 0).unwrap();
//! let run = Run::from_response("GCAU".to_string(), 0, response).unwrap();
//! run_player(&run, BASE_STEP_PERIOD).unwrap();
//! ```

pub mod api;
pub mod cli;
pub mod player;
pub mod run;
pub mod traceback;
pub mod tui;

pub use run::Run;
