//! Animation player for reconstruction runs.
//!
//! Turns the ordered step sequence produced by [`crate::traceback`] into an
//! interactive, time-driven animation with transport-style controls.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: the [`Player`] cursor/timer state machine and view state
//! - `resolve`: cursor + steps -> the highlight map to paint
//! - `input/`: keyboard event handling
//! - `render/`: sidebar, score table grid, status bar, help overlay
//! - `native`: the full-screen terminal event loop

pub(crate) mod input;
mod native;
pub mod render;
pub mod resolve;
pub mod state;

pub use native::run_player;
pub use resolve::{focus_cell, resolve};
pub use state::{InputResult, Player, Transport, ViewState, BASE_STEP_PERIOD};
