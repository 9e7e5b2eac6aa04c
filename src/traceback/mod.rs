//! Optimal secondary-structure reconstruction from a DP score table.
//!
//! This module is the algorithmic core of rnaviz. Given an RNA sequence and
//! the finished Nussinov score table produced by the scoring service, it
//! recovers one optimal pairing structure deterministically and records the
//! reconstruction as an ordered sequence of highlight steps for animation.
//!
//! # Module Structure
//!
//! - [`table`]: the validated, immutable score table
//! - [`pairing`]: Watson-Crick base pairing rules
//! - [`reconstruct`]: the explicit-stack traceback and its step sequence
//! - [`error`]: error taxonomy (`InvalidInput`, `InconsistentScoreTable`)

pub mod error;
pub mod pairing;
pub mod reconstruct;
pub mod table;

pub use error::TracebackError;
pub use reconstruct::{reconstruct, GroupId, HighlightMap, Span, Step};
pub use table::{Score, ScoreTable};
