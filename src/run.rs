//! A single visualization run.
//!
//! A run bundles everything derived from one scoring request: the sequence,
//! the validated score table, the presentation pass-throughs from the
//! service, and the reconstructed step sequence. Runs are immutable; a new
//! request produces a whole new `Run`, never an in-place mutation, so the
//! player and renderer can never observe a partially updated sequence.

use crate::api::NussinovResponse;
use crate::traceback::{reconstruct, Score, ScoreTable, Step, TracebackError};

/// All data for one reconstruction run, immutable after construction.
#[derive(Debug)]
pub struct Run {
    /// The (uppercased) RNA sequence, index-aligned with the table
    pub sequence: String,
    /// Minimum hairpin loop length that was sent to the scoring service
    pub min_loop: u32,
    /// The finished DP score table
    pub table: ScoreTable,
    /// Maximum number of base pairs, as reported by the service
    pub max_score: Score,
    /// Optimal pairing endpoints, as reported by the service
    pub pairings: Vec<(usize, usize)>,
    /// Dot-bracket style dash structure, as reported by the service
    pub dash_structure: String,
    /// The reconstructed animation step sequence
    pub steps: Vec<Step>,
}

impl Run {
    /// Build a run from a scoring service response.
    ///
    /// Validates the table shape and reconstructs the step sequence;
    /// all-or-nothing, so a failed reconstruction never yields a run (and a
    /// previously displayed run stays untouched in the caller).
    pub fn from_response(
        sequence: String,
        min_loop: u32,
        response: NussinovResponse,
    ) -> Result<Self, TracebackError> {
        let table = ScoreTable::new(response.dp_table)?;
        let steps = reconstruct(&sequence, &table)?;
        tracing::debug!(
            n = table.len(),
            steps = steps.len(),
            max_score = response.max_score,
            "run ready"
        );
        Ok(Self {
            sequence,
            min_loop,
            table,
            max_score: response.max_score,
            pairings: response.pairings,
            dash_structure: response.dash_structure,
            steps,
        })
    }
}
