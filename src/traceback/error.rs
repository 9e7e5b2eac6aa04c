//! Traceback reconstruction errors.

use super::table::Score;

/// Errors that can occur while reconstructing a structure from a score table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TracebackError {
    /// The sequence and score table cannot be used together.
    ///
    /// Raised before reconstruction begins; the traceback never starts.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A span's score is not explained by any case of the Nussinov recurrence.
    ///
    /// This indicates corrupt or non-conformant data from the scoring
    /// service. The whole run is discarded; no partial step sequence is
    /// ever returned.
    #[error(
        "inconsistent score table: entry ({i}, {j}) = {score} is not explained \
         by any recurrence case"
    )]
    InconsistentScoreTable {
        /// Start of the span that could not be decomposed
        i: usize,
        /// End of the span that could not be decomposed
        j: usize,
        /// The unexplained score at `(i, j)`
        score: Score,
    },
}
