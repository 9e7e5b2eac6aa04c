//! Watson-Crick base pairing rules.
//!
//! The scoring service and the traceback must agree on which bases pair:
//! `AU`, `UA`, `GC`, `CG` contribute one pair, anything else (including
//! wobble pairs like `GU`) contributes nothing.

use super::table::Score;

/// The canonical Watson-Crick pairs. Case-sensitive: callers are expected
/// to uppercase sequences before use, matching the scoring service.
const WATSON_CRICK: [(char, char); 4] = [('A', 'U'), ('U', 'A'), ('G', 'C'), ('C', 'G')];

/// Score contribution of pairing base `a` with base `b` (1 or 0).
pub fn pairing_score(a: char, b: char) -> Score {
    Score::from(is_valid_pair(a, b))
}

/// Whether `a` and `b` form a valid Watson-Crick pair.
pub fn is_valid_pair(a: char, b: char) -> bool {
    WATSON_CRICK.contains(&(a, b))
}
