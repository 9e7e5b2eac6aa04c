//! Traceback reconstruction of an optimal secondary structure.
//!
//! Walks a finished Nussinov DP score table with an explicit work stack
//! (depth-first, no recursion) and records, after every expansion, the set
//! of table cells currently on the decomposition frontier. The resulting
//! ordered step sequence is what the player animates.
//!
//! Determinism matters here: DP ties are common, and the fixed branch
//! priority plus the fixed bifurcation push order mean identical inputs
//! always yield an identical step sequence.

use std::collections::BTreeMap;

use super::error::TracebackError;
use super::pairing::is_valid_pair;
use super::table::ScoreTable;

/// Opaque identifier for an independent substructure branch.
///
/// Fresh identifiers are allocated at each bifurcation so that structurally
/// unrelated regions can be colored differently downstream. The renderer
/// maps groups to colors; the traceback only guarantees distinctness.
pub type GroupId = usize;

/// Highlight state: table coordinate `(row, col)` to substructure group.
///
/// An ordered map so that iteration (rendering, snapshots) is deterministic.
pub type HighlightMap = BTreeMap<(usize, usize), GroupId>;

/// A contiguous index range `[i, j]` under consideration, tagged with the
/// substructure group it belongs to. The stack may carry spans with
/// `i >= j`; those are terminal and contribute nothing when popped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Inclusive start index
    pub i: usize,
    /// Inclusive end index
    pub j: usize,
    /// Substructure group this span belongs to
    pub group: GroupId,
}

/// One frame of the reconstruction animation.
///
/// `highlights` is the full highlight state visible once this step has been
/// reached (every live span still on the work stack contributes its cell;
/// terminal spans contribute nothing). `frontier` is the cell of the span
/// that will be expanded next, used by the renderer to keep the animation's
/// leading edge scrolled into view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Step {
    /// Cells highlighted at this step, keyed by `(row, col)`
    pub highlights: HighlightMap,
    /// Cell of the topmost live span, if any
    pub frontier: Option<(usize, usize)>,
}

impl Step {
    fn from_stack(stack: &[Span]) -> Self {
        let mut highlights = HighlightMap::new();
        for span in stack {
            // Terminal spans (i >= j) stay on the stack until popped but
            // never show up as highlighted cells.
            if span.i < span.j {
                highlights.insert((span.i, span.j), span.group);
            }
        }
        let frontier = stack
            .iter()
            .rev()
            .find(|span| span.i < span.j)
            .map(|span| (span.i, span.j));
        Self {
            highlights,
            frontier,
        }
    }
}

/// Reconstruct the optimal pairing structure for `sequence` from a finished
/// DP score table, returning the ordered sequence of animation steps.
///
/// Step 0 is the initial full-span highlight; each further step is emitted
/// after one work-stack expansion. The operation is all-or-nothing: any
/// error discards the steps produced so far.
///
/// # Errors
///
/// - [`TracebackError::InvalidInput`] if the sequence is empty or the table
///   side does not match the sequence length.
/// - [`TracebackError::InconsistentScoreTable`] if a span's score cannot be
///   explained by any recurrence case (corrupt upstream data).
pub fn reconstruct(sequence: &str, table: &ScoreTable) -> Result<Vec<Step>, TracebackError> {
    let bases: Vec<char> = sequence.chars().collect();
    let n = bases.len();
    if n == 0 {
        return Err(TracebackError::InvalidInput {
            reason: "sequence is empty".to_string(),
        });
    }
    if table.len() != n {
        return Err(TracebackError::InvalidInput {
            reason: format!(
                "score table side {} does not match sequence length {}",
                table.len(),
                n
            ),
        });
    }

    let mut steps = Vec::new();
    let mut stack = vec![Span {
        i: 0,
        j: n - 1,
        group: 0,
    }];
    // Group 0 belongs to the root span; bifurcations allocate from here on.
    let mut group_counter: GroupId = 0;

    steps.push(Step::from_stack(&stack));

    while let Some(Span { i, j, group }) = stack.pop() {
        if i >= j {
            // Terminal span: nothing to expand, no step emitted.
            continue;
        }

        let score = table.get(i, j);
        if table.get(i + 1, j) == score {
            // Base i is unpaired.
            stack.push(Span { i: i + 1, j, group });
        } else if table.get(i, j - 1) == score {
            // Base j is unpaired.
            stack.push(Span { i, j: j - 1, group });
        } else if table.get(i + 1, j - 1) + 1 == score && is_valid_pair(bases[i], bases[j]) {
            // Bases i and j pair with each other.
            stack.push(Span {
                i: i + 1,
                j: j - 1,
                group,
            });
        } else {
            // Bifurcation: the first split point explaining the score wins.
            let split = (i + 1..j)
                .find(|&k| table.get(i, k) + table.get(k + 1, j) == score)
                .ok_or(TracebackError::InconsistentScoreTable { i, j, score })?;
            group_counter += 1;
            let right_group = group_counter;
            group_counter += 1;
            let left_group = group_counter;
            tracing::debug!(i, j, split, right_group, left_group, "bifurcation");
            // Push order is fixed: the left sub-span ends up on top and is
            // expanded first, which determines the step ordering.
            stack.push(Span {
                i: split + 1,
                j,
                group: right_group,
            });
            stack.push(Span {
                i,
                j: split,
                group: left_group,
            });
        }

        steps.push(Step::from_stack(&stack));
    }

    tracing::debug!(
        steps = steps.len(),
        groups = group_counter + 1,
        "reconstruction complete"
    );
    Ok(steps)
}
