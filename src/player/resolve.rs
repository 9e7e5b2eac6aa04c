//! Highlight resolution: from cursor + step sequence to the map to paint.
//!
//! Intermediate frames show the cumulative union of everything revealed up
//! to the cursor, not just the current step's own delta, so the animation
//! progressively reveals structure. The `None` cursor unions every step,
//! which by construction is the complete final decomposition.

use crate::traceback::{HighlightMap, Step};

/// Compute the highlight map to paint for the given cursor.
///
/// - `cursor == None`: union of all steps (the complete final structure).
/// - `cursor == Some(c)`: cumulative union of `steps[0..=c]`.
///
/// Later steps' entries for a repeated key overwrite earlier ones; in
/// practice keys never repeat across steps, so the union is conflict-free.
pub fn resolve(steps: &[Step], cursor: Option<usize>) -> HighlightMap {
    let upto = match cursor {
        None => steps.len(),
        Some(c) => (c + 1).min(steps.len()),
    };
    let mut map = HighlightMap::new();
    for step in &steps[..upto] {
        for (&cell, &group) in &step.highlights {
            map.insert(cell, group);
        }
    }
    map
}

/// The cell the animation is currently working on, for auto-scrolling.
///
/// `None` when the cursor is at the full-structure view (nothing is "in
/// progress" there) or when the step has no live span left.
pub fn focus_cell(steps: &[Step], cursor: Option<usize>) -> Option<(usize, usize)> {
    steps.get(cursor?)?.frontier
}
