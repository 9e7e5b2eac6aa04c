//! DP score table received from the scoring service.

use super::error::TracebackError;

/// A single score table entry (maximum number of base pairs for a span).
pub type Score = u32;

/// An `n x n` matrix of non-negative integers where entry `(i, j)` with
/// `i <= j` holds the maximum number of base pairs achievable in the
/// subsequence spanning positions `i..=j`.
///
/// The table is trusted input: it is validated for shape on construction,
/// but its conformance to the Nussinov recurrence is only discovered (and
/// reported) during reconstruction. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    rows: Vec<Vec<Score>>,
}

impl ScoreTable {
    /// Build a score table from raw rows, checking that the matrix is square.
    pub fn new(rows: Vec<Vec<Score>>) -> Result<Self, TracebackError> {
        let n = rows.len();
        if let Some(bad) = rows.iter().position(|row| row.len() != n) {
            return Err(TracebackError::InvalidInput {
                reason: format!(
                    "score table is not square: row {} has {} entries, expected {}",
                    bad,
                    rows[bad].len(),
                    n
                ),
            });
        }
        Ok(Self { rows })
    }

    /// Side length of the square table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Entry at `(i, j)`. Callers must stay within `0..len()` on both axes.
    pub fn get(&self, i: usize, j: usize) -> Score {
        self.rows[i][j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_square_matrix() {
        let table = ScoreTable::new(vec![vec![0, 1], vec![0, 0]]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0, 1), 1);
    }

    #[test]
    fn new_accepts_empty_matrix() {
        let table = ScoreTable::new(vec![]).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn new_rejects_ragged_rows() {
        let err = ScoreTable::new(vec![vec![0, 1], vec![0]]).unwrap_err();
        assert!(matches!(err, TracebackError::InvalidInput { .. }));
    }

    #[test]
    fn new_rejects_rectangular_matrix() {
        let err = ScoreTable::new(vec![vec![0, 1, 2], vec![0, 0, 1]]).unwrap_err();
        assert!(matches!(err, TracebackError::InvalidInput { .. }));
    }
}
