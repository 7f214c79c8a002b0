//! Pairwise divergence matrices.
//!
//! Applies a divergence measure to every unordered pair of rows in a
//! row-wise distribution matrix, exploiting symmetry and the zero diagonal
//! so each pair is evaluated exactly once.

use crate::divergence::jsd;
use crate::error::{DivergenceError, Result};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Symmetric n x n divergence matrix with a zero diagonal.
///
/// Produced by [`jsd_matrix`] or [`pairwise_matrix`]; owned by the caller
/// after return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivergenceMatrix {
    inner: DMatrix<f64>,
}

impl DivergenceMatrix {
    /// Number of rows (== columns)
    #[inline]
    pub fn dim(&self) -> usize {
        self.inner.nrows()
    }

    /// True for the 0 x 0 matrix
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.nrows() == 0
    }

    /// Divergence between rows `i` and `j`. Panics if out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.inner[(i, j)]
    }

    /// Borrow the underlying matrix
    #[inline]
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.inner
    }

    /// Consume into the underlying matrix
    pub fn into_inner(self) -> DMatrix<f64> {
        self.inner
    }

    /// The most divergent unordered pair `(i, j, value)` with `i < j`,
    /// or `None` when the matrix has fewer than two rows.
    pub fn max_divergence(&self) -> Option<(usize, usize, f64)> {
        let n = self.dim();
        let mut best: Option<(usize, usize, f64)> = None;

        for i in 0..n {
            for j in (i + 1)..n {
                let value = self.inner[(i, j)];
                if best.map_or(true, |(_, _, b)| value > b) {
                    best = Some((i, j, value));
                }
            }
        }

        best
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| DivergenceError::SerializationError(e.to_string()))
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| DivergenceError::SerializationError(e.to_string()))
    }
}

/// Validate a row-wise distribution matrix in a single pass.
///
/// Every row must match the first row's length, every entry must be finite
/// and non-negative. Runs to completion before any divergence is computed,
/// so a failing input never yields a partial result.
fn validate_rows(rows: &[Vec<f64>]) -> Result<()> {
    if rows.is_empty() {
        return Ok(());
    }

    let d = rows[0].len();
    for (row, entries) in rows.iter().enumerate() {
        if entries.len() != d {
            return Err(DivergenceError::DimensionMismatch {
                expected: d,
                got: entries.len(),
            });
        }
        for (index, &value) in entries.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(DivergenceError::InvalidInput { row, index, value });
            }
        }
    }

    Ok(())
}

/// Build a pairwise matrix from any symmetric divergence measure.
///
/// The measure is evaluated once per unordered pair `i < j` and mirrored
/// into both cells; the diagonal is never computed and stays exactly 0.0.
/// Assumes the measure is symmetric with zero self-divergence (as JSD and
/// Hellinger are). Entry validation is the caller's concern; [`jsd_matrix`]
/// is the validating entry point.
pub fn pairwise_matrix<F>(rows: &[Vec<f64>], divergence: F) -> Result<DivergenceMatrix>
where
    F: Fn(&[f64], &[f64]) -> Result<f64>,
{
    let n = rows.len();
    let mut result = DMatrix::zeros(n, n);

    for i in 0..n {
        for j in (i + 1)..n {
            let value = divergence(rows[i].as_slice(), rows[j].as_slice())?;
            result[(i, j)] = value;
            result[(j, i)] = value;
        }
    }

    Ok(DivergenceMatrix { inner: result })
}

/// Pairwise Jensen-Shannon divergence matrix over row-wise distributions.
///
/// Validates the whole input up front: ragged rows fail with
/// [`DivergenceError::DimensionMismatch`], negative or non-finite entries
/// with [`DivergenceError::InvalidInput`]. The row-sum invariant is not
/// enforced; callers own it, and violations produce numerically consistent
/// (possibly out-of-bound) scores rather than errors.
///
/// O(n² · d) time, O(n²) space for the result.
pub fn jsd_matrix(rows: &[Vec<f64>]) -> Result<DivergenceMatrix> {
    validate_rows(rows)?;
    pairwise_matrix(rows, jsd)
}
