//! Circular alignment by maximum cross-correlation.
//!
//! This module implements the exhaustive shift search: every column of a
//! [`SignalMatrix`] is scored against a reference column at all `L` possible
//! rotations, and rotated by the shift that maximizes the dot product.
//!
//! The search is deterministic: ties between equally correlated shifts are
//! always resolved in favor of the lowest shift, because the scan runs in
//! ascending shift order and a later shift replaces the incumbent only when
//! its score is strictly greater.

use crate::rotate::rotate;
use crate::types::{Signal, SignalMatrix};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Error type for alignment failures.
///
/// Every variant is a precondition violation at the call site; there is no
/// internal recovery and no partial result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// The signal matrix has a zero dimension.
    InvalidShape {
        /// Number of rows (ring length) of the offending matrix.
        rows: usize,
        /// Number of columns (signals) of the offending matrix.
        cols: usize,
    },
    /// The reference column index is outside `[0, N)`.
    ReferenceOutOfRange {
        /// The requested reference column.
        reference: usize,
        /// Number of columns in the matrix.
        columns: usize,
    },
    /// A column permutation does not match the matrix it is applied to.
    InvalidOrder {
        /// Length of the supplied permutation.
        len: usize,
        /// Number of columns in the matrix.
        columns: usize,
    },
}

impl std::fmt::Display for AlignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlignError::InvalidShape { rows, cols } => {
                write!(f, "signal matrix has a zero dimension ({}x{})", rows, cols)
            }
            AlignError::ReferenceOutOfRange { reference, columns } => {
                write!(
                    f,
                    "reference column {} out of range for {} columns",
                    reference, columns
                )
            }
            AlignError::InvalidOrder { len, columns } => {
                write!(
                    f,
                    "column order of length {} does not permute {} columns",
                    len, columns
                )
            }
        }
    }
}

impl std::error::Error for AlignError {}

/// Registers the columns of a periodic signal matrix to a reference column.
///
/// For each column the aligner tries all `L` circular shifts, scores each by
/// its dot product with the reference column, and applies the best one. The
/// reference column itself is treated like any other: its best shift is
/// whatever rotation of itself correlates best with itself, which for
/// single-peaked signals is shift 0.
///
/// # Example
///
/// ```
/// use nalgebra::DMatrix;
/// use ring_align::CircularAligner;
///
/// // Two unit impulses on a 4-ring, two positions apart.
/// let signals = DMatrix::from_columns(&[
///     nalgebra::DVector::from_vec(vec![1.0, 0.0, 0.0, 0.0]),
///     nalgebra::DVector::from_vec(vec![0.0, 0.0, 1.0, 0.0]),
/// ]);
///
/// let aligned = CircularAligner::new(0).align(&signals).unwrap();
/// assert_eq!(
///     aligned.column(1),
///     nalgebra::DVector::from_vec(vec![1.0, 0.0, 0.0, 0.0]),
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CircularAligner {
    reference: usize,
}

impl CircularAligner {
    /// Create an aligner that registers against column `reference`.
    pub fn new(reference: usize) -> Self {
        Self { reference }
    }

    /// The reference column index this aligner registers against.
    pub fn reference(&self) -> usize {
        self.reference
    }

    /// Align every column of `signals` to the reference column.
    ///
    /// Returns a freshly allocated matrix of the same shape in which column
    /// `j` is the input column `j` rotated by its best shift. The input is
    /// not modified.
    ///
    /// # Errors
    ///
    /// - [`AlignError::InvalidShape`] if `signals` has zero rows or columns.
    /// - [`AlignError::ReferenceOutOfRange`] if the reference index is not a
    ///   valid column.
    pub fn align(&self, signals: &SignalMatrix) -> Result<SignalMatrix, AlignError> {
        let shifts = self.best_shifts(signals)?;

        let mut aligned = SignalMatrix::zeros(signals.nrows(), signals.ncols());
        for (j, &shift) in shifts.iter().enumerate() {
            let column: Signal = signals.column(j).into_owned();
            aligned.set_column(j, &rotate(&column, shift));
        }
        Ok(aligned)
    }

    /// Find the best circular shift for every column.
    ///
    /// Scores all `L` candidate shifts for all columns and keeps, per
    /// column, the lowest shift attaining the maximum dot product with the
    /// reference.
    fn best_shifts(&self, signals: &SignalMatrix) -> Result<Vec<usize>, AlignError> {
        let (l, n) = signals.shape();
        if l == 0 || n == 0 {
            return Err(AlignError::InvalidShape { rows: l, cols: n });
        }
        if self.reference >= n {
            return Err(AlignError::ReferenceOutOfRange {
                reference: self.reference,
                columns: n,
            });
        }

        let reference: Signal = signals.column(self.reference).into_owned();
        let scores = score_all_shifts(signals, &reference);

        // Ascending scan with strict `>` so the lowest shift wins ties.
        let mut best_shift = vec![0usize; n];
        let mut best_score = vec![f64::NEG_INFINITY; n];
        for (shift, score) in scores.iter().enumerate() {
            for j in 0..n {
                if score[j] > best_score[j] {
                    best_score[j] = score[j];
                    best_shift[j] = shift;
                }
            }
        }
        Ok(best_shift)
    }
}

/// Compute the `L` per-shift score vectors.
///
/// Rotating a column by `s` and dotting it with the reference is the same
/// sum as dotting the column with the reference rotated by `L - s`, so each
/// shift costs one reference rotation and one matrix-vector product instead
/// of a rotated copy of the whole matrix. Element `j` of vector `s` is the
/// correlation of column `j` with the reference when column `j` is rotated
/// by `s`.
///
/// With the `parallel` feature the shifts are scored across the rayon pool;
/// tie-break ordering is unaffected because the caller reduces the collected
/// vectors in ascending shift order.
fn score_all_shifts(signals: &SignalMatrix, reference: &Signal) -> Vec<Signal> {
    let l = signals.nrows();

    #[cfg(feature = "parallel")]
    {
        (0..l)
            .into_par_iter()
            .map(|shift| signals.tr_mul(&rotate(reference, (l - shift) % l)))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        (0..l)
            .map(|shift| signals.tr_mul(&rotate(reference, (l - shift) % l)))
            .collect()
    }
}
