//! Column ordering by peak location.
//!
//! Profiles coming out of the upstream optimization arrive in arbitrary
//! column order. Sorting columns by the ring position of their maximum puts
//! neighboring bumps next to each other, and the middle column of the sorted
//! matrix is the customary alignment reference.

use crate::align::AlignError;
use crate::types::{Signal, SignalMatrix};

/// Permutation of column indices sorted by each column's peak row.
///
/// The peak of a column is the first row attaining its maximum. Columns with
/// equal peak rows keep their relative input order (stable sort), so the
/// result is deterministic.
///
/// # Errors
///
/// [`AlignError::InvalidShape`] if the matrix has zero rows or columns.
pub fn peak_order(signals: &SignalMatrix) -> Result<Vec<usize>, AlignError> {
    let (l, n) = signals.shape();
    if l == 0 || n == 0 {
        return Err(AlignError::InvalidShape { rows: l, cols: n });
    }

    let peaks: Vec<usize> = (0..n)
        .map(|j| {
            let column = signals.column(j);
            let mut best_row = 0;
            for i in 1..l {
                if column[i] > column[best_row] {
                    best_row = i;
                }
            }
            best_row
        })
        .collect();

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&j| peaks[j]);
    Ok(order)
}

/// Reorder the columns of `signals` according to `order`.
///
/// Column `j` of the result is column `order[j]` of the input.
///
/// # Errors
///
/// - [`AlignError::InvalidShape`] if the matrix has zero rows or columns.
/// - [`AlignError::InvalidOrder`] if `order` is not a permutation of the
///   column indices (wrong length, out-of-range entry, or duplicate).
pub fn reorder_columns(
    signals: &SignalMatrix,
    order: &[usize],
) -> Result<SignalMatrix, AlignError> {
    let (l, n) = signals.shape();
    if l == 0 || n == 0 {
        return Err(AlignError::InvalidShape { rows: l, cols: n });
    }
    if order.len() != n {
        return Err(AlignError::InvalidOrder {
            len: order.len(),
            columns: n,
        });
    }
    let mut seen = vec![false; n];
    for &j in order {
        if j >= n || seen[j] {
            return Err(AlignError::InvalidOrder {
                len: order.len(),
                columns: n,
            });
        }
        seen[j] = true;
    }

    let mut reordered = SignalMatrix::zeros(l, n);
    for (dst, &src) in order.iter().enumerate() {
        let column: Signal = signals.column(src).into_owned();
        reordered.set_column(dst, &column);
    }
    Ok(reordered)
}

/// The conventional reference for a peak-sorted matrix: the middle column.
pub fn middle_reference(n_columns: usize) -> usize {
    n_columns / 2
}
