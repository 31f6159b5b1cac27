//! Ring rotation primitive.
//!
//! All wrap-around index arithmetic in this crate lives here. A rotation by
//! `shift` places the element originally at index `(i - shift) mod L` at
//! index `i`, so positive shifts move samples toward higher indices and
//! samples leaving the end reappear at the front.

use crate::types::{Signal, SignalMatrix};

/// Rotate a signal by `shift` positions along its ring.
///
/// `rotated[i] = signal[(i - shift) mod L]`. A shift of 0 (or any multiple
/// of `L`) returns a copy of the input. Shifts larger than `L` are reduced
/// modulo `L`.
pub fn rotate(signal: &Signal, shift: usize) -> Signal {
    let l = signal.len();
    if l == 0 {
        return signal.clone();
    }
    let shift = shift % l;
    Signal::from_fn(l, |i, _| signal[(i + l - shift) % l])
}

/// Rotate every column of a matrix by `shift` positions along the row axis.
///
/// Same ring convention as [`rotate`], applied to all columns at once:
/// `rotated[(i, j)] = matrix[((i - shift) mod L, j)]`.
pub fn rotate_rows(matrix: &SignalMatrix, shift: usize) -> SignalMatrix {
    let l = matrix.nrows();
    if l == 0 {
        return matrix.clone();
    }
    let shift = shift % l;
    SignalMatrix::from_fn(l, matrix.ncols(), |i, j| {
        matrix[((i + l - shift) % l, j)]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_moves_elements_forward() {
        let v = Signal::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
        let r = rotate(&v, 1);
        assert_eq!(r.as_slice(), &[4.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn rotate_by_zero_is_identity() {
        let v = Signal::from_vec(vec![1.0, 2.0, 3.0]);
        assert_eq!(rotate(&v, 0), v);
    }

    #[test]
    fn rotate_by_length_wraps_to_identity() {
        let v = Signal::from_vec(vec![1.0, 2.0, 3.0]);
        assert_eq!(rotate(&v, 3), v);
        assert_eq!(rotate(&v, 7), rotate(&v, 1));
    }

    #[test]
    fn rotate_single_element_ring() {
        let v = Signal::from_vec(vec![5.0]);
        assert_eq!(rotate(&v, 0), v);
        assert_eq!(rotate(&v, 1), v);
    }

    #[test]
    fn rotate_rows_matches_per_column_rotation() {
        let m = SignalMatrix::from_columns(&[
            Signal::from_vec(vec![1.0, 2.0, 3.0, 4.0]),
            Signal::from_vec(vec![5.0, 6.0, 7.0, 8.0]),
        ]);
        let r = rotate_rows(&m, 2);
        for j in 0..m.ncols() {
            let col: Signal = m.column(j).into_owned();
            let rotated: Signal = r.column(j).into_owned();
            assert_eq!(
                rotated,
                rotate(&col, 2),
                "column {} disagrees with scalar rotation",
                j
            );
        }
    }

    #[test]
    fn rotations_compose_additively() {
        let v = Signal::from_vec(vec![1.0, -2.0, 0.5, 3.0, -1.0]);
        assert_eq!(rotate(&rotate(&v, 2), 4), rotate(&v, 6 % 5));
    }
}
