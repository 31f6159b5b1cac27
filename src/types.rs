//! Type aliases and common types.

use nalgebra::{DMatrix, DVector};

/// Matrix of periodic signals, shape `(L, N)`.
///
/// Each of the `N` columns is one signal sampled at `L` positions around a
/// ring (row `L` is identified with row 0). Row order defines the ring
/// topology; column order carries no meaning to the aligner.
pub type SignalMatrix = DMatrix<f64>;

/// A single periodic signal of length `L` (one column of a [`SignalMatrix`]).
pub type Signal = DVector<f64>;
