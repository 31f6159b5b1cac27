//! # ring-align
//!
//! Register periodic signals to a common phase.
//!
//! The input is a matrix whose columns are one-dimensional signals sampled
//! on a ring of length `L` (index `L` wraps to 0), typically per-cluster
//! receptive-field profiles from an upstream optimization. For each column
//! this crate searches all `L` circular shifts, scores each rotation by its
//! dot product with a chosen reference column, and applies the best one,
//! producing a phase-aligned matrix of the same shape.
//!
//! The search is exhaustive and deterministic: when several shifts achieve
//! the same maximal correlation, the lowest shift wins, so repeated runs on
//! the same input always produce the same output.
//!
//! ## Quick Start
//!
//! ```
//! use nalgebra::{DMatrix, DVector};
//!
//! let signals = DMatrix::from_columns(&[
//!     DVector::from_vec(vec![0.0, 1.0, 0.0, 0.0]),
//!     DVector::from_vec(vec![0.0, 0.0, 0.0, 1.0]),
//! ]);
//!
//! // Align every column to column 0.
//! let aligned = ring_align::align(&signals, 0).unwrap();
//! assert_eq!(aligned.column(1), aligned.column(0));
//! ```
//!
//! The typical pipeline around the aligner — sort columns by peak location,
//! take the middle column as reference, then summarize the aligned bundle —
//! is covered by [`ordering`] and [`summary`]:
//!
//! ```
//! use nalgebra::DMatrix;
//! use ring_align::{ordering, summary::ProfileSummary, CircularAligner};
//!
//! # let signals = DMatrix::from_fn(8, 4, |i, j| {
//! #     if i == 2 * j { 1.0 } else { 0.0 }
//! # });
//! let order = ordering::peak_order(&signals)?;
//! let sorted = ordering::reorder_columns(&signals, &order)?;
//! let reference = ordering::middle_reference(sorted.ncols());
//!
//! let aligned = CircularAligner::new(reference).align(&sorted)?;
//! let summary = ProfileSummary::of(&aligned)?;
//! # Ok::<(), ring_align::AlignError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod align;
mod rotate;
mod types;

pub mod ordering;
pub mod summary;

pub use align::{AlignError, CircularAligner};
pub use rotate::{rotate, rotate_rows};
pub use types::{Signal, SignalMatrix};

/// Align every column of `signals` to column `reference`.
///
/// Convenience wrapper around [`CircularAligner`] for one-off calls.
///
/// # Errors
///
/// Same as [`CircularAligner::align`]: rejects matrices with a zero
/// dimension and reference indices outside the column range.
pub fn align(signals: &SignalMatrix, reference: usize) -> Result<SignalMatrix, AlignError> {
    CircularAligner::new(reference).align(signals)
}
