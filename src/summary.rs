//! Summary statistics over aligned profiles.

use serde::{Deserialize, Serialize};

use crate::align::AlignError;
use crate::types::SignalMatrix;

/// Per-ring-position mean and spread of a set of aligned profiles.
///
/// Row `i` of the source matrix contributes `mean[i]` and `std[i]`, taken
/// across all columns. The standard deviation is the population one (divide
/// by N, not N - 1), matching how these summaries are consumed downstream
/// as plain spread bands rather than estimators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    /// Mean profile value at each ring position.
    pub mean: Vec<f64>,
    /// Population standard deviation at each ring position.
    pub std: Vec<f64>,
}

impl ProfileSummary {
    /// Summarize a (typically aligned) signal matrix row-wise.
    ///
    /// # Errors
    ///
    /// [`AlignError::InvalidShape`] if the matrix has zero rows or columns.
    pub fn of(aligned: &SignalMatrix) -> Result<Self, AlignError> {
        let (l, n) = aligned.shape();
        if l == 0 || n == 0 {
            return Err(AlignError::InvalidShape { rows: l, cols: n });
        }

        let mut mean = Vec::with_capacity(l);
        let mut std = Vec::with_capacity(l);
        for i in 0..l {
            let row = aligned.row(i);
            let mu = row.sum() / n as f64;
            let var = row.iter().map(|&x| (x - mu) * (x - mu)).sum::<f64>() / n as f64;
            mean.push(mu);
            std.push(var.sqrt());
        }
        Ok(Self { mean, std })
    }
}

/// Truncated-cosine model of a mean bump profile.
///
/// Fits nothing: the amplitude is the profile maximum, the center is the
/// mean index of all positions attaining that maximum, and the model is
/// `amp * cos(frequency * (i - center))` clamped to zero wherever it goes
/// negative and wherever the mean profile itself is zero. Used to compare
/// an aligned receptive-field average against an ideal bump shape.
///
/// Returns an all-zero vector for an empty input.
pub fn truncated_cosine(mean: &[f64], frequency: f64) -> Vec<f64> {
    if mean.is_empty() {
        return Vec::new();
    }

    let amp = mean.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let maximal: Vec<usize> = mean
        .iter()
        .enumerate()
        .filter(|(_, &x)| x == amp)
        .map(|(i, _)| i)
        .collect();
    let center = maximal.iter().sum::<usize>() as f64 / maximal.len() as f64;

    mean.iter()
        .enumerate()
        .map(|(i, &mu)| {
            if mu == 0.0 {
                return 0.0;
            }
            let value = amp * (frequency * (i as f64 - center)).cos();
            value.max(0.0)
        })
        .collect()
}
