//! The prediction capability shared by every loaded model.

use std::fmt::Debug;

use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::errors::PredictionError;

/// A fitted regression model.
///
/// Implementors only provide [`Estimator::predict_sample`]; the provided
/// [`Estimator::predict`] checks the sample width and input finiteness before
/// dispatching row by row.
pub trait Estimator: Debug + Send + Sync {
    /// Name of the model type, used in error messages.
    fn name(&self) -> &'static str;

    /// Number of features the model was fitted on.
    fn n_features(&self) -> usize;

    /// Predict a single, already checked sample.
    fn predict_sample(&self, sample: ArrayView1<'_, f64>) -> f64;

    /// Predict one value per row of `samples`.
    ///
    /// # Errors
    ///
    /// Returns [`PredictionError::FeatureCountMismatch`] when the number of
    /// columns differs from [`Estimator::n_features`] and
    /// [`PredictionError::NonFiniteInput`] when any entry is NaN or infinite.
    fn predict(&self, samples: ArrayView2<'_, f64>) -> Result<Array1<f64>, PredictionError> {
        let received = samples.ncols();
        if received != self.n_features() {
            return Err(PredictionError::FeatureCountMismatch {
                estimator: self.name(),
                expected: self.n_features(),
                received,
            });
        }
        if samples.iter().any(|value| !value.is_finite()) {
            return Err(PredictionError::NonFiniteInput);
        }
        Ok(samples
            .rows()
            .into_iter()
            .map(|row| self.predict_sample(row))
            .collect())
    }
}
