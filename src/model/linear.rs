//! Ordinary least squares models.

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::errors::ModelFormatError;
use crate::estimator::Estimator;

/// `y = intercept + coefficients . x`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// Number of features the model was fitted on.
    pub n_features: usize,
    /// One weight per feature.
    pub coefficients: Vec<f64>,
    /// Constant term.
    pub intercept: f64,
}

impl LinearModel {
    /// Check the coefficient count against the declared feature count.
    ///
    /// # Errors
    ///
    /// Returns [`ModelFormatError::CoefficientCountMismatch`] when they differ.
    pub fn validate(&self) -> Result<(), ModelFormatError> {
        if self.n_features == 0 {
            return Err(ModelFormatError::NoFeatures);
        }
        if self.coefficients.len() != self.n_features {
            return Err(ModelFormatError::CoefficientCountMismatch {
                expected: self.n_features,
                received: self.coefficients.len(),
            });
        }
        Ok(())
    }
}

impl Estimator for LinearModel {
    fn name(&self) -> &'static str {
        "LinearRegression"
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict_sample(&self, sample: ArrayView1<'_, f64>) -> f64 {
        self.intercept + ArrayView1::from(&self.coefficients[..]).dot(&sample)
    }
}
