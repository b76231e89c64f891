//! The pair of estimators used for every prediction.

use tracing::{debug, info};

use crate::capacity::Capacity;
use crate::config::ModelsConfig;
use crate::errors::{ModelError, PredictionError};
use crate::estimator::Estimator;
use crate::fields::FeatureVector;
use crate::model::load_estimator;

/// Interior and end one-flange estimators, loaded once and read-only afterwards.
#[derive(Debug)]
pub struct Predictor {
    /// Interior One-Flange estimator.
    iof: Box<dyn Estimator>,
    /// End One-Flange estimator.
    eof: Box<dyn Estimator>,
}

impl Predictor {
    /// Pair two already constructed estimators.
    #[must_use]
    pub fn new(iof: Box<dyn Estimator>, eof: Box<dyn Estimator>) -> Self {
        Self { iof, eof }
    }

    /// Load both estimators from the configured model files.
    ///
    /// # Errors
    ///
    /// Returns the [`ModelError`] of the first file that cannot be loaded.
    /// There is no fallback.
    pub fn load(config: &ModelsConfig) -> Result<Self, ModelError> {
        let iof = load_estimator(&config.iof_path)?;
        let eof = load_estimator(&config.eof_path)?;
        info!(iof = iof.name(), eof = eof.name(), "Predictor ready");
        Ok(Self::new(iof, eof))
    }

    /// Interior One-Flange estimator.
    #[must_use]
    pub fn iof(&self) -> &dyn Estimator {
        self.iof.as_ref()
    }

    /// End One-Flange estimator.
    #[must_use]
    pub fn eof(&self) -> &dyn Estimator {
        self.eof.as_ref()
    }

    /// Predict both capacities for one specimen.
    ///
    /// # Errors
    ///
    /// Returns the [`PredictionError`] of the first estimator that fails.
    pub fn predict(&self, features: &FeatureVector) -> Result<Capacity, PredictionError> {
        let samples = features.to_sample_matrix();
        let iof = first_prediction(self.iof.as_ref(), &samples)?;
        let eof = first_prediction(self.eof.as_ref(), &samples)?;
        debug!(iof, eof, "Prediction complete");
        Ok(Capacity::from_kilonewtons(iof, eof))
    }
}

/// Run `estimator` on a single-row matrix and return its only output.
fn first_prediction(
    estimator: &dyn Estimator,
    samples: &ndarray::Array2<f64>,
) -> Result<f64, PredictionError> {
    let predictions = estimator.predict(samples.view())?;
    predictions
        .first()
        .copied()
        .ok_or(PredictionError::EmptyOutput {
            estimator: estimator.name(),
        })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::{Array1, ArrayView1, ArrayView2};

    use super::*;

    #[derive(Debug)]
    struct Weighted {
        n_features: usize,
        weight: f64,
    }

    impl Estimator for Weighted {
        fn name(&self) -> &'static str {
            "Weighted"
        }

        fn n_features(&self) -> usize {
            self.n_features
        }

        fn predict_sample(&self, sample: ArrayView1<'_, f64>) -> f64 {
            sample.sum() * self.weight
        }
    }

    #[derive(Debug)]
    struct Silent;

    impl Estimator for Silent {
        fn name(&self) -> &'static str {
            "Silent"
        }

        fn n_features(&self) -> usize {
            8
        }

        fn predict_sample(&self, _sample: ArrayView1<'_, f64>) -> f64 {
            0.0
        }

        fn predict(&self, _samples: ArrayView2<'_, f64>) -> Result<Array1<f64>, PredictionError> {
            Ok(Array1::zeros(0))
        }
    }

    fn sample() -> FeatureVector {
        FeatureVector::new([200.0, 55.0, 1.5, 4.0, 67.0, 9.0, 100.0, 400.0])
    }

    #[test]
    fn predicts_both_targets_from_the_same_sample() {
        let predictor = Predictor::new(
            Box::new(Weighted {
                n_features: 8,
                weight: 0.1,
            }),
            Box::new(Weighted {
                n_features: 8,
                weight: 0.01,
            }),
        );
        let capacity = predictor.predict(&sample()).expect("shapes agree");
        assert_relative_eq!(capacity.iof_kilonewtons(), 83.65, epsilon = 1.0e-9);
        assert_relative_eq!(capacity.eof_kilonewtons(), 8.365, epsilon = 1.0e-9);
    }

    #[test]
    fn surfaces_shape_mismatch() {
        let predictor = Predictor::new(
            Box::new(Weighted {
                n_features: 8,
                weight: 1.0,
            }),
            Box::new(Weighted {
                n_features: 7,
                weight: 1.0,
            }),
        );
        let error = predictor
            .predict(&sample())
            .expect_err("second estimator expects seven features");
        assert_eq!(
            error,
            PredictionError::FeatureCountMismatch {
                estimator: "Weighted",
                expected: 7,
                received: 8
            }
        );
    }

    #[test]
    fn empty_estimator_output_is_an_error() {
        let predictor = Predictor::new(
            Box::new(Weighted {
                n_features: 8,
                weight: 1.0,
            }),
            Box::new(Silent),
        );
        let error = predictor
            .predict(&sample())
            .expect_err("no value for the end one-flange capacity");
        assert_eq!(error, PredictionError::EmptyOutput { estimator: "Silent" });
        assert_eq!(error.to_string(), "Silent returned no prediction.");
    }

    #[test]
    fn missing_model_file_is_fatal() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let config = ModelsConfig {
            iof_path: dir.path().join("IOF_RF.json"),
            eof_path: dir.path().join("EOF_RF.json"),
        };
        let error = Predictor::load(&config).expect_err("no model files present");
        assert!(matches!(error, ModelError::Io { .. }));
    }
}
