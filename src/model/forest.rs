//! Averaging ensembles of regression trees.

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::errors::ModelFormatError;
use crate::estimator::Estimator;
use crate::model::tree::RegressionTree;

/// A random forest regressor: the prediction is the mean over all trees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    /// Number of features the forest was fitted on.
    pub n_features: usize,
    /// Trees of the ensemble.
    pub trees: Vec<RegressionTree>,
}

impl RandomForest {
    /// Check every tree in the ensemble.
    ///
    /// # Errors
    ///
    /// Returns [`ModelFormatError::EmptyForest`] for an ensemble without trees,
    /// and the first tree error otherwise.
    pub fn validate(&self) -> Result<(), ModelFormatError> {
        if self.n_features == 0 {
            return Err(ModelFormatError::NoFeatures);
        }
        if self.trees.is_empty() {
            return Err(ModelFormatError::EmptyForest);
        }
        self.trees
            .iter()
            .enumerate()
            .try_for_each(|(idx, tree)| tree.validate(idx, self.n_features))
    }
}

impl Estimator for RandomForest {
    fn name(&self) -> &'static str {
        "RandomForestRegressor"
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict_sample(&self, sample: ArrayView1<'_, f64>) -> f64 {
        let total: f64 = self.trees.iter().map(|tree| tree.predict(sample)).sum();
        total / self.trees.len() as f64
    }
}
