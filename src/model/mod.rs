//! Concrete estimators and the JSON documents they are stored in.
//!
//! A model file is a single JSON object tagged by `kind`:
//!
//! ```json
//! { "kind": "random_forest", "n_features": 8, "trees": [ { ... } ] }
//! { "kind": "decision_tree", "n_features": 8, "tree": { ... } }
//! { "kind": "linear", "n_features": 8, "coefficients": [ ... ], "intercept": 0.0 }
//! ```
//!
//! Trees use the parallel node arrays `children_left`, `children_right`,
//! `feature`, `threshold` and `value`, as exported from a fitted
//! scikit-learn estimator's `tree_` attribute.

pub mod forest;
pub mod linear;
pub mod tree;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

pub use forest::RandomForest;
pub use linear::LinearModel;
pub use tree::{DecisionTree, RegressionTree};

use crate::errors::{ModelError, ModelFormatError};
use crate::estimator::Estimator;

/// Every model layout that can be read from disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelDocument {
    /// A single regression tree.
    DecisionTree(DecisionTree),
    /// An averaging ensemble of regression trees.
    RandomForest(RandomForest),
    /// An ordinary least squares model.
    Linear(LinearModel),
}

impl ModelDocument {
    /// Check the structure of the contained model.
    ///
    /// # Errors
    ///
    /// Returns the first [`ModelFormatError`] found.
    pub fn validate(&self) -> Result<(), ModelFormatError> {
        match self {
            ModelDocument::DecisionTree(model) => model.validate(),
            ModelDocument::RandomForest(model) => model.validate(),
            ModelDocument::Linear(model) => model.validate(),
        }
    }

    /// Validate the document and turn it into a boxed estimator.
    ///
    /// # Errors
    ///
    /// Returns the first [`ModelFormatError`] found; an unchecked tree is never
    /// handed out.
    pub fn into_estimator(self) -> Result<Box<dyn Estimator>, ModelFormatError> {
        self.validate()?;
        let estimator: Box<dyn Estimator> = match self {
            ModelDocument::DecisionTree(model) => Box::new(model),
            ModelDocument::RandomForest(model) => Box::new(model),
            ModelDocument::Linear(model) => Box::new(model),
        };
        Ok(estimator)
    }
}

/// Read, parse and validate a model file.
///
/// # Errors
///
/// Returns [`ModelError::Io`] when the file cannot be read,
/// [`ModelError::Parse`] when it is not a model document and
/// [`ModelError::Invalid`] when the model structure is unusable.
pub fn load_estimator<P: AsRef<Path>>(path: P) -> Result<Box<dyn Estimator>, ModelError> {
    let path = path.as_ref();
    info!(path = %path.display(), "Loading model");

    let contents = fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: ModelDocument =
        serde_json::from_str(&contents).map_err(|source| ModelError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let estimator = document
        .into_estimator()
        .map_err(|source| ModelError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;
    info!(
        path = %path.display(),
        model = estimator.name(),
        n_features = estimator.n_features(),
        "Model loaded successfully"
    );
    Ok(estimator)
}
