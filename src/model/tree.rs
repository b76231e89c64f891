//! Binary regression trees stored as parallel node arrays.

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::errors::ModelFormatError;
use crate::estimator::Estimator;

/// Marker stored in `children_left` for leaf nodes.
pub const LEAF: i64 = -1;

/// A fitted regression tree.
///
/// Node `i` is described by the `i`-th entry of every array. Internal nodes
/// send a sample to `children_left[i]` when `sample[feature[i]] <= threshold[i]`
/// and to `children_right[i]` otherwise; leaves return `value[i]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    /// Left child of each node, [`LEAF`] for leaves.
    children_left: Vec<i64>,
    /// Right child of each node, [`LEAF`] for leaves.
    children_right: Vec<i64>,
    /// Feature each internal node splits on.
    feature: Vec<i64>,
    /// Split threshold of each internal node.
    threshold: Vec<f64>,
    /// Prediction of each node.
    value: Vec<f64>,
}

impl RegressionTree {
    /// Number of nodes in the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.value.len()
    }

    /// Check that the node arrays describe a finite tree over `n_features` inputs.
    ///
    /// `tree` is only used to label errors.
    ///
    /// # Errors
    ///
    /// Returns [`ModelFormatError`] when the arrays are empty or ragged, when a
    /// child index does not point strictly further down the arrays, or when a
    /// split refers to a missing feature.
    pub fn validate(&self, tree: usize, n_features: usize) -> Result<(), ModelFormatError> {
        let nodes = self.value.len();
        if nodes == 0 {
            return Err(ModelFormatError::EmptyTree { tree });
        }
        if [
            self.children_left.len(),
            self.children_right.len(),
            self.feature.len(),
            self.threshold.len(),
        ]
        .iter()
        .any(|&len| len != nodes)
        {
            return Err(ModelFormatError::RaggedNodeArrays { tree });
        }

        for node in 0..nodes {
            let left = self.children_left[node];
            let right = self.children_right[node];
            if left == LEAF {
                if right != LEAF {
                    return Err(ModelFormatError::InvalidChild {
                        tree,
                        node,
                        child: right,
                    });
                }
                continue;
            }
            // Children always follow their parent, so every walk terminates.
            for child in [left, right] {
                let valid = usize::try_from(child)
                    .map(|child| child > node && child < nodes)
                    .unwrap_or(false);
                if !valid {
                    return Err(ModelFormatError::InvalidChild { tree, node, child });
                }
            }
            let feature = self.feature[node];
            let in_range = usize::try_from(feature)
                .map(|feature| feature < n_features)
                .unwrap_or(false);
            if !in_range {
                return Err(ModelFormatError::InvalidFeature {
                    tree,
                    node,
                    feature,
                    n_features,
                });
            }
        }
        Ok(())
    }

    /// Walk from the root to a leaf and return its value.
    ///
    /// Inputs are rounded to `f32` before comparison, matching how the trees
    /// were fitted. The tree must have passed [`RegressionTree::validate`].
    #[must_use]
    pub fn predict(&self, sample: ArrayView1<'_, f64>) -> f64 {
        let mut node = 0;
        loop {
            let left = self.children_left[node];
            if left == LEAF {
                return self.value[node];
            }
            let input = f64::from(sample[self.feature[node] as usize] as f32);
            node = if input <= self.threshold[node] {
                left as usize
            } else {
                self.children_right[node] as usize
            };
        }
    }
}

/// A single fitted regression tree used as a model on its own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    /// Number of features the tree was fitted on.
    pub n_features: usize,
    /// The tree itself.
    pub tree: RegressionTree,
}

impl DecisionTree {
    /// Check the tree structure.
    ///
    /// # Errors
    ///
    /// See [`RegressionTree::validate`].
    pub fn validate(&self) -> Result<(), ModelFormatError> {
        if self.n_features == 0 {
            return Err(ModelFormatError::NoFeatures);
        }
        self.tree.validate(0, self.n_features)
    }
}

impl Estimator for DecisionTree {
    fn name(&self) -> &'static str {
        "DecisionTreeRegressor"
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict_sample(&self, sample: ArrayView1<'_, f64>) -> f64 {
        self.tree.predict(sample)
    }
}
