//! Error types produced while loading models, validating input or predicting.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when the text in the form cannot be turned into a feature vector.
///
/// Only the first offending field is ever reported. The display strings are the
/// exact messages shown to the user in the result area.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InputError {
    /// Returned when any field does not parse as a floating-point number.
    #[error("Check numeric input values.")]
    NotNumeric,
    /// Returned when a parsed value lies outside the inclusive range of its field.
    #[error("{name} must be between {min} and {max}.")]
    OutOfRange {
        /// Field key with underscores replaced by spaces.
        name: String,
        /// Lower bound of the accepted range.
        min: f64,
        /// Upper bound of the accepted range.
        max: f64,
        /// Rejected value.
        value: f64,
    },
}

/// Error returned when an estimator cannot produce a prediction.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PredictionError {
    /// Returned when the sample width does not match what the estimator was fitted on.
    #[error("X has {received} features, but {estimator} is expecting {expected} features as input.")]
    FeatureCountMismatch {
        /// Name of the estimator type.
        estimator: &'static str,
        /// Number of features the estimator was fitted on.
        expected: usize,
        /// Number of features supplied.
        received: usize,
    },
    /// Returned when a sample contains NaN or an infinite value.
    #[error("Input X contains NaN or infinity.")]
    NonFiniteInput,
    /// Returned when an estimator produces no output for a sample.
    #[error("{estimator} returned no prediction.")]
    EmptyOutput {
        /// Name of the estimator type.
        estimator: &'static str,
    },
}

/// Structural problem found in a model document.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ModelFormatError {
    /// A model that must see at least one feature declares none.
    #[error("model declares zero input features")]
    NoFeatures,
    /// A forest without any trees.
    #[error("random forest contains no trees")]
    EmptyForest,
    /// A tree without any nodes.
    #[error("tree {tree} has no nodes")]
    EmptyTree {
        /// Position of the tree inside its ensemble.
        tree: usize,
    },
    /// The parallel node arrays of a tree have different lengths.
    #[error("tree {tree} has node arrays of unequal length")]
    RaggedNodeArrays {
        /// Position of the tree inside its ensemble.
        tree: usize,
    },
    /// A child index points outside the node arrays or back up the tree.
    #[error("tree {tree} node {node} has invalid child {child}")]
    InvalidChild {
        /// Position of the tree inside its ensemble.
        tree: usize,
        /// Index of the parent node.
        node: usize,
        /// Rejected child index.
        child: i64,
    },
    /// An internal node splits on a feature the model does not have.
    #[error("tree {tree} node {node} splits on feature {feature} but the model has {n_features}")]
    InvalidFeature {
        /// Position of the tree inside its ensemble.
        tree: usize,
        /// Index of the offending node.
        node: usize,
        /// Rejected feature index.
        feature: i64,
        /// Number of features declared by the model.
        n_features: usize,
    },
    /// A linear model whose coefficient vector does not match its feature count.
    #[error("linear model has {received} coefficients for {expected} features")]
    CoefficientCountMismatch {
        /// Number of features declared by the model.
        expected: usize,
        /// Number of coefficients supplied.
        received: usize,
    },
}

/// Error returned when a model file cannot be turned into an estimator.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The file is missing or unreadable.
    #[error("cannot read model file {}: {source}", .path.display())]
    Io {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not a valid model document.
    #[error("cannot parse model file {}: {source}", .path.display())]
    Parse {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
    /// The document parsed but describes an unusable model.
    #[error("invalid model in {}: {source}", .path.display())]
    Invalid {
        /// Path that was validated.
        path: PathBuf,
        /// Description of the structural problem.
        #[source]
        source: ModelFormatError,
    },
}

/// Error returned when the illustration cannot be shown.
#[derive(Debug, Error)]
pub enum IllustrationError {
    /// The image file does not exist.
    #[error("image file not found at {}", .path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },
    /// The image file exists but could not be decoded.
    #[error("cannot decode image {}: {source}", .path.display())]
    Decode {
        /// Path that was decoded.
        path: PathBuf,
        /// Underlying decoder failure.
        #[source]
        source: image::ImageError,
    },
}

/// Error returned when the configuration file cannot be read.
#[derive(Debug, Error)]
#[error("invalid configuration: {0}")]
pub struct ConfigError(#[from] config::ConfigError);
