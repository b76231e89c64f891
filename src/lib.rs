#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod capacity;
pub mod config;
pub mod errors;
pub mod estimator;
pub mod fields;
pub mod form;
pub mod illustration;
pub mod model;
pub mod predictor;

pub use capacity::Capacity;
pub use crate::config::AppConfig;
pub use errors::{
    ConfigError, IllustrationError, InputError, ModelError, ModelFormatError, PredictionError,
};
pub use estimator::Estimator;
pub use fields::{
    range_help_text, FeatureVector, FieldDefinition, FieldUnit, FIELDS, FIELD_COUNT, UNITS_NOTE,
};
pub use form::Form;
pub use illustration::{
    fit_within, load_illustration, Illustration, IllustrationSlot, PLACEHOLDER_TEXT,
};
pub use model::{load_estimator, ModelDocument};
pub use predictor::Predictor;
