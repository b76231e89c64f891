//! Text entries, validation and the result shown after each submission.

use tracing::{debug, warn};

use crate::errors::InputError;
use crate::fields::{FeatureVector, FIELDS, FIELD_COUNT};
use crate::predictor::Predictor;

/// State of the eight entries and the result area.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Form {
    /// Raw text of each entry in [`FIELDS`] order.
    entries: [String; FIELD_COUNT],
    /// Text shown in the result area.
    result: String,
}

impl Form {
    /// Create a form with empty entries and no result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a form with every entry prefilled.
    #[must_use]
    pub fn with_entries(entries: [String; FIELD_COUNT]) -> Self {
        Self {
            entries,
            result: String::new(),
        }
    }

    /// Raw text of the entry at `index`.
    #[must_use]
    pub fn entry(&self, index: usize) -> &str {
        &self.entries[index]
    }

    /// Mutable access to an entry, for binding to a text widget.
    pub fn entry_mut(&mut self, index: usize) -> &mut String {
        &mut self.entries[index]
    }

    /// Replace the text of the entry at `index`.
    pub fn set_entry(&mut self, index: usize, text: impl Into<String>) {
        self.entries[index] = text.into();
    }

    /// Text currently shown in the result area.
    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Parse and range-check every entry in field order.
    ///
    /// Stops at the first failure: a value that is not a number yields
    /// [`InputError::NotNumeric`] without naming the field, and a value outside
    /// its inclusive range yields [`InputError::OutOfRange`] for that field only.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] encountered.
    ///
    /// # Examples
    /// ```
    /// use webcrippling::{Form, InputError};
    ///
    /// let mut form = Form::new();
    /// for (idx, text) in ["200", "55", "1.5", "6", "67", "9", "100", "400"].iter().enumerate() {
    ///     form.set_entry(idx, *text);
    /// }
    /// let error = form.validate().expect_err("corner radius too large");
    /// assert_eq!(error.to_string(), "Corner radius must be between 3 and 5.");
    /// ```
    pub fn validate(&self) -> Result<FeatureVector, InputError> {
        let mut values = [0.0; FIELD_COUNT];
        for ((field, text), slot) in FIELDS.iter().zip(&self.entries).zip(values.iter_mut()) {
            let value = parse_number(text).ok_or(InputError::NotNumeric)?;
            if !field.accepts(value) {
                return Err(InputError::OutOfRange {
                    name: field.display_name(),
                    min: field.min,
                    max: field.max,
                    value,
                });
            }
            *slot = value;
        }
        Ok(FeatureVector::new(values))
    }

    /// Validate the entries, run both estimators and overwrite the result text.
    ///
    /// Every failure is reported in the result area; nothing here panics or
    /// propagates an error.
    pub fn submit(&mut self, predictor: &Predictor) -> &str {
        self.result = match self.validate() {
            Err(error) => {
                debug!(%error, "Input rejected");
                error.to_string()
            }
            Ok(features) => match predictor.predict(&features) {
                Ok(capacity) => capacity.to_string(),
                Err(error) => {
                    warn!(%error, "Prediction failed");
                    format!("Error in prediction: {error}")
                }
            },
        };
        &self.result
    }
}

/// Parse an entry as a float, ignoring surrounding whitespace.
///
/// Underscores are accepted as digit separators, but only with a digit on
/// both sides (`4_00` is 400, `_400`, `400_` and `4__00` are rejected).
fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    let bytes = text.as_bytes();
    let separators_ok = bytes.iter().enumerate().all(|(idx, &byte)| {
        byte != b'_'
            || (idx > 0
                && bytes[idx - 1].is_ascii_digit()
                && bytes.get(idx + 1).is_some_and(u8::is_ascii_digit))
    });
    if !separators_ok {
        return None;
    }
    if text.contains('_') {
        text.replace('_', "").parse().ok()
    } else {
        text.parse().ok()
    }
}
