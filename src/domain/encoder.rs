//! Label encoders for categorical features.
//!
//! The training pipeline exports one encoder per categorical column as the
//! ordered list of class strings it observed; a value's integer code is its
//! index in that list. Encoding is total over the training vocabulary and
//! fails explicitly for anything else.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Failure while turning a request value into a numeric feature.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The value was never seen by this column's encoder at training time.
    #[error("value {value:?} is not a known category for column {column:?}")]
    UnknownCategory { column: String, value: String },

    /// A categorical field carried a non-string JSON value.
    #[error("column {column:?} expects a categorical string value")]
    ExpectedText { column: String },

    /// A numeric field carried a non-numeric JSON value.
    #[error("column {column:?} expects a numeric value")]
    ExpectedNumber { column: String },
}

/// A single column's encoder: ordered class vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    #[must_use]
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    /// The integer code of `value`, or `None` for an unseen value.
    #[must_use]
    pub fn code(&self, value: &str) -> Option<u32> {
        self.classes.iter().position(|c| c == value).map(|i| i as u32)
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

/// The full column-name → encoder mapping loaded from the encoder artifact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncoderSet {
    columns: BTreeMap<String, LabelEncoder>,
}

impl EncoderSet {
    #[must_use]
    pub fn new(columns: BTreeMap<String, LabelEncoder>) -> Self {
        Self { columns }
    }

    /// Whether `column` is encoded (i.e. categorical to the model).
    #[must_use]
    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    /// Encode one categorical value to its integer code.
    ///
    /// # Errors
    /// Returns `EncodeError::UnknownCategory` for values outside the
    /// training vocabulary. There is deliberately no fallback code.
    pub fn encode(&self, column: &str, value: &str) -> Result<u32, EncodeError> {
        let encoder = self
            .columns
            .get(column)
            .ok_or_else(|| EncodeError::UnknownCategory {
                column: column.to_string(),
                value: value.to_string(),
            })?;
        encoder.code(value).ok_or_else(|| EncodeError::UnknownCategory {
            column: column.to_string(),
            value: value.to_string(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
