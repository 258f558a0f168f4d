//! Prediction service: Orchestrates classifier inference.
//!
//! This service coordinates:
//! - Presence validation of the required input fields
//! - Categorical encoding via the loaded label encoders
//! - Classifier invocation

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::domain::{EncodeError, EncoderSet, MissingFields, Prediction, FEATURE_NAMES};
use crate::ports::Classifier;
use crate::OpiguardError;

/// Service for running predictions against the loaded model.
///
/// Constructed once at startup around the immutable artifacts and shared
/// read-only across requests.
pub struct PredictionService<C>
where
    C: Classifier,
{
    classifier: Arc<C>,
    encoders: Arc<EncoderSet>,
}

impl<C> PredictionService<C>
where
    C: Classifier,
{
    /// Create a new prediction service.
    pub fn new(classifier: Arc<C>, encoders: Arc<EncoderSet>) -> Self {
        Self {
            classifier,
            encoders,
        }
    }

    /// Run one prediction over a request object.
    ///
    /// The input must carry exactly the 12 required feature keys
    /// (order-independent; extra keys are ignored). Categorical fields are
    /// replaced by their encoder codes; the resulting numeric vector is
    /// passed to the classifier in the fixed feature order.
    ///
    /// # Errors
    /// - `OpiguardError::Validation` listing every absent required key
    /// - `OpiguardError::Encoding` for unseen categories or non-encodable
    ///   values
    /// - `OpiguardError::Model` if the classifier rejects the vector
    pub fn predict(&self, input: &Map<String, Value>) -> Result<Prediction, OpiguardError> {
        let missing: Vec<String> = FEATURE_NAMES
            .iter()
            .filter(|name| !input.contains_key(**name))
            .map(|name| (*name).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(MissingFields(missing).into());
        }

        tracing::debug!("Encoding input features...");
        let features = self.encode_features(input)?;

        let prediction = self.classifier.predict(&features)?;
        tracing::info!(
            "Prediction complete: label={}, probability={:?}",
            prediction.prediction,
            prediction.probability
        );

        Ok(prediction)
    }

    fn encode_features(&self, input: &Map<String, Value>) -> Result<Vec<f64>, EncodeError> {
        let mut features = Vec::with_capacity(FEATURE_NAMES.len());
        for name in FEATURE_NAMES {
            // Presence was checked above; absent here would be a bug.
            let value = &input[name];
            if self.encoders.contains(name) {
                let text = value.as_str().ok_or_else(|| EncodeError::ExpectedText {
                    column: name.to_string(),
                })?;
                features.push(f64::from(self.encoders.encode(name, text)?));
            } else {
                let number = value.as_f64().ok_or_else(|| EncodeError::ExpectedNumber {
                    column: name.to_string(),
                })?;
                features.push(number);
            }
        }
        Ok(features)
    }
}
