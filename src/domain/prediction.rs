//! Prediction output types and model-side errors.

use serde::Serialize;

/// Result of one classifier invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    /// Binary label (0 = not addicted, 1 = addicted).
    pub prediction: u8,

    /// Positive-class probability, when the model supports probability
    /// estimation. `None` serializes as `null` on the wire.
    pub probability: Option<f64>,
}

/// Failure inside the model or its artifact.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model artifact rejected: {0}")]
    InvalidArtifact(String),

    #[error("model expects {expected} features, got {got}")]
    FeatureCount { expected: usize, got: usize },
}

/// Request-validation failure: one or more required fields are absent.
#[derive(Debug, Clone)]
pub struct MissingFields(pub Vec<String>);

impl std::fmt::Display for MissingFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "missing required fields: {}", self.0.join(", "))
    }
}

impl std::error::Error for MissingFields {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_names_every_field() {
        let err = MissingFields(vec!["Age".to_string(), "Feverish".to_string()]);
        let msg = err.to_string();
        assert!(msg.contains("Age"));
        assert!(msg.contains("Feverish"));
    }

    #[test]
    fn test_prediction_serializes_null_probability() {
        let p = Prediction {
            prediction: 1,
            probability: None,
        };
        let json = serde_json::to_value(p).expect("Should serialize");
        assert_eq!(json["prediction"], 1);
        assert!(json["probability"].is_null());
    }
}
