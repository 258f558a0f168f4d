//! Artifact store: loads the exported classifier and label encoders.
//!
//! The training pipeline exports its fitted estimator as JSON: feature
//! names, logistic-regression coefficients and intercept, the standard
//! scaler fitted alongside it (optional), and the decision threshold.
//! The label encoders ship as a second JSON file mapping each categorical
//! column to its ordered class vocabulary.
//!
//! Both artifacts are validated against the fixed feature schema before
//! the service starts; a rejected artifact is fatal.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{EncoderSet, ModelError, Prediction, FEATURE_NAMES};
use crate::ports::Classifier;

/// Failure while loading or validating an artifact file.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("artifact {path} rejected: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Standard-scaler parameters fitted by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedScaler {
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

/// Model parameters exported by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedModel {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub scaler: Option<ExportedScaler>,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    0.5
}

/// Logistic-regression classifier backed by an exported artifact.
#[derive(Debug)]
pub struct LinearClassifier {
    model: ExportedModel,
}

impl LinearClassifier {
    /// Load and validate the model artifact.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed, or if the
    /// exported parameters do not match the fixed feature schema.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let bytes = std::fs::read(path).map_err(|source| ArtifactError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let model: ExportedModel =
            serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Self::validate(&model).map_err(|reason| ArtifactError::Invalid {
            path: path.to_path_buf(),
            reason,
        })?;

        tracing::info!(
            "Loaded classifier artifact from {} ({} features, threshold {})",
            path.display(),
            model.feature_names.len(),
            model.threshold
        );

        Ok(Self { model })
    }

    fn validate(model: &ExportedModel) -> Result<(), String> {
        if model.feature_names != FEATURE_NAMES {
            return Err(format!(
                "feature names do not match the service schema (got {:?})",
                model.feature_names
            ));
        }
        if model.coefficients.len() != model.feature_names.len() {
            return Err(format!(
                "{} coefficients for {} features",
                model.coefficients.len(),
                model.feature_names.len()
            ));
        }
        if let Some(scaler) = &model.scaler {
            if scaler.mean.len() != model.feature_names.len()
                || scaler.std.len() != model.feature_names.len()
            {
                return Err("scaler mean/std length does not match feature count".to_string());
            }
            if scaler.std.iter().any(|s| *s <= 0.0) {
                return Err("scaler std values must be positive".to_string());
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.model.coefficients.len()
    }
}

impl Classifier for LinearClassifier {
    fn predict(&self, features: &[f64]) -> Result<Prediction, ModelError> {
        if features.len() != self.model.coefficients.len() {
            return Err(ModelError::FeatureCount {
                expected: self.model.coefficients.len(),
                got: features.len(),
            });
        }

        let mut z = self.model.intercept;
        for (i, x) in features.iter().enumerate() {
            let x = match &self.model.scaler {
                Some(scaler) => (x - scaler.mean[i]) / scaler.std[i],
                None => *x,
            };
            z += self.model.coefficients[i] * x;
        }

        let probability = 1.0 / (1.0 + (-z).exp());
        let label = u8::from(probability >= self.model.threshold);

        Ok(Prediction {
            prediction: label,
            probability: Some(probability),
        })
    }
}

/// Load and parse the column → encoder mapping artifact.
///
/// Encoders for columns outside the feature schema are tolerated and
/// simply never consulted, mirroring how the training export applies.
///
/// # Errors
/// Returns error if the file cannot be read or parsed.
pub fn load_encoders(path: &Path) -> Result<EncoderSet, ArtifactError> {
    let bytes = std::fs::read(path).map_err(|source| ArtifactError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let encoders: EncoderSet =
        serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(
        "Loaded {} label encoders from {}",
        encoders.len(),
        path.display()
    );

    Ok(encoders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn model_json(coefficients: &[f64], intercept: f64) -> String {
        serde_json::json!({
            "feature_names": FEATURE_NAMES,
            "coefficients": coefficients,
            "intercept": intercept,
        })
        .to_string()
    }

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("Should create temp file");
        file.write_all(contents.as_bytes()).expect("Should write");
        file
    }

    #[test]
    fn test_load_and_predict() {
        let file = write_temp(&model_json(&[0.0; 12], 2.0));
        let classifier = LinearClassifier::load(file.path()).expect("Should load");

        let prediction = classifier.predict(&[0.0; 12]).expect("Should predict");
        assert_eq!(prediction.prediction, 1);
        let p = prediction.probability.expect("Linear model has probability");
        // sigmoid(2.0)
        assert!((p - 0.880_797).abs() < 1e-5);
    }

    #[test]
    fn test_negative_logit_predicts_zero() {
        let file = write_temp(&model_json(&[0.0; 12], -3.0));
        let classifier = LinearClassifier::load(file.path()).expect("Should load");

        let prediction = classifier.predict(&[1.0; 12]).expect("Should predict");
        assert_eq!(prediction.prediction, 0);
        assert!(prediction.probability.expect("has probability") < 0.5);
    }

    #[test]
    fn test_rejects_coefficient_mismatch() {
        let file = write_temp(&model_json(&[0.0; 3], 0.0));
        let err = LinearClassifier::load(file.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::Invalid { .. }));
    }

    #[test]
    fn test_rejects_foreign_feature_names() {
        let json = serde_json::json!({
            "feature_names": ["a", "b"],
            "coefficients": [1.0, 2.0],
            "intercept": 0.0,
        })
        .to_string();
        let file = write_temp(&json);
        assert!(LinearClassifier::load(file.path()).is_err());
    }

    #[test]
    fn test_scaler_standardizes_features() {
        let mut coefficients = [0.0; 12];
        coefficients[0] = 1.0;
        let json = serde_json::json!({
            "feature_names": FEATURE_NAMES,
            "coefficients": coefficients,
            "intercept": 0.0,
            "scaler": { "mean": vec![50.0; 12], "std": vec![10.0; 12] },
        })
        .to_string();
        let file = write_temp(&json);
        let classifier = LinearClassifier::load(file.path()).expect("Should load");

        // Age at the mean: z = 0 -> p = 0.5 -> label 1 at default threshold.
        let mut features = [50.0; 12];
        let at_mean = classifier.predict(&features).expect("Should predict");
        assert!((at_mean.probability.unwrap() - 0.5).abs() < 1e-12);

        // One std above the mean: z = 1.
        features[0] = 60.0;
        let above = classifier.predict(&features).expect("Should predict");
        assert!(above.probability.unwrap() > at_mean.probability.unwrap());
    }

    #[test]
    fn test_wrong_vector_length_fails() {
        let file = write_temp(&model_json(&[0.0; 12], 0.0));
        let classifier = LinearClassifier::load(file.path()).expect("Should load");
        let err = classifier.predict(&[1.0; 4]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::FeatureCount { expected: 12, got: 4 }
        ));
    }

    #[test]
    fn test_missing_model_file() {
        let err = LinearClassifier::load(Path::new("/nonexistent/model.json")).unwrap_err();
        assert!(matches!(err, ArtifactError::Read { .. }));
    }

    #[test]
    fn test_load_encoders() {
        let file = write_temp(r#"{"Gender": ["Female", "Male"], "Smoking": ["No", "Yes"]}"#);
        let encoders = load_encoders(file.path()).expect("Should load");
        assert_eq!(encoders.len(), 2);
        assert_eq!(encoders.encode("Gender", "Male").unwrap(), 1);
    }

    #[test]
    fn test_corrupt_encoder_artifact() {
        let file = write_temp("not json at all");
        assert!(matches!(
            load_encoders(file.path()).unwrap_err(),
            ArtifactError::Parse { .. }
        ));
    }
}
