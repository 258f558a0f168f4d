//! Service configuration.
//!
//! Paths and the bind address come from the environment with
//! working-directory-relative defaults, so deployments relocate the
//! artifacts without a rebuild.

use std::path::PathBuf;

/// Runtime configuration for the service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Path to the exported classifier artifact (JSON).
    pub model_path: PathBuf,

    /// Path to the exported label-encoder mapping (JSON).
    pub encoders_path: PathBuf,

    /// Path to the static dataset (CSV), re-read per statistics request.
    pub dataset_path: PathBuf,

    /// Listen address for the HTTP server.
    pub bind_addr: String,
}

impl ServiceConfig {
    /// Read configuration from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            model_path: env_or("OPIGUARD_MODEL_PATH", "model/model.json").into(),
            encoders_path: env_or("OPIGUARD_ENCODERS_PATH", "model/label_encoders.json").into(),
            dataset_path: env_or("OPIGUARD_DATASET_PATH", "data/opioid_data.csv").into(),
            bind_addr: env_or("OPIGUARD_BIND", "127.0.0.1:5000"),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
