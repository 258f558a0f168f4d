//! # Opiguard
//!
//! Opioid-addiction risk prediction and dataset statistics over HTTP.
//!
//! This crate provides:
//! - A prediction endpoint forwarding encoded subject attributes through a
//!   pre-trained classifier
//! - Descriptive statistics (group counts, five-number summaries) computed
//!   from the static training dataset
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (subject schema, encoders, statistics)
//! - `ports`: Trait definitions for external operations
//! - `adapters`: Concrete implementations (JSON artifacts, CSV dataset)
//! - `application`: Use cases orchestrating domain and ports
//! - `http`: Routes, shared state, and error mapping

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod http;
pub mod ports;

pub use domain::{Prediction, SubjectRecord};

/// Result type for opiguard operations
pub type Result<T> = std::result::Result<T, OpiguardError>;

/// Main error type for opiguard
#[derive(Debug, thiserror::Error)]
pub enum OpiguardError {
    #[error("Request validation failed: {0}")]
    Validation(#[from] domain::MissingFields),

    #[error("Feature encoding failed: {0}")]
    Encoding(#[from] domain::EncodeError),

    #[error("Model operation failed: {0}")]
    Model(#[from] domain::ModelError),

    #[error("Dataset operation failed: {0}")]
    Dataset(#[from] adapters::DatasetError),

    #[error("Artifact load failed: {0}")]
    Artifact(#[from] adapters::ArtifactError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
