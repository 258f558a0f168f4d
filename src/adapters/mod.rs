//! Adapters layer: Concrete implementations of ports.
//!
//! These modules contain the actual integration with external resources:
//! - `artifacts`: JSON-exported classifier and label encoders
//! - `dataset`: CSV dataset file access

pub mod artifacts;
pub mod dataset;

pub use artifacts::{ArtifactError, LinearClassifier};
pub use dataset::{CsvDataset, DatasetError};
