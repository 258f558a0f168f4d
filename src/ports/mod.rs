//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the application and external resources (model artifact, dataset
//! file).

mod classifier;
mod dataset;

pub use classifier::Classifier;
pub use dataset::DatasetSource;
