//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no I/O: the subject schema,
//! label encoders, prediction outputs, and the statistics math.

mod encoder;
mod prediction;
mod stats;
mod subject;

pub use encoder::{EncodeError, EncoderSet, LabelEncoder};
pub use prediction::{MissingFields, ModelError, Prediction};
pub use stats::{FiveNumberSummary, GroupStat, OutcomeSummaries};
pub use subject::{
    Outcome, SubjectRecord, CATEGORICAL_COLUMNS, FEATURE_NAMES, NUMERIC_COLUMNS, OUTCOME_COLUMN,
};
