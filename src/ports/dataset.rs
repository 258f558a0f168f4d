//! Dataset port: Trait for reading the static tabular dataset.
//!
//! This trait abstracts the on-disk dataset from the statistics service.

use crate::domain::SubjectRecord;

/// Trait for dataset access.
///
/// Implementations read the backing file fresh on every call: there is no
/// cache and no staleness guarantee, matching the service's read-only,
/// no-persistence contract.
pub trait DatasetSource: Send + Sync {
    /// Error type for dataset operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load every row of the dataset.
    ///
    /// # Errors
    /// Returns error if the file cannot be opened or a row fails to parse.
    fn load(&self) -> Result<Vec<SubjectRecord>, Self::Error>;
}
