//! Statistics service: Descriptive aggregates over the static dataset.
//!
//! The dataset is read from disk on every call; nothing is cached between
//! requests.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::adapters::DatasetError;
use crate::domain::{
    FiveNumberSummary, GroupStat, Outcome, OutcomeSummaries, CATEGORICAL_COLUMNS, NUMERIC_COLUMNS,
};
use crate::ports::DatasetSource;
use crate::OpiguardError;

/// Service computing grouped counts and five-number summaries.
pub struct StatisticsService<D>
where
    D: DatasetSource,
{
    dataset: Arc<D>,
}

impl<D> StatisticsService<D>
where
    D: DatasetSource,
    D::Error: Into<DatasetError>,
{
    /// Create a new statistics service.
    pub fn new(dataset: Arc<D>) -> Self {
        Self { dataset }
    }

    /// Addicted / not-addicted counts per value of every categorical
    /// column, keyed by column name. Distinct values are returned in
    /// sorted order; rows missing the column value or the outcome label
    /// are skipped.
    ///
    /// # Errors
    /// Returns error if the dataset cannot be read.
    pub fn group_counts(&self) -> Result<BTreeMap<String, Vec<GroupStat>>, OpiguardError> {
        let records = self
            .dataset
            .load()
            .map_err(|e| OpiguardError::Dataset(e.into()))?;

        let mut result = BTreeMap::new();
        for column in CATEGORICAL_COLUMNS {
            let mut counts: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
            for record in &records {
                let Some(value) = record.categorical(column) else {
                    continue;
                };
                let Some(outcome) = record.outcome() else {
                    continue;
                };
                let entry = counts.entry(value).or_default();
                match outcome {
                    Outcome::Addicted => entry.0 += 1,
                    Outcome::NotAddicted => entry.1 += 1,
                }
            }

            let stats = counts
                .into_iter()
                .map(|(value, (addicted, not_addicted))| GroupStat {
                    value: value.to_string(),
                    addicted,
                    not_addicted,
                })
                .collect();
            result.insert(column.to_string(), stats);
        }

        tracing::info!(
            "Computed group counts over {} rows for {} columns",
            records.len(),
            CATEGORICAL_COLUMNS.len()
        );
        Ok(result)
    }

    /// Outcome-partitioned five-number summaries for every numeric column,
    /// keyed by column name. Missing values are dropped; an empty
    /// partition yields no summary.
    ///
    /// # Errors
    /// Returns error if the dataset cannot be read.
    pub fn boxplot_summaries(&self) -> Result<BTreeMap<String, OutcomeSummaries>, OpiguardError> {
        let records = self
            .dataset
            .load()
            .map_err(|e| OpiguardError::Dataset(e.into()))?;

        let mut result = BTreeMap::new();
        for column in NUMERIC_COLUMNS {
            let mut addicted = Vec::new();
            let mut not_addicted = Vec::new();
            for record in &records {
                let Some(value) = record.numeric(column) else {
                    continue;
                };
                match record.outcome() {
                    Some(Outcome::Addicted) => addicted.push(value),
                    Some(Outcome::NotAddicted) => not_addicted.push(value),
                    None => {}
                }
            }

            result.insert(
                column.to_string(),
                OutcomeSummaries {
                    addicted: FiveNumberSummary::from_samples(&addicted),
                    not_addicted: FiveNumberSummary::from_samples(&not_addicted),
                },
            );
        }

        tracing::info!(
            "Computed boxplot summaries over {} rows for {} columns",
            records.len(),
            NUMERIC_COLUMNS.len()
        );
        Ok(result)
    }
}
