//! CSV dataset adapter.
//!
//! Reads the static dataset file fresh on every call. The file is never
//! written by this service, so no locking or cache invalidation exists.

use std::path::{Path, PathBuf};

use crate::domain::SubjectRecord;
use crate::ports::DatasetSource;

/// Failure while reading the dataset file.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Dataset source backed by a CSV file on disk.
pub struct CsvDataset {
    path: PathBuf,
}

impl CsvDataset {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for CsvDataset {
    type Error = DatasetError;

    fn load(&self) -> Result<Vec<SubjectRecord>, Self::Error> {
        let mut reader =
            csv::Reader::from_path(&self.path).map_err(|source| DatasetError::Read {
                path: self.path.clone(),
                source,
            })?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: SubjectRecord = row.map_err(|source| DatasetError::Read {
                path: self.path.clone(),
                source,
            })?;
            records.push(record);
        }

        tracing::debug!("Read {} rows from {}", records.len(), self.path.display());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "Age,Gender,Employment Status,Prescription Duration,Prescription Drug Used,Days Since First Use,Alcohol,Smoking,Depression,Anxiety,Sleeplessness,Feverish,Opioid Addiction";

    fn write_csv(rows: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("Should create temp file");
        writeln!(file, "{HEADER}").expect("Should write header");
        for row in rows {
            writeln!(file, "{row}").expect("Should write row");
        }
        file
    }

    #[test]
    fn test_reads_rows() {
        let file = write_csv(&[
            "46,Female,unemployed,23,Oxymorphone,157,Yes,No,No,No,No,Sometimes,1",
            "31,Male,employed,5,Codeine,30,No,No,Yes,No,Yes,Never,0",
        ]);
        let dataset = CsvDataset::new(file.path());

        let records = dataset.load().expect("Should load");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].categorical("Gender"), Some("Female"));
        assert_eq!(records[1].numeric("Age"), Some(31.0));
        assert_eq!(records[1].opioid_addiction, Some(0));
    }

    #[test]
    fn test_empty_cells_are_missing_values() {
        let file = write_csv(&[",,unemployed,23,Oxymorphone,157,Yes,No,No,No,No,Sometimes,1"]);
        let dataset = CsvDataset::new(file.path());

        let records = dataset.load().expect("Should load");
        assert_eq!(records[0].age, None);
        assert_eq!(records[0].gender, None);
        assert_eq!(records[0].categorical("Employment Status"), Some("unemployed"));
    }

    #[test]
    fn test_each_load_rereads_the_file() {
        let file = write_csv(&["46,Female,unemployed,23,Oxymorphone,157,Yes,No,No,No,No,Sometimes,1"]);
        let dataset = CsvDataset::new(file.path());
        assert_eq!(dataset.load().expect("Should load").len(), 1);

        let mut handle = std::fs::OpenOptions::new()
            .append(true)
            .open(file.path())
            .expect("Should reopen");
        writeln!(handle, "31,Male,employed,5,Codeine,30,No,No,Yes,No,Yes,Never,0")
            .expect("Should append");

        assert_eq!(dataset.load().expect("Should load").len(), 2);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dataset = CsvDataset::new("/nonexistent/opioid_data.csv");
        let err = dataset.load().unwrap_err();
        assert!(err.to_string().contains("opioid_data.csv"));
    }
}
