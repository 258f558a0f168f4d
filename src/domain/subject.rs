//! Subject records and the fixed feature schema for opioid-addiction risk.
//!
//! Column names match the training dataset headers verbatim, including
//! embedded spaces.

use serde::{Deserialize, Serialize};

/// The 12 model features, in the exact order the classifier was trained on.
pub const FEATURE_NAMES: [&str; 12] = [
    "Age",
    "Gender",
    "Employment Status",
    "Prescription Duration",
    "Prescription Drug Used",
    "Days Since First Use",
    "Alcohol",
    "Smoking",
    "Depression",
    "Anxiety",
    "Sleeplessness",
    "Feverish",
];

/// Categorical columns aggregated by the group-counts endpoint.
pub const CATEGORICAL_COLUMNS: [&str; 9] = [
    "Gender",
    "Employment Status",
    "Alcohol",
    "Smoking",
    "Depression",
    "Anxiety",
    "Sleeplessness",
    "Feverish",
    "Prescription Drug Used",
];

/// Numeric columns summarized by the boxplot endpoint.
pub const NUMERIC_COLUMNS: [&str; 3] = ["Age", "Prescription Duration", "Days Since First Use"];

/// The binary target column.
pub const OUTCOME_COLUMN: &str = "Opioid Addiction";

/// Outcome label partitioning the statistics endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Addicted,
    NotAddicted,
}

impl Outcome {
    /// Map the raw dataset label. Anything other than 0 or 1 is treated as
    /// missing and the row is skipped by the aggregators.
    #[must_use]
    pub fn from_label(label: u8) -> Option<Self> {
        match label {
            1 => Some(Self::Addicted),
            0 => Some(Self::NotAddicted),
            _ => None,
        }
    }

    /// The JSON key used for this group on the wire.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Addicted => "addicted",
            Self::NotAddicted => "notAddicted",
        }
    }
}

/// One row of the static dataset.
///
/// All feature cells are optional: an empty cell deserializes to `None` and
/// is dropped by the aggregators, the same way pandas drops NaN.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectRecord {
    #[serde(rename = "Age")]
    pub age: Option<f64>,

    #[serde(rename = "Gender")]
    pub gender: Option<String>,

    #[serde(rename = "Employment Status")]
    pub employment_status: Option<String>,

    #[serde(rename = "Prescription Duration")]
    pub prescription_duration: Option<f64>,

    #[serde(rename = "Prescription Drug Used")]
    pub prescription_drug_used: Option<String>,

    #[serde(rename = "Days Since First Use")]
    pub days_since_first_use: Option<f64>,

    #[serde(rename = "Alcohol")]
    pub alcohol: Option<String>,

    #[serde(rename = "Smoking")]
    pub smoking: Option<String>,

    #[serde(rename = "Depression")]
    pub depression: Option<String>,

    #[serde(rename = "Anxiety")]
    pub anxiety: Option<String>,

    #[serde(rename = "Sleeplessness")]
    pub sleeplessness: Option<String>,

    #[serde(rename = "Feverish")]
    pub feverish: Option<String>,

    #[serde(rename = "Opioid Addiction")]
    pub opioid_addiction: Option<u8>,
}

impl SubjectRecord {
    /// Look up a categorical cell by column name.
    #[must_use]
    pub fn categorical(&self, column: &str) -> Option<&str> {
        let cell = match column {
            "Gender" => &self.gender,
            "Employment Status" => &self.employment_status,
            "Prescription Drug Used" => &self.prescription_drug_used,
            "Alcohol" => &self.alcohol,
            "Smoking" => &self.smoking,
            "Depression" => &self.depression,
            "Anxiety" => &self.anxiety,
            "Sleeplessness" => &self.sleeplessness,
            "Feverish" => &self.feverish,
            _ => return None,
        };
        cell.as_deref()
    }

    /// Look up a numeric cell by column name.
    #[must_use]
    pub fn numeric(&self, column: &str) -> Option<f64> {
        match column {
            "Age" => self.age,
            "Prescription Duration" => self.prescription_duration,
            "Days Since First Use" => self.days_since_first_use,
            _ => None,
        }
    }

    /// The outcome label, if present and binary.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.opioid_addiction.and_then(Outcome::from_label)
    }
}
