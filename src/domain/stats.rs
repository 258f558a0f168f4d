//! Descriptive statistics over the static dataset.
//!
//! Quantiles use linear interpolation between closest ranks (the R-7
//! method), matching the semantics of the training pipeline's tooling.

use serde::Serialize;

/// Addicted / not-addicted counts for one value of a categorical column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupStat {
    pub value: String,
    pub addicted: u64,
    #[serde(rename = "notAddicted")]
    pub not_addicted: u64,
}

/// Five-number summary plus mean and sample count for one outcome group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
    pub count: usize,
}

impl FiveNumberSummary {
    /// Summarize a sample, dropping non-finite values.
    ///
    /// Returns `None` for an empty sample: min/quantiles/mean are undefined
    /// there, and the wire format carries `null` instead of a NaN-laden
    /// summary.
    #[must_use]
    pub fn from_samples(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;

        Some(Self {
            min: sorted[0],
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max: sorted[count - 1],
            mean,
            count,
        })
    }
}

/// Per-outcome summaries for one numeric column.
///
/// A `None` side means that outcome group had no usable values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeSummaries {
    pub addicted: Option<FiveNumberSummary>,
    #[serde(rename = "notAddicted")]
    pub not_addicted: Option<FiveNumberSummary>,
}

/// Linear-interpolation quantile over an already-sorted sample.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    if sorted.len() == 1 {
        return sorted[0];
    }
    let rank = (sorted.len() - 1) as f64 * q;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantile_interpolates_between_ranks() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        // rank = 3 * 0.25 = 0.75 -> 1.0 + 0.75 * (2.0 - 1.0)
        assert!((quantile(&sorted, 0.25) - 1.75).abs() < 1e-12);
        assert!((quantile(&sorted, 0.5) - 2.5).abs() < 1e-12);
        assert!((quantile(&sorted, 0.75) - 3.25).abs() < 1e-12);
        assert_eq!(quantile(&sorted, 0.0), 1.0);
        assert_eq!(quantile(&sorted, 1.0), 4.0);
    }

    #[test]
    fn test_summary_of_single_value() {
        let s = FiveNumberSummary::from_samples(&[42.0]).expect("Should summarize");
        assert_eq!(s.min, 42.0);
        assert_eq!(s.q1, 42.0);
        assert_eq!(s.median, 42.0);
        assert_eq!(s.q3, 42.0);
        assert_eq!(s.max, 42.0);
        assert_eq!(s.mean, 42.0);
        assert_eq!(s.count, 1);
    }

    #[test]
    fn test_summary_is_ordered() {
        let s = FiveNumberSummary::from_samples(&[9.0, 1.0, 5.0, 3.0, 7.0, 2.0])
            .expect("Should summarize");
        assert!(s.min <= s.q1);
        assert!(s.q1 <= s.median);
        assert!(s.median <= s.q3);
        assert!(s.q3 <= s.max);
        assert_eq!(s.count, 6);
    }

    #[test]
    fn test_empty_sample_has_no_summary() {
        assert!(FiveNumberSummary::from_samples(&[]).is_none());
        assert!(FiveNumberSummary::from_samples(&[f64::NAN]).is_none());
    }

    #[test]
    fn test_non_finite_values_are_dropped() {
        let s = FiveNumberSummary::from_samples(&[1.0, f64::NAN, 3.0]).expect("Should summarize");
        assert_eq!(s.count, 2);
        assert_eq!(s.mean, 2.0);
    }

    #[test]
    fn test_group_stat_wire_keys() {
        let stat = GroupStat {
            value: "Female".to_string(),
            addicted: 3,
            not_addicted: 2,
        };
        let json = serde_json::to_value(&stat).expect("Should serialize");
        assert_eq!(json["notAddicted"], 2);
        assert_eq!(json["addicted"], 3);
    }
}
