use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// SalaryRecord – one row of the source table
// ---------------------------------------------------------------------------

/// One salary-band entry for a job/position.
///
/// Either annual bound may be absent (the source table leaves cells blank
/// when a figure was not reported). Absence is modelled as `None`, never as
/// a NaN placeholder, so every consumer branches on presence explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    pub department: String,
    pub negotiating_body: String,
    pub min_annual: Option<f64>,
    pub max_annual: Option<f64>,
}

impl SalaryRecord {
    /// The single "typical pay" figure this record contributes to the
    /// central-tendency statistics:
    /// * both bounds present → midpoint of the band
    /// * one bound present   → that bound
    /// * neither present     → nothing
    pub fn midpoint(&self) -> Option<f64> {
        match (self.min_annual, self.max_annual) {
            (Some(lo), Some(hi)) => Some((lo + hi) / 2.0),
            (Some(lo), None) => Some(lo),
            (None, Some(hi)) => Some(hi),
            (None, None) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// DatasetError
// ---------------------------------------------------------------------------

/// Data-quality findings surfaced by [`SalaryDataset::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    /// The source never guarantees `min_annual <= max_annual`; a record that
    /// violates it is undefined input and is reported rather than repaired.
    #[error("record {index}: min annual {min} exceeds max annual {max}")]
    InvertedBounds { index: usize, min: f64, max: f64 },
}

// ---------------------------------------------------------------------------
// SalaryDataset – the complete loaded record set
// ---------------------------------------------------------------------------

/// The full record set with the indexes derived at load time: the distinct
/// values feeding the two selection dropdowns and the overall salary bounds
/// seeding the range control.
///
/// Records are an unordered multiset — duplicates are valid and preserved —
/// and the set is immutable for the life of the process.
#[derive(Debug, Clone)]
pub struct SalaryDataset {
    /// All records, in source order.
    pub records: Vec<SalaryRecord>,
    /// Sorted distinct department names.
    pub departments: Vec<String>,
    /// Sorted distinct negotiating-body names.
    pub negotiating_bodies: Vec<String>,
    /// `(lowest, highest)` over every present `min_annual` and `max_annual`,
    /// or `None` when no record carries a figure at all.
    pub salary_bounds: Option<(f64, f64)>,
}

impl SalaryDataset {
    /// Build the derived indexes from the loaded records.
    pub fn from_records(records: Vec<SalaryRecord>) -> Self {
        let mut departments: BTreeSet<String> = BTreeSet::new();
        let mut negotiating_bodies: BTreeSet<String> = BTreeSet::new();
        let mut bounds: Option<(f64, f64)> = None;

        for rec in &records {
            departments.insert(rec.department.clone());
            negotiating_bodies.insert(rec.negotiating_body.clone());

            for val in [rec.min_annual, rec.max_annual].into_iter().flatten() {
                bounds = Some(match bounds {
                    Some((lo, hi)) => (lo.min(val), hi.max(val)),
                    None => (val, val),
                });
            }
        }

        SalaryDataset {
            records,
            departments: departments.into_iter().collect(),
            negotiating_bodies: negotiating_bodies.into_iter().collect(),
            salary_bounds: bounds,
        }
    }

    /// Report the first record whose band is inverted (`min > max`).
    ///
    /// The pipeline itself never rejects such records — their arithmetic runs
    /// unchanged — but callers that want to flag bad source data can.
    pub fn validate(&self) -> Result<(), DatasetError> {
        for (index, rec) in self.records.iter().enumerate() {
            if let (Some(min), Some(max)) = (rec.min_annual, rec.max_annual) {
                if min > max {
                    return Err(DatasetError::InvertedBounds { index, min, max });
                }
            }
        }
        Ok(())
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(dept: &str, neg: &str, min: Option<f64>, max: Option<f64>) -> SalaryRecord {
        SalaryRecord {
            department: dept.to_string(),
            negotiating_body: neg.to_string(),
            min_annual: min,
            max_annual: max,
        }
    }

    #[test]
    fn derives_sorted_distinct_options_and_bounds() {
        let ds = SalaryDataset::from_records(vec![
            rec("Works", "Union B", Some(48_000.0), Some(52_000.0)),
            rec("Health", "Union A", Some(50_000.0), Some(60_000.0)),
            rec("Health", "Union A", None, Some(40_000.0)),
        ]);

        assert_eq!(ds.departments, vec!["Health", "Works"]);
        assert_eq!(ds.negotiating_bodies, vec!["Union A", "Union B"]);
        assert_eq!(ds.salary_bounds, Some((40_000.0, 60_000.0)));
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn bounds_absent_when_no_record_has_a_figure() {
        let ds = SalaryDataset::from_records(vec![rec("Health", "Union A", None, None)]);
        assert_eq!(ds.salary_bounds, None);
    }

    #[test]
    fn duplicates_are_preserved() {
        let a = rec("Health", "Union A", Some(50_000.0), Some(60_000.0));
        let ds = SalaryDataset::from_records(vec![a.clone(), a.clone()]);
        assert_eq!(ds.records.len(), 2);
        assert_eq!(ds.departments.len(), 1);
    }

    #[test]
    fn midpoint_per_presence() {
        assert_eq!(
            rec("d", "n", Some(50_000.0), Some(60_000.0)).midpoint(),
            Some(55_000.0)
        );
        assert_eq!(rec("d", "n", Some(50_000.0), None).midpoint(), Some(50_000.0));
        assert_eq!(rec("d", "n", None, Some(40_000.0)).midpoint(), Some(40_000.0));
        assert_eq!(rec("d", "n", None, None).midpoint(), None);
    }

    #[test]
    fn validate_flags_inverted_band() {
        let ds = SalaryDataset::from_records(vec![
            rec("Health", "Union A", Some(50_000.0), Some(60_000.0)),
            rec("Works", "Union B", Some(70_000.0), Some(30_000.0)),
        ]);
        assert_eq!(
            ds.validate(),
            Err(DatasetError::InvertedBounds {
                index: 1,
                min: 70_000.0,
                max: 30_000.0
            })
        );
    }

    #[test]
    fn validate_accepts_partial_records() {
        let ds = SalaryDataset::from_records(vec![
            rec("Health", "Union A", None, Some(40_000.0)),
            rec("Health", "Union A", Some(50_000.0), None),
            rec("Health", "Union A", None, None),
        ]);
        assert_eq!(ds.validate(), Ok(()));
    }
}
