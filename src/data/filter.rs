use std::fmt;

use serde::{Deserialize, Serialize};

use super::model::{SalaryDataset, SalaryRecord};

// ---------------------------------------------------------------------------
// DimensionFilter: one dropdown's worth of selection
// ---------------------------------------------------------------------------

/// Filter on a single string dimension (department or negotiating body).
///
/// Presentation layers speak the literal `"All"` sentinel; inside the core
/// the no-filter case is its own variant so the predicate never compares
/// against a magic string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DimensionFilter {
    /// No constraint on this dimension.
    All,
    /// Keep only records whose value equals this one.
    Value(String),
}

impl DimensionFilter {
    /// Whether a record's value passes this filter.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            DimensionFilter::All => true,
            DimensionFilter::Value(v) => v == value,
        }
    }
}

/// Map the dropdown's string form: `"All"` → no filter, anything else is a
/// literal value.
impl From<&str> for DimensionFilter {
    fn from(s: &str) -> Self {
        if s == "All" {
            DimensionFilter::All
        } else {
            DimensionFilter::Value(s.to_string())
        }
    }
}

impl fmt::Display for DimensionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionFilter::All => write!(f, "All"),
            DimensionFilter::Value(v) => write!(f, "{v}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Selection: the user's current query
// ---------------------------------------------------------------------------

/// The current department / negotiating-body / salary-range query.
///
/// `salary_range` bounds are inclusive. Callers build the range from the
/// dataset's own bounds and a validated slider, so `low <= high` is a
/// precondition here, not something the core checks; an inverted range
/// simply selects fewer (usually zero) records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub department: DimensionFilter,
    pub negotiating_body: DimensionFilter,
    /// `(low, high)`, inclusive.
    pub salary_range: (i64, i64),
}

impl Selection {
    /// The widest selection for a dataset: both dropdowns on `All`, range
    /// spanning the dataset's salary bounds (or `(0, 0)` when the dataset
    /// carries no figures — every record is then excluded by clause 3 anyway).
    pub fn full(dataset: &SalaryDataset) -> Self {
        let salary_range = match dataset.salary_bounds {
            Some((lo, hi)) => (lo.floor() as i64, hi.ceil() as i64),
            None => (0, 0),
        };
        Selection {
            department: DimensionFilter::All,
            negotiating_body: DimensionFilter::All,
            salary_range,
        }
    }
}

// ---------------------------------------------------------------------------
// Predicate
// ---------------------------------------------------------------------------

/// Whether a single record satisfies the selection. Conjunction of the two
/// dimension filters and the salary-range overlap test.
///
/// The range test reconciles absent bounds:
/// * lower bound: `min_annual >= low`, falling back to `max_annual >= low`
///   when `min_annual` is absent;
/// * upper bound: `max_annual <= high`, with an absent `max_annual` treated
///   as unbounded above (always passes);
/// * a record with neither figure can never satisfy the lower bound and is
///   excluded from every range.
pub fn record_matches(record: &SalaryRecord, selection: &Selection) -> bool {
    if !selection.department.matches(&record.department) {
        return false;
    }
    if !selection.negotiating_body.matches(&record.negotiating_body) {
        return false;
    }

    let (low, high) = selection.salary_range;
    let (low, high) = (low as f64, high as f64);

    let lower_ok = match (record.min_annual, record.max_annual) {
        (Some(min), _) => min >= low,
        (None, Some(max)) => max >= low,
        (None, None) => false,
    };
    let upper_ok = match record.max_annual {
        None => true,
        Some(max) => max <= high,
    };

    lower_ok && upper_ok
}

/// Return indices of records that pass the selection, in input order.
///
/// Pure and total: no validation, no errors, stable with respect to the
/// record order.
pub fn filtered_indices(dataset: &SalaryDataset, selection: &Selection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| record_matches(rec, selection))
        .map(|(i, _)| i)
        .collect()
}
