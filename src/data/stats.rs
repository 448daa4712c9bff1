use serde::{Deserialize, Serialize};

use super::model::SalaryDataset;

// ---------------------------------------------------------------------------
// SalarySummary – the four value-box figures
// ---------------------------------------------------------------------------

/// Summary statistics over a filtered subset. `None` is the "no data"
/// sentinel; presentation renders it as "N/A".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SalarySummary {
    pub median: Option<f64>,
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl SalarySummary {
    /// All four statistics carry the "no data" sentinel.
    pub fn is_empty(&self) -> bool {
        self.median.is_none() && self.mean.is_none() && self.min.is_none() && self.max.is_none()
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Compute the summary over the records selected by `indices`.
///
/// Two deliberately different value sets are aggregated:
///
/// * **central tendency** (median, mean): one figure per record — the band
///   midpoint when both bounds are known, otherwise the single known bound.
///   The midpoint keeps wide bands from skewing the typical-pay figures
///   toward whichever bound happens to be present.
/// * **range** (min, max): every present `min_annual` and `max_annual`,
///   unaveraged — the lowest and highest figure appearing anywhere in the
///   subset.
///
/// Pure and total: an empty subset, or one contributing no usable figures,
/// yields the sentinel rather than an error.
pub fn summarize(dataset: &SalaryDataset, indices: &[usize]) -> SalarySummary {
    let mut typical: Vec<f64> = Vec::with_capacity(indices.len());
    let mut extremes: Vec<f64> = Vec::with_capacity(indices.len() * 2);

    for &i in indices {
        let rec = &dataset.records[i];
        if let Some(mid) = rec.midpoint() {
            typical.push(mid);
        }
        extremes.extend(rec.min_annual);
        extremes.extend(rec.max_annual);
    }

    SalarySummary {
        median: median(&mut typical),
        mean: mean(&typical),
        min: extremes.iter().copied().reduce(f64::min),
        max: extremes.iter().copied().reduce(f64::max),
    }
}

/// Median of `values` (sorts in place). Even counts average the two middle
/// elements.
fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.total_cmp(b));
    let n = values.len();
    Some(if n % 2 == 0 {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    } else {
        values[n / 2]
    })
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::SalaryRecord;

    fn rec(min: Option<f64>, max: Option<f64>) -> SalaryRecord {
        SalaryRecord {
            department: "Health".to_string(),
            negotiating_body: "Union A".to_string(),
            min_annual: min,
            max_annual: max,
        }
    }

    fn all_indices(ds: &SalaryDataset) -> Vec<usize> {
        (0..ds.len()).collect()
    }

    #[test]
    fn empty_subset_yields_the_sentinel_everywhere() {
        let ds = SalaryDataset::from_records(vec![rec(Some(50_000.0), Some(60_000.0))]);
        let summary = summarize(&ds, &[]);
        assert!(summary.is_empty());
    }

    #[test]
    fn records_without_figures_contribute_nothing() {
        let ds = SalaryDataset::from_records(vec![rec(None, None), rec(None, None)]);
        let summary = summarize(&ds, &all_indices(&ds));
        assert!(summary.is_empty());
    }

    #[test]
    fn central_tendency_uses_midpoints_and_single_bounds() {
        // Midpoints/fallbacks: 55_000, 40_000, 70_000.
        let ds = SalaryDataset::from_records(vec![
            rec(Some(50_000.0), Some(60_000.0)),
            rec(None, Some(40_000.0)),
            rec(Some(70_000.0), None),
        ]);
        let summary = summarize(&ds, &all_indices(&ds));
        assert_eq!(summary.median, Some(55_000.0));
        let mean = summary.mean.unwrap();
        assert!((mean - 55_000.0).abs() < 1e-9);
    }

    #[test]
    fn even_count_median_averages_the_middle_pair() {
        let ds = SalaryDataset::from_records(vec![
            rec(Some(50_000.0), Some(60_000.0)), // 55_000
            rec(None, Some(40_000.0)),           // 40_000
        ]);
        let summary = summarize(&ds, &all_indices(&ds));
        assert_eq!(summary.median, Some(47_500.0));
    }

    #[test]
    fn range_uses_raw_bounds_not_midpoints() {
        let ds = SalaryDataset::from_records(vec![
            rec(Some(50_000.0), Some(60_000.0)),
            rec(None, Some(40_000.0)),
        ]);
        let summary = summarize(&ds, &all_indices(&ds));
        // Raw figures are [50_000, 60_000, 40_000]; midpoints would have
        // given min = 47_500.
        assert_eq!(summary.min, Some(40_000.0));
        assert_eq!(summary.max, Some(60_000.0));
    }

    #[test]
    fn single_bound_records_feed_the_range_set() {
        let ds = SalaryDataset::from_records(vec![
            rec(Some(70_000.0), None),
            rec(None, Some(30_000.0)),
        ]);
        let summary = summarize(&ds, &all_indices(&ds));
        assert_eq!(summary.min, Some(30_000.0));
        assert_eq!(summary.max, Some(70_000.0));
    }

    #[test]
    fn subset_selection_respects_indices() {
        let ds = SalaryDataset::from_records(vec![
            rec(Some(10_000.0), Some(20_000.0)),
            rec(Some(50_000.0), Some(60_000.0)),
            rec(Some(90_000.0), Some(100_000.0)),
        ]);
        let summary = summarize(&ds, &[1]);
        assert_eq!(summary.median, Some(55_000.0));
        assert_eq!(summary.mean, Some(55_000.0));
        assert_eq!(summary.min, Some(50_000.0));
        assert_eq!(summary.max, Some(60_000.0));
    }
}
