use crate::data::filter::{filtered_indices, DimensionFilter, Selection};
use crate::data::model::{SalaryDataset, SalaryRecord};
use crate::data::stats::{summarize, SalarySummary};

// ---------------------------------------------------------------------------
// Explorer state
// ---------------------------------------------------------------------------

/// The filter/statistics pipeline with its current selection, independent of
/// any rendering.
///
/// Every selection change triggers a full, eager recomputation of the
/// visible indices and the summary before control returns to the caller;
/// there is no partial or background update. Because the derivation is pure,
/// the latest `selection → (indices, summary)` pair is memoized and an
/// unchanged selection returns it untouched.
pub struct ExplorerState {
    /// Loaded dataset (None until the embedding hands one over).
    pub dataset: Option<SalaryDataset>,

    /// The current query.
    pub selection: Selection,

    /// Indices of records passing the current selection (cached).
    pub visible_indices: Vec<usize>,

    /// Statistics over the visible records (cached).
    pub summary: SalarySummary,

    /// Selection the caches were computed for.
    computed_for: Option<Selection>,
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self {
            dataset: None,
            selection: Selection {
                department: DimensionFilter::All,
                negotiating_body: DimensionFilter::All,
                salary_range: (0, 0),
            },
            visible_indices: Vec::new(),
            summary: SalarySummary::default(),
            computed_for: None,
        }
    }
}

impl ExplorerState {
    /// Ingest the record set, seed the widest selection from its bounds, and
    /// compute the initial indices and summary.
    ///
    /// Records with an inverted band (`min_annual > max_annual`) are logged
    /// and left alone; the pipeline runs their arithmetic unchanged.
    pub fn set_dataset(&mut self, dataset: SalaryDataset) {
        if let Err(e) = dataset.validate() {
            log::warn!("dataset has records with inverted salary bands: {e}");
        }

        self.selection = Selection::full(&dataset);
        self.dataset = Some(dataset);
        self.computed_for = None;
        self.refilter();
    }

    /// Set the department filter (`"All"` clears it) and refilter.
    pub fn set_department(&mut self, department: &str) {
        self.selection.department = DimensionFilter::from(department);
        self.refilter();
    }

    /// Set the negotiating-body filter (`"All"` clears it) and refilter.
    pub fn set_negotiating_body(&mut self, negotiating_body: &str) {
        self.selection.negotiating_body = DimensionFilter::from(negotiating_body);
        self.refilter();
    }

    /// Set the inclusive salary range and refilter. Callers keep `low <= high`.
    pub fn set_salary_range(&mut self, low: i64, high: i64) {
        self.selection.salary_range = (low, high);
        self.refilter();
    }

    /// Recompute `visible_indices` and `summary` for the current selection.
    /// Short-circuits when the selection is the one already computed for.
    pub fn refilter(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };
        if self.computed_for.as_ref() == Some(&self.selection) {
            return;
        }

        self.visible_indices = filtered_indices(ds, &self.selection);
        self.summary = summarize(ds, &self.visible_indices);
        self.computed_for = Some(self.selection.clone());

        log::debug!(
            "refiltered: {} of {} records visible",
            self.visible_indices.len(),
            ds.len()
        );
    }

    /// The visible records, in dataset order, for the listing collaborator.
    pub fn visible_records(&self) -> impl Iterator<Item = &SalaryRecord> {
        let records = self.dataset.as_ref().map(|ds| ds.records.as_slice());
        self.visible_indices
            .iter()
            .filter_map(move |&i| records.and_then(|r| r.get(i)))
    }
}
