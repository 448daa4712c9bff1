//! paybands – filter and summarise public-sector salary-band records.
//!
//! The embedding application loads a table of salary bands (department,
//! negotiating body, optional min/max annual pay), hands it to this crate,
//! and drives an [`ExplorerState`] from its selection controls. The crate
//! answers with the matching records and four summary figures (median,
//! mean, min, max), reconciling records where either pay bound is absent.
//!
//! ```
//! use paybands::{ExplorerState, SalaryDataset, SalaryRecord};
//!
//! let mut state = ExplorerState::default();
//! state.set_dataset(SalaryDataset::from_records(vec![
//!     SalaryRecord {
//!         department: "Health".to_string(),
//!         negotiating_body: "Union A".to_string(),
//!         min_annual: Some(50_000.0),
//!         max_annual: Some(60_000.0),
//!     },
//!     SalaryRecord {
//!         department: "Health".to_string(),
//!         negotiating_body: "Union B".to_string(),
//!         min_annual: None,
//!         max_annual: Some(40_000.0),
//!     },
//! ]));
//!
//! state.set_salary_range(30_000, 65_000);
//! assert_eq!(state.visible_records().count(), 2);
//! assert_eq!(state.summary.median, Some(47_500.0));
//! ```
//!
//! Everything here is pure and in-memory: no I/O, no validation of the
//! selection (callers build it from the dataset's own distinct values and
//! bounds), and no errors beyond the `None` "no data" sentinel on
//! statistics over an empty subset.

pub mod data;
pub mod state;

pub use data::filter::{filtered_indices, record_matches, DimensionFilter, Selection};
pub use data::model::{DatasetError, SalaryDataset, SalaryRecord};
pub use data::stats::{summarize, SalarySummary};
pub use state::ExplorerState;
