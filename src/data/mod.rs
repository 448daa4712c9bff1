/// Data layer: core types, filtering, and aggregation.
///
/// Architecture:
/// ```text
///   Vec<SalaryRecord>
///        │
///        ▼
///   ┌───────────────┐
///   │ SalaryDataset  │  records + distinct options + salary bounds
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply Selection predicate → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  median / mean / min / max over the subset
///   └──────────┘
/// ```

pub mod filter;
pub mod model;
pub mod stats;
