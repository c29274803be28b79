/// Data layer: launch records, loading, and row selection.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<LaunchRecord>
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset  │  records, site list, payload min/max
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site + payload range → row indices
///   └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
