/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Record>, header schema
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐     ┌───────────┐
///   │  filter   │ ──▶ │ aggregate │  Option<f64>
///   └──────────┘     └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
