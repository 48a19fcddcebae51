/// Data layer: typed rows, loading, grouping and aggregation.
///
/// Architecture:
/// ```text
///  data.csv / datacopy1.csv / datacopy2.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  CSV text → typed rows (ParseError on bad fields)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  group    │  Grouped<K, Vec<V>>: bucket rows by key
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  reduce buckets → BoxplotData / GroupedBarData / TimeSeriesData
///   └───────────┘
/// ```

pub mod aggregate;
pub mod error;
pub mod group;
pub mod loader;
pub mod model;
pub mod stats;
