/// Data layer: scan readings and loading.
///
/// Architecture:
/// ```text
///  linear_scanner.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Reading>, file order
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
