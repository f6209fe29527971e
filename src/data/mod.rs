/// Data layer: raw workbook types and loading.
///
/// Architecture:
/// ```text
///  .json / .csv / dir-of-csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Workbook
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Workbook  │  name → RawTable (rows of CellValue)
///   └──────────┘
///        │
///        ▼
///   TableSource trait → consumed by the analysis pipeline
/// ```

pub mod loader;
pub mod model;
