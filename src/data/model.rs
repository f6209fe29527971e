use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// CellValue – a single cell in a raw worksheet row
// ---------------------------------------------------------------------------

/// A dynamically-typed worksheet cell as it comes out of the container parse.
/// Sheets carry no schema, so a cell is whatever the loader could make of it.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Empty,
}

impl CellValue {
    /// Try to interpret the cell as an `f64` observation.
    ///
    /// `Text` is re-parsed so that numeric-looking strings ("3.14") behave
    /// like numbers, matching how spreadsheet exports mix the two.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            CellValue::Empty => None,
        }
    }
}

/// One worksheet row: an ordered run of cells, any length.
pub type RawRow = Vec<CellValue>;

/// One named worksheet: rows in file order, no shape guarantees.
pub type RawTable = Vec<RawRow>;

// ---------------------------------------------------------------------------
// Workbook – the complete loaded document
// ---------------------------------------------------------------------------

/// All named tables parsed from one workbook-style document.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    /// table name → raw rows.
    pub tables: BTreeMap<String, RawTable>,
}

impl Workbook {
    pub fn from_tables(tables: BTreeMap<String, RawTable>) -> Self {
        Workbook { tables }
    }

    /// Table names in sorted order.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(|s| s.as_str())
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the workbook holds no tables at all.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

// ---------------------------------------------------------------------------
// TableSource – where the analysis pipeline gets its tables from
// ---------------------------------------------------------------------------

/// Anything that can hand out a named raw table.
///
/// The pipeline only ever reads through this trait, so analyses run the
/// same against a loaded [`Workbook`] or an in-memory map.
pub trait TableSource {
    fn table(&self, sample_id: &str) -> Option<&RawTable>;
}

impl TableSource for Workbook {
    fn table(&self, sample_id: &str) -> Option<&RawTable> {
        self.tables.get(sample_id)
    }
}

impl TableSource for BTreeMap<String, RawTable> {
    fn table(&self, sample_id: &str) -> Option<&RawTable> {
        self.get(sample_id)
    }
}
