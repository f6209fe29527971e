use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;

use super::model::{CellValue, RawTable, Workbook};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a workbook from a path.  Dispatch by shape and extension.
///
/// Supported inputs:
/// * `.json`      – `{ "Amostra1": [[cell, cell], ...], ... }` (recommended)
/// * `.csv`       – a single table, named after the file stem
/// * a directory  – every `.csv` inside becomes one table, named by stem
pub fn load_file(path: &Path) -> Result<Workbook> {
    if path.is_dir() {
        return load_csv_dir(path);
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_single_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema: a top-level object mapping each table name to its
/// rows, each row an array of cells (number, string or null):
///
/// ```json
/// {
///   "Amostra1": [["x", "y"], [1.0, 2.1], [2.0, "4.2"]],
///   "Amostra2": [[1.0, 1.9]]
/// }
/// ```
fn load_json(path: &Path) -> Result<Workbook> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json_workbook(&text)
}

/// Parse workbook JSON from an in-memory string.
pub fn parse_json_workbook(text: &str) -> Result<Workbook> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let obj = root
        .as_object()
        .context("Expected top-level JSON object of table name → rows")?;

    let mut tables = BTreeMap::new();

    for (name, rows_val) in obj {
        let rows = rows_val
            .as_array()
            .with_context(|| format!("Table '{name}' is not an array of rows"))?;

        let mut table: RawTable = Vec::with_capacity(rows.len());
        for (i, row_val) in rows.iter().enumerate() {
            let row = row_val
                .as_array()
                .with_context(|| format!("Table '{name}', row {i}: not an array"))?;
            table.push(row.iter().map(json_to_cell).collect());
        }
        tables.insert(name.clone(), table);
    }

    Ok(Workbook::from_tables(tables))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::Number(n) => match n.as_f64() {
            Some(f) => CellValue::Number(f),
            None => CellValue::Text(n.to_string()),
        },
        JsonValue::String(s) if s.is_empty() => CellValue::Empty,
        JsonValue::String(s) => CellValue::Text(s.clone()),
        JsonValue::Null => CellValue::Empty,
        other => CellValue::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// CSV loaders
// ---------------------------------------------------------------------------

/// One `.csv` file → one table named after the file stem.
fn load_single_csv(path: &Path) -> Result<Workbook> {
    let name = table_name_from_path(path)?;
    let file = std::fs::File::open(path).context("opening CSV")?;
    let table = read_csv_table(file).with_context(|| format!("reading table '{name}'"))?;

    let mut tables = BTreeMap::new();
    tables.insert(name, table);
    Ok(Workbook::from_tables(tables))
}

/// A directory of `.csv` files → one table per file.
fn load_csv_dir(dir: &Path) -> Result<Workbook> {
    let mut tables = BTreeMap::new();

    for entry in std::fs::read_dir(dir).context("reading workbook directory")? {
        let path = entry.context("reading directory entry")?.path();
        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
        if !path.is_file() || !is_csv {
            continue;
        }

        let name = table_name_from_path(&path)?;
        let file = std::fs::File::open(&path)
            .with_context(|| format!("opening {}", path.display()))?;
        let table = read_csv_table(file).with_context(|| format!("reading table '{name}'"))?;

        log::debug!("table '{name}': {} rows", table.len());
        tables.insert(name, table);
    }

    if tables.is_empty() {
        bail!("No .csv tables found in {}", dir.display());
    }
    Ok(Workbook::from_tables(tables))
}

/// Raw sheets carry no header schema, so the reader is headerless and
/// flexible: every record becomes a row, whatever its width.
pub fn read_csv_table(input: impl Read) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut table = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        table.push(record.iter().map(guess_cell).collect());
    }
    Ok(table)
}

fn guess_cell(s: &str) -> CellValue {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return CellValue::Empty;
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        return CellValue::Number(f);
    }
    CellValue::Text(trimmed.to_string())
}

fn table_name_from_path(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
        .with_context(|| format!("cannot derive a table name from {}", path.display()))
}
