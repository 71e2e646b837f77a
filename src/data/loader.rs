use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value as JsonValue;

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json`      – records-oriented: `[{ "col": value, ... }, ...]`
/// * anything else – delimited text with a header row (CSV)
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json(path),
        _ => load_csv(path),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: the first row is the header and defines the schema; every
/// later row is zipped positionally against it.  A short row yields a record
/// with its trailing columns missing; fields beyond the header are dropped.
fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .context("opening CSV")?;

    let columns: Vec<String> = reader
        .headers()
        .context("reading CSV header")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        let record: Record = columns
            .iter()
            .cloned()
            .zip(row.iter().map(|cell| cell.to_string()))
            .collect();
        records.push(record);
    }

    Ok(Dataset::new(columns, records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "name": "iphone", "brand": "apple", "price": 999 },
///   ...
/// ]
/// ```
///
/// Scalar values are kept in their text form; `null` becomes an empty cell.
/// JSON objects carry no column order, so the schema is the first record's
/// keys in sorted order.
fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut columns: Vec<String> = Vec::new();
    let mut records = Vec::with_capacity(rows.len());

    for (i, rec) in rows.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        if columns.is_empty() {
            columns = obj.keys().cloned().collect();
        }

        let record: Record = obj
            .iter()
            .map(|(key, val)| (key.clone(), json_to_text(val)))
            .collect();
        records.push(record);
    }

    Ok(Dataset::new(columns, records))
}

fn json_to_text(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}
