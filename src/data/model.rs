use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// CellValue – on-demand interpretation of a raw cell
// ---------------------------------------------------------------------------

/// A cell as seen by one operation: numeric if the raw text parses as `f64`,
/// textual otherwise.
///
/// The classification is never stored back into the [`Record`]. The same raw
/// text may act as a number in one comparison and as a string in the next, so
/// every operation calls [`CellValue::from_raw`] again on the raw cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Numeric(f64),
    Text(&'a str),
}

impl<'a> CellValue<'a> {
    /// Classify a raw cell. Surrounding whitespace is ignored for the numeric
    /// interpretation; the textual interpretation keeps the cell verbatim.
    pub fn from_raw(raw: &'a str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(v) => CellValue::Numeric(v),
            Err(_) => CellValue::Text(raw),
        }
    }

    /// The numeric interpretation, if there is one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Numeric(v) => Some(*v),
            CellValue::Text(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the table
// ---------------------------------------------------------------------------

/// A single row: column name → raw text value.
///
/// A record normally carries every schema column; a short input row leaves
/// its trailing columns out entirely (see the loader).
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub fields: BTreeMap<String, String>,
}

impl Record {
    /// Raw text of the given column, or `None` if this record lacks it.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Record {
            fields: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table: schema plus records in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Ordered column names from the header row.
    pub columns: Vec<String>,
    /// All records (rows), in input order.
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Dataset { columns, records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
