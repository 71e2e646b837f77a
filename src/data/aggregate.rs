use anyhow::Result;

use super::model::{CellValue, Dataset};
use crate::error::{ConfigFormatError, MissingColumnError};

// ---------------------------------------------------------------------------
// AggregateSpec – parsed --aggregate configuration
// ---------------------------------------------------------------------------

/// A recognised aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateKind {
    Avg,
    Min,
    Max,
}

impl AggregateKind {
    /// Resolve an operation name.  Anything but `avg`, `min`, `max` is `None`.
    pub fn parse(op: &str) -> Option<Self> {
        match op {
            "avg" => Some(AggregateKind::Avg),
            "min" => Some(AggregateKind::Min),
            "max" => Some(AggregateKind::Max),
            _ => None,
        }
    }
}

/// A single-column aggregation, built from a `"column,operation"` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateSpec {
    pub column: String,
    pub op: String,
}

impl AggregateSpec {
    /// Parse a `"column,operation"` configuration string.  Anything but
    /// exactly two comma-separated fields is a [`ConfigFormatError`].
    pub fn parse(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = raw.split(',').collect();
        let [column, op] = parts.as_slice() else {
            return Err(ConfigFormatError {
                what: "aggregate",
                expected: "column,operation",
            }
            .into());
        };
        Ok(AggregateSpec {
            column: column.to_string(),
            op: op.to_string(),
        })
    }

    /// The resolved aggregation, if recognised.
    pub fn kind(&self) -> Option<AggregateKind> {
        AggregateKind::parse(&self.op)
    }
}

// ---------------------------------------------------------------------------
// apply – all-or-nothing numeric aggregation
// ---------------------------------------------------------------------------

/// Aggregate `spec.column` over every record.
///
/// `Ok(None)` means the aggregate is undefined: some cell in the column is
/// not numeric, the dataset is empty, or the operation name is unknown.  One
/// unparseable cell poisons the whole column; there is no skip-bad-rows mode.
/// A record without the column is a hard [`MissingColumnError`], never folded
/// into `Ok(None)`.
pub fn apply(dataset: &Dataset, spec: &AggregateSpec) -> Result<Option<f64>> {
    let mut values = Vec::with_capacity(dataset.len());
    for record in &dataset.records {
        let cell = record
            .get(&spec.column)
            .ok_or_else(|| MissingColumnError(spec.column.clone()))?;
        match CellValue::from_raw(cell).as_f64() {
            Some(v) => values.push(v),
            None => return Ok(None),
        }
    }

    if values.is_empty() {
        return Ok(None);
    }

    // The operation name is resolved after the scan: a missing column is
    // reported even under an unknown operation name.
    let result = match spec.kind() {
        Some(AggregateKind::Avg) => values.iter().sum::<f64>() / values.len() as f64,
        Some(AggregateKind::Min) => values.iter().copied().fold(f64::INFINITY, f64::min),
        Some(AggregateKind::Max) => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        None => return Ok(None),
    };
    Ok(Some(result))
}
