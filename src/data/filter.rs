use anyhow::Result;

use super::model::{CellValue, Dataset};
use crate::error::{ConfigFormatError, MissingColumnError};

// ---------------------------------------------------------------------------
// FilterSpec – parsed --filter configuration
// ---------------------------------------------------------------------------

/// A recognised comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Gt,
    Lt,
    Eq,
}

impl CompareOp {
    /// Resolve an operator string.  Anything but `>`, `<`, `==` is `None`.
    pub fn parse(op: &str) -> Option<Self> {
        match op {
            ">" => Some(CompareOp::Gt),
            "<" => Some(CompareOp::Lt),
            "==" => Some(CompareOp::Eq),
            _ => None,
        }
    }
}

/// A single-column filter, built from a `"column,operator,value"` string.
///
/// The operator is kept as raw text and resolved per evaluation; an
/// unrecognised operator is not a configuration error, it simply matches no
/// record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub column: String,
    pub op: String,
    pub value: String,
}

impl FilterSpec {
    /// Parse a `"column,operator,value"` configuration string.  Anything but
    /// exactly three comma-separated fields is a [`ConfigFormatError`].
    pub fn parse(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = raw.split(',').collect();
        let [column, op, value] = parts.as_slice() else {
            return Err(ConfigFormatError {
                what: "filter",
                expected: "column,operator,value",
            }
            .into());
        };
        Ok(FilterSpec {
            column: column.to_string(),
            op: op.to_string(),
            value: value.to_string(),
        })
    }

    /// The resolved comparison operator, if recognised.
    pub fn compare_op(&self) -> Option<CompareOp> {
        CompareOp::parse(&self.op)
    }
}

// ---------------------------------------------------------------------------
// apply – pure selection over a dataset
// ---------------------------------------------------------------------------

/// Keep the records satisfying `spec`, preserving input order.
///
/// When both the cell and the filter literal parse as numbers the comparison
/// is numeric; otherwise only `==` can match, on raw string equality, and
/// `>` / `<` exclude the record silently.  A record without the filter column
/// aborts the whole filter with a [`MissingColumnError`].
pub fn apply(dataset: Dataset, spec: &FilterSpec) -> Result<Dataset> {
    let Dataset { columns, records } = dataset;
    let mut kept = Vec::with_capacity(records.len());

    for record in records {
        let keep = {
            let cell = record
                .get(&spec.column)
                .ok_or_else(|| MissingColumnError(spec.column.clone()))?;
            row_matches(cell, spec)
        };
        if keep {
            kept.push(record);
        }
    }

    Ok(Dataset::new(columns, kept))
}

fn row_matches(cell: &str, spec: &FilterSpec) -> bool {
    match (CellValue::from_raw(cell), CellValue::from_raw(&spec.value)) {
        (CellValue::Numeric(lhs), CellValue::Numeric(rhs)) => match spec.compare_op() {
            Some(CompareOp::Gt) => lhs > rhs,
            Some(CompareOp::Lt) => lhs < rhs,
            Some(CompareOp::Eq) => lhs == rhs,
            None => false,
        },
        // Non-numeric on either side: only string equality is meaningful.
        _ => spec.compare_op() == Some(CompareOp::Eq) && cell == spec.value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn phones() -> Dataset {
        let columns: Vec<String> = ["name", "brand", "price", "rating"]
            .map(String::from)
            .to_vec();
        let rows = [
            ["iphone", "apple", "999", "4.9"],
            ["galaxy", "samsung", "1199", "4.8"],
            ["redmi", "xiaomi", "199", "4.6"],
        ];
        let records = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .cloned()
                    .zip(row.iter().map(|cell| cell.to_string()))
                    .collect::<Record>()
            })
            .collect();
        Dataset::new(columns, records)
    }

    fn spec(column: &str, op: &str, value: &str) -> FilterSpec {
        FilterSpec {
            column: column.to_string(),
            op: op.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn string_equality_selects_exact_matches() {
        let result = apply(phones(), &spec("brand", "==", "apple")).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.records[0].get("name"), Some("iphone"));
    }

    #[test]
    fn numeric_greater_than() {
        let result = apply(phones(), &spec("price", ">", "500")).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.records[0].get("price"), Some("999"));
        assert_eq!(result.records[1].get("price"), Some("1199"));
    }

    #[test]
    fn numeric_less_than() {
        let result = apply(phones(), &spec("price", "<", "500")).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.records[0].get("name"), Some("redmi"));
    }

    #[test]
    fn numeric_equality_matches_across_representations() {
        // "999" and "999.0" compare as numbers, not as strings.
        let result = apply(phones(), &spec("price", "==", "999.0")).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.records[0].get("name"), Some("iphone"));
    }

    #[test]
    fn ordering_on_text_matches_nothing() {
        let result = apply(phones(), &spec("brand", ">", "apple")).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn unrecognised_operator_matches_nothing() {
        let result = apply(phones(), &spec("price", ">=", "0")).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn match_all_filter_round_trips() {
        let original = phones();
        let result = apply(original.clone(), &spec("price", ">", "0")).unwrap();
        assert_eq!(result, original);
    }

    #[test]
    fn missing_column_is_fatal() {
        let err = apply(phones(), &spec("color", "==", "red")).unwrap_err();
        let missing = err.downcast_ref::<MissingColumnError>().unwrap();
        assert_eq!(missing.0, "color");
    }

    #[test]
    fn parse_accepts_three_fields() {
        let spec = FilterSpec::parse("price,>,100").unwrap();
        assert_eq!(spec.column, "price");
        assert_eq!(spec.compare_op(), Some(CompareOp::Gt));
        assert_eq!(spec.value, "100");
    }

    #[test]
    fn parse_rejects_wrong_arity() {
        for raw in ["price,>", "price,>,100,extra", "price"] {
            let err = FilterSpec::parse(raw).unwrap_err();
            assert!(err.downcast_ref::<ConfigFormatError>().is_some(), "{raw}");
        }
    }
}
