use comfy_table::{presets, Table};

use crate::data::aggregate::{AggregateKind, AggregateSpec};
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Grid table rendering
// ---------------------------------------------------------------------------

/// Render the dataset as an ASCII grid table, schema columns as headers.
///
/// Pure formatter over the (possibly filtered) rows and headers; it never
/// fails.  A record lacking a column renders that cell empty.
pub fn render_table(dataset: &Dataset) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::ASCII_FULL);
    table.set_header(&dataset.columns);

    for record in &dataset.records {
        let cells: Vec<&str> = dataset
            .columns
            .iter()
            .map(|col| record.get(col).unwrap_or(""))
            .collect();
        table.add_row(cells);
    }
    table
}

// ---------------------------------------------------------------------------
// Aggregate result rendering
// ---------------------------------------------------------------------------

/// Render the aggregate outcome as a single output line.
///
/// `avg` prints with exactly two decimals; `min` / `max` use the minimal
/// float form (`199`, not `199.0`).  A `None` outcome gets the dedicated
/// cannot-perform message.
pub fn format_aggregate(spec: &AggregateSpec, result: Option<f64>) -> String {
    match result {
        Some(value) if spec.kind() == Some(AggregateKind::Avg) => {
            format!("{}({}) = {value:.2}", spec.op, spec.column)
        }
        Some(value) => format!("{}({}) = {value}", spec.op, spec.column),
        None => format!(
            "Cannot perform {} on non-numeric column '{}'",
            spec.op, spec.column
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn spec(column: &str, op: &str) -> AggregateSpec {
        AggregateSpec {
            column: column.to_string(),
            op: op.to_string(),
        }
    }

    #[test]
    fn avg_renders_two_decimals() {
        assert_eq!(
            format_aggregate(&spec("price", "avg"), Some(799.0)),
            "avg(price) = 799.00"
        );
    }

    #[test]
    fn min_and_max_render_minimal_form() {
        assert_eq!(
            format_aggregate(&spec("rating", "min"), Some(4.6)),
            "min(rating) = 4.6"
        );
        assert_eq!(
            format_aggregate(&spec("price", "max"), Some(1199.0)),
            "max(price) = 1199"
        );
    }

    #[test]
    fn no_result_renders_cannot_perform() {
        assert_eq!(
            format_aggregate(&spec("brand", "avg"), None),
            "Cannot perform avg on non-numeric column 'brand'"
        );
    }

    #[test]
    fn table_lists_headers_and_cells() {
        let columns: Vec<String> = ["name", "brand"].map(String::from).to_vec();
        let record: Record = [
            ("name".to_string(), "iphone".to_string()),
            ("brand".to_string(), "apple".to_string()),
        ]
        .into_iter()
        .collect();
        let dataset = Dataset::new(columns, vec![record]);

        let rendered = render_table(&dataset).to_string();
        assert!(rendered.contains("name"));
        assert!(rendered.contains("iphone"));
        assert!(rendered.contains("apple"));
    }

    #[test]
    fn table_renders_missing_cells_empty() {
        let columns: Vec<String> = ["a", "b"].map(String::from).to_vec();
        let record: Record = [("a".to_string(), "1".to_string())].into_iter().collect();
        let dataset = Dataset::new(columns, vec![record]);

        // Just rendering must not panic; the missing "b" cell is blank.
        let rendered = render_table(&dataset).to_string();
        assert!(rendered.contains('1'));
    }
}
