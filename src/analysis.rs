//! Row filtering by column equality and summary statistics on numeric columns.

use crate::table::{Table, Value};
use log::warn;

/// Summary statistics over one column's non-missing numeric values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stats {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Number of values that contributed, not the table's row count.
    pub count: usize,
}

/// Keeps the rows where `column` equals `needle`.
///
/// Textual needles match case-insensitively against each cell's string
/// rendering; numeric needles match by exact equality with no coercion. The
/// result preserves original row order and the full column set. An empty
/// input, or a column absent from the table, yields an empty table; the
/// absent column is reported as a diagnostic warning, not an error.
pub fn filter(table: &Table, column: &str, needle: &Value) -> Table {
    if table.is_empty() {
        return Table::new();
    }
    let Some(target) = table.column(column) else {
        warn!("Column {} not found.", column);
        return Table::new();
    };
    let rows: Vec<usize> = match needle {
        Value::Text(text) => {
            let needle = text.to_lowercase();
            target
                .values()
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.to_string().to_lowercase() == needle)
                .map(|(row, _)| row)
                .collect()
        }
        exact => target
            .values()
            .iter()
            .enumerate()
            .filter(|(_, cell)| *cell == exact)
            .map(|(row, _)| row)
            .collect(),
    };
    table.select_rows(&rows)
}

/// Computes mean/min/max/count over a column's non-missing numeric values.
///
/// Returns `None` when the table is empty, the column is absent, or the
/// column holds no numeric values (a textual or entirely missing column).
/// Any condition under which the reduction is undefined degrades to "no
/// result" rather than an error.
pub fn stats(table: &Table, column: &str) -> Option<Stats> {
    if table.is_empty() {
        return None;
    }
    let column = table.column(column)?;
    let mut values = column.values().iter().filter_map(Value::as_number);
    let first = values.next()?;
    let (mut sum, mut min, mut max, mut count) = (first, first, first, 1usize);
    for value in values {
        sum += value;
        min = min.min(value);
        max = max.max(value);
        count += 1;
    }
    Some(Stats {
        mean: sum / count as f64,
        min,
        max,
        count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    fn text(value: &str) -> Value {
        Value::Text(value.to_owned())
    }

    fn areas() -> Table {
        Table::from_columns(vec![
            Column::new("Area Name", vec![text("North"), text("South"), text("East")]),
            Column::new("Area Type", vec![text("Region"), text("Region"), text("LTLA")]),
            Column::new("2021", vec![
                Value::Number(100.0),
                Value::Number(150.0),
                Value::Number(50.0),
            ]),
            Column::new("2020", vec![
                Value::Number(90.0),
                Value::Number(140.0),
                Value::Number(40.0),
            ]),
        ])
    }

    #[test]
    fn filter_by_type() {
        let result = filter(&areas(), "Area Type", &text("Region"));
        assert_eq!(result.row_count(), 2);
        assert!(result
            .column("Area Type")
            .expect("column")
            .values()
            .iter()
            .all(|value| value == &text("Region")));
    }

    #[test]
    fn filter_is_case_insensitive() {
        for needle in ["region", "REGION", "rEgIoN"] {
            let result = filter(&areas(), "Area Type", &text(needle));
            assert_eq!(result.row_count(), 2, "needle {:?}", needle);
        }
    }

    #[test]
    fn filter_preserves_order_and_structure() {
        let table = areas();
        let result = filter(&table, "Area Type", &text("Region"));
        assert_eq!(result.column_names(), table.column_names());
        assert_eq!(result.value(0, "Area Name"), Some(&text("North")));
        assert_eq!(result.value(1, "Area Name"), Some(&text("South")));
    }

    #[test]
    fn filter_numeric_is_exact() {
        let result = filter(&areas(), "2021", &Value::Number(150.0));
        assert_eq!(result.row_count(), 1);
        assert_eq!(result.value(0, "Area Name"), Some(&text("South")));

        let none = filter(&areas(), "2021", &Value::Number(150.0001));
        assert_eq!(none.row_count(), 0);
    }

    #[test]
    fn filter_no_matches_keeps_column_set() {
        let table = areas();
        let result = filter(&table, "Area Type", &text("NonExistent"));
        assert_eq!(result.row_count(), 0);
        assert_eq!(result.column_count(), 4);
        assert_eq!(result.column_names(), table.column_names());
    }

    #[test]
    fn filter_empty_table() {
        let result = filter(&Table::new(), "Area Type", &text("Region"));
        assert!(result.is_empty());
        assert_eq!(result.column_count(), 0);
    }

    #[test]
    fn filter_absent_column() {
        let result = filter(&areas(), "FakeColumn", &text("Test"));
        assert!(result.is_empty());
        assert_eq!(result.column_count(), 0);
    }

    #[test]
    fn filter_mixed_case_cells() {
        let table = Table::from_columns(vec![Column::new("Area Name", vec![
            text("London"),
            text("LONDON"),
            text("london"),
            text("LoNdOn"),
            text("Manchester"),
        ])]);
        let result = filter(&table, "Area Name", &text("london"));
        assert_eq!(result.row_count(), 4);
    }

    #[test]
    fn stats_over_column() {
        let result = stats(&areas(), "2021").expect("stats");
        assert_eq!(result.mean, 100.0);
        assert_eq!(result.min, 50.0);
        assert_eq!(result.max, 150.0);
        assert_eq!(result.count, 3);
    }

    #[test]
    fn stats_absent_column() {
        assert_eq!(stats(&areas(), "GhostYear"), None);
    }

    #[test]
    fn stats_empty_table() {
        assert_eq!(stats(&Table::new(), "2021"), None);
    }

    #[test]
    fn stats_textual_column_has_no_result() {
        assert_eq!(stats(&areas(), "Area Type"), None);
    }

    #[test]
    fn stats_skip_missing_values() {
        let table = Table::from_columns(vec![Column::new("2021", vec![
            Value::Number(100.0),
            Value::Missing,
            Value::Number(200.0),
        ])]);
        let result = stats(&table, "2021").expect("stats");
        assert_eq!(result.mean, 150.0);
        assert_eq!(result.count, 2);
    }

    #[test]
    fn stats_single_row() {
        let table = Table::from_columns(vec![Column::new("2021", vec![Value::Number(100.0)])]);
        let result = stats(&table, "2021").expect("stats");
        assert_eq!((result.mean, result.min, result.max, result.count), (100.0, 100.0, 100.0, 1));
    }

    #[test]
    fn stats_negative_numbers() {
        let table = Table::from_columns(vec![Column::new("2021", vec![
            Value::Number(-50.0),
            Value::Number(0.0),
            Value::Number(50.0),
        ])]);
        let result = stats(&table, "2021").expect("stats");
        assert_eq!((result.mean, result.min, result.max), (0.0, -50.0, 50.0));
    }

    #[test]
    fn stats_invariant_to_row_order() {
        let table = areas();
        let reversed = table.select_rows(&[2, 1, 0]);
        assert_eq!(stats(&table, "2021"), stats(&reversed, "2021"));
    }

    #[test]
    fn filter_then_stats() {
        let filtered = filter(&areas(), "Area Type", &text("region"));
        let result = stats(&filtered, "2021").expect("stats");
        assert_eq!(result.mean, 125.0);
        assert_eq!(result.min, 100.0);
        assert_eq!(result.max, 150.0);
        assert_eq!(result.count, 2);
    }

    #[test]
    fn stats_on_empty_filtered_set_is_none() {
        let filtered = filter(&areas(), "Area Type", &text("NonExistent"));
        assert_eq!(stats(&filtered, "2021"), None);
    }
}
