//! Normalizes column names and fills missing values.

use crate::table::{Column, Table, Value};
use regex::Regex;

/// Text used to fill missing cells that the numeric pass left behind.
const UNKNOWN: &str = "Unknown";

/// Cleans a table without mutating the input.
///
/// 1. Column names lose every bracketed annotation (e.g. `[Note 3]`) and any
///    surrounding whitespace.
/// 2. Numeric columns have missing values filled with the column mean,
///    computed once before filling; an entirely missing column is filled
///    with `0`.
/// 3. A catch-all pass fills any still-missing cell with `"Unknown"`.
///
/// The result never contains a missing value, and cleaning an already clean
/// table is a no-op.
pub fn clean(table: &Table) -> Table {
    if table.is_empty() {
        return table.clone();
    }
    let pattern = Regex::new(r"\s*\[.*?\]\s*").expect("Hardcode regex pattern");
    let columns = table
        .columns()
        .iter()
        .map(|column| {
            let name = pattern.replace_all(column.name(), "").trim().to_owned();
            Column::new(name, fill_missing(column))
        })
        .collect();
    Table::from_columns(columns)
}

/// Fills missing values for one column: mean (or `0`) for numeric columns,
/// then `"Unknown"` for whatever is still missing. The numeric pass must run
/// first because the catch-all only acts on still-missing cells.
fn fill_missing(column: &Column) -> Vec<Value> {
    let mut values = column.values().to_vec();
    if column.kind().is_numeric() {
        let fill = column.mean().unwrap_or(0.0);
        for value in values.iter_mut() {
            if value.is_missing() {
                *value = Value::Number(fill);
            }
        }
    }
    for value in values.iter_mut() {
        if value.is_missing() {
            *value = Value::Text(UNKNOWN.to_owned());
        }
    }
    values
}
