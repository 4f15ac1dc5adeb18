//! Persists and retrieves tables through an embedded DuckDB database.
//!
//! Each call opens its own connection and releases it on every exit path by
//! letting the connection drop at scope end. Save and fetch failures degrade
//! to a diagnostic plus an empty or absent result, never a caller error.

use crate::error::HealthPrepError;
use crate::table::{Column, Table, Value};
use duckdb::types::Value as SqlValue;
use duckdb::{params, params_from_iter, Connection};
use log::{error, info, warn};

/// Default table name for the persisted dataset.
pub const DEFAULT_TABLE_NAME: &str = "health_data";

/// Database identifier denoting a transient in-memory store.
pub const IN_MEMORY: &str = ":memory:";

/// Writes `table` under `table_name`, fully replacing any prior body of that
/// name (schema and data both). On failure the error is reported on the
/// diagnostic channel and the call returns normally.
pub fn save(table: &Table, db_path: &str, table_name: &str) {
    match write_table(table, db_path, table_name) {
        Ok(()) => info!("Data successfully saved to {} in {}", table_name, db_path),
        Err(cause) => error!("Error saving to database: {}", cause),
    }
}

/// Reads the full contents of `table_name` back as a table, or `None` with a
/// diagnostic when the table does not exist or the store cannot be reached.
/// Column types are re-inferred from the fetched values, so integers round-trip
/// as floats and missing cells come back from store-native nulls.
pub fn fetch(db_path: &str, table_name: &str) -> Option<Table> {
    match read_table(db_path, table_name) {
        Ok(Some(table)) => Some(table),
        Ok(None) => {
            warn!("Table '{}' does not exist in database.", table_name);
            None
        }
        Err(cause) => {
            error!("Error loading from database: {}", cause);
            None
        }
    }
}

/// Opens a scoped connection; `:memory:` denotes a transient database.
fn open_connection(db_path: &str) -> Result<Connection, HealthPrepError> {
    if db_path == IN_MEMORY {
        Ok(Connection::open_in_memory()?)
    } else {
        Ok(Connection::open(db_path)?)
    }
}

/// Quotes an identifier for use in SQL, doubling embedded quotes.
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn write_table(table: &Table, db_path: &str, table_name: &str) -> Result<(), HealthPrepError> {
    if table.column_count() == 0 {
        return Err(HealthPrepError::EmptyTableError);
    }
    let connection = open_connection(db_path)?;
    let schema = table
        .columns()
        .iter()
        .map(|column| format!("{} {}", quote_identifier(column.name()), column.kind().as_str()))
        .collect::<Vec<_>>()
        .join(", ");
    connection.execute_batch(&format!(
        "CREATE OR REPLACE TABLE {} ({});",
        quote_identifier(table_name),
        schema
    ))?;

    if table.row_count() > 0 {
        let placeholders = vec!["?"; table.column_count()].join(", ");
        let mut statement = connection.prepare(&format!(
            "INSERT INTO {} VALUES ({})",
            quote_identifier(table_name),
            placeholders
        ))?;
        for row in 0..table.row_count() {
            let record = table
                .columns()
                .iter()
                .map(|column| to_sql_value(&column.values()[row]));
            statement.execute(params_from_iter(record))?;
        }
    }
    Ok(())
}

fn read_table(db_path: &str, table_name: &str) -> Result<Option<Table>, HealthPrepError> {
    let connection = open_connection(db_path)?;

    // Check if the table exists first
    let names: Result<Vec<String>, duckdb::Error> = connection
        .prepare(
            "SELECT column_name FROM information_schema.columns \
             WHERE table_name = ? ORDER BY ordinal_position",
        )?
        .query_map(params![table_name], |row| row.get(0))?
        .collect();
    let names = names?;
    if names.is_empty() {
        return Ok(None);
    }

    let mut cells: Vec<Vec<Value>> = vec![Vec::new(); names.len()];
    let mut statement =
        connection.prepare(&format!("SELECT * FROM {}", quote_identifier(table_name)))?;
    let mut rows = statement.query([])?;
    while let Some(row) = rows.next()? {
        for (index, column) in cells.iter_mut().enumerate() {
            column.push(from_sql_value(row.get::<_, SqlValue>(index)?));
        }
    }
    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, values)| Column::new(name, values))
        .collect();
    Ok(Some(Table::from_columns(columns)))
}

/// Maps a cell to its DuckDB parameter value; missing cells become NULL.
fn to_sql_value(value: &Value) -> SqlValue {
    match value {
        Value::Number(number) => SqlValue::Double(*number),
        Value::Text(text) => SqlValue::Text(text.clone()),
        Value::Missing => SqlValue::Null,
    }
}

/// Maps a fetched DuckDB value back to a cell. Integer widths collapse to
/// doubles and NULL comes back as missing; anything exotic degrades to text.
fn from_sql_value(value: SqlValue) -> Value {
    match value {
        SqlValue::Null => Value::Missing,
        SqlValue::Double(number) => Value::Number(number),
        SqlValue::Float(number) => Value::Number(f64::from(number)),
        SqlValue::Int(number) => Value::Number(f64::from(number)),
        SqlValue::BigInt(number) => Value::Number(number as f64),
        SqlValue::Text(text) => Value::Text(text),
        other => Value::Text(format!("{:?}", other)),
    }
}
