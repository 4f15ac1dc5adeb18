//! Loads a delimited text file with a header row into a [`Table`].

use crate::error::HealthPrepError;
use crate::table::{Column, Table, Value};
use log::error;
use std::path::Path;

/// Loads a delimited file into a table.
///
/// The missing-file case is the one hard failure of the pipeline and is
/// returned as [`HealthPrepError::FileNotFound`]. Any other read or parse
/// failure is reported on the diagnostic channel and degrades to an empty
/// table so that a multi-stage pipeline can continue.
pub fn load(path: impl AsRef<Path>) -> Result<Table, HealthPrepError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(HealthPrepError::FileNotFound(path.to_path_buf()));
    }
    match read_delimited(path) {
        Ok(table) => Ok(table),
        Err(cause) => {
            error!("Error reading file {}: {}", path.display(), cause);
            Ok(Table::new())
        }
    }
}

/// Parses the file into columns of [`Value`]s, inferring numeric vs textual
/// per column from the literal cell text.
fn read_delimited(path: &Path) -> Result<Table, HealthPrepError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();
    let mut cells: Vec<Vec<Value>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record?;
        for (index, column) in cells.iter_mut().enumerate() {
            column.push(Value::parse(record.get(index).unwrap_or("")));
        }
    }
    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, values)| Column::new(name, values))
        .collect();
    Ok(Table::from_columns(columns))
}
