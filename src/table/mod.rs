//! In-memory tabular data model: ordered named columns of equal length,
//! rows addressed by position.

pub mod column;
pub mod value;

pub use column::{Column, ColumnType};
pub use value::Value;

/// An in-memory table: an ordered sequence of named columns, each holding one
/// value per row. All columns have the same length and unique names.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Creates an empty table with zero rows and zero columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table from columns. Columns must be equal in length and
    /// uniquely named; both are upheld by the loader and the transformations.
    pub fn from_columns(columns: Vec<Column>) -> Self {
        debug_assert!(
            columns.windows(2).all(|pair| pair[0].values.len() == pair[1].values.len()),
            "columns must have equal length"
        );
        Self { columns }
    }

    /// Returns true when the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.columns.first().map(|column| column.values.len()).unwrap_or(0)
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Columns in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Returns true if a column with the given name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Column names in declaration order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }

    /// Builds a new table holding the given rows (by 0-based index, in the
    /// given order) with the full column set.
    pub(crate) fn select_rows(&self, rows: &[usize]) -> Self {
        let columns = self
            .columns
            .iter()
            .map(|column| {
                let values = rows.iter().map(|&row| column.values[row].clone()).collect();
                Column::new(column.name.clone(), values)
            })
            .collect();
        Self::from_columns(columns)
    }

    /// Returns the value at (row, column name), if both exist.
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        self.column(column)?.values.get(row)
    }
}
