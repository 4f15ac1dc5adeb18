use crate::table::value::Value;

/// Supported column data types: the pipeline distinguishes numeric from
/// textual columns and nothing finer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ColumnType {
    /// Double-precision floating point numbers
    Double,
    /// Variable-length strings
    Varchar,
}

impl ColumnType {
    /// Returns the string representation of the column type for DuckDB.
    pub(crate) const fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Double => "double",
            ColumnType::Varchar => "varchar",
        }
    }

    /// Detects the column type from its values.
    /// A column is numeric unless it holds at least one textual value; in
    /// particular an entirely missing column is treated as numeric, matching
    /// the behavior of columnar engines that default empty columns to floats.
    pub(crate) fn detect(values: &[Value]) -> Self {
        if values.iter().any(|value| matches!(value, Value::Text(_))) {
            ColumnType::Varchar
        } else {
            ColumnType::Double
        }
    }

    /// Returns true if this column type represents numeric values.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Double)
    }
}

/// A named column with its values and inferred type.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    /// Column name (from the header row)
    pub(crate) name: String,
    /// Column data type, inferred from the values at construction
    pub(crate) kind: ColumnType,
    /// One value per row
    pub(crate) values: Vec<Value>,
}

impl Column {
    /// Creates a column, inferring its type from the values.
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        let kind = ColumnType::detect(&values);
        Self {
            name: name.into(),
            kind,
            values,
        }
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inferred column type.
    pub fn kind(&self) -> ColumnType {
        self.kind
    }

    /// Values in row order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Mean of the non-missing numeric values, or `None` when there are none.
    pub(crate) fn mean(&self) -> Option<f64> {
        let mut sum = 0.0;
        let mut count = 0usize;
        for value in self.values.iter().filter_map(Value::as_number) {
            sum += value;
            count += 1;
        }
        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_numeric() {
        let values = vec![Value::Number(1.0), Value::Missing, Value::Number(2.0)];
        assert_eq!(ColumnType::detect(&values), ColumnType::Double);
    }

    #[test]
    fn detect_textual() {
        let values = vec![Value::Number(1.0), Value::Text("x".to_owned())];
        assert_eq!(ColumnType::detect(&values), ColumnType::Varchar);
    }

    #[test]
    fn detect_all_missing_is_numeric() {
        let values = vec![Value::Missing, Value::Missing];
        assert_eq!(ColumnType::detect(&values), ColumnType::Double);
    }

    #[test]
    fn mean_skips_missing() {
        let column = Column::new("2021", vec![Value::Number(100.0), Value::Missing, Value::Number(200.0)]);
        assert_eq!(column.mean(), Some(150.0));
    }

    #[test]
    fn mean_of_all_missing_is_undefined() {
        let column = Column::new("2021", vec![Value::Missing, Value::Missing]);
        assert_eq!(column.mean(), None);
    }
}
