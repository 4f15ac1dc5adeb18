use std::fmt::Display;

/// Literals treated as a missing value when parsing raw cell text.
const MISSING_LITERALS: [&str; 7] = ["", "NA", "N/A", "NaN", "nan", "null", "NULL"];

/// A single cell value in a table: numeric, textual, or absent.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Numeric values, carried as double-precision floats
    Number(f64),
    /// Textual values
    Text(String),
    /// Absence marker, distinct from zero or an empty string
    Missing,
}

impl Value {
    /// Parses raw cell text into a value.
    /// Recognized missing-value literals become [`Value::Missing`]; text that
    /// parses as a float becomes [`Value::Number`]; everything else stays text.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if MISSING_LITERALS.contains(&trimmed) {
            return Self::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(number) => Self::Number(number),
            Err(_) => Self::Text(text.to_owned()),
        }
    }

    /// Returns the numeric content, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns true if this is the absence marker.
    #[inline]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{}", number),
            Self::Text(text) => write!(f, "{}", text),
            Self::Missing => Ok(()),
        }
    }
}
