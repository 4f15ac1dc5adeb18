use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the health-prep pipeline.
/// Aggregates errors from the standard library, dependencies, and internal modules.
#[derive(Error, Debug)]
pub enum HealthPrepError {
    /// The only hard failure in the pipeline: the loader's input file is absent.
    /// Every other failure mode degrades to an empty or absent result.
    #[error("The file {} was not found", .0.display())]
    FileNotFound(PathBuf),

    // Standard library errors
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    // Third-party library errors
    #[error("{0}")]
    CsvError(#[from] csv::Error),

    #[error("{0}")]
    DuckDBError(#[from] duckdb::Error),

    // Store module errors
    #[error("Cannot persist a table with no columns")]
    EmptyTableError,
}
