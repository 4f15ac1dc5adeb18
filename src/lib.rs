//! # Health Prep
//!
//! A small data-preparation pipeline for health-statistics datasets. It loads
//! a delimited file into an in-memory table, normalizes column names and
//! missing values, supports equality filtering and summary statistics on
//! numeric columns, and persists the table through an embedded DuckDB store.
//! An activity log records each operation.
//!
//! ## Pipeline
//!
//! [`loader::load`] reads a file into a raw table and [`cleaner::clean`]
//! produces the clean table. The clean table feeds [`analysis::filter`] and
//! [`analysis::stats`] as well as [`store::save`] and [`store::fetch`].
//!
//! Every stage is a single pass over a complete in-memory table. Only the
//! loader's missing-file case interrupts a pipeline; every other failure
//! degrades to an empty or absent result plus a diagnostic on stderr, so a
//! multi-stage run keeps going.

pub mod activity;
pub mod analysis;
pub mod cleaner;
pub mod error;
pub mod loader;
pub mod store;
pub mod table;

pub use activity::ActivityLog;
pub use analysis::Stats;
pub use error::HealthPrepError;
pub use table::{Column, ColumnType, Table, Value};
