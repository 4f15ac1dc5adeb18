//! Command-line orchestration: wires the pipeline stages in sequence.

use anyhow::{Context, Result};
use clap::Parser;
use health_prep::{activity, analysis, cleaner, loader, store, ActivityLog, Value};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "health-prep", version, about = "Prepare a health-statistics dataset: load, clean, analyze, persist")]
struct Args {
    /// Path to the delimited input file (header row expected)
    input: PathBuf,

    /// Database file to persist the cleaned table to
    #[arg(long, default_value = "health.duckdb")]
    db: String,

    /// Table name inside the database
    #[arg(long, default_value = store::DEFAULT_TABLE_NAME)]
    table: String,

    /// Keep only rows where COLUMN equals VALUE (case-insensitive for text)
    #[arg(long, value_name = "COLUMN=VALUE")]
    filter: Option<String>,

    /// Print summary statistics for a numeric column
    #[arg(long, value_name = "COLUMN")]
    stats: Option<String>,

    /// Activity log path
    #[arg(long, default_value = activity::DEFAULT_LOG_PATH)]
    log: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    let log = ActivityLog::setup(&args.log)?;
    let input = args.input.display().to_string();

    let table = loader::load(&args.input)?;
    log.record("LOAD", &input, Some(&format!("{} rows", table.row_count())));

    let table = cleaner::clean(&table);
    log.record("CLEAN", &input, Some(&format!("{} columns", table.column_count())));

    let table = match &args.filter {
        Some(expression) => {
            let (column, needle) = expression
                .split_once('=')
                .context("--filter expects COLUMN=VALUE")?;
            let filtered = analysis::filter(&table, column, &Value::parse(needle));
            log.record(
                "FILTER",
                column,
                Some(&format!("{} rows match '{}'", filtered.row_count(), needle)),
            );
            filtered
        }
        None => table,
    };

    if let Some(column) = &args.stats {
        match analysis::stats(&table, column) {
            Some(stats) => println!(
                "{}: mean={} min={} max={} count={}",
                column, stats.mean, stats.min, stats.max, stats.count
            ),
            None => println!("{}: no stats available", column),
        }
        log.record("STATS", column, None);
    }

    store::save(&table, &args.db, &args.table);
    log.record("SAVE", &args.db, Some(&args.table));
    Ok(())
}
