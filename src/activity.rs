//! Append-only activity log: one timestamped line per recorded operation.

use crate::error::HealthPrepError;
use chrono::Local;
use log::warn;
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

/// Default activity log path.
pub const DEFAULT_LOG_PATH: &str = "logs/activity.log";

/// Process-wide registry of configured logs, keyed by path. Repeated setup
/// against the same path must hand back the same sink rather than attach a
/// second one.
static REGISTRY: OnceLock<Mutex<HashMap<PathBuf, ActivityLog>>> = OnceLock::new();

/// Handle to an activity log file. Clones share the same underlying sink.
#[derive(Clone)]
pub struct ActivityLog {
    sink: Arc<Mutex<File>>,
}

impl ActivityLog {
    /// Opens (or reuses) the activity log at `path`, creating parent
    /// directories as needed. Idempotent: a second setup against the same
    /// path returns a handle to the already configured sink.
    pub fn setup(path: impl AsRef<Path>) -> Result<Self, HealthPrepError> {
        let path = path.as_ref();
        let registry = REGISTRY.get_or_init(|| Mutex::new(HashMap::new()));
        let mut registry = registry.lock().expect("Activity log registry lock");
        if let Some(existing) = registry.get(path) {
            return Ok(existing.clone());
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let log = ActivityLog {
            sink: Arc::new(Mutex::new(file)),
        };
        registry.insert(path.to_path_buf(), log.clone());
        Ok(log)
    }

    /// Appends one record: `<timestamp> - INFO - [<TAG>] <subject>[ - <detail>]`.
    /// Write failures never reach the caller; they degrade to a diagnostic.
    pub fn record(&self, operation: &str, subject: &str, detail: Option<&str>) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut sink = self.sink.lock().expect("Activity log sink lock");
        let outcome = match detail {
            Some(detail) => writeln!(sink, "{} - INFO - [{}] {} - {}", timestamp, operation, subject, detail),
            None => writeln!(sink, "{} - INFO - [{}] {}", timestamp, operation, subject),
        };
        if let Err(cause) = outcome.and_then(|_| sink.flush()) {
            warn!("Error writing activity log: {}", cause);
        }
    }
}
