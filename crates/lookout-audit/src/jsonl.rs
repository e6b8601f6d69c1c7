//! File-backed `EventSink` writing newline-delimited JSON.
//!
//! Several hook processes may append to the same file at once. Each entry
//! is serialized up front and handed to a single `write_all` on a file
//! opened in append mode, so the OS serializes whole records and nothing is
//! ever read back or truncated.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use lookout_contracts::{
    error::{LookoutError, LookoutResult},
    event::LogEntry,
};
use lookout_core::traits::EventSink;

/// Default audit directory, relative to the hook's working directory.
pub const DEFAULT_LOG_DIR: &str = ".analysis/debug";

/// Default log file name inside the audit directory.
pub const DEFAULT_LOG_FILE: &str = "agent-log.jsonl";

/// An append-only JSONL log at `dir/file`.
///
/// The directory is created on first append; creating it concurrently from
/// several processes is harmless.
#[derive(Debug, Clone)]
pub struct JsonlEventLog {
    dir: PathBuf,
    path: PathBuf,
}

impl Default for JsonlEventLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_DIR, DEFAULT_LOG_FILE)
    }
}

impl JsonlEventLog {
    pub fn new(dir: impl Into<PathBuf>, file_name: &str) -> Self {
        let dir = dir.into();
        let path = dir.join(file_name);
        Self { dir, path }
    }

    /// Full path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventSink for JsonlEventLog {
    fn append(&self, entry: &LogEntry) -> LookoutResult<()> {
        let mut line = serde_json::to_vec(entry).map_err(|e| LookoutError::AuditWriteFailed {
            reason: format!("failed to serialize log entry: {}", e),
        })?;
        line.push(b'\n');

        std::fs::create_dir_all(&self.dir).map_err(|e| LookoutError::AuditWriteFailed {
            reason: format!("failed to create audit directory '{}': {}", self.dir.display(), e),
        })?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LookoutError::AuditWriteFailed {
                reason: format!("failed to open '{}': {}", self.path.display(), e),
            })?;

        file.write_all(&line).map_err(|e| LookoutError::AuditWriteFailed {
            reason: format!("failed to append to '{}': {}", self.path.display(), e),
        })?;

        info!(
            path = %self.path.display(),
            event = %entry.event,
            tool_use_id = %entry.tool_use_id,
            agent = %entry.agent,
            "log entry appended"
        );

        Ok(())
    }
}
