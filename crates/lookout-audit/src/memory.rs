//! In-memory implementation of `EventSink`.
//!
//! `InMemoryEventSink` keeps appended entries in a `Vec` behind a `Mutex`.
//! It is what the recorder tests run against, and it is handy for hosts
//! that want to inspect entries without touching the filesystem.

use std::sync::{Arc, Mutex};

use lookout_contracts::{
    error::{LookoutError, LookoutResult},
    event::LogEntry,
};
use lookout_core::traits::EventSink;

/// An append-only, in-memory event sink. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventSink {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl InMemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of every entry appended so far, in append order.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for InMemoryEventSink {
    fn append(&self, entry: &LogEntry) -> LookoutResult<()> {
        let mut entries = self.entries.lock().map_err(|e| LookoutError::AuditWriteFailed {
            reason: format!("event sink lock poisoned: {}", e),
        })?;
        entries.push(entry.clone());
        Ok(())
    }
}
