//! # lookout-audit
//!
//! Append-only lifecycle log for delegated sub-agents.
//!
//! ## Overview
//!
//! [`EventRecorder`] turns a delegate (`Task`) request into a [`LogEntry`]
//! and appends it to an [`EventSink`]. The production sink is
//! [`JsonlEventLog`], one JSON object per line at
//! `.analysis/debug/agent-log.jsonl`. Entries are never rewritten, rotated,
//! or deduplicated; timestamps, not file order, give event order across
//! concurrent processes.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lookout_audit::{EventRecorder, JsonlEventLog};
//!
//! let log = JsonlEventLog::default();
//! let verdict = EventRecorder::new(&log).record(Phase::Start, request.as_ref());
//! ```
//!
//! [`LogEntry`]: lookout_contracts::event::LogEntry
//! [`EventSink`]: lookout_core::traits::EventSink

pub mod jsonl;
pub mod memory;
pub mod recorder;

pub use jsonl::{JsonlEventLog, DEFAULT_LOG_DIR, DEFAULT_LOG_FILE};
pub use memory::InMemoryEventSink;
pub use recorder::EventRecorder;

// ── Tests ─────────────────────────────────────────────────────────────────────
