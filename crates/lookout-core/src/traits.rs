//! Core trait definitions for the lookout hooks.
//!
//! - `DecisionEngine`: the gate consulted before a tool runs
//! - `EventSink`: the append-only destination for lifecycle entries
//!
//! The hook binaries wire concrete implementations to the protocol layer;
//! tests substitute their own.

use lookout_contracts::{
    error::LookoutResult,
    event::LogEntry,
    request::ActionRequest,
    verdict::Verdict,
};

/// Classifies one intercepted action as allowed or denied.
///
/// Implementations must produce exactly one verdict per request and must not
/// fail: a request the engine cannot make sense of is a policy question
/// (usually answered with `Allow`), not an error.
pub trait DecisionEngine {
    fn decide(&self, request: &ActionRequest) -> Verdict;
}

/// An append-only destination for `LogEntry` records.
pub trait EventSink {
    /// Append one entry.
    ///
    /// Implementations must write the entry as a single whole record with no
    /// read-modify-write step, and must never modify or remove earlier
    /// entries.
    fn append(&self, entry: &LogEntry) -> LookoutResult<()>;
}
