//! The agent lifecycle recorder behind the `log-agents` hook.
//!
//! `record` never blocks the host's call: whatever happens while building
//! or appending an entry, the `Start` phase answers `Allow` and the `Stop`
//! phase answers nothing.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use lookout_contracts::{
    event::{LogEntry, Phase},
    request::{ActionRequest, ToolKind},
    verdict::Verdict,
};
use lookout_core::traits::EventSink;

/// Records delegate sub-task events into an `EventSink`.
pub struct EventRecorder<'a> {
    sink: &'a dyn EventSink,
}

impl<'a> EventRecorder<'a> {
    pub fn new(sink: &'a dyn EventSink) -> Self {
        Self { sink }
    }

    /// Record `request` for `phase`, stamped with the current UTC time.
    ///
    /// `request` is `None` when standard input was malformed; that case,
    /// like any non-delegate tool, writes no entry.
    pub fn record(&self, phase: Phase, request: Option<&ActionRequest>) -> Option<Verdict> {
        self.record_at(phase, request, Utc::now())
    }

    /// As [`record`](Self::record), with an explicit timestamp.
    pub fn record_at(
        &self,
        phase: Phase,
        request: Option<&ActionRequest>,
        timestamp: DateTime<Utc>,
    ) -> Option<Verdict> {
        match request {
            Some(request) if request.kind() == ToolKind::Delegate => {
                let entry = LogEntry::from_request(phase, request, timestamp);
                if let Err(e) = self.sink.append(&entry) {
                    warn!(
                        error = %e,
                        phase = %phase,
                        tool_use_id = %request.tool_use_id,
                        "failed to record lifecycle event; continuing"
                    );
                }
            }
            Some(request) => {
                debug!(tool_name = %request.tool_name, phase = %phase, "not a delegate call; skipping");
            }
            None => {
                debug!(phase = %phase, "no parsable request; skipping");
            }
        }

        match phase {
            Phase::Start => Some(Verdict::Allow),
            Phase::Stop => None,
        }
    }
}
