//! The read-only gate for analysis-mode agents.
//!
//! `ReadonlyGate` implements `DecisionEngine` from lookout-core.
//!
//! Decision table, dispatched on `ToolKind`:
//!
//! 1. `Edit`     → always `Deny`.
//! 2. `Write`    → resolve `file_path` (symlinks, `.`, `..`); `Allow` only if
//!    the resolved path has a segment equal to the sentinel, else `Deny`
//!    naming the path as the agent wrote it.
//! 3. `Shell`    → `Deny` quoting the first blocked token in `command`,
//!    else `Allow`.
//! 4. `Delegate`, `Other` → `Allow`.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use lookout_contracts::{
    request::{ActionRequest, ToolKind},
    verdict::Verdict,
};
use lookout_core::traits::DecisionEngine;

use crate::{
    path::{contains_segment, resolve_path, resolve_path_from},
    pattern::BlockPattern,
};

/// The directory name Write is confined to unless configured otherwise.
pub const DEFAULT_SENTINEL: &str = ".analysis";

/// A `DecisionEngine` that keeps an agent from mutating the repository.
///
/// ```rust,ignore
/// use lookout_policy::ReadonlyGate;
///
/// let gate = ReadonlyGate::default();
/// let verdict = gate.decide(&request);
/// ```
#[derive(Debug, Clone)]
pub struct ReadonlyGate {
    sentinel: String,
    /// Base for relative Write targets. `None` means the process working
    /// directory, looked up per decision.
    base_dir: Option<PathBuf>,
}

impl Default for ReadonlyGate {
    fn default() -> Self {
        Self::new(DEFAULT_SENTINEL)
    }
}

impl ReadonlyGate {
    /// Build a gate that confines Write to directories named `sentinel`.
    pub fn new(sentinel: impl Into<String>) -> Self {
        Self {
            sentinel: sentinel.into(),
            base_dir: None,
        }
    }

    /// Resolve relative Write targets against `dir` instead of the process
    /// working directory.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    fn resolve(&self, raw: &str) -> PathBuf {
        match &self.base_dir {
            Some(dir) => resolve_path_from(dir, raw),
            None => resolve_path(raw),
        }
    }

    fn decide_edit(&self, tool_name: &str) -> Verdict {
        Verdict::deny(format!(
            "{} is not permitted during analysis; all output goes to {}/ via Write.",
            tool_name, self.sentinel
        ))
    }

    fn decide_write(&self, raw_path: &str) -> Verdict {
        let resolved = self.resolve(raw_path);
        if self.is_inside_sentinel(&resolved) {
            debug!(path = %raw_path, resolved = %resolved.display(), "write inside sentinel directory");
            return Verdict::Allow;
        }

        Verdict::deny(format!(
            "Write blocked: path '{}' is outside {}/. Analysis agents must not modify repository files.",
            raw_path, self.sentinel
        ))
    }

    fn decide_shell(&self, command: &str) -> Verdict {
        match BlockPattern::shared().find(command) {
            Some(token) => Verdict::deny(format!(
                "Bash blocked: '{}' is a mutating operation. Analysis agents must not alter the repository.",
                token
            )),
            None => Verdict::Allow,
        }
    }

    fn is_inside_sentinel(&self, resolved: &Path) -> bool {
        contains_segment(resolved, &self.sentinel)
    }
}

impl DecisionEngine for ReadonlyGate {
    /// Classify `request`. Every request gets exactly one verdict; nothing
    /// about the arguments can make this fail.
    fn decide(&self, request: &ActionRequest) -> Verdict {
        let kind = request.kind();
        let verdict = match kind {
            ToolKind::Edit => self.decide_edit(&request.tool_name),
            ToolKind::Write => self.decide_write(request.input_str("file_path")),
            ToolKind::Shell => self.decide_shell(request.input_str("command")),
            ToolKind::Delegate | ToolKind::Other => Verdict::Allow,
        };

        match &verdict {
            Verdict::Allow => debug!(tool_name = %request.tool_name, ?kind, "allowed"),
            Verdict::Deny { reason } => {
                info!(tool_name = %request.tool_name, ?kind, reason = %reason, "denied")
            }
        }

        verdict
    }
}
