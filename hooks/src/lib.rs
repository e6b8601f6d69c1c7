//! Shared wiring for the `enforce-readonly` and `log-agents` binaries.
//!
//! Each binary parses its arguments, loads [`HooksConfig`], installs
//! logging on stderr, and hands standard input/output to [`run_gate`] or
//! [`run_logger`]. Both functions are generic over the streams so tests can
//! drive them with byte buffers.

pub mod config;

use std::ffi::OsString;
use std::io::{Read, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lookout_audit::EventRecorder;
use lookout_contracts::{error::LookoutResult, event::Phase, verdict::Verdict};
use lookout_core::{
    protocol,
    traits::{DecisionEngine, EventSink},
};

pub use config::HooksConfig;

/// Initialize structured logging on stderr. Set RUST_LOG=debug for verbose
/// output; stdout carries the hook protocol and must stay clean.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

/// Command line of `log-agents`.
///
/// Only the first positional argument matters. Anything after it is
/// accepted and ignored, and there is no `--help` or `--version`: the host
/// reads stdout, so nothing but a hook response may ever appear there.
#[derive(Debug, Parser)]
#[command(
    name = "log-agents",
    about = "Append delegated sub-agent lifecycle events to a JSONL log",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct LoggerArgs {
    /// Optional TOML configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// `start` or `stop`.
    pub phase: Option<String>,

    /// Ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<String>,
}

impl LoggerArgs {
    /// Parse `args` (program name first). `None` for an unknown or missing
    /// phase, or for arguments clap rejects.
    pub fn from_args<I, T>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Self::try_parse_from(args).ok()?;
        args.phase()?;
        Some(args)
    }

    /// The selected phase, if the first positional names one.
    pub fn phase(&self) -> Option<Phase> {
        self.phase.as_deref()?.parse().ok()
    }
}

/// Read one request, decide it, write one response.
///
/// Malformed input gets the neutral `{}` response.
pub fn run_gate<R, W>(engine: &dyn DecisionEngine, input: R, output: W) -> LookoutResult<Verdict>
where
    R: Read,
    W: Write,
{
    let verdict = match protocol::read_request(input) {
        Some(request) => engine.decide(&request),
        None => Verdict::Allow,
    };

    protocol::write_response(output, &verdict)?;
    Ok(verdict)
}

/// Read one request and record it for `phase`.
///
/// On `Start`, `{}` is written whatever happened to the log entry. On
/// `Stop`, nothing is written.
pub fn run_logger<R, W>(phase: Phase, sink: &dyn EventSink, input: R, output: W) -> LookoutResult<()>
where
    R: Read,
    W: Write,
{
    let request = protocol::read_request(input);
    let verdict = EventRecorder::new(sink).record(phase, request.as_ref());

    if let Some(verdict) = verdict {
        protocol::write_response(output, &verdict)?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use lookout_audit::{InMemoryEventSink, JsonlEventLog};
    use lookout_contracts::{error::LookoutError, event::Phase, verdict::Verdict};
    use lookout_policy::ReadonlyGate;

    use super::{run_gate, run_logger, HooksConfig, LoggerArgs};

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn gate(input: &str) -> String {
        let mut out = Vec::new();
        run_gate(&ReadonlyGate::default(), input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn deny_reason(response: &str) -> String {
        let value: Value = serde_json::from_str(response.trim_end()).unwrap();
        assert_eq!(value["hookSpecificOutput"]["hookEventName"], "PreToolUse");
        assert_eq!(value["hookSpecificOutput"]["permissionDecision"], "deny");
        value["hookSpecificOutput"]["permissionDecisionReason"]
            .as_str()
            .unwrap()
            .to_string()
    }

    fn log(phase: Phase, sink: &InMemoryEventSink, input: &str) -> String {
        let mut out = Vec::new();
        run_logger(phase, sink, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    const TASK: &str = r#"{"tool_name":"Task","tool_use_id":"toolu_9","tool_input":{"subagent_type":"arch-reviewer","description":"Review layering","model":"opus","prompt":"Check module boundaries."}}"#;

    // ── 1. gate end to end ────────────────────────────────────────────────────

    #[test]
    fn test_gate_write_inside_sentinel() {
        let out = gate(r#"{"tool_name":"Write","tool_input":{"file_path":"/repo/.analysis/out.md"}}"#);
        assert_eq!(out, "{}\n");
    }

    #[test]
    fn test_gate_write_outside_sentinel() {
        let out = gate(r#"{"tool_name":"Write","tool_input":{"file_path":"/repo/src/main.go"}}"#);
        assert!(deny_reason(&out).contains("/repo/src/main.go"));
    }

    #[test]
    fn test_gate_git_push() {
        let out = gate(r#"{"tool_name":"Bash","tool_input":{"command":"git push origin main"}}"#);
        assert!(deny_reason(&out).contains("git push"));
    }

    #[test]
    fn test_gate_edit() {
        let out = gate(r#"{"tool_name":"Edit","tool_input":{}}"#);
        assert!(deny_reason(&out).contains("Edit is not permitted"));
    }

    #[test]
    fn test_gate_fails_open_on_malformed_input() {
        for input in ["", "{", "null", "[1,2]", "garbage"] {
            let mut out = Vec::new();
            let verdict = run_gate(&ReadonlyGate::default(), input.as_bytes(), &mut out).unwrap();
            assert_eq!(verdict, Verdict::Allow, "input {input:?}");
            assert_eq!(out, b"{}\n", "input {input:?}");
        }
    }

    /// A mistyped correlation id must not turn a gated call into an allow.
    #[test]
    fn test_gate_denies_despite_non_string_tool_use_id() {
        let out = gate(
            r#"{"tool_name":"Write","tool_input":{"file_path":"/repo/src/main.go"},"tool_use_id":null}"#,
        );
        assert!(deny_reason(&out).contains("/repo/src/main.go"));

        let out = gate(
            r#"{"tool_name":"Bash","tool_input":{"command":"git push origin main"},"tool_use_id":7}"#,
        );
        assert!(deny_reason(&out).contains("git push"));

        let out = gate(r#"{"tool_name":"Edit","tool_input":{},"tool_use_id":{"x":1}}"#);
        assert!(deny_reason(&out).contains("Edit is not permitted"));
    }

    // ── 2. logger end to end ──────────────────────────────────────────────────

    #[test]
    fn test_logger_start_records_and_allows() {
        let sink = InMemoryEventSink::new();
        assert_eq!(log(Phase::Start, &sink, TASK), "{}\n");

        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].agent, "arch-reviewer");
        assert_eq!(entries[0].model.as_deref(), Some("opus"));
    }

    #[test]
    fn test_logger_stop_records_and_writes_nothing() {
        let sink = InMemoryEventSink::new();
        assert_eq!(log(Phase::Stop, &sink, TASK), "");
        assert_eq!(sink.len(), 1);
        assert!(sink.entries()[0].prompt.is_none());
    }

    #[test]
    fn test_logger_start_non_delegate_or_malformed() {
        let sink = InMemoryEventSink::new();
        assert_eq!(log(Phase::Start, &sink, r#"{"tool_name":"Bash","tool_input":{}}"#), "{}\n");
        assert_eq!(log(Phase::Start, &sink, "not json"), "{}\n");
        assert_eq!(log(Phase::Stop, &sink, "not json"), "");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_logger_twice_appends_twice_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonlEventLog::new(dir.path().join(".analysis/debug"), "agent-log.jsonl");

        for _ in 0..2 {
            let mut out = Vec::new();
            run_logger(Phase::Start, &sink, TASK.as_bytes(), &mut out).unwrap();
            assert_eq!(out, b"{}\n");
        }

        let raw = std::fs::read_to_string(sink.path()).unwrap();
        assert_eq!(raw.lines().count(), 2);
    }

    #[test]
    fn test_logger_args_select_phase() {
        let phase = |args: &[&str]| LoggerArgs::from_args(args).and_then(|a| a.phase());

        assert_eq!(phase(&["log-agents", "start"]), Some(Phase::Start));
        assert_eq!(phase(&["log-agents", "stop"]), Some(Phase::Stop));
        assert_eq!(phase(&["log-agents", "start", "extra"]), Some(Phase::Start));
        assert_eq!(phase(&["log-agents", "stop", "a", "--b", "-c"]), Some(Phase::Stop));

        let args = LoggerArgs::from_args(["log-agents", "--config", "hooks.toml", "start"]).unwrap();
        assert_eq!(args.phase(), Some(Phase::Start));
        assert_eq!(args.config, Some(std::path::PathBuf::from("hooks.toml")));
    }

    /// Anything that does not name a phase selects nothing, help included.
    #[test]
    fn test_logger_args_reject_without_phase() {
        for args in [
            &["log-agents"][..],
            &["log-agents", "bogus"],
            &["log-agents", "Start"],
            &["log-agents", "--help"],
            &["log-agents", "-h"],
            &["log-agents", "--version"],
            &["log-agents", "--config"],
            &["log-agents", "--config", "hooks.toml"],
        ] {
            assert!(LoggerArgs::from_args(args).is_none(), "args {args:?}");
        }
    }

    // ── 3. configuration ──────────────────────────────────────────────────────

    #[test]
    fn test_config_defaults() {
        let config = HooksConfig::from_toml_str("").unwrap();
        assert_eq!(config, HooksConfig::default());
        assert_eq!(config.gate().sentinel(), ".analysis");
        assert_eq!(
            config.event_log().path(),
            std::path::Path::new(".analysis/debug/agent-log.jsonl")
        );
    }

    #[test]
    fn test_config_overrides() {
        let config = HooksConfig::from_toml_str(
            r#"
            [write]
            sentinel = "review-out"

            [audit]
            log_dir = "/var/log/lookout"
            log_file = "events.jsonl"
            "#,
        )
        .unwrap();

        assert_eq!(config.gate().sentinel(), "review-out");
        assert_eq!(
            config.event_log().path(),
            std::path::Path::new("/var/log/lookout/events.jsonl")
        );
    }

    #[test]
    fn test_config_rejects_invalid_values() {
        for toml in [
            "[write]\nsentinel = \"\"",
            "[write]\nsentinel = \"a/b\"",
            "[write]\nsentinel = \"..\"",
            "[audit]\nlog_file = \"\"",
            "[write]\nsentinal = \".analysis\"",
            "this is not toml ][",
        ] {
            match HooksConfig::from_toml_str(toml) {
                Err(LookoutError::ConfigError { .. }) => {}
                other => panic!("expected ConfigError for {toml:?}, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_config_load_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(HooksConfig::load_or_default(None), HooksConfig::default());

        let missing = dir.path().join("missing.toml");
        assert_eq!(
            HooksConfig::load_or_default(Some(missing.as_path())),
            HooksConfig::default()
        );

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[write]\nsentinel = \"/\"\n").unwrap();
        assert_eq!(HooksConfig::load_or_default(Some(bad.as_path())), HooksConfig::default());

        let good = dir.path().join("good.toml");
        std::fs::write(&good, "[write]\nsentinel = \"out\"\n").unwrap();
        assert_eq!(
            HooksConfig::load_or_default(Some(good.as_path())).write.sentinel,
            "out"
        );
    }
}
