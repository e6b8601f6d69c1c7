//! `log-agents`: lifecycle logger for delegated sub-agents.
//!
//! Usage:
//!   log-agents [--config hooks.toml] start   # pre-tool-use: logs start, prints {}
//!   log-agents [--config hooks.toml] stop    # post-tool-use: logs finish
//!
//! Arguments after the phase are ignored. Any other phase, or none, exits
//! 0 without reading stdin or writing anything; so do `--help` and
//! `--version`.

use std::io;

use tracing::error;

use lookout_hooks::{init_tracing, run_logger, HooksConfig, LoggerArgs};

fn main() {
    let Some(args) = LoggerArgs::from_args(std::env::args_os()) else {
        return;
    };
    let Some(phase) = args.phase() else {
        return;
    };

    init_tracing();

    let config = HooksConfig::load_or_default(args.config.as_deref());
    let log = config.event_log();

    if let Err(e) = run_logger(phase, &log, io::stdin().lock(), io::stdout().lock()) {
        error!(error = %e, phase = %phase, "failed to answer hook request");
    }
}
