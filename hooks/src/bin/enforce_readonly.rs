//! `enforce-readonly`: pre-tool-use gate for analysis-mode agents.
//!
//! Reads one tool-invocation request from stdin and writes `{}` (allow) or a
//! deny envelope to stdout. Always exits 0; a broken gate must never look
//! like a deny to the host.
//!
//! Usage:
//!   enforce-readonly [--config hooks.toml] < request.json

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::error;

use lookout_hooks::{init_tracing, run_gate, HooksConfig};

/// Deny edits, out-of-sentinel writes, and mutating shell commands.
#[derive(Parser)]
#[command(
    name = "enforce-readonly",
    about = "Pre-tool-use gate confining an analysis agent to its output directory",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            error!(error = %e, "invalid arguments; using defaults");
            Cli { config: None }
        }
    };

    let config = HooksConfig::load_or_default(cli.config.as_deref());
    let gate = config.gate();

    if let Err(e) = run_gate(&gate, io::stdin().lock(), io::stdout().lock()) {
        error!(error = %e, "failed to answer hook request");
    }
}
