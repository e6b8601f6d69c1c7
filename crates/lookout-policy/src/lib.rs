//! # lookout-policy
//!
//! The decision engine behind the `enforce-readonly` hook.
//!
//! ## Overview
//!
//! [`ReadonlyGate`] implements the
//! [`DecisionEngine`](lookout_core::traits::DecisionEngine) trait. It lets an
//! analysis agent read anything and run most commands, but confines durable
//! output to one sentinel directory (`.analysis` by default):
//!
//! - in-place edit tools are always denied
//! - Write is allowed only when the symlink-resolved target lies under (or
//!   is) a directory named after the sentinel
//! - shell commands are scanned for mutating git subcommands and
//!   destructive file commands
//!
//! Everything else passes through.
//!
//! ## Limits
//!
//! This is a safety net for a cooperative agent, not a sandbox. Shell
//! commands are matched as raw text; scripts, subshells, and environment
//! indirection are not inspected.

pub mod engine;
pub mod path;
pub mod pattern;

pub use engine::{ReadonlyGate, DEFAULT_SENTINEL};
pub use path::{contains_segment, resolve_path, resolve_path_from};
pub use pattern::BlockPattern;

// ── Tests ─────────────────────────────────────────────────────────────────────
