//! # lookout-contracts
//!
//! Shared request, verdict, and log-entry types for the lookout hooks.
//!
//! Both hook binaries and every library crate import from here. No policy
//! logic lives in this crate, only data definitions and error types.

pub mod error;
pub mod event;
pub mod request;
pub mod verdict;

pub use error::{LookoutError, LookoutResult};
pub use event::{LogEntry, Phase};
pub use request::{ActionRequest, ToolKind};
pub use verdict::{HookResponse, HookSpecificOutput, Verdict};
