//! Verdict and hook response envelope.
//!
//! The gate computes a `Verdict`; the protocol layer turns it into the
//! `HookResponse` envelope the host expects on standard output.

use serde::{Deserialize, Serialize};

/// The decision for a single intercepted action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The action proceeds.
    Allow,

    /// The action is blocked before it runs.
    Deny {
        /// Human-readable explanation shown to the agent.
        reason: String,
    },
}

impl Verdict {
    /// Construct a `Deny` from any string-like reason.
    pub fn deny(reason: impl Into<String>) -> Self {
        Self::Deny {
            reason: reason.into(),
        }
    }

    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// The JSON object written to standard output.
///
/// `Allow` serializes to `{}`: the host treats an empty object as "no
/// decision", which lets the call through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookResponse {
    #[serde(
        rename = "hookSpecificOutput",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hook_specific_output: Option<HookSpecificOutput>,
}

/// The deny payload nested under `hookSpecificOutput`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    /// Always "PreToolUse"; the gate only runs before a tool executes.
    pub hook_event_name: String,
    /// Always "deny"; allows are expressed by omitting this object.
    pub permission_decision: String,
    pub permission_decision_reason: String,
}

impl HookResponse {
    pub const HOOK_EVENT_NAME: &'static str = "PreToolUse";
    pub const DENY: &'static str = "deny";

    /// The neutral response: no decision, the call proceeds.
    pub fn allow() -> Self {
        Self::default()
    }
}

impl From<&Verdict> for HookResponse {
    fn from(verdict: &Verdict) -> Self {
        match verdict {
            Verdict::Allow => Self::allow(),
            Verdict::Deny { reason } => Self {
                hook_specific_output: Some(HookSpecificOutput {
                    hook_event_name: Self::HOOK_EVENT_NAME.to_string(),
                    permission_decision: Self::DENY.to_string(),
                    permission_decision_reason: reason.clone(),
                }),
            },
        }
    }
}
