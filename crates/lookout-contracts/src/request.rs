//! Tool-invocation request types.
//!
//! The host delivers one `ActionRequest` per process on standard input.
//! Everything the gate and the logger know about an attempted action comes
//! from this record.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One intercepted tool invocation, as delivered by the host.
///
/// Only the fields the hooks read are modeled; anything else the host sends
/// (session ids, transcript paths, ...) is ignored during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    /// Host tool identifier (e.g. "Write", "Bash", "Task").
    #[serde(default, deserialize_with = "string_or_empty")]
    pub tool_name: String,

    /// Tool-specific arguments. The runtime never validates their shape.
    #[serde(default)]
    pub tool_input: Value,

    /// Opaque correlation id. Only the event logger reads it.
    #[serde(default, deserialize_with = "string_or_empty")]
    pub tool_use_id: String,
}

/// Read a JSON string, treating `null`, numbers, objects, and the like as
/// the empty string. A mistyped envelope field must not make an otherwise
/// well-formed request unreadable.
fn string_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

impl ActionRequest {
    /// Classify `tool_name` into the closed set of kinds the hooks act on.
    pub fn kind(&self) -> ToolKind {
        ToolKind::from_tool_name(&self.tool_name)
    }

    /// Read a string argument from `tool_input`.
    ///
    /// A missing key, a non-string value, or a `tool_input` that is not an
    /// object all read as the empty string.
    pub fn input_str(&self, key: &str) -> &str {
        self.tool_input
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

/// The kinds of tool the hooks distinguish.
///
/// Adding a gated kind means adding a variant here; every `match` on
/// `ToolKind` then has to decide what to do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    /// In-place file edits (`Edit`, `MultiEdit`, `NotebookEdit`).
    Edit,
    /// Whole-file writes (`Write`), argument `file_path`.
    Write,
    /// Free-form shell execution (`Bash`), argument `command`.
    Shell,
    /// Sub-agent delegation (`Task`).
    Delegate,
    /// Any tool the hooks do not special-case.
    Other,
}

impl ToolKind {
    /// Map a host tool name to its kind. Matching is exact and case-sensitive.
    pub fn from_tool_name(name: &str) -> Self {
        match name {
            "Edit" | "MultiEdit" | "NotebookEdit" => Self::Edit,
            "Write" => Self::Write,
            "Bash" => Self::Shell,
            "Task" => Self::Delegate,
            _ => Self::Other,
        }
    }
}
