//! Lifecycle events recorded by the agent logger.
//!
//! A `LogEntry` is created once per logged event, serialized as one JSON
//! line, and never touched again.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LookoutError;
use crate::request::ActionRequest;

/// Which side of a delegated sub-task the logger is observing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Before the sub-agent runs. This phase is wired as a pre-action hook
    /// and must answer with an allow.
    Start,
    /// After the sub-agent returns. Not gating; no response is written.
    Stop,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Start => "start",
            Phase::Stop => "stop",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = LookoutError;

    /// Only the exact lowercase tokens `start` and `stop` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Phase::Start),
            "stop" => Ok(Phase::Stop),
            other => Err(LookoutError::MalformedRequest {
                reason: format!("unknown phase '{}'", other),
            }),
        }
    }
}

/// One line of the agent lifecycle log.
///
/// `model` and `prompt` are only present on `start` entries; `stop` entries
/// omit them from the serialized form entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// UTC wall-clock time, serialized with second precision and a `Z` suffix.
    #[serde(with = "utc_seconds")]
    pub timestamp: DateTime<Utc>,

    pub event: Phase,

    pub tool_use_id: String,

    /// The sub-agent type that was delegated to.
    pub agent: String,

    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl LogEntry {
    /// Build the entry for `phase` from a delegate request.
    ///
    /// Absent arguments become empty strings. The caller is responsible for
    /// checking that `request` is actually a delegate call.
    pub fn from_request(phase: Phase, request: &ActionRequest, timestamp: DateTime<Utc>) -> Self {
        let (model, prompt) = match phase {
            Phase::Start => (
                Some(request.input_str("model").to_string()),
                Some(request.input_str("prompt").to_string()),
            ),
            Phase::Stop => (None, None),
        };

        Self {
            timestamp,
            event: phase,
            tool_use_id: request.tool_use_id.clone(),
            agent: request.input_str("subagent_type").to_string(),
            description: request.input_str("description").to_string(),
            model,
            prompt,
        }
    }
}

/// Serde adapter for `YYYY-MM-DDTHH:MM:SSZ` timestamps.
mod utc_seconds {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}
