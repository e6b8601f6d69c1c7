//! The hook wire protocol: one JSON request in, at most one JSON object out.
//!
//! Reading never fails from the caller's point of view. Anything that is not
//! a JSON object describing a request comes back as `None`, and the caller
//! takes its fail-open path.

use std::io::{Read, Write};

use serde_json::Value;
use tracing::{debug, warn};

use lookout_contracts::{
    error::{LookoutError, LookoutResult},
    request::ActionRequest,
    verdict::{HookResponse, Verdict},
};

/// Read the whole of `reader` and parse it as an `ActionRequest`.
///
/// Returns `None` for an empty stream, invalid JSON, or JSON that is not a
/// request object. Each case is logged at `warn`.
pub fn read_request<R: Read>(mut reader: R) -> Option<ActionRequest> {
    let mut raw = String::new();
    if let Err(e) = reader.read_to_string(&mut raw) {
        warn!(error = %e, "failed to read request from stdin; treating as malformed");
        return None;
    }

    match parse_request(&raw) {
        Ok(request) => {
            debug!(tool_name = %request.tool_name, "request parsed");
            Some(request)
        }
        Err(e) => {
            warn!(error = %e, "ignoring malformed request");
            None
        }
    }
}

/// Parse `raw` as an `ActionRequest`.
pub fn parse_request(raw: &str) -> LookoutResult<ActionRequest> {
    if raw.trim().is_empty() {
        return Err(LookoutError::MalformedRequest {
            reason: "empty input".to_string(),
        });
    }

    let value: Value = serde_json::from_str(raw).map_err(|e| LookoutError::MalformedRequest {
        reason: e.to_string(),
    })?;
    if !value.is_object() {
        return Err(LookoutError::MalformedRequest {
            reason: "request is not a JSON object".to_string(),
        });
    }

    serde_json::from_value(value).map_err(|e| LookoutError::MalformedRequest {
        reason: e.to_string(),
    })
}

/// Write the response envelope for `verdict` as one newline-terminated line.
pub fn write_response<W: Write>(mut writer: W, verdict: &Verdict) -> LookoutResult<()> {
    let response = HookResponse::from(verdict);
    let mut line = serde_json::to_vec(&response).map_err(|e| LookoutError::ResponseWriteFailed {
        reason: format!("failed to serialize response: {}", e),
    })?;
    line.push(b'\n');

    writer
        .write_all(&line)
        .and_then(|()| writer.flush())
        .map_err(|e| LookoutError::ResponseWriteFailed {
            reason: e.to_string(),
        })
}
