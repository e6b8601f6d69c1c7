//! # lookout-core
//!
//! The seams shared by both lookout hooks:
//! - the `DecisionEngine` and `EventSink` traits
//! - the stdin/stdout JSON protocol (`read_request`, `write_response`)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lookout_core::{protocol, traits::DecisionEngine};
//!
//! let verdict = match protocol::read_request(std::io::stdin().lock()) {
//!     Some(request) => engine.decide(&request),
//!     None => Verdict::Allow,
//! };
//! protocol::write_response(std::io::stdout().lock(), &verdict)?;
//! ```

pub mod protocol;
pub mod traits;

pub use protocol::{parse_request, read_request, write_response};
pub use traits::{DecisionEngine, EventSink};

// ── Tests ─────────────────────────────────────────────────────────────────────
