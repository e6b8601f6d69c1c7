//! TOML configuration shared by both hook binaries.
//!
//! Every key is optional; an absent file or section means the built-in
//! defaults, which are the strict policy.
//!
//! ```toml
//! [write]
//! sentinel = ".analysis"
//!
//! [audit]
//! log_dir = ".analysis/debug"
//! log_file = "agent-log.jsonl"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use lookout_audit::{JsonlEventLog, DEFAULT_LOG_DIR, DEFAULT_LOG_FILE};
use lookout_contracts::error::{LookoutError, LookoutResult};
use lookout_policy::{ReadonlyGate, DEFAULT_SENTINEL};

/// Top-level structure deserialized from a hook configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HooksConfig {
    pub write: WriteConfig,
    pub audit: AuditConfig,
}

/// `[write]`: where Write may land.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WriteConfig {
    /// The single directory name Write targets must pass through.
    pub sentinel: String,
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_string(),
        }
    }
}

/// `[audit]`: where lifecycle entries are appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditConfig {
    /// Audit directory, relative to the hook's working directory unless absolute.
    pub log_dir: PathBuf,
    pub log_file: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

impl HooksConfig {
    /// Parse `s` as TOML and validate the result.
    ///
    /// Returns `LookoutError::ConfigError` if the TOML is malformed, has
    /// unknown keys, or fails validation.
    pub fn from_toml_str(s: &str) -> LookoutResult<Self> {
        let config: HooksConfig = toml::from_str(s).map_err(|e| LookoutError::ConfigError {
            reason: format!("failed to parse hook config TOML: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read the file at `path` and parse it as hook configuration.
    pub fn from_file(path: &Path) -> LookoutResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| LookoutError::ConfigError {
            reason: format!("failed to read hook config '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load `path` if given, falling back to the defaults on any error.
    ///
    /// A hook must not fail because of its own configuration, so errors are
    /// logged and the strict defaults apply.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, path = %path.display(), "using default hook configuration");
                Self::default()
            }
        }
    }

    fn validate(&self) -> LookoutResult<()> {
        let sentinel = self.write.sentinel.as_str();
        if sentinel.is_empty() {
            return Err(LookoutError::ConfigError {
                reason: "write.sentinel must not be empty".to_string(),
            });
        }
        if sentinel == "." || sentinel == ".." || sentinel.contains('/') || sentinel.contains('\\') {
            return Err(LookoutError::ConfigError {
                reason: format!("write.sentinel '{}' must be a single directory name", sentinel),
            });
        }
        if self.audit.log_file.is_empty() {
            return Err(LookoutError::ConfigError {
                reason: "audit.log_file must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn gate(&self) -> ReadonlyGate {
        ReadonlyGate::new(self.write.sentinel.clone())
    }

    pub fn event_log(&self) -> JsonlEventLog {
        JsonlEventLog::new(self.audit.log_dir.clone(), &self.audit.log_file)
    }
}
