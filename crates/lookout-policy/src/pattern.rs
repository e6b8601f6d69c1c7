//! The shell-command blocklist.
//!
//! The pattern is matched against the raw command text. There is no shell
//! parsing: quoting, pipes, and subshells are invisible to it, and a blocked
//! word anywhere in the text is enough to deny.

use std::sync::LazyLock;

use regex::Regex;

/// Mutating git subcommands and destructive file commands, as whole words.
const BLOCK_PATTERN_SRC: &str = concat!(
    r"\b(",
    r"git\s+(push|commit|add|reset|rebase|merge|cherry-pick|revert|clean|stash|tag|checkout|switch|restore|branch\s+-[dDmM])",
    r"|rm\b|rmdir\b|mv\b|chmod\b|chown\b",
    r")",
);

static BLOCK_PATTERN: LazyLock<BlockPattern> = LazyLock::new(|| BlockPattern {
    regex: Regex::new(BLOCK_PATTERN_SRC).expect("block pattern compilation failed"),
});

/// A compiled matcher over free-form command text.
///
/// There is exactly one instance per process, built on first use and never
/// changed afterwards. Obtain it with [`BlockPattern::shared`].
#[derive(Debug)]
pub struct BlockPattern {
    regex: Regex,
}

impl BlockPattern {
    /// The process-wide block pattern.
    pub fn shared() -> &'static BlockPattern {
        &BLOCK_PATTERN
    }

    /// The leftmost blocked token in `command`, exactly as written.
    pub fn find<'c>(&self, command: &'c str) -> Option<&'c str> {
        self.regex.find(command).map(|m| m.as_str())
    }
}
