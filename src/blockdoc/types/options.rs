//! Parser configuration.

use std::fmt;
use std::str::FromStr;

use super::error::BlockdocError;

/// What to do with a keyless line that appears before any key in its block.
///
/// Such a line cannot be carried forward onto a previous key, so the parser
/// needs an explicit rule for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrphanPolicy {
    /// Store the content under the empty-string key `""`. Further keyless
    /// lines keep appending to it until a real key appears.
    ///
    /// A field line with nothing before its first colon (`::x`) also declares
    /// the key `""`, so such a line in the same block appends to the orphan
    /// value instead of starting a separate field.
    #[default]
    EmptyKey,
    /// Drop the line and log a warning.
    Skip,
    /// Fail the document with [`BlockdocError::OrphanContinuation`].
    Reject,
}

impl OrphanPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrphanPolicy::EmptyKey => "empty-key",
            OrphanPolicy::Skip => "skip",
            OrphanPolicy::Reject => "reject",
        }
    }
}

impl fmt::Display for OrphanPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrphanPolicy {
    type Err = BlockdocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty-key" | "empty" => Ok(OrphanPolicy::EmptyKey),
            "skip" => Ok(OrphanPolicy::Skip),
            "reject" => Ok(OrphanPolicy::Reject),
            other => Err(BlockdocError::InvalidOption(format!(
                "unknown orphan policy '{}' (expected empty-key, skip or reject)",
                other
            ))),
        }
    }
}

/// Options controlling how documents are assembled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub orphan_policy: OrphanPolicy,
}

impl ParseOptions {
    pub fn with_orphan_policy(mut self, policy: OrphanPolicy) -> Self {
        self.orphan_policy = policy;
        self
    }
}
