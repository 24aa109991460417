//! Line classification.

use std::sync::OnceLock;

use regex::Regex;

use crate::blockdoc::types::models::ClassifiedLine;

/// A field declaration: a non-whitespace run immediately followed by a colon.
static FIELD_PATTERN: OnceLock<Regex> = OnceLock::new();

fn field_regex() -> &'static Regex {
    FIELD_PATTERN.get_or_init(|| Regex::new(r"^\S+:").expect("Invalid field regex pattern"))
}

/// Strips a trailing `\n` or `\r\n`.
pub fn strip_terminator(raw: &str) -> &str {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Classifies one physical line.
///
/// Field lines are split at the first colon; both halves are trimmed. Any
/// other line becomes keyless content, trimmed on both sides.
pub fn classify(raw: &str, line: usize) -> ClassifiedLine {
    let text = strip_terminator(raw).trim_end();
    if field_regex().is_match(text) {
        if let Some((key, content)) = text.split_once(':') {
            return ClassifiedLine {
                key: Some(key.trim().to_owned()),
                content: content.trim().to_owned(),
                line,
            };
        }
    }
    ClassifiedLine {
        key: None,
        content: text.trim().to_owned(),
        line,
    }
}
