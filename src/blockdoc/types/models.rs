//! Core data structures for parsed documents.
//!
//! This module defines the fundamental types used throughout the library:
//! - Classified source lines
//! - Documents (insertion-ordered key/value records)
//! - Source encoding modes

use std::collections::HashMap;
use std::fmt;
use std::ops::Index;

/// One physical line after classification.
///
/// `key` is present when the line declares a new field (`name: value`);
/// otherwise the line continues the value of the most recent key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub key: Option<String>,
    pub content: String,
    /// 1-based physical line number in the source.
    pub line: usize,
}

/// A single parsed record: an ordered mapping from field name to value.
///
/// Keys iterate in the order of their first appearance in the source block.
/// Values assembled from several physical lines are joined with `\n`.
/// A `Document` cannot be modified once it has been produced by the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    fields: Vec<(String, String)>,
    /// Key -> position in `fields`.
    index: HashMap<String, usize>,
}

impl Document {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends `content` to the value of `key`, creating the field if needed.
    pub(crate) fn push_content(&mut self, key: &str, content: &str) {
        match self.position(key) {
            Some(idx) => {
                let value = &mut self.fields[idx].1;
                value.push('\n');
                value.push_str(content);
            }
            None => {
                self.index.insert(key.to_owned(), self.fields.len());
                self.fields.push((key.to_owned(), content.to_owned()));
            }
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Returns the value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key).map(|idx| self.fields[idx].1.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Keys in order of first appearance.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, v)| v.as_str())
    }

    /// `(key, value)` pairs in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Consumes the document, returning its fields in order.
    pub fn into_fields(self) -> Vec<(String, String)> {
        self.fields
    }
}

impl Index<&str> for Document {
    type Output = str;

    /// # Panics
    /// Panics if `key` is not present.
    fn index(&self, key: &str) -> &str {
        match self.get(key) {
            Some(value) => value,
            None => panic!("no field named {:?} in document", key),
        }
    }
}

impl IntoIterator for Document {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a str, &'a str);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, String)>,
        fn(&'a (String, String)) -> (&'a str, &'a str),
    >;

    fn into_iter(self) -> Self::IntoIter {
        fn as_refs(pair: &(String, String)) -> (&str, &str) {
            (pair.0.as_str(), pair.1.as_str())
        }
        self.fields.iter().map(as_refs as fn(&'a (String, String)) -> (&'a str, &'a str))
    }
}

/// Renders the document back in its source syntax. Continuation lines are
/// indented so they cannot be mistaken for new keys.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            let mut lines = value.split('\n');
            writeln!(f, "{}: {}", key, lines.next().unwrap_or_default())?;
            for line in lines {
                writeln!(f, "  {}", line)?;
            }
        }
        Ok(())
    }
}

/// How the source bytes were decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// gzip-compressed text.
    Gzip,
    /// Uncompressed text.
    Plain,
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Gzip => f.write_str("gzip"),
            SourceFormat::Plain => f.write_str("plain"),
        }
    }
}
