//! Grouping of a line stream into blank-line separated blocks.
//!
//! [`BlockSplitter`] is the push-driven state machine; it is shared by the
//! in-memory [`split_blocks`] iterator and the file-backed
//! [`Documents`](crate::blockdoc::iter::Documents) iterator.

use log::{debug, trace};

use super::document::assemble;
use super::line::{classify, strip_terminator};
use crate::blockdoc::types::error::Result;
use crate::blockdoc::types::models::{ClassifiedLine, Document};
use crate::blockdoc::types::options::ParseOptions;

/// Lines starting with this character are comments.
pub const COMMENT_PREFIX: char = '#';

/// Accumulates classified lines until a blank line closes the block.
///
/// The splitter is idle when `pending` is empty and accumulating otherwise.
#[derive(Debug, Default)]
pub struct BlockSplitter {
    pending: Vec<ClassifiedLine>,
    line_no: usize,
}

impl BlockSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of physical lines consumed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// True while a block is open.
    pub fn is_accumulating(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Feeds one physical line. Returns the finished block when `raw` closes one.
    ///
    /// Comments are checked before blank lines, so a `#` line inside a block
    /// neither ends nor extends it.
    pub fn push_line(&mut self, raw: &str) -> Option<Vec<ClassifiedLine>> {
        self.line_no += 1;

        if raw.starts_with(COMMENT_PREFIX) {
            trace!("Line {}: comment", self.line_no);
            return None;
        }

        if strip_terminator(raw).trim().is_empty() {
            return self.take_block();
        }

        self.pending.push(classify(raw, self.line_no));
        None
    }

    /// Closes the block still open at end of input, if any.
    pub fn finish(&mut self) -> Option<Vec<ClassifiedLine>> {
        self.take_block()
    }

    /// Drops a partially accumulated block.
    pub fn discard(&mut self) {
        if self.is_accumulating() {
            debug!(
                "Discarding partial block of {} line(s) at line {}",
                self.pending.len(),
                self.line_no
            );
        }
        self.pending.clear();
    }

    fn take_block(&mut self) -> Option<Vec<ClassifiedLine>> {
        if self.pending.is_empty() {
            return None;
        }
        trace!("Line {}: block of {} line(s) closed", self.line_no, self.pending.len());
        Some(std::mem::take(&mut self.pending))
    }
}

/// Iterator over the documents of an in-memory line sequence.
///
/// Like [`Documents`](crate::blockdoc::iter::Documents), an assembly error
/// fails only its own block and iteration continues with the next one.
///
/// Created by [`split_blocks`].
pub struct Blocks<I> {
    lines: I,
    splitter: BlockSplitter,
    options: ParseOptions,
    done: bool,
}

impl<I, S> Iterator for Blocks<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<Document>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        for raw in self.lines.by_ref() {
            if let Some(block) = self.splitter.push_line(raw.as_ref()) {
                return Some(assemble(&block, &self.options));
            }
        }
        self.done = true;
        self.splitter
            .finish()
            .map(|block| assemble(&block, &self.options))
    }
}

/// Splits a sequence of lines into documents, lazily.
///
/// Each item may or may not carry its line terminator.
pub fn split_blocks<I, S>(lines: I, options: ParseOptions) -> Blocks<I::IntoIter>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Blocks {
        lines: lines.into_iter(),
        splitter: BlockSplitter::new(),
        options,
        done: false,
    }
}
