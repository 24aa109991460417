//! Document assembly from the classified lines of one block.

use log::{trace, warn};

use crate::blockdoc::types::error::{BlockdocError, Result};
use crate::blockdoc::types::models::{ClassifiedLine, Document};
use crate::blockdoc::types::options::{OrphanPolicy, ParseOptions};

/// Key used for orphan continuations under [`OrphanPolicy::EmptyKey`].
///
/// Shared with literally empty keys (`::x` declares key `""`); the two merge.
pub const ORPHAN_KEY: &str = "";

/// Folds one block's lines into a [`Document`].
///
/// A keyed line moves the cursor to its key; a keyless line extends the
/// value under the current cursor. The first occurrence of a key sets its
/// value, later ones append after a `\n`.
///
/// # Errors
/// Returns [`BlockdocError::OrphanContinuation`] only when a keyless line
/// precedes every key and `options.orphan_policy` is [`OrphanPolicy::Reject`].
pub fn assemble<'a, I>(lines: I, options: &ParseOptions) -> Result<Document>
where
    I: IntoIterator<Item = &'a ClassifiedLine>,
{
    let mut doc = Document::new();
    let mut cursor: Option<&str> = None;

    for line in lines {
        if let Some(key) = line.key.as_deref() {
            cursor = Some(key);
        }

        let key = match cursor {
            Some(key) => key,
            None => match options.orphan_policy {
                OrphanPolicy::EmptyKey => {
                    trace!("Line {}: no key declared yet, using empty key", line.line);
                    cursor = Some(ORPHAN_KEY);
                    ORPHAN_KEY
                }
                OrphanPolicy::Skip => {
                    warn!("Line {}: skipping continuation with no key: {:?}", line.line, line.content);
                    continue;
                }
                OrphanPolicy::Reject => {
                    return Err(BlockdocError::OrphanContinuation {
                        line: line.line,
                        content: line.content.clone(),
                    });
                }
            },
        };

        doc.push_content(key, &line.content);
    }

    Ok(doc)
}
