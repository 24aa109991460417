//! Text format layer: turns physical lines into documents.
//!
//! # Module Organization
//!
//! - [`line`]: classifies a single line as a new field or a continuation
//! - [`document`]: folds the classified lines of one block into a [`Document`]
//! - [`blocks`]: groups a line stream into blank-line separated blocks
//!
//! # Architecture
//!
//! ```text
//! # comment            ← dropped by blocks
//! title: Hello         ← line::classify() → key "title"
//! body: line one       ← key "body"
//! line two             ← continuation of "body"
//!                      ← blank: blocks finalizes, document::assemble()
//! title: Second
//! ```
//!
//! [`Document`]: crate::blockdoc::types::models::Document

pub mod blocks;
pub mod document;
pub mod line;
