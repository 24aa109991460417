//! Codec layer for source decoding.
//!
//! # Submodules
//!
//! - [`compression`][]: gzip detection and decompression
pub mod compression;
