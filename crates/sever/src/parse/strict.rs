//! Strict, non-recovering parsing.
//!
//! Used for model output, where malformed markup must surface as a
//! distinct failure rather than silently producing a corrupted tree.

use crate::document::Document;
use crate::error::{Result, SeverError};

use super::builder::build_tree;

/// Parse markup, rejecting any malformation.
///
/// Mismatched or unclosed tags, stray `<`, unquoted attributes, unknown
/// entities, and multiple root elements all fail with
/// [`SeverError::MalformedDocument`].
pub fn parse_strict(input: &str) -> Result<Document> {
    build_tree(input, false).map_err(|e| SeverError::MalformedDocument(e.message))
}
