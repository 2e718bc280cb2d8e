//! Recovery-tolerant document loading for untrusted input.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::Document;
use crate::error::{Result, SeverError};

use super::builder::build_tree;

/// Leading `<?xml ... ?>` declaration, removed before parsing.
static XML_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*<\?xml[^>]*\?>").unwrap());

/// Parse raw markup into a document, recovering from malformed input.
///
/// A leading declaration prolog is stripped. Unclosed tags, mismatched
/// end tags, invalid entities, and stray `<` characters are repaired on a
/// best-effort basis; when the input contains more than one top-level
/// element, the first one wins. Fails with
/// [`SeverError::MalformedDocument`] only when no root element can be
/// recovered at all.
pub fn parse_lenient(input: &str) -> Result<Document> {
    let stripped = XML_DECLARATION.replace(input, "");
    build_tree(stripped.trim(), true).map_err(|e| SeverError::MalformedDocument(e.message))
}
