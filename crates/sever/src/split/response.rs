//! Parsing the categorization response into replacement nodes.

use crate::document::Document;
use crate::error::{Result, SeverError};
use crate::parse::parse_strict;

/// Strip a markdown code fence, if the model wrapped its output in one.
fn strip_code_fence(response: &str) -> &str {
    if response.contains("```xml") {
        response
            .split("```xml")
            .nth(1)
            .and_then(|s| s.split("```").next())
            .map(str::trim)
            .unwrap_or(response)
    } else if response.contains("```") {
        response
            .split("```")
            .nth(1)
            .map(str::trim)
            .unwrap_or(response)
    } else {
        response.trim()
    }
}

/// Parse the raw model response into replacement nodes.
///
/// The response text is wrapped in a single synthetic root element and
/// parsed strictly: the model is free to omit categories or emit any
/// subset, but markup that does not parse fails with
/// [`SeverError::InvalidModelOutput`] rather than silently producing a
/// corrupted tree. Returns the container document; the children of its
/// root are the replacements, in the order they appear in the response.
pub fn parse_response(response: &str) -> Result<Document> {
    let wrapped = format!("<root>{}</root>", strip_code_fence(response));
    match parse_strict(&wrapped) {
        Ok(doc) => Ok(doc),
        Err(SeverError::MalformedDocument(message)) => {
            Err(SeverError::InvalidModelOutput(message))
        }
        Err(other) => Err(other),
    }
}
