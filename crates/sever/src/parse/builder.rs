//! Token stream to document tree.

use crate::document::{Document, NodeId};

use super::tokenizer::{ParseError, Token, Tokenizer};

/// Build a document from markup text.
///
/// In lenient mode unmatched end tags are dropped, end tags that match an
/// outer open element close everything in between, unclosed elements are
/// closed at end of input, and the first top-level element wins when the
/// input contains several. In strict mode each of those is an error.
pub(crate) fn build_tree(input: &str, lenient: bool) -> Result<Document, ParseError> {
    let mut tokenizer = Tokenizer::new(input, lenient);
    let mut doc: Option<Document> = None;
    let mut stack: Vec<NodeId> = Vec::new();

    while let Some(token) = tokenizer.next_token()? {
        match token {
            Token::StartTag {
                name,
                attributes,
                self_closing,
            } => {
                let id = match doc {
                    None => {
                        let d = Document::new(name);
                        let root = d.root();
                        doc = Some(d);
                        root
                    }
                    Some(ref mut d) => {
                        if stack.is_empty() && !lenient {
                            return Err(ParseError::message("multiple root elements"));
                        }
                        // With no open parent (lenient, extra root) the
                        // element stays detached and is discarded.
                        let id = d.create_element(name);
                        if let Some(&parent) = stack.last() {
                            d.append_child(parent, id);
                        }
                        id
                    }
                };
                if let Some(ref mut d) = doc {
                    for (attr, value) in attributes {
                        d.set_attribute(id, attr, value);
                    }
                }
                if !self_closing {
                    stack.push(id);
                }
            }

            Token::EndTag { name } => {
                let matched = doc.as_ref().and_then(|d| {
                    if lenient {
                        stack.iter().rposition(|&id| d.tag(id) == name)
                    } else {
                        match stack.last() {
                            Some(&top) if d.tag(top) == name => Some(stack.len() - 1),
                            _ => None,
                        }
                    }
                });
                match matched {
                    Some(pos) => stack.truncate(pos),
                    None if lenient => {}
                    None => {
                        return Err(ParseError::message(format!(
                            "mismatched closing tag '</{}>'",
                            name
                        )));
                    }
                }
            }

            Token::Text(text) => match (doc.as_mut(), stack.last()) {
                (Some(d), Some(&top)) => d.append_text(top, &text),
                _ if lenient => {}
                _ => {
                    if !text.trim().is_empty() {
                        return Err(ParseError::message("text outside of the root element"));
                    }
                }
            },
        }
    }

    if !lenient {
        if let (Some(d), Some(&top)) = (&doc, stack.last()) {
            return Err(ParseError::message(format!(
                "unclosed element '<{}>'",
                d.tag(top)
            )));
        }
    }

    doc.ok_or_else(|| ParseError::message("no root element found"))
}
