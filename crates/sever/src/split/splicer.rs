//! Tree splicing: replace one node with a sequence of replacements.

use crate::document::{Document, NodeId};
use crate::error::{Result, SeverError};

/// Replace `target` with the children of `replacements`' root element.
///
/// The target's untouched siblings keep their relative order; the
/// replacements are inserted contiguously at the target's former
/// position, in the order the model produced them. Replacements whose
/// direct text content is empty or whitespace-only are skipped — "if a
/// category is not applicable, omit that tag entirely" is enforced here
/// as well as in the prompt.
///
/// Fails with [`SeverError::CannotSplitRoot`] before any mutation when
/// `target` is the document root. Returns the ids of the inserted nodes.
pub fn splice(
    doc: &mut Document,
    target: NodeId,
    replacements: &Document,
) -> Result<Vec<NodeId>> {
    let (parent, index) = doc.detach(target).ok_or(SeverError::CannotSplitRoot)?;

    let mut inserted = Vec::new();
    let mut at = index;
    for &candidate in replacements.children(replacements.root()) {
        let has_content = replacements
            .text(candidate)
            .is_some_and(|t| !t.trim().is_empty());
        if !has_content {
            continue;
        }
        let copy = doc.adopt(replacements, candidate);
        doc.insert_child(parent, at, copy);
        at += 1;
        inserted.push(copy);
    }

    Ok(inserted)
}
