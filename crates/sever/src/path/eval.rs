//! Path expression evaluation.

use std::collections::HashSet;

use crate::document::{Document, NodeId};
use crate::error::{Result, SeverError};

use super::expr::{Axis, NameTest, PathExpr, Step};

fn matches(doc: &Document, id: NodeId, test: &NameTest) -> bool {
    match test {
        NameTest::Any => true,
        NameTest::Name(name) => doc.tag(id) == name,
    }
}

fn apply_index(matched: Vec<NodeId>, index: Option<usize>) -> Vec<NodeId> {
    match index {
        Some(position) => matched.into_iter().nth(position - 1).into_iter().collect(),
        None => matched,
    }
}

/// All elements selected by `expr`, in document order.
///
/// An absolute expression starts at the document (so `/job` selects the
/// root element and `//tag` searches the whole tree, root included); a
/// relative expression starts at the root element, selecting among its
/// children.
pub fn evaluate(doc: &Document, expr: &PathExpr) -> Vec<NodeId> {
    let mut current: Vec<NodeId> = Vec::new();

    for (i, step) in expr.steps.iter().enumerate() {
        let mut next: Vec<NodeId> = Vec::new();
        let mut seen: HashSet<NodeId> = HashSet::new();
        let mut extend = |pool: Vec<NodeId>, step: &Step| {
            let matched: Vec<NodeId> = pool
                .into_iter()
                .filter(|&n| matches(doc, n, &step.test))
                .collect();
            for n in apply_index(matched, step.index) {
                if seen.insert(n) {
                    next.push(n);
                }
            }
        };

        if i == 0 {
            let pool = match (step.axis, expr.absolute) {
                (Axis::Descendant, _) => doc.descendants(),
                (Axis::Child, true) => vec![doc.root()],
                (Axis::Child, false) => doc.children(doc.root()).to_vec(),
            };
            extend(pool, step);
        } else {
            for &context in &current {
                let pool = match step.axis {
                    Axis::Child => doc.children(context).to_vec(),
                    Axis::Descendant => doc.subtree(context)[1..].to_vec(),
                };
                extend(pool, step);
            }
        }

        current = next;
        if current.is_empty() {
            break;
        }
    }

    current
}

/// Locate the single target element for a path expression.
///
/// When the expression matches more than one element, the first match in
/// document order is used; this is deliberate, documented policy rather
/// than an accident of evaluation order. Fails with
/// [`SeverError::NodeNotFound`] when nothing matches and with
/// [`SeverError::InvalidPathExpression`] when the expression itself does
/// not parse.
pub fn locate(doc: &Document, expression: &str) -> Result<NodeId> {
    let expr = PathExpr::parse(expression)?;
    evaluate(doc, &expr)
        .into_iter()
        .next()
        .ok_or_else(|| SeverError::NodeNotFound(expression.to_string()))
}
