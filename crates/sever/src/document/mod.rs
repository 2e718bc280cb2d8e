//! Document tree model.
//!
//! The tree is an arena of element records indexed by [`NodeId`]: each
//! record stores its parent's id and an ordered list of child ids, so
//! parent navigation is a lookup rather than an ownership edge. One
//! pipeline invocation owns one `Document`; nothing is shared.

mod serialize;
mod tree;

pub use tree::{Document, NodeId};
