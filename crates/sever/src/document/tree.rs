//! Arena-backed document tree.
//!
//! Elements live in a flat arena and refer to each other by [`NodeId`].
//! The parent back-reference is an index lookup, never an ownership edge,
//! so the tree stays acyclic from the borrow checker's point of view even
//! though navigation runs both ways.

use indexmap::IndexMap;

/// Stable identifier of an element within its [`Document`] arena.
///
/// Ids are never reused: detached elements keep their slot, so an id
/// obtained before a mutation remains valid afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// One element record in the arena.
#[derive(Debug, Clone)]
pub(crate) struct ElementData {
    pub(crate) tag: String,
    pub(crate) text: Option<String>,
    pub(crate) attributes: IndexMap<String, String>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl ElementData {
    fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: None,
            attributes: IndexMap::new(),
            parent: None,
            children: Vec::new(),
        }
    }
}

/// An ordered, rooted tree of elements.
///
/// Each `Document` owns its arena exclusively; nodes from one document can
/// only enter another through [`Document::adopt`], which deep-copies the
/// subtree.
#[derive(Debug, Clone)]
pub struct Document {
    arena: Vec<ElementData>,
    root: NodeId,
}

impl Document {
    /// Create a document containing a single root element.
    pub fn new(root_tag: impl Into<String>) -> Self {
        Self {
            arena: vec![ElementData::new(root_tag)],
            root: NodeId(0),
        }
    }

    /// The root element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Allocate a new detached element in this document's arena.
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        let id = NodeId(self.arena.len());
        self.arena.push(ElementData::new(tag));
        id
    }

    fn data(&self, id: NodeId) -> &ElementData {
        &self.arena[id.0]
    }

    fn data_mut(&mut self, id: NodeId) -> &mut ElementData {
        &mut self.arena[id.0]
    }

    /// Tag name of an element.
    pub fn tag(&self, id: NodeId) -> &str {
        &self.data(id).tag
    }

    /// Direct text content of an element, if any.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.data(id).text.as_deref()
    }

    /// Replace the direct text content of an element.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        self.data_mut(id).text = Some(text.into());
    }

    /// Append character data to an element's text content.
    pub fn append_text(&mut self, id: NodeId, text: &str) {
        match &mut self.data_mut(id).text {
            Some(existing) => existing.push_str(text),
            slot => *slot = Some(text.to_string()),
        }
    }

    /// Set an attribute, preserving first-seen order.
    pub fn set_attribute(
        &mut self,
        id: NodeId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.data_mut(id).attributes.insert(name.into(), value.into());
    }

    /// Attribute value by name.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.data(id).attributes.get(name).map(String::as_str)
    }

    /// Attributes in document order.
    pub fn attributes(&self, id: NodeId) -> impl Iterator<Item = (&str, &str)> {
        self.data(id)
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Ordered children of an element.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.data(id).children
    }

    /// Parent of an element, `None` for the root and detached nodes.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.data(id).parent
    }

    /// Append a detached element as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.data_mut(child).parent = Some(parent);
        self.data_mut(parent).children.push(child);
    }

    /// Insert a detached element among `parent`'s children at `index`.
    ///
    /// An index past the end appends.
    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) {
        self.data_mut(child).parent = Some(parent);
        let children = &mut self.data_mut(parent).children;
        let index = index.min(children.len());
        children.insert(index, child);
    }

    /// Detach an element from its parent.
    ///
    /// Returns the former parent and the element's sibling index, or `None`
    /// if the element had no parent (the root, or already detached). The
    /// detached subtree stays intact and addressable.
    pub fn detach(&mut self, id: NodeId) -> Option<(NodeId, usize)> {
        let parent = self.data(id).parent?;
        let index = self
            .data(parent)
            .children
            .iter()
            .position(|&c| c == id)?;
        self.data_mut(parent).children.remove(index);
        self.data_mut(id).parent = None;
        Some((parent, index))
    }

    /// Deep-copy a subtree from another document into this arena.
    ///
    /// The copied root is detached; attach it with [`Document::insert_child`]
    /// or [`Document::append_child`].
    pub fn adopt(&mut self, src: &Document, node: NodeId) -> NodeId {
        let copy = self.create_element(src.tag(node));
        if let Some(text) = src.text(node) {
            self.set_text(copy, text);
        }
        let attrs: Vec<(String, String)> = src
            .attributes(node)
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        for (name, value) in attrs {
            self.set_attribute(copy, name, value);
        }
        for &child in src.children(node) {
            let child_copy = self.adopt(src, child);
            self.append_child(copy, child_copy);
        }
        copy
    }

    /// All elements reachable from the root, in document (pre-order) order.
    pub fn descendants(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_subtree(self.root, &mut out);
        out
    }

    /// A subtree in document order, including `node` itself.
    pub fn subtree(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_subtree(node, &mut out);
        out
    }

    fn collect_subtree(&self, node: NodeId, out: &mut Vec<NodeId>) {
        out.push(node);
        for &child in self.children(node) {
            self.collect_subtree(child, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new("catalog");
        let root = doc.root();
        let a = doc.create_element("item");
        let b = doc.create_element("item");
        doc.append_child(root, a);
        doc.append_child(root, b);
        (doc, root, a, b)
    }

    #[test]
    fn test_children_preserve_insertion_order() {
        let (doc, root, a, b) = sample();
        assert_eq!(doc.children(root), &[a, b]);
        assert_eq!(doc.parent(a), Some(root));
    }

    #[test]
    fn test_detach_reports_former_position() {
        let (mut doc, root, a, b) = sample();
        assert_eq!(doc.detach(b), Some((root, 1)));
        assert_eq!(doc.children(root), &[a]);
        assert_eq!(doc.parent(b), None);
    }

    #[test]
    fn test_detach_root_returns_none() {
        let (mut doc, root, _, _) = sample();
        assert_eq!(doc.detach(root), None);
    }

    #[test]
    fn test_insert_child_at_index() {
        let (mut doc, root, a, b) = sample();
        let c = doc.create_element("note");
        doc.insert_child(root, 1, c);
        assert_eq!(doc.children(root), &[a, c, b]);
    }

    #[test]
    fn test_adopt_copies_subtree() {
        let mut src = Document::new("root");
        let child = src.create_element("task");
        src.set_text(child, "do the thing");
        src.set_attribute(child, "lang", "en");
        src.append_child(src.root(), child);

        let mut dst = Document::new("doc");
        let copy = dst.adopt(&src, child);
        dst.append_child(dst.root(), copy);

        assert_eq!(dst.tag(copy), "task");
        assert_eq!(dst.text(copy), Some("do the thing"));
        assert_eq!(dst.attribute(copy, "lang"), Some("en"));
        // Source is untouched.
        assert_eq!(src.children(src.root()).len(), 1);
    }

    #[test]
    fn test_descendants_document_order() {
        let mut doc = Document::new("a");
        let b = doc.create_element("b");
        let c = doc.create_element("c");
        let d = doc.create_element("d");
        doc.append_child(doc.root(), b);
        doc.append_child(b, c);
        doc.append_child(doc.root(), d);
        let tags: Vec<&str> = doc.descendants().iter().map(|&n| doc.tag(n)).collect();
        assert_eq!(tags, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_append_text_concatenates() {
        let mut doc = Document::new("p");
        doc.append_text(doc.root(), "hello");
        doc.append_text(doc.root(), " world");
        assert_eq!(doc.text(doc.root()), Some("hello world"));
    }
}
