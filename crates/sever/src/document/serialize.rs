//! Pretty-printed XML serialization.
//!
//! Output uses two-space indentation and is stable: serializing the same
//! tree twice yields byte-identical text.

use super::tree::{Document, NodeId};

const INDENT: &str = "  ";

/// Escape character data.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an attribute value for double-quoted output.
fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

impl Document {
    /// Serialize the whole document with stable indentation.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        self.write_element(self.root(), 0, &mut out);
        out
    }

    fn write_element(&self, node: NodeId, depth: usize, out: &mut String) {
        let pad = INDENT.repeat(depth);
        out.push_str(&pad);
        out.push('<');
        out.push_str(self.tag(node));
        for (name, value) in self.attributes(node) {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }

        let text = self.text(node).map(str::trim).unwrap_or("");
        let children = self.children(node);

        if text.is_empty() && children.is_empty() {
            out.push_str("/>\n");
            return;
        }

        if children.is_empty() {
            out.push('>');
            out.push_str(&escape_text(text));
            out.push_str("</");
            out.push_str(self.tag(node));
            out.push_str(">\n");
            return;
        }

        out.push_str(">\n");
        if !text.is_empty() {
            out.push_str(&pad);
            out.push_str(INDENT);
            out.push_str(&escape_text(text));
            out.push('\n');
        }
        for &child in children {
            self.write_element(child, depth + 1, out);
        }
        out.push_str(&pad);
        out.push_str("</");
        out.push_str(self.tag(node));
        out.push_str(">\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element_self_closes() {
        let doc = Document::new("empty");
        assert_eq!(doc.to_xml(), "<empty/>\n");
    }

    #[test]
    fn test_text_element_single_line() {
        let mut doc = Document::new("note");
        doc.set_text(doc.root(), "remember");
        assert_eq!(doc.to_xml(), "<note>remember</note>\n");
    }

    #[test]
    fn test_nested_elements_indent() {
        let mut doc = Document::new("job");
        let task = doc.create_element("task");
        doc.set_text(task, "build");
        doc.append_child(doc.root(), task);
        let offer = doc.create_element("offer");
        doc.set_text(offer, "salary");
        doc.append_child(doc.root(), offer);

        assert_eq!(
            doc.to_xml(),
            "<job>\n  <task>build</task>\n  <offer>salary</offer>\n</job>\n"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let mut doc = Document::new("m");
        doc.set_text(doc.root(), "a < b & c");
        assert_eq!(doc.to_xml(), "<m>a &lt; b &amp; c</m>\n");
    }

    #[test]
    fn test_attributes_serialized_in_order() {
        let mut doc = Document::new("item");
        doc.set_attribute(doc.root(), "id", "1");
        doc.set_attribute(doc.root(), "lang", "en");
        doc.set_text(doc.root(), "x");
        assert_eq!(doc.to_xml(), "<item id=\"1\" lang=\"en\">x</item>\n");
    }

    #[test]
    fn test_attribute_quotes_escaped() {
        let mut doc = Document::new("q");
        doc.set_attribute(doc.root(), "title", "say \"hi\"");
        assert_eq!(doc.to_xml(), "<q title=\"say &quot;hi&quot;\"/>\n");
    }

    #[test]
    fn test_serialization_is_stable() {
        let mut doc = Document::new("a");
        let b = doc.create_element("b");
        doc.append_child(doc.root(), b);
        assert_eq!(doc.to_xml(), doc.to_xml());
    }
}
