//! Property-based tests for parsing and splicing invariants.
//!
//! These tests use proptest to generate random inputs and verify that
//! the core invariants hold under all conditions:
//!
//! 1. **No panics**: the lenient loader never crashes on any input
//! 2. **Round-trip**: serializing a tree and strict-parsing it back
//!    preserves structure
//! 3. **Splice window**: replacements occupy exactly the target's former
//!    position and untouched siblings keep their order

use proptest::prelude::*;

use sever::document::Document;
use sever::parse::{parse_lenient, parse_strict};
use sever::split::splice;

// =============================================================================
// Test Strategies
// =============================================================================

/// Markup-biased character soup: heavy on the characters that matter.
fn markup_soup() -> impl Strategy<Value = String> {
    "[a-z<>/&;=\"' \\[\\]?!-]{0,120}"
}

/// Tag names.
fn tag_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}"
}

/// Printable text content without markup-significant whitespace issues.
fn text_content() -> impl Strategy<Value = String> {
    "[ -~]{1,24}"
}

/// Printable text guaranteed to survive a whitespace trim.
fn nonblank_text() -> impl Strategy<Value = String> {
    "[ -~]{0,12}[!-~]"
}

/// A small tree: (tag, text, children).
#[derive(Debug, Clone)]
struct NodeSeed {
    tag: String,
    text: Option<String>,
    children: Vec<NodeSeed>,
}

fn node_seed() -> impl Strategy<Value = NodeSeed> {
    let leaf = (tag_name(), prop::option::of(text_content()))
        .prop_map(|(tag, text)| NodeSeed {
            tag,
            text,
            children: Vec::new(),
        });
    leaf.prop_recursive(3, 16, 4, |inner| {
        (
            tag_name(),
            prop::option::of(text_content()),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(tag, text, children)| NodeSeed {
                tag,
                text,
                children,
            })
    })
}

fn build(doc: &mut Document, parent: sever::NodeId, seed: &NodeSeed) {
    let id = doc.create_element(&seed.tag);
    if let Some(ref text) = seed.text {
        doc.set_text(id, text);
    }
    doc.append_child(parent, id);
    for child in &seed.children {
        build(doc, id, child);
    }
}

fn to_document(seed: &NodeSeed) -> Document {
    let mut doc = Document::new(&seed.tag);
    if let Some(ref text) = seed.text {
        doc.set_text(doc.root(), text);
    }
    let root = doc.root();
    for child in &seed.children {
        build(&mut doc, root, child);
    }
    doc
}

/// Structural shape of a document: (tag, trimmed text, child count) per
/// node in document order.
fn full_shape(doc: &Document) -> Vec<(String, String, usize)> {
    doc.descendants()
        .iter()
        .map(|&n| {
            (
                doc.tag(n).to_string(),
                doc.text(n).map(str::trim).unwrap_or("").to_string(),
                doc.children(n).len(),
            )
        })
        .collect()
}

// =============================================================================
// Parser Properties
// =============================================================================

proptest! {
    #[test]
    fn lenient_parse_never_panics_on_soup(input in markup_soup()) {
        let _ = parse_lenient(&input);
    }

    #[test]
    fn lenient_parse_never_panics_on_any_string(input in "\\PC{0,80}") {
        let _ = parse_lenient(&input);
    }

    #[test]
    fn lenient_parse_is_deterministic(input in markup_soup()) {
        let a = parse_lenient(&input).map(|d| d.to_xml());
        let b = parse_lenient(&input).map(|d| d.to_xml());
        match (a, b) {
            (Ok(x), Ok(y)) => prop_assert_eq!(x, y),
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "parse outcome differed between runs"),
        }
    }

    #[test]
    fn serialize_then_strict_parse_round_trips(seed in node_seed()) {
        let doc = to_document(&seed);
        let xml = doc.to_xml();
        let parsed = parse_strict(&xml).expect("serializer output must be well-formed");
        prop_assert_eq!(full_shape(&doc), full_shape(&parsed));
    }

    #[test]
    fn lenient_accepts_everything_strict_accepts(seed in node_seed()) {
        let xml = to_document(&seed).to_xml();
        prop_assert!(parse_lenient(&xml).is_ok());
    }
}

// =============================================================================
// Splicer Properties
// =============================================================================

proptest! {
    #[test]
    fn splice_window_preserves_sibling_order(
        before in prop::collection::vec(tag_name(), 0..4),
        after in prop::collection::vec(tag_name(), 0..4),
        replacements in prop::collection::vec((tag_name(), nonblank_text()), 0..4),
    ) {
        let mut doc = Document::new("container");
        let root = doc.root();
        for tag in &before {
            let id = doc.create_element(tag);
            doc.set_text(id, "kept");
            doc.append_child(root, id);
        }
        let target = doc.create_element("target");
        doc.set_text(target, "to split");
        doc.append_child(root, target);
        for tag in &after {
            let id = doc.create_element(tag);
            doc.set_text(id, "kept");
            doc.append_child(root, id);
        }

        let mut reps = Document::new("root");
        for (tag, text) in &replacements {
            let id = reps.create_element(tag);
            reps.set_text(id, text);
            reps.append_child(reps.root(), id);
        }

        let inserted = splice(&mut doc, target, &reps).expect("splice failed");
        prop_assert_eq!(inserted.len(), replacements.len());

        let tags: Vec<String> = doc
            .children(root)
            .iter()
            .map(|&c| doc.tag(c).to_string())
            .collect();
        let mut expected = before.clone();
        expected.extend(replacements.iter().map(|(tag, _)| tag.clone()));
        expected.extend(after.iter().cloned());
        prop_assert_eq!(tags, expected);
    }

    #[test]
    fn spliced_count_never_exceeds_nonempty_replacements(
        replacements in prop::collection::vec(
            (tag_name(), prop_oneof!["[ \\t]{0,4}", text_content()]),
            0..6,
        ),
    ) {
        let mut doc = Document::new("container");
        let target = doc.create_element("target");
        doc.set_text(target, "x");
        doc.append_child(doc.root(), target);

        let mut reps = Document::new("root");
        for (tag, text) in &replacements {
            let id = reps.create_element(tag);
            reps.set_text(id, text);
            reps.append_child(reps.root(), id);
        }

        let inserted = splice(&mut doc, target, &reps).expect("splice failed");
        let nonempty = replacements
            .iter()
            .filter(|(_, text)| !text.trim().is_empty())
            .count();
        prop_assert_eq!(inserted.len(), nonempty);
    }
}
