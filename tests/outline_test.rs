//! Outline extraction and the extractor/annotator agreement invariant.
//!
//! The single most important cross-component property: identifiers computed
//! offline from raw text equal identifiers computed live from the rendered
//! tree, for every heading, including duplicates.

use mdnav::annotate::annotate_headings;
use mdnav::dom::{Document, Node, NodeId, Role};
use mdnav::outline::{ExtractOptions, extract_headings};

fn add_text(doc: &mut Document, parent: NodeId, text: &str) {
    let range = doc.append_text(text);
    let t = doc.alloc_node(Node::text(range));
    doc.append_child(parent, t);
}

fn add_heading(doc: &mut Document, level: u8, text: &str) -> NodeId {
    let h = doc.alloc_node(Node::new(Role::Heading(level)));
    doc.append_child(NodeId::ROOT, h);
    add_text(doc, h, text);
    h
}

/// Collect the ids of heading nodes in document order.
fn live_ids(doc: &Document) -> Vec<Option<String>> {
    doc.iter_dfs()
        .filter(|&id| matches!(doc.node(id).map(|n| n.role), Some(Role::Heading(_))))
        .map(|id| doc.semantics.id(id).map(String::from))
        .collect()
}

#[test]
fn extractor_and_annotator_agree_on_plain_headings() {
    let raw = "# Guide\n\n## Setup\n\ntext\n\n## Configuration Files\n\n### Deep Dive\n";

    let records = extract_headings(raw, &ExtractOptions::default()).unwrap();

    // Simulate the converter's output for the same document.
    let mut doc = Document::new();
    add_heading(&mut doc, 1, "Guide");
    add_heading(&mut doc, 2, "Setup");
    add_heading(&mut doc, 2, "Configuration Files");
    add_heading(&mut doc, 3, "Deep Dive");
    annotate_headings(&mut doc);

    let live = live_ids(&doc);
    // Records cover the h2/h3 band; live ids cover all headings.
    assert_eq!(records.len(), 3);
    assert_eq!(live[1].as_deref(), Some(records[0].identifier.as_str()));
    assert_eq!(live[2].as_deref(), Some(records[1].identifier.as_str()));
    assert_eq!(live[3].as_deref(), Some(records[2].identifier.as_str()));
}

#[test]
fn agreement_holds_for_formatted_headings() {
    let raw = "## Install `cargo`\n\n## See [the guide](guide.md)\n";
    let records = extract_headings(raw, &ExtractOptions::default()).unwrap();
    assert_eq!(records[0].identifier, "install-cargo");
    assert_eq!(records[1].identifier, "see-the-guide");

    let mut doc = Document::new();

    // "Install `cargo`": text + code span
    let h1 = doc.alloc_node(Node::new(Role::Heading(2)));
    doc.append_child(NodeId::ROOT, h1);
    add_text(&mut doc, h1, "Install ");
    let code = doc.alloc_node(Node::new(Role::Code));
    doc.append_child(h1, code);
    add_text(&mut doc, code, "cargo");

    // "See [the guide](guide.md)": text + link
    let h2 = doc.alloc_node(Node::new(Role::Heading(2)));
    doc.append_child(NodeId::ROOT, h2);
    add_text(&mut doc, h2, "See ");
    let link = doc.alloc_node(Node::new(Role::Link));
    doc.append_child(h2, link);
    doc.semantics.set_href(link, "guide.md");
    add_text(&mut doc, link, "the guide");

    annotate_headings(&mut doc);

    assert_eq!(doc.semantics.id(h1), Some("install-cargo"));
    assert_eq!(doc.semantics.id(h2), Some("see-the-guide"));
}

#[test]
fn duplicate_heading_text_collides_identically_on_both_sides() {
    // Documented known limitation: no de-duplication, both point at the
    // same anchor, and both sides must produce the same collision.
    let raw = "# Setup\n\n## Install\n\n## Install\n";
    let records = extract_headings(raw, &ExtractOptions::default()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].identifier, "install");
    assert_eq!(records[1].identifier, "install");

    let mut doc = Document::new();
    add_heading(&mut doc, 1, "Setup");
    let h1 = add_heading(&mut doc, 2, "Install");
    let h2 = add_heading(&mut doc, 2, "Install");
    annotate_headings(&mut doc);

    assert_eq!(doc.semantics.id(h1), Some("install"));
    assert_eq!(doc.semantics.id(h2), Some("install"));
}

#[test]
fn zero_headings_means_no_secondary_navigation() {
    let records = extract_headings("Just prose.\n\nMore prose.\n", &ExtractOptions::default())
        .unwrap();
    assert!(records.is_empty());
}

#[test]
fn callout_kinds_feed_the_badge_ui() {
    let raw = "\
## Setup

:::warning
Read this first.
:::

:::tip
A shortcut.
:::

:::warning
Another warning, same kind.
:::

## Usage
";
    let records = extract_headings(raw, &ExtractOptions::default()).unwrap();

    let kinds: Vec<&str> = records[0].callout_kinds.iter().map(|s| s.as_str()).collect();
    assert_eq!(kinds, vec!["tip", "warning"]);
    assert!(records[1].callout_kinds.is_empty());
}

#[test]
fn wide_band_with_top_level() {
    let raw = "# Title\n## A\n### B\n#### C\n##### D\n";
    let options = ExtractOptions {
        min_level: 2,
        max_level: 4,
        include_top_level: true,
    };
    let records = extract_headings(raw, &options).unwrap();
    let levels: Vec<u8> = records.iter().map(|r| r.level).collect();
    assert_eq!(levels, vec![1, 2, 3, 4]);
}
