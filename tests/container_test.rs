//! Container materialization through the public API: marker pairs,
//! idempotence, failure semantics, and the scheduler's re-entrancy and
//! cancellation guarantees.

use mdnav::container::{
    ContainerStyles, RescanScheduler, materialize_containers,
};
use mdnav::dom::text::flatten_text;
use mdnav::dom::{Document, Node, NodeId, Role};

fn add_paragraph(doc: &mut Document, text: &str) -> NodeId {
    let p = doc.alloc_node(Node::new(Role::Paragraph));
    doc.append_child(NodeId::ROOT, p);
    let range = doc.append_text(text);
    let t = doc.alloc_node(Node::text(range));
    doc.append_child(p, t);
    p
}

// ============================================================================
// Materialization
// ============================================================================

#[test]
fn warning_container_wraps_bold_paragraph() {
    // :::warning / **Be careful** / :::
    let mut doc = Document::new();
    add_paragraph(&mut doc, ":::warning");

    let p = doc.alloc_node(Node::new(Role::Paragraph));
    doc.append_child(NodeId::ROOT, p);
    let strong = doc.alloc_node(Node::new(Role::Emphasis));
    doc.append_child(p, strong);
    let range = doc.append_text("Be careful");
    let t = doc.alloc_node(Node::text(range));
    doc.append_child(strong, t);

    add_paragraph(&mut doc, ":::");

    let report = materialize_containers(&mut doc);
    assert_eq!(report.materialized, 1);

    let children: Vec<_> = doc.children(NodeId::ROOT).collect();
    assert_eq!(children.len(), 1);
    let wrapper = children[0];
    assert_eq!(doc.node(wrapper).unwrap().role, Role::Container);
    assert_eq!(doc.semantics.label(wrapper), Some("Warning"));

    // Exactly one paragraph inside, bold text preserved
    let inner: Vec<_> = doc.children(wrapper).collect();
    assert_eq!(inner.len(), 1);
    assert_eq!(doc.node(inner[0]).unwrap().role, Role::Paragraph);
    assert_eq!(flatten_text(&doc, inner[0]), "Be careful");

    // Marker text does not appear in the rendered content
    assert!(!flatten_text(&doc, NodeId::ROOT).contains(":::"));
}

#[test]
fn exactly_one_container_per_pair_and_second_pass_finds_nothing() {
    let mut doc = Document::new();
    add_paragraph(&mut doc, "before");
    add_paragraph(&mut doc, ":::tip");
    add_paragraph(&mut doc, "inside");
    add_paragraph(&mut doc, ":::");
    add_paragraph(&mut doc, "after");

    let first = materialize_containers(&mut doc);
    assert_eq!(first.materialized, 1);

    let shape_after_first: Vec<_> = doc
        .children(NodeId::ROOT)
        .map(|id| doc.node(id).unwrap().role)
        .collect();
    assert_eq!(
        shape_after_first,
        vec![Role::Paragraph, Role::Container, Role::Paragraph]
    );

    let second = materialize_containers(&mut doc);
    assert_eq!(second.materialized, 0);
    assert!(second.unmatched.is_empty());

    let shape_after_second: Vec<_> = doc
        .children(NodeId::ROOT)
        .map(|id| doc.node(id).unwrap().role)
        .collect();
    assert_eq!(shape_after_first, shape_after_second);
}

#[test]
fn unmatched_start_marker_degrades_to_visible_text() {
    let mut doc = Document::new();
    let start = add_paragraph(&mut doc, ":::danger");
    let body = add_paragraph(&mut doc, "the rest of the page");

    let report = materialize_containers(&mut doc);

    assert_eq!(report.materialized, 0);
    assert_eq!(report.unmatched, vec!["danger".to_string()]);

    // No partial wrapper; original nodes intact and legible
    let children: Vec<_> = doc.children(NodeId::ROOT).collect();
    assert_eq!(children, vec![start, body]);
    assert!(flatten_text(&doc, NodeId::ROOT).contains(":::danger"));
}

#[test]
fn unmatched_marker_does_not_block_later_pairs() {
    let mut doc = Document::new();
    add_paragraph(&mut doc, ":::tip");
    add_paragraph(&mut doc, "matched");
    add_paragraph(&mut doc, ":::");
    add_paragraph(&mut doc, ":::note");
    add_paragraph(&mut doc, "never closed");

    let report = materialize_containers(&mut doc);

    assert_eq!(report.materialized, 1);
    assert_eq!(report.unmatched, vec!["note".to_string()]);
}

#[test]
fn prose_mentioning_markers_is_not_a_marker() {
    let mut doc = Document::new();
    add_paragraph(&mut doc, "Use ::: to open a container.");
    add_paragraph(&mut doc, "The :::tip syntax is documented below.");

    let report = materialize_containers(&mut doc);

    assert_eq!(report.materialized, 0);
    assert!(report.unmatched.is_empty());
    assert_eq!(doc.children(NodeId::ROOT).count(), 2);
}

#[test]
fn heading_between_markers_is_collected_as_content() {
    let mut doc = Document::new();
    add_paragraph(&mut doc, ":::info");
    let h = doc.alloc_node(Node::new(Role::Heading(3)));
    doc.append_child(NodeId::ROOT, h);
    let range = doc.append_text("Inside");
    let t = doc.alloc_node(Node::text(range));
    doc.append_child(h, t);
    add_paragraph(&mut doc, ":::");

    let report = materialize_containers(&mut doc);

    assert_eq!(report.materialized, 1);
    let wrapper = doc.children(NodeId::ROOT).next().unwrap();
    let inner: Vec<_> = doc.children(wrapper).collect();
    assert_eq!(doc.node(inner[0]).unwrap().role, Role::Heading(3));
}

#[test]
fn unknown_type_gets_fallback_style_but_real_label() {
    let mut doc = Document::new();
    add_paragraph(&mut doc, ":::zettelkasten");
    add_paragraph(&mut doc, "whatever this is");
    add_paragraph(&mut doc, ":::");

    let report = materialize_containers(&mut doc);
    assert_eq!(report.materialized, 1);

    let wrapper = doc.children(NodeId::ROOT).next().unwrap();
    assert_eq!(doc.semantics.kind(wrapper), Some("zettelkasten"));
    assert_eq!(doc.semantics.label(wrapper), Some("Zettelkasten"));

    let styles = ContainerStyles::default();
    assert!(!styles.contains("zettelkasten"));
    assert_eq!(styles.resolve("zettelkasten").class, "callout-unknown");
    assert_eq!(styles.resolve("tip").class, "callout-tip");
}

// ============================================================================
// Scheduler-driven rescans
// ============================================================================

#[test]
fn mount_then_async_insert_materializes_once_each() {
    let mut doc = Document::new();
    add_paragraph(&mut doc, ":::tip");
    add_paragraph(&mut doc, "first");
    add_paragraph(&mut doc, ":::");

    let mut sched = RescanScheduler::default();
    sched.schedule_initial(0);

    let token = sched.poll(1_000).expect("initial scan due");
    let report = sched.run_scan(&mut doc, token).unwrap();
    assert_eq!(report.materialized, 1);

    // An async re-render appends another pair
    let s = add_paragraph(&mut doc, ":::note");
    let b = add_paragraph(&mut doc, "late content");
    let e = add_paragraph(&mut doc, ":::");
    sched.note_mutations(&doc, &[s, b, e], 2_000);

    assert!(sched.poll(2_001).is_none(), "debounce still open");
    let token = sched.poll(2_500).expect("debounced scan due");
    let report = sched.run_scan(&mut doc, token).unwrap();
    assert_eq!(report.materialized, 1);
    assert_eq!(report.unmatched.len(), 0);

    // Both containers present, nothing else
    let kinds: Vec<_> = doc
        .children(NodeId::ROOT)
        .filter_map(|id| doc.semantics.kind(id).map(String::from))
        .collect();
    assert_eq!(kinds, vec!["tip".to_string(), "note".to_string()]);
}

#[test]
fn mutation_burst_collapses_to_one_scan() {
    let mut doc = Document::new();
    let mut sched = RescanScheduler::new(100);

    let mut last = 0;
    for i in 0..10 {
        let p = add_paragraph(&mut doc, "streamed paragraph");
        last = i * 10;
        sched.note_mutations(&doc, &[p], last);
    }

    // One token for the whole burst
    assert!(sched.poll(last + 99).is_none());
    assert!(sched.poll(last + 100).is_some());
    assert!(sched.poll(last + 200).is_none());
}

#[test]
fn stale_scan_after_page_navigation_is_dropped() {
    let mut old_doc = Document::new();
    let p = add_paragraph(&mut old_doc, ":::tip");
    add_paragraph(&mut old_doc, "old page");
    add_paragraph(&mut old_doc, ":::");

    let mut sched = RescanScheduler::new(100);
    sched.note_mutations(&old_doc, &[p], 0);
    let token = sched.poll(100).expect("scan due");

    // User navigates; a new document mounts with its own markers
    sched.document_swapped();
    let mut new_doc = Document::new();
    add_paragraph(&mut new_doc, ":::warning");
    add_paragraph(&mut new_doc, "new page");
    add_paragraph(&mut new_doc, ":::");

    assert!(sched.run_scan(&mut new_doc, token).is_none());
    // New document untouched by the stale token
    assert_eq!(new_doc.children(NodeId::ROOT).count(), 3);

    // The new page's own scan works normally
    sched.schedule_initial(200);
    let token = sched.poll(1_000).unwrap();
    let report = sched.run_scan(&mut new_doc, token).unwrap();
    assert_eq!(report.materialized, 1);
}
