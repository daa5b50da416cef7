//! Custom container materialization.
//!
//! The markdown converter has no knowledge of the `:::type` convention and
//! renders both markers as ordinary paragraphs. After the rendered tree is
//! committed, this pass finds marker pairs and rewrites the nodes between
//! them into a labeled [`Role::Container`] block.
//!
//! The pass is idempotent by construction: materialization consumes its own
//! input (the marker paragraphs are unlinked from the tree), so a second
//! scan over the same subtree finds no remaining markers for a pair. That is
//! what makes it safe to re-trigger from the mutation scheduler without any
//! "already processed" bookkeeping beyond what the tree itself encodes.
//!
//! ## Pass structure
//!
//! 1. **Discover** all paragraph nodes whose trimmed text is a start marker
//!    and that are not inside an already materialized container.
//! 2. **Collect** forward siblings until the exact end marker; exhausting
//!    the siblings fails that marker only (logged, tree untouched).
//! 3. **Materialize**: build the wrapper, move *clones* of the collected
//!    siblings inside, insert it before the end marker, then unlink the
//!    start marker, the original siblings, and the end marker.

pub mod marker;
pub mod scheduler;
mod styles;

pub use scheduler::{RescanScheduler, ScanToken};
pub use styles::{ContainerStyle, ContainerStyles};

use log::warn;

use crate::dom::text::flatten_text;
use crate::dom::{Document, Node, NodeId, Role};

/// Outcome of one materialization pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MaterializeReport {
    /// Number of containers created.
    pub materialized: usize,
    /// Kinds of start markers left unmatched (diagnostic, not fatal).
    pub unmatched: Vec<String>,
}

/// Scan the document and materialize every well-formed marker pair.
pub fn materialize_containers(doc: &mut Document) -> MaterializeReport {
    let mut report = MaterializeReport::default();

    let starts = discover_start_markers(doc);
    for (start_id, kind) in starts {
        // A preceding materialization in this pass may have consumed this
        // marker as ordinary content; detached nodes are out of play.
        if !doc.is_descendant_of(start_id, doc.root()) {
            continue;
        }

        match collect_until_end(doc, start_id) {
            Some((collected, end_id)) => {
                materialize_pair(doc, start_id, &kind, &collected, end_id);
                report.materialized += 1;
            }
            None => {
                warn!("unmatched container marker ':::{kind}', leaving text as rendered");
                report.unmatched.push(kind);
            }
        }
    }

    report
}

/// Find start-marker paragraphs in document order, skipping anything inside
/// an already materialized container (one level of nesting only).
fn discover_start_markers(doc: &Document) -> Vec<(NodeId, String)> {
    doc.iter_dfs()
        .filter_map(|id| {
            let node = doc.node(id)?;
            if !node.role.is_paragraph_like() {
                return None;
            }
            if inside_materialized(doc, id) {
                return None;
            }
            let text = flatten_text(doc, id);
            marker::parse_start_marker(&text).map(|kind| (id, kind.to_string()))
        })
        .collect()
}

fn inside_materialized(doc: &Document, id: NodeId) -> bool {
    let mut current = doc.node(id).and_then(|n| n.parent);
    while let Some(ancestor) = current {
        if doc.node(ancestor).map(|n| n.role) == Some(Role::Container)
            && doc.semantics.kind(ancestor).is_some()
        {
            return true;
        }
        current = doc.node(ancestor).and_then(|n| n.parent);
    }
    false
}

/// Walk forward siblings from the start marker, accumulating content nodes
/// until the end marker. Returns None if the siblings are exhausted.
fn collect_until_end(doc: &Document, start_id: NodeId) -> Option<(Vec<NodeId>, NodeId)> {
    let mut collected = Vec::new();
    let mut cursor = doc.node(start_id).and_then(|n| n.next_sibling);

    while let Some(id) = cursor {
        let node = doc.node(id)?;
        if node.role.is_paragraph_like() && marker::is_end_marker(&flatten_text(doc, id)) {
            return Some((collected, id));
        }
        collected.push(id);
        cursor = node.next_sibling;
    }

    None
}

/// Build the wrapper and swap it in for the marker pair.
///
/// Clones, rather than moving the live nodes, so iteration state held by the
/// discovery list stays valid while other markers are processed.
fn materialize_pair(
    doc: &mut Document,
    start_id: NodeId,
    kind: &str,
    collected: &[NodeId],
    end_id: NodeId,
) {
    let wrapper = doc.alloc_node(Node::new(Role::Container));
    doc.semantics.set_kind(wrapper, kind);
    doc.semantics.set_label(wrapper, &marker::label_for(kind));

    for &id in collected {
        let clone = doc.clone_subtree(id);
        doc.append_child(wrapper, clone);
    }

    doc.insert_before(wrapper, end_id);

    doc.detach(start_id);
    for &id in collected {
        doc.detach(id);
    }
    doc.detach(end_id);
}
