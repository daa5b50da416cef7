//! Live heading annotation.
//!
//! As the converter's output is committed to the tree, each heading node
//! gets the identifier derived from its flattened text. Anchors computed
//! here are guaranteed to match the outline extractor's identifiers for the
//! same document, because both sides call [`crate::slug::slugify`] on the
//! same markup-stripped text.

use log::debug;

use crate::dom::text::flatten_text;
use crate::dom::{Document, NodeId, Role};
use crate::slug::slugify;

/// Assign anchor identifiers to every heading node in the document.
///
/// Text content is never mutated; only the id attribute is attached. A
/// heading whose flattened text slugs to the empty string gets no anchor.
/// Re-running overwrites each id with the same value, so annotation is safe
/// to repeat after a re-render.
///
/// Returns the number of headings that received an identifier.
pub fn annotate_headings(doc: &mut Document) -> usize {
    let headings: Vec<NodeId> = doc
        .iter_dfs()
        .filter(|&id| matches!(doc.node(id).map(|n| n.role), Some(Role::Heading(_))))
        .collect();

    let mut annotated = 0;
    for id in headings {
        let text = flatten_text(doc, id);
        let slug = slugify(&text);
        if slug.is_empty() {
            debug!("heading node {:?} has no sluggable text, skipping anchor", id);
            continue;
        }
        doc.semantics.set_id(id, &slug);
        annotated += 1;
    }
    annotated
}
