//! Flattening node content to plain text.
//!
//! Anchors are computed from a heading's *flattened* text: nested inline
//! nodes (links, emphasis, code spans) contribute their inner text and
//! nothing else. The raw-text extractor performs the equivalent stripping on
//! markdown source, so both sides slug the same string.

use super::{Document, NodeId, Role};

/// Flatten a node's content to whitespace-normalized plain text.
pub fn flatten_text(doc: &Document, id: NodeId) -> String {
    let mut result = String::new();
    flatten_recursive(doc, id, &mut result);
    result.trim().to_string()
}

fn flatten_recursive(doc: &Document, id: NodeId, result: &mut String) {
    let Some(node) = doc.node(id) else {
        return;
    };

    match node.role {
        Role::Text => {
            if !node.text.is_empty() {
                push_normalized(doc.text(node.text), result);
            }
        }
        Role::Break => {
            if !result.is_empty() && !result.ends_with(' ') {
                result.push(' ');
            }
        }
        // Anything else: an element whose children carry the text.
        _ => {
            for child_id in doc.children(id) {
                flatten_recursive(doc, child_id, result);
            }
        }
    }
}

/// Append text with whitespace runs collapsed, preserving word boundaries
/// across adjacent inline nodes.
fn push_normalized(text: &str, result: &mut String) {
    let has_leading = text.starts_with(char::is_whitespace);
    let has_trailing = text.ends_with(char::is_whitespace);
    let words: Vec<&str> = text.split_whitespace().collect();

    if !words.is_empty() {
        if has_leading && !result.is_empty() && !result.ends_with(' ') {
            result.push(' ');
        }
        result.push_str(&words.join(" "));
        if has_trailing {
            result.push(' ');
        }
    } else if !text.is_empty() && !result.is_empty() && !result.ends_with(' ') {
        result.push(' ');
    }
}
