//! Sparse semantic attributes for document nodes.
//!
//! Most nodes don't carry an id, href, or container kind.
//! Using HashMaps is more memory-efficient than `Option<String>` on every Node.
//!
//! String values are stored in a single contiguous buffer, with TextRange
//! references into that buffer. This avoids per-attribute String allocations.

use std::collections::HashMap;

use super::node::{NodeId, TextRange};

/// Sparse map for semantic attributes.
///
/// Stores attributes only for nodes that have them, saving memory
/// compared to storing `Option<String>` on every node.
#[derive(Debug, Default, Clone)]
pub struct SemanticMap {
    /// Contiguous buffer for all string attribute values.
    buffer: String,
    /// id attribute (heading anchors).
    id: HashMap<NodeId, TextRange>,
    /// href attribute (for links).
    href: HashMap<NodeId, TextRange>,
    /// src attribute (for images).
    src: HashMap<NodeId, TextRange>,
    /// alt attribute (for images).
    alt: HashMap<NodeId, TextRange>,
    /// Container kind (the captured type name, e.g. "tip").
    kind: HashMap<NodeId, TextRange>,
    /// Container display label (capitalized type name, e.g. "Tip").
    label: HashMap<NodeId, TextRange>,
    /// Programming language for code blocks.
    language: HashMap<NodeId, TextRange>,
}

impl SemanticMap {
    /// Create a new empty semantic map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a string to the buffer and return its TextRange.
    fn append(&mut self, s: &str) -> TextRange {
        let start = self.buffer.len() as u32;
        self.buffer.push_str(s);
        TextRange::new(start, s.len() as u32)
    }

    /// Get a string slice from a TextRange.
    fn get_str(&self, range: TextRange) -> &str {
        let start = range.start as usize;
        let end = (range.start + range.len) as usize;
        &self.buffer[start..end]
    }

    // --- id ---

    /// Set the id for a node. Empty ids are ignored: an empty identifier
    /// means "no anchor", never an empty attribute.
    pub fn set_id(&mut self, node: NodeId, id: &str) {
        if !id.is_empty() {
            let range = self.append(id);
            self.id.insert(node, range);
        }
    }

    /// Get the id for a node.
    pub fn id(&self, node: NodeId) -> Option<&str> {
        self.id.get(&node).map(|r| self.get_str(*r))
    }

    // --- href ---

    /// Set the href for a node.
    pub fn set_href(&mut self, node: NodeId, href: &str) {
        if !href.is_empty() {
            let range = self.append(href);
            self.href.insert(node, range);
        }
    }

    /// Get the href for a node.
    pub fn href(&self, node: NodeId) -> Option<&str> {
        self.href.get(&node).map(|r| self.get_str(*r))
    }

    // --- src ---

    /// Set the src for a node.
    pub fn set_src(&mut self, node: NodeId, src: &str) {
        if !src.is_empty() {
            let range = self.append(src);
            self.src.insert(node, range);
        }
    }

    /// Get the src for a node.
    pub fn src(&self, node: NodeId) -> Option<&str> {
        self.src.get(&node).map(|r| self.get_str(*r))
    }

    // --- alt ---

    /// Set the alt text for a node.
    pub fn set_alt(&mut self, node: NodeId, alt: &str) {
        if !alt.is_empty() {
            let range = self.append(alt);
            self.alt.insert(node, range);
        }
    }

    /// Get the alt text for a node.
    pub fn alt(&self, node: NodeId) -> Option<&str> {
        self.alt.get(&node).map(|r| self.get_str(*r))
    }

    // --- kind ---

    /// Set the container kind for a node.
    pub fn set_kind(&mut self, node: NodeId, kind: &str) {
        if !kind.is_empty() {
            let range = self.append(kind);
            self.kind.insert(node, range);
        }
    }

    /// Get the container kind for a node.
    pub fn kind(&self, node: NodeId) -> Option<&str> {
        self.kind.get(&node).map(|r| self.get_str(*r))
    }

    // --- label ---

    /// Set the display label for a node.
    pub fn set_label(&mut self, node: NodeId, label: &str) {
        if !label.is_empty() {
            let range = self.append(label);
            self.label.insert(node, range);
        }
    }

    /// Get the display label for a node.
    pub fn label(&self, node: NodeId) -> Option<&str> {
        self.label.get(&node).map(|r| self.get_str(*r))
    }

    // --- language ---

    /// Set the programming language for a code block.
    pub fn set_language(&mut self, node: NodeId, language: &str) {
        if !language.is_empty() {
            let range = self.append(language);
            self.language.insert(node, range);
        }
    }

    /// Get the programming language for a code block.
    pub fn language(&self, node: NodeId) -> Option<&str> {
        self.language.get(&node).map(|r| self.get_str(*r))
    }

    /// Copy all attributes of `from` onto `to`.
    ///
    /// Used when cloning subtrees during container materialization so the
    /// clones keep their anchors and link targets.
    pub fn copy_attrs(&mut self, from: NodeId, to: NodeId) {
        let pairs: Vec<(&'static str, String)> = [
            ("id", self.id(from)),
            ("href", self.href(from)),
            ("src", self.src(from)),
            ("alt", self.alt(from)),
            ("kind", self.kind(from)),
            ("label", self.label(from)),
            ("language", self.language(from)),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v.to_string())))
        .collect();

        for (name, value) in pairs {
            match name {
                "id" => self.set_id(to, &value),
                "href" => self.set_href(to, &value),
                "src" => self.set_src(to, &value),
                "alt" => self.set_alt(to, &value),
                "kind" => self.set_kind(to, &value),
                "label" => self.set_label(to, &value),
                "language" => self.set_language(to, &value),
                _ => unreachable!(),
            }
        }
    }

    /// Get the total number of stored attributes.
    pub fn len(&self) -> usize {
        self.id.len()
            + self.href.len()
            + self.src.len()
            + self.alt.len()
            + self.kind.len()
            + self.label.len()
            + self.language.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
