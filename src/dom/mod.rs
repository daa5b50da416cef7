//! Rendered document tree.
//!
//! The markdown converter (an external collaborator) produces a live tree of
//! block and inline nodes. This module holds that tree in normalized form:
//! - Nodes with semantic roles (paragraphs, headings, links, etc.)
//! - Sparse semantic attributes (id, href, container kind)
//! - Global text buffer with range references
//!
//! The tree uses a parent-pointer / first-child / next-sibling representation
//! for efficient traversal and minimal memory overhead. Post-processing
//! passes (heading annotation, container materialization) mutate it in place
//! with stable NodeIds: surgery unlinks nodes rather than freeing them, so an
//! id held across a pass never dangles.
//!
//! # Example
//!
//! ```
//! use mdnav::dom::{Document, Role};
//!
//! let doc = Document::new();
//! let root = doc.root();
//! assert_eq!(doc.node(root).unwrap().role, Role::Root);
//! ```

mod node;
mod semantic;
pub mod text;

pub use node::{Node, NodeId, Role, TextRange};
pub use semantic::SemanticMap;

/// A rendered document in normalized tree form.
#[derive(Debug, Clone)]
pub struct Document {
    /// All nodes in the tree (index 0 is always the root).
    nodes: Vec<Node>,
    /// Sparse semantic attributes (id, href, kind, label).
    pub semantics: SemanticMap,
    /// Global text buffer (nodes reference ranges into this).
    text: String,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a new empty document with a root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(Role::Root)],
            semantics: SemanticMap::new(),
            text: String::new(),
        }
    }

    /// Get the root node ID.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Get the number of nodes ever allocated (including detached ones).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Allocate a new node and return its ID.
    pub fn alloc_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Append text to the global buffer and return the range.
    pub fn append_text(&mut self, text: &str) -> TextRange {
        let start = self.text.len() as u32;
        self.text.push_str(text);
        TextRange::new(start, text.len() as u32)
    }

    /// Get text from a range.
    pub fn text(&self, range: TextRange) -> &str {
        let start = range.start as usize;
        let end = (range.start + range.len) as usize;
        &self.text[start..end]
    }

    /// Append a child node to a parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(child_node) = self.nodes.get_mut(child.0 as usize) {
            child_node.parent = Some(parent);
        }

        match self.last_child(parent) {
            Some(last) => {
                if let Some(last_node) = self.nodes.get_mut(last.0 as usize) {
                    last_node.next_sibling = Some(child);
                }
            }
            None => {
                if let Some(parent_node) = self.nodes.get_mut(parent.0 as usize) {
                    parent_node.first_child = Some(child);
                }
            }
        }
    }

    /// Get the last child of a node.
    pub fn last_child(&self, parent: NodeId) -> Option<NodeId> {
        let mut current = self.node(parent)?.first_child?;
        while let Some(next) = self.node(current).and_then(|n| n.next_sibling) {
            current = next;
        }
        Some(current)
    }

    /// Get the previous sibling of a node (O(siblings) scan from the parent).
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.node(id)?.parent?;
        let mut current = self.node(parent)?.first_child?;
        if current == id {
            return None;
        }
        while let Some(next) = self.node(current).and_then(|n| n.next_sibling) {
            if next == id {
                return Some(current);
            }
            current = next;
        }
        None
    }

    /// Insert `node` as a sibling immediately before `reference`.
    ///
    /// `reference` must be attached (have a parent); `node` must be detached.
    pub fn insert_before(&mut self, node: NodeId, reference: NodeId) {
        let Some(parent) = self.node(reference).and_then(|n| n.parent) else {
            return;
        };

        match self.prev_sibling(reference) {
            Some(prev) => {
                if let Some(prev_node) = self.node_mut(prev) {
                    prev_node.next_sibling = Some(node);
                }
            }
            None => {
                if let Some(parent_node) = self.node_mut(parent) {
                    parent_node.first_child = Some(node);
                }
            }
        }

        if let Some(n) = self.node_mut(node) {
            n.parent = Some(parent);
            n.next_sibling = Some(reference);
        }
    }

    /// Unlink a node from its parent's child chain.
    ///
    /// The node (and its subtree) stays allocated but becomes unreachable
    /// from the root; future scans never re-find it.
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.node(id).and_then(|n| n.parent) else {
            return;
        };
        let next = self.node(id).and_then(|n| n.next_sibling);

        match self.prev_sibling(id) {
            Some(prev) => {
                if let Some(prev_node) = self.node_mut(prev) {
                    prev_node.next_sibling = next;
                }
            }
            None => {
                if let Some(parent_node) = self.node_mut(parent) {
                    parent_node.first_child = next;
                }
            }
        }

        if let Some(n) = self.node_mut(id) {
            n.parent = None;
            n.next_sibling = None;
        }
    }

    /// Deep-clone a subtree, returning the detached clone's root ID.
    ///
    /// Text ranges are shared (the buffer is append-only); semantic
    /// attributes are copied onto the clones.
    pub fn clone_subtree(&mut self, id: NodeId) -> NodeId {
        let Some(source) = self.node(id) else {
            // Caller handed us a bogus id; produce an inert node.
            return self.alloc_node(Node::new(Role::Inline));
        };

        let mut clone = Node::new(source.role);
        clone.text = source.text;
        let clone_id = self.alloc_node(clone);
        self.semantics.copy_attrs(id, clone_id);

        let children: Vec<NodeId> = self.children(id).collect();
        for child in children {
            let child_clone = self.clone_subtree(child);
            self.append_child(clone_id, child_clone);
        }

        clone_id
    }

    /// Check whether `id` is a descendant of `ancestor` (or `ancestor` itself).
    pub fn is_descendant_of(&self, id: NodeId, ancestor: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(c) = current {
            if c == ancestor {
                return true;
            }
            current = self.node(c).and_then(|n| n.parent);
        }
        false
    }

    /// Iterate over children of a node.
    pub fn children(&self, parent: NodeId) -> ChildIter<'_> {
        let first_child = self
            .nodes
            .get(parent.0 as usize)
            .and_then(|n| n.first_child);
        ChildIter {
            doc: self,
            current: first_child,
        }
    }

    /// Iterate over all reachable nodes in depth-first order.
    pub fn iter_dfs(&self) -> DfsIter<'_> {
        DfsIter {
            doc: self,
            stack: vec![NodeId::ROOT],
        }
    }
}

/// Iterator over children of a node.
pub struct ChildIter<'a> {
    doc: &'a Document,
    current: Option<NodeId>,
}

impl<'a> Iterator for ChildIter<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = self
            .doc
            .nodes
            .get(current.0 as usize)
            .and_then(|n| n.next_sibling);
        Some(current)
    }
}

/// Depth-first iterator over all reachable nodes.
pub struct DfsIter<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for DfsIter<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;

        // Push children in reverse order so they're visited left-to-right
        let mut children: Vec<NodeId> = self.doc.children(current).collect();
        children.reverse();
        self.stack.extend(children);

        Some(current)
    }
}
