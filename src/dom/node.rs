//! Node types and roles for the rendered document tree.

/// Unique identifier for a node within a [`Document`](super::Document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The root node ID (always 0).
    pub const ROOT: NodeId = NodeId(0);
}

/// Semantic role of a node, independent of the converter's source element.
///
/// The markdown converter hands us a tree of block and inline nodes; this
/// role set covers the shapes the post-processing passes care about:
///
/// - Text (leaf text content)
/// - Paragraph (block-level text container, where container markers live)
/// - Heading(level) (anchor targets, h1-h6)
/// - Container (materialized custom blocks, plus generic grouping)
/// - inline content (Link, Code, Emphasis, Inline, Image, Break)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// Leaf text content node containing actual string data.
    /// References a range in the document's text buffer.
    #[default]
    Text,
    /// Paragraph - a block-level text container (`<p>`).
    /// Container markers are paragraphs whose entire trimmed text matches
    /// the marker pattern.
    Paragraph,
    /// Headings with level 1-6.
    Heading(u8),
    /// Generic structural container (div, section) and the wrapper produced
    /// by container materialization. kind/label live in the SemanticMap.
    Container,
    /// Hyperlinks. href in SemanticMap; inner text contributes to anchors.
    Link,
    /// Inline code span (`<code>`).
    Code,
    /// Emphasis or strong emphasis (`<em>`, `<strong>`).
    Emphasis,
    /// Generic inline container (e.g., `<span>`).
    /// Distinct from Text which contains actual string data.
    Inline,
    /// Raster images. src/alt in SemanticMap.
    Image,
    /// Ordered list (`<ol>`).
    OrderedList,
    /// Unordered list (`<ul>`).
    UnorderedList,
    /// Individual list items.
    ListItem,
    /// Block quotes.
    BlockQuote,
    /// Code block (`<pre><code>`).
    /// Language is stored in SemanticMap.
    CodeBlock,
    /// Semantic line break (`<br>`).
    /// A leaf node that signifies a layout break, not a container.
    Break,
    /// Horizontal rule (`<hr>`).
    Rule,
    /// Root document node.
    Root,
}

impl Role {
    /// Check if this role is paragraph-like: a node whose flattened text is
    /// eligible for container-marker matching.
    pub fn is_paragraph_like(self) -> bool {
        matches!(self, Role::Paragraph)
    }

    /// Check if this role represents inline content.
    pub fn is_inline(self) -> bool {
        matches!(
            self,
            Role::Text | Role::Inline | Role::Link | Role::Code | Role::Emphasis | Role::Image | Role::Break
        )
    }
}

/// Range into the document's text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRange {
    /// Byte offset into Document.text.
    pub start: u32,
    /// Length in bytes.
    pub len: u32,
}

impl TextRange {
    /// Create a new text range.
    pub fn new(start: u32, len: u32) -> Self {
        Self { start, len }
    }

    /// Check if the range is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the end offset.
    pub fn end(&self) -> u32 {
        self.start + self.len
    }
}

/// A node in the rendered document tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Semantic role.
    pub role: Role,
    /// Parent node (None for root and detached nodes).
    pub parent: Option<NodeId>,
    /// First child node.
    pub first_child: Option<NodeId>,
    /// Next sibling node.
    pub next_sibling: Option<NodeId>,
    /// Text content range (only for Text nodes).
    pub text: TextRange,
}

impl Node {
    /// Create a new node with default values.
    pub fn new(role: Role) -> Self {
        Self {
            role,
            parent: None,
            first_child: None,
            next_sibling: None,
            text: TextRange::default(),
        }
    }

    /// Create a text node with the given range.
    pub fn text(range: TextRange) -> Self {
        Self {
            role: Role::Text,
            parent: None,
            first_child: None,
            next_sibling: None,
            text: range,
        }
    }
}
