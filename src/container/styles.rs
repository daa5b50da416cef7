//! Container type-to-style lookup.
//!
//! Type names are an open set: the materializer accepts any captured name
//! and the renderer falls back to the "unknown" style when no mapping
//! exists. New container types need a table entry, not a code change.

use std::collections::HashMap;

/// Visual style descriptor for a container kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerStyle {
    /// CSS class applied to the wrapper.
    pub class: String,
    /// Icon name for the badge UI.
    pub icon: String,
}

impl ContainerStyle {
    fn new(class: &str, icon: &str) -> Self {
        Self {
            class: class.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Lookup table from container kind to visual style, with a fallback.
#[derive(Debug, Clone)]
pub struct ContainerStyles {
    styles: HashMap<String, ContainerStyle>,
    fallback: ContainerStyle,
}

impl Default for ContainerStyles {
    /// The stock docs-page kinds.
    fn default() -> Self {
        let mut styles = HashMap::new();
        styles.insert("tip".to_string(), ContainerStyle::new("callout-tip", "lightbulb"));
        styles.insert("note".to_string(), ContainerStyle::new("callout-note", "pencil"));
        styles.insert("info".to_string(), ContainerStyle::new("callout-info", "circle-info"));
        styles.insert(
            "warning".to_string(),
            ContainerStyle::new("callout-warning", "triangle-alert"),
        );
        styles.insert(
            "danger".to_string(),
            ContainerStyle::new("callout-danger", "octagon-alert"),
        );
        Self {
            styles,
            fallback: ContainerStyle::new("callout-unknown", "square"),
        }
    }
}

impl ContainerStyles {
    /// Register or replace a style for a kind.
    pub fn insert(&mut self, kind: &str, style: ContainerStyle) {
        self.styles.insert(kind.to_string(), style);
    }

    /// Whether an explicit mapping exists for this kind.
    pub fn contains(&self, kind: &str) -> bool {
        self.styles.contains_key(kind)
    }

    /// Resolve a kind to its style, or the fallback for unknown kinds.
    pub fn resolve(&self, kind: &str) -> &ContainerStyle {
        self.styles.get(kind).unwrap_or(&self.fallback)
    }
}
