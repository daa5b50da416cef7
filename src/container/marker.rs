//! Container marker recognition.
//!
//! A custom container is delimited by two paragraph-level markers:
//!
//! ```text
//! :::tip
//! Any block content.
//! :::
//! ```
//!
//! The converter treats both lines as ordinary paragraphs; the materializer
//! rewrites them. The same recognizer drives callout detection in the
//! outline extractor, so the two conventions cannot drift.

/// The marker fence.
const FENCE: &str = ":::";

/// Parse a start marker from a paragraph's trimmed text.
///
/// Matches `:::` followed by an optional space and a type name made of
/// alphanumerics, hyphens, and underscores. Anything else (extra fence
/// colons, trailing words) is not a marker.
///
/// Returns the captured type name.
pub fn parse_start_marker(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    let rest = trimmed.strip_prefix(FENCE)?;
    let kind = rest.trim_start();
    if kind.is_empty() {
        return None; // bare ::: is an end marker
    }
    if kind
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        Some(kind)
    } else {
        None
    }
}

/// Check whether a paragraph's trimmed text is exactly the end marker.
pub fn is_end_marker(text: &str) -> bool {
    text.trim() == FENCE
}

/// Derive the display label from a captured type name: first letter
/// uppercased, rest unchanged ("tip" -> "Tip").
pub fn label_for(kind: &str) -> String {
    let mut chars = kind.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
