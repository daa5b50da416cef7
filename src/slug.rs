//! Pure slug generation for heading anchors.
//!
//! This is the single identifier code path for the whole crate: the offline
//! outline extractor and the live heading annotator both call [`slugify`],
//! which is what keeps anchor links and scroll-spy in agreement. The
//! function is pure and allocation-only, so it can run at build time and at
//! render time with bit-identical results.

/// Generate a URL-fragment slug from markup-stripped heading text.
///
/// Lowercases, keeps alphanumerics and internal hyphens, collapses
/// whitespace runs (and underscores) to single hyphens, and drops all other
/// punctuation. Never produces leading, trailing, or doubled hyphens.
///
/// Empty input, or input that is all punctuation, yields an empty string;
/// callers treat an empty identifier as "no anchor".
///
/// # Examples
///
/// ```
/// use mdnav::slug::slugify;
///
/// assert_eq!(slugify("Getting Started"), "getting-started");
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
/// ```
pub fn slugify(text: &str) -> String {
    let mut mapped = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            // Lowercasing can expand to multiple chars (e.g. 'İ'); keep only
            // the alphanumeric ones so combining marks never leak through.
            mapped.extend(c.to_lowercase().filter(|lc| lc.is_alphanumeric()));
        } else if c.is_whitespace() || c == '-' || c == '_' {
            mapped.push('-');
        }
        // Punctuation (quotes, parentheses, sentence punctuation): skip
    }

    mapped
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
