//! Outline extraction from raw markdown text.
//!
//! Scans line-oriented ATX headings and produces the ordered
//! [`HeadingRecord`] list that drives the "on this page" navigation panel.
//! Runs ahead of rendering, over raw text; the live annotator
//! ([`crate::annotate`]) computes the same identifiers over the rendered
//! tree, and both go through [`crate::slug::slugify`], so the two views of
//! heading structure never diverge.

mod inline;

pub use inline::strip_inline_markup;

use std::collections::BTreeSet;

use memchr::memchr_iter;

use crate::container::marker::parse_start_marker;
use crate::error::{Error, Result};
use crate::slug::slugify;

/// One heading in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HeadingRecord {
    /// Heading level (1-6).
    pub level: u8,
    /// Markup-stripped display text.
    pub text: String,
    /// URL-fragment identifier; empty means "no anchor".
    pub identifier: String,
    /// Distinct callout kinds found in this heading's span.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "BTreeSet::is_empty"))]
    pub callout_kinds: BTreeSet<String>,
}

/// Which heading levels the outline includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Lowest level included in the band.
    pub min_level: u8,
    /// Highest level included in the band.
    pub max_level: u8,
    /// Also include level-1 headings even when the band starts deeper.
    pub include_top_level: bool,
}

impl Default for ExtractOptions {
    /// The docs-page convention: h2-h3 in the panel, the h1 is the page title.
    fn default() -> Self {
        Self {
            min_level: 2,
            max_level: 3,
            include_top_level: false,
        }
    }
}

impl ExtractOptions {
    fn validate(&self) -> Result<()> {
        if self.min_level < 1 || self.max_level > 6 || self.min_level > self.max_level {
            return Err(Error::InvalidLevelRange {
                min: self.min_level,
                max: self.max_level,
            });
        }
        Ok(())
    }

    fn in_band(&self, level: u8) -> bool {
        (level >= self.min_level && level <= self.max_level)
            || (self.include_top_level && level == 1)
    }
}

/// Extract the ordered heading list from raw markdown.
///
/// Heading levels outside the band are excluded and do not bound the span
/// search: a heading's span runs to the next *in-band* heading or document
/// end, and every container start marker (`:::kind`) inside it contributes
/// to the record's callout set. Lines inside fenced code blocks are
/// ignored entirely. A document with zero in-band headings returns an
/// empty list ("no secondary navigation"), not an error.
pub fn extract_headings(raw: &str, options: &ExtractOptions) -> Result<Vec<HeadingRecord>> {
    options.validate()?;

    let mut records: Vec<HeadingRecord> = Vec::new();
    let mut fence: Option<(char, usize)> = None;

    for line in lines(raw) {
        if let Some((fence_char, fence_len)) = fence {
            if closes_fence(line, fence_char, fence_len) {
                fence = None;
            }
            continue;
        }
        if let Some(open) = opens_fence(line) {
            fence = Some(open);
            continue;
        }

        if let Some((level, rest)) = parse_atx_heading(line) {
            if options.in_band(level) {
                let text = display_text(rest);
                let identifier = slugify(&text);
                records.push(HeadingRecord {
                    level,
                    text,
                    identifier,
                    callout_kinds: BTreeSet::new(),
                });
            }
            continue;
        }

        // Ordinary line: callout markers accrue to the current heading's span.
        if let Some(kind) = parse_start_marker(line) {
            if let Some(current) = records.last_mut() {
                current.callout_kinds.insert(kind.to_string());
            }
        }
    }

    Ok(records)
}

/// Iterate lines without allocating, newline-terminated or not.
fn lines(raw: &str) -> impl Iterator<Item = &str> {
    let bytes = raw.as_bytes();
    let mut start = 0;
    let mut breaks = memchr_iter(b'\n', bytes);
    std::iter::from_fn(move || {
        if start > bytes.len() {
            return None;
        }
        match breaks.next() {
            Some(end) => {
                let line = raw[start..end].trim_end_matches('\r');
                start = end + 1;
                Some(line)
            }
            None if start < bytes.len() => {
                let line = &raw[start..];
                start = bytes.len() + 1;
                Some(line)
            }
            None => None,
        }
    })
}

/// Parse an ATX heading marker: 1-6 `#` at line start followed by a space.
fn parse_atx_heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.starts_with(' ') && !rest.starts_with('\t') && !rest.is_empty() {
        return None;
    }
    Some((hashes as u8, rest))
}

/// Reduce raw heading text to display text: drop a trailing ATX closing
/// sequence, strip inline markup, collapse whitespace.
fn display_text(raw: &str) -> String {
    let mut text = raw.trim();
    // Closing sequence: a run of #'s preceded by a space ("## Title ##")
    let without_close = text.trim_end_matches('#');
    if without_close.len() < text.len()
        && without_close.ends_with([' ', '\t'])
    {
        text = without_close.trim_end();
    }

    strip_inline_markup(text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// A code fence opens with at least three backticks or tildes after
/// optional indentation.
fn opens_fence(line: &str) -> Option<(char, usize)> {
    let trimmed = line.trim_start();
    for fence_char in ['`', '~'] {
        let len = trimmed.chars().take_while(|&c| c == fence_char).count();
        if len >= 3 {
            return Some((fence_char, len));
        }
    }
    None
}

/// A fence closes with a run of the same character at least as long, and
/// nothing else on the line.
fn closes_fence(line: &str, fence_char: char, fence_len: usize) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= fence_len && trimmed.chars().all(|c| c == fence_char)
}
