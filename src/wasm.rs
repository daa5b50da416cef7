//! WASM bindings for browser-side outline extraction.
//!
//! This module exposes the outline extractor to JavaScript via wasm-bindgen,
//! so the page shell can compute navigation data ahead of rendering with the
//! same slugs the live annotator will produce.

use wasm_bindgen::prelude::*;

use crate::outline::{ExtractOptions, extract_headings};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Extract the heading outline from raw markdown.
///
/// Returns a JSON array of `{ level, text, identifier, callout_kinds }`
/// records.
#[wasm_bindgen]
pub fn outline_json(
    raw: &str,
    min_level: u8,
    max_level: u8,
    top_level: bool,
) -> Result<String, JsValue> {
    let options = ExtractOptions {
        min_level,
        max_level,
        include_top_level: top_level,
    };
    let headings =
        extract_headings(raw, &options).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&headings).map_err(|e| JsValue::from_str(&e.to_string()))
}
