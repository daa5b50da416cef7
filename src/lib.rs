//! # mdnav
//!
//! Structural post-processing and navigation synchronization for rendered
//! markdown documentation pages.
//!
//! ## Features
//!
//! - Stable, collision-free heading anchors computed identically from raw
//!   text (ahead of rendering) and from the rendered tree
//! - Outline extraction ([`outline::extract_headings`]) for "on this page"
//!   navigation, with per-heading callout badges
//! - Materialization of `:::type` custom containers the markdown converter
//!   does not natively understand, idempotent under asynchronous re-renders
//! - Scroll-position synchronization for nested scrollable content regions,
//!   including programmatic navigation without a native anchor jump
//!
//! ## Quick Start
//!
//! ```
//! use mdnav::outline::{ExtractOptions, extract_headings};
//! use mdnav::slug::slugify;
//!
//! let raw = "# Guide\n\n## Setup\n\n:::tip\nUse the defaults.\n:::\n";
//! let headings = extract_headings(raw, &ExtractOptions::default()).unwrap();
//!
//! assert_eq!(headings[0].identifier, "setup");
//! assert!(headings[0].callout_kinds.contains("tip"));
//! assert_eq!(headings[0].identifier, slugify(&headings[0].text));
//! ```
//!
//! ## Post-processing the rendered tree
//!
//! The markdown converter produces a [`dom::Document`]; after it mounts,
//! [`annotate::annotate_headings`] attaches anchors and
//! [`container::materialize_containers`] rewrites marker pairs:
//!
//! ```
//! use mdnav::annotate::annotate_headings;
//! use mdnav::container::materialize_containers;
//! use mdnav::dom::Document;
//!
//! let mut doc = Document::new();
//! // ... converter output appended here ...
//! annotate_headings(&mut doc);
//! let report = materialize_containers(&mut doc);
//! assert_eq!(report.materialized, 0);
//! ```

pub mod annotate;
pub mod container;
pub mod dom;
pub mod error;
pub mod outline;
pub mod scroll;
pub mod slug;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use annotate::annotate_headings;
pub use container::{MaterializeReport, RescanScheduler, materialize_containers};
pub use error::{Error, Result};
pub use outline::{ExtractOptions, HeadingRecord, extract_headings};
pub use scroll::{NavigationEffect, ObserverConfig, ScrollRegion, ScrollSync};
pub use slug::slugify;
