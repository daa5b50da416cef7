//! Scroll synchronization for the "on this page" panel.
//!
//! Documentation content lives in a nested scrollable region, not the
//! window, so every computation here is relative to that container: heading
//! offsets are measured from the top of the scrollable content, and
//! programmatic navigation scrolls the container itself. A naive
//! viewport-relative calculation breaks the moment the region is nested.
//!
//! The synchronizer owns the active heading. It is driven by the host's
//! visibility observations (an intersection mechanism over heading anchor
//! elements) and by panel clicks routed through [`ScrollSync::navigate_to`].
//! It only ever reads positions; the tree is mutated exclusively by the
//! container materializer, so the two components need no synchronization
//! beyond that role separation.

use log::warn;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters that cannot appear raw in a URL fragment.
const FRAGMENT: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');

/// Geometry of the scrollable content region at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRegion {
    /// Current scroll offset of the container.
    pub scroll_top: f32,
    /// Visible height of the container.
    pub viewport_height: f32,
    /// Total height of the scrollable content.
    pub content_height: f32,
}

impl ScrollRegion {
    /// The maximum reachable scroll offset.
    pub fn max_scroll(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }
}

/// Tuning for the visibility observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverConfig {
    /// Fraction of the viewport height forming the "active" band at the top
    /// of the region. A heading becomes active once it scrolls into this
    /// band, not only when centered.
    pub top_band_fraction: f32,
    /// Slack above the region top: a heading that just scrolled past the
    /// top edge still counts as visible by this many pixels.
    pub min_visible: f32,
    /// Pixels of breathing room above a heading after programmatic
    /// navigation.
    pub comfort_margin: f32,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            top_band_fraction: 0.3,
            min_visible: 8.0,
            comfort_margin: 16.0,
        }
    }
}

/// A heading anchor's measured position, relative to the scrollable
/// content (not the viewport).
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingPosition {
    pub identifier: String,
    pub offset: f32,
}

/// Host instructions produced by a completed [`ScrollSync::navigate_to`].
///
/// The host scrolls the container (not the window) smoothly to
/// `scroll_top`, and writes `hash` to the location without triggering the
/// browser's native instantaneous jump.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationEffect {
    /// Target scroll offset for the container.
    pub scroll_top: f32,
    /// Location hash to record for shareability, including the `#`.
    pub hash: String,
}

/// Tracks which heading is active within the scrollable content region.
#[derive(Debug)]
pub struct ScrollSync {
    config: ObserverConfig,
    positions: Vec<HeadingPosition>,
    was_in_band: Vec<bool>,
    active: Option<String>,
}

impl Default for ScrollSync {
    fn default() -> Self {
        Self::new(ObserverConfig::default())
    }
}

impl ScrollSync {
    pub fn new(config: ObserverConfig) -> Self {
        Self {
            config,
            positions: Vec::new(),
            was_in_band: Vec::new(),
            active: None,
        }
    }

    /// Install the measured heading positions for the current document.
    ///
    /// Resets crossing state and the active heading; positions must be in
    /// document order.
    pub fn set_positions(&mut self, positions: Vec<HeadingPosition>) {
        self.was_in_band = vec![false; positions.len()];
        self.positions = positions;
        self.active = None;
    }

    /// The currently active heading identifier, if any.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Process one observation of the region's geometry.
    ///
    /// Headings that crossed *into* the biased-visible band since the last
    /// observation become candidates; the last crossing in the batch wins.
    /// Once any heading has been active, the active heading never reverts
    /// to none.
    pub fn observe(&mut self, region: &ScrollRegion) -> Option<&str> {
        let band_top = region.scroll_top - self.config.min_visible;
        let band_bottom =
            region.scroll_top + region.viewport_height * self.config.top_band_fraction;

        let mut crossed: Option<usize> = None;
        for (i, position) in self.positions.iter().enumerate() {
            let in_band = position.offset >= band_top && position.offset <= band_bottom;
            if in_band && !self.was_in_band[i] {
                crossed = Some(i);
            }
            self.was_in_band[i] = in_band;
        }

        if let Some(i) = crossed {
            self.active = Some(self.positions[i].identifier.clone());
        }
        self.active.as_deref()
    }

    /// Navigate to a heading by identifier.
    ///
    /// Computes the container-relative target offset (comfort margin above
    /// the heading, clamped to the scrollable range), sets the active
    /// heading immediately so the panel responds without waiting for the
    /// next observation, and returns the effect for the host to apply.
    ///
    /// An identifier with no live element is a no-op: logged, `None`.
    pub fn navigate_to(&mut self, identifier: &str, region: &ScrollRegion) -> Option<NavigationEffect> {
        let Some(position) = self
            .positions
            .iter()
            .find(|p| p.identifier == identifier)
        else {
            warn!("navigate_to: no heading with identifier '{identifier}'");
            return None;
        };

        let target = (position.offset - self.config.comfort_margin)
            .clamp(0.0, region.max_scroll());

        self.active = Some(identifier.to_string());

        Some(NavigationEffect {
            scroll_top: target,
            hash: format!("#{}", utf8_percent_encode(identifier, FRAGMENT)),
        })
    }
}
