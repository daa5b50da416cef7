//! Debounced rescan scheduling for container materialization.
//!
//! Materialization mutates the tree, and tree mutations are what trigger
//! materialization. Rather than an unconditional observer loop, rescans go
//! through a small explicit state machine:
//!
//! - Mutation batches are **filtered**: only batches whose added nodes are
//!   paragraph-like (or contain paragraph-like descendants) can possibly
//!   introduce new marker candidates, so only those arm a rescan.
//! - Qualifying batches are **debounced**: a burst of mutations collapses
//!   into one pass.
//! - Pending scans are **epoch-cancelled**: swapping documents bumps the
//!   epoch, and a [`ScanToken`] minted before the swap can never be spent
//!   against the new document.
//!
//! The host drives all timing. Every method takes a caller-supplied
//! millisecond timestamp; the library holds no clock, which keeps every
//! debounce and cancellation path deterministic under test.

use log::{debug, warn};

use crate::dom::{Document, NodeId};

use super::{MaterializeReport, materialize_containers};

/// Delay before the initial post-mount scan, giving the converter's output
/// time to commit to the tree.
pub const INITIAL_SCAN_DELAY_MS: u64 = 50;

/// Default debounce window for mutation-triggered rescans.
pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

/// Permission to run one materialization pass, minted by [`RescanScheduler::poll`].
///
/// Carries the epoch it was minted in; spending it after a document swap is
/// a no-op, never a mutation of the wrong tree.
#[derive(Debug, PartialEq, Eq)]
pub struct ScanToken {
    epoch: u64,
}

/// Debounced, filtered, epoch-cancelled rescan state machine.
#[derive(Debug)]
pub struct RescanScheduler {
    debounce_ms: u64,
    deadline: Option<u64>,
    epoch: u64,
}

impl Default for RescanScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

impl RescanScheduler {
    /// Create a scheduler with the given debounce window.
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            debounce_ms,
            deadline: None,
            epoch: 0,
        }
    }

    /// Arm the initial post-mount scan.
    pub fn schedule_initial(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms + INITIAL_SCAN_DELAY_MS);
    }

    /// Feed an observed mutation batch (the IDs of added nodes).
    ///
    /// Arms (or extends) the debounce window only when the batch plausibly
    /// contains new marker candidates. Returns whether a rescan is now
    /// pending.
    pub fn note_mutations(&mut self, doc: &Document, added: &[NodeId], now_ms: u64) -> bool {
        if added.iter().any(|&id| contains_paragraph_like(doc, id)) {
            self.deadline = Some(now_ms + self.debounce_ms);
        }
        self.deadline.is_some()
    }

    /// Check whether the debounce window has closed.
    ///
    /// Returns at most one token per armed window; the window is disarmed
    /// when the token is minted.
    pub fn poll(&mut self, now_ms: u64) -> Option<ScanToken> {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                Some(ScanToken { epoch: self.epoch })
            }
            _ => None,
        }
    }

    /// The document was swapped (navigation to a different page).
    ///
    /// Cancels any pending scan and invalidates every outstanding token.
    pub fn document_swapped(&mut self) {
        if self.deadline.take().is_some() {
            debug!("cancelled pending container rescan on document swap");
        }
        self.epoch += 1;
    }

    /// Whether a rescan is currently pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Spend a token: run one materialization pass.
    ///
    /// A token minted before a document swap is stale; it is dropped with a
    /// diagnostic and the document is not touched.
    pub fn run_scan(&self, doc: &mut Document, token: ScanToken) -> Option<MaterializeReport> {
        if token.epoch != self.epoch {
            warn!("dropping stale container scan (document swapped since it was scheduled)");
            return None;
        }
        Some(materialize_containers(doc))
    }
}

/// The mutation filter: does this added subtree contain a paragraph-like
/// node that could be a new marker candidate?
fn contains_paragraph_like(doc: &Document, id: NodeId) -> bool {
    let Some(node) = doc.node(id) else {
        return false;
    };
    if node.role.is_paragraph_like() {
        return true;
    }
    doc.children(id).any(|child| contains_paragraph_like(doc, child))
}
