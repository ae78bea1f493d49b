// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Listener trait for selection changes.
//!
//! The engine notifies every registered listener after each successful click,
//! once the query has been resolved and the flags synchronised. This is the
//! hook the presentation layer re-renders from.
//!
//! # Example
//!
//! ```
//! use facet_search::engine::{ClickOutcome, SelectionListener};
//!
//! struct CountingListener {
//!     seen: usize,
//! }
//!
//! impl SelectionListener for CountingListener {
//!     fn selection_changed(&mut self, outcome: &ClickOutcome) {
//!         self.seen += outcome.resolution.matching_items.len();
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Counting"
//!     }
//! }
//! ```

use crate::engine::ClickOutcome;

/// Receives the outcome of every applied click.
///
/// Closures taking `&ClickOutcome` are listeners too.
pub trait SelectionListener {
    fn selection_changed(&mut self, outcome: &ClickOutcome);

    /// Name used in log output.
    fn name(&self) -> &str {
        "anonymous"
    }
}

impl<F> SelectionListener for F
where
    F: FnMut(&ClickOutcome),
{
    fn selection_changed(&mut self, outcome: &ClickOutcome) {
        self(outcome)
    }
}
