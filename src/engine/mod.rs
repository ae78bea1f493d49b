// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Faceted narrowing engine.
//!
//! This module ties the frozen index (Tier 1) to the selection state
//! (Tier 2). Every click runs the same pipeline:
//! 1. The selection state applies the click rules and yields a compact query
//! 2. The resolver intersects the query's item sets and counts every criterion
//! 3. Flags are synchronised with the counts
//! 4. Listeners are notified with the outcome
//!
//! An unknown criterion ID stops the pipeline at step 1 and leaves the
//! session exactly as it was.
//!
//! # Example
//!
//! ```
//! use facet_search::config::EngineConfig;
//! use facet_search::engine::FacetEngine;
//! use facet_search::model::{Facet, Item};
//!
//! let items = vec![
//!     Item::new().with("color", "red").with("size", "S"),
//!     Item::new().with("color", "red").with("size", "M"),
//!     Item::new().with("color", "blue").with("size", "S"),
//! ];
//! let facets = vec![Facet::named("color"), Facet::named("size")];
//! let mut engine = FacetEngine::new(facets, &items, EngineConfig::default()).unwrap();
//!
//! let red = engine.find_criterion("color", "red").unwrap();
//! let outcome = engine.apply_click(red).unwrap();
//! assert_eq!(outcome.resolution.matching_items.as_slice(), &[0, 1]);
//! ```

pub mod intersection;
pub mod listener;
pub mod resolver;

pub use intersection::intersect;
pub use listener::SelectionListener;
pub use resolver::{resolve, HighlightMap, Resolution};

use crate::config::EngineConfig;
use crate::error::{EngineError, IndexError, SelectionError};
use crate::memo::{FacetIndex, FacetListing};
use crate::model::{CriterionId, Dataset, Facet, Record};
use crate::state::{
    Counters, CriterionFlags, FlagChange, QueryPhase, SelectionState, Statistics, Transition,
};
use serde::Serialize;
use tracing::{debug, warn};

/// Everything the presentation layer needs after one click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClickOutcome {
    pub clicked: CriterionId,
    pub transition: Transition,
    /// Live criterion IDs in selection order.
    pub compact_query: Vec<CriterionId>,
    pub resolution: Resolution,
    /// Criteria whose `selected`/`highlighted` flags changed.
    pub flag_changes: Vec<FlagChange>,
}

/// One interactive session over a frozen index.
///
/// Not internally synchronised: a multi-threaded host must guard the engine
/// with a single lock, since a click mutates several pieces of state.
pub struct FacetEngine {
    /// Immutable index (Tier 1)
    index: FacetIndex,
    /// Mutable selection (Tier 2)
    state: SelectionState,
    config: EngineConfig,
    resolution: Resolution,
    statistics: Statistics,
    listeners: Vec<Box<dyn SelectionListener + Send>>,
}

impl FacetEngine {
    /// Build the index and start a session with nothing selected.
    pub fn new<R: Record>(
        facets: Vec<Facet>,
        items: &[R],
        config: EngineConfig,
    ) -> Result<Self, IndexError> {
        let index = FacetIndex::build(facets, items)?;
        Ok(Self::with_index(index, config))
    }

    /// Start a session from a `{facets, items}` dataset.
    pub fn from_dataset(dataset: &Dataset, config: EngineConfig) -> Result<Self, IndexError> {
        Self::new(dataset.facets.clone(), &dataset.items, config)
    }

    /// Start a session over an existing index.
    pub fn with_index(index: FacetIndex, config: EngineConfig) -> Self {
        let state = SelectionState::new(index.len());
        let mut engine = Self {
            index,
            state,
            config,
            resolution: Resolution::default(),
            statistics: Statistics::new(),
            listeners: Vec::new(),
        };
        engine.refresh_idle();
        engine
    }

    /// Apply a click on criterion `id` and resolve the new query.
    ///
    /// # Errors
    ///
    /// `EngineError::Selection(UnknownCriterionId)` if `id` is not in the
    /// index; nothing changes in that case.
    pub fn apply_click(&mut self, id: CriterionId) -> Result<ClickOutcome, EngineError> {
        self.statistics.increment_counter(Counters::Clicks);

        let selection = match self.state.apply_click(&self.index, id) {
            Ok(selection) => selection,
            Err(err @ SelectionError::UnknownCriterionId(_)) => {
                warn!(criterion = %id, "click on unknown criterion ignored");
                self.statistics.increment_counter(Counters::UnknownClicks);
                return Err(err.into());
            }
        };

        self.statistics.increment_counter(match selection.transition {
            Transition::Start => Counters::Starts,
            Transition::Reset => Counters::Resets,
            Transition::Select => Counters::Selections,
            Transition::Deselect => Counters::Deselections,
        });

        let resolution = resolve(&self.index, &selection.compact_query, self.config.empty_query)?;
        self.statistics.increment_counter(Counters::Resolutions);
        let flag_changes = self.state.sync_flags(&resolution.highlight_map);
        self.resolution = resolution.clone();

        let outcome = ClickOutcome {
            clicked: id,
            transition: selection.transition,
            compact_query: selection.compact_query,
            resolution,
            flag_changes,
        };

        for listener in &mut self.listeners {
            debug!(listener = listener.name(), "notifying listener");
            listener.selection_changed(&outcome);
        }

        Ok(outcome)
    }

    /// Drop the whole selection and return to the idle resolution.
    pub fn reset(&mut self) {
        self.state.clear();
        self.refresh_idle();
    }

    /// Resolve the empty query and sync flags to it.
    fn refresh_idle(&mut self) {
        // The empty query never touches the intersection engine.
        match resolve(&self.index, &[], self.config.empty_query) {
            Ok(resolution) => {
                self.state.sync_flags(&resolution.highlight_map);
                self.resolution = resolution;
            }
            Err(err) => warn!(%err, "idle resolution failed; keeping previous result"),
        }
    }

    /// Register a listener notified after every applied click.
    pub fn add_listener(&mut self, listener: Box<dyn SelectionListener + Send>) {
        self.listeners.push(listener);
    }

    /// Every facet with its criteria sorted by text, with initial counts.
    pub fn facet_listing(&self) -> Vec<FacetListing> {
        self.index.facet_listing()
    }

    /// Find a criterion ID by facet name and exact text.
    pub fn find_criterion(&self, facet: &str, text: &str) -> Option<CriterionId> {
        self.index.find(facet, text).map(|criterion| criterion.id())
    }

    /// The resolution of the current query.
    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    pub fn flags(&self, id: CriterionId) -> Option<CriterionFlags> {
        self.state.flags(id)
    }

    pub fn compact_query(&self) -> &[CriterionId] {
        self.state.compact_query()
    }

    pub fn phase(&self) -> QueryPhase {
        self.state.phase()
    }

    pub fn index(&self) -> &FacetIndex {
        &self.index
    }

    pub fn selection(&self) -> &SelectionState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

impl std::fmt::Debug for FacetEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FacetEngine")
            .field("criteria", &self.index.len())
            .field("phase", &self.state.phase())
            .field("query", &self.state.compact_query())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
