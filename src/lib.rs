// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Faceted narrowing engine.
//!
//! Narrows a collection of items by progressively selecting values
//! ("criteria") grouped into named categories ("facets"), and reports for
//! every remaining criterion how many currently-matching items it would keep.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Built once from the facets and items, never changed afterwards:
//! - Criterion table: one entry per distinct value of a facet, IDs from 1
//! - Sorted item positions per criterion
//! - Facet to member criteria
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Session state changed by every click:
//! - Working query - selected criteria in click order, tombstoned on deselect
//! - Selected / highlighted flags per criterion
//! - Statistics
//!
//! # Query Resolution
//!
//! Each click proceeds in three steps:
//!
//! 1. **Selection**: apply the click rules (reset on an unhighlighted pick,
//!    toggle otherwise) and compact the working query
//! 2. **Intersection**: fold a two-cursor merge over the item sets of the
//!    compact query
//! 3. **Highlighting**: count, for every criterion, the matching items it
//!    carries
//!
//! An empty query matches nothing: narrowing only starts with a first pick.
//!
//! # Concurrency
//!
//! Single-threaded and synchronous. A [`FacetEngine`] is `Send` but not
//! internally synchronised; share it behind a `Mutex`.

pub mod config;
pub mod engine;
pub mod error;
pub mod memo;
pub mod model;
pub mod state;

// Re-export commonly used types
pub use config::{EmptyQueryPolicy, EngineConfig};
pub use engine::{ClickOutcome, FacetEngine, Resolution, SelectionListener};
pub use error::{EngineError, IndexError, IntersectionError, SelectionError};
pub use memo::FacetIndex;
pub use model::{Criterion, CriterionId, Dataset, Facet, ItemSet};
