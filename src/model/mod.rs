// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Domain types for faceted narrowing.
//!
//! This module contains the type-safe vocabulary shared by the index,
//! the selection state and the resolver:
//! - Facet: a named category of criteria
//! - Criterion: one concrete value of a facet, with the items carrying it
//! - ItemSet: a sorted, duplicate-free set of item positions
//! - Record: read access to the caller's items
//! - Dataset: the `{facets, items}` JSON shape

pub mod criterion;
pub mod dataset;
pub mod facet;
pub mod item;
pub mod item_set;

// Re-export for convenience
pub use criterion::{Criterion, CriterionId};
pub use dataset::Dataset;
pub use facet::{Facet, FacetId};
pub use item::{FacetValue, Item, Record, RecordError};
pub use item_set::{ItemPos, ItemSet};
