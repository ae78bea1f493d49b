// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, built once).
//!
//! This module contains the index computed at construction and never
//! changed afterwards:
//! - Deduplicator: stable criterion IDs by exact text within a facet
//! - FacetIndex: criterion to sorted item positions, facet to member criteria

pub mod dedup;
pub mod index;

pub use dedup::Deduplicator;
pub use index::{FacetIndex, FacetListing, ListedCriterion};
