// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Criterion type: one concrete value of a facet.

use crate::model::{FacetId, ItemSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a criterion.
///
/// IDs are allocated sequentially from 1 in order of first appearance while
/// the index is built, and never change for the lifetime of the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriterionId(u32);

impl CriterionId {
    /// The first ID handed out by the deduplicator.
    pub const FIRST: Self = Self(1);

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Zero-based slot of this ID in the criteria table, if it can have one.
    pub(crate) fn slot(self) -> Option<usize> {
        self.0.checked_sub(1).map(|slot| slot as usize)
    }

    /// The ID stored at a zero-based table slot, if it fits in a `u32`.
    pub(crate) fn from_slot(slot: usize) -> Option<Self> {
        u32::try_from(slot).ok()?.checked_add(1).map(Self)
    }
}

impl fmt::Display for CriterionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One value of one facet, with the positions of every item carrying it.
///
/// The position set is frozen once the index is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Criterion {
    id: CriterionId,
    text: String,
    facet: FacetId,
    item_positions: ItemSet,
}

impl Criterion {
    pub(crate) fn new(id: CriterionId, text: String, facet: FacetId, item_positions: ItemSet) -> Self {
        Self {
            id,
            text,
            facet,
            item_positions,
        }
    }

    pub fn id(&self) -> CriterionId {
        self.id
    }

    /// The raw value, exactly as it appeared on the items.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn facet(&self) -> FacetId {
        self.facet
    }

    pub fn item_positions(&self) -> &ItemSet {
        &self.item_positions
    }

    /// Number of items carrying this criterion (the initial count shown next to it).
    pub fn item_count(&self) -> usize {
        self.item_positions.len()
    }
}
