// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Query resolution: matching items plus reachable counts.
//!
//! Given a compact query, the resolver intersects the item sets of its
//! criteria (in selection order) and then counts, for every criterion in the
//! index, how many of the matching items it carries. A non-zero count means
//! the criterion is still a viable next pick.

use crate::config::EmptyQueryPolicy;
use crate::engine::intersection::{count_common, intersect};
use crate::error::{EngineError, SelectionError};
use crate::memo::FacetIndex;
use crate::model::{CriterionId, ItemPos, ItemSet};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Per facet name: criterion ID to match count.
///
/// Every declared facet has a group, possibly empty. Grouping is for the
/// consumer's convenience only; per-facet totals are sums over a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HighlightMap {
    groups: BTreeMap<String, BTreeMap<CriterionId, usize>>,
}

impl HighlightMap {
    /// Count for one criterion (0 when unknown).
    pub fn count(&self, id: CriterionId) -> usize {
        self.groups
            .values()
            .find_map(|group| group.get(&id).copied())
            .unwrap_or(0)
    }

    /// The group of one facet.
    pub fn group(&self, facet: &str) -> Option<&BTreeMap<CriterionId, usize>> {
        self.groups.get(facet)
    }

    /// IDs in a facet with a non-zero count, ascending.
    pub fn highlighted(&self, facet: &str) -> Vec<CriterionId> {
        self.groups
            .get(facet)
            .map(|group| {
                group
                    .iter()
                    .filter(|&(_, &count)| count > 0)
                    .map(|(&id, _)| id)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Sum of the counts in a facet.
    pub fn total(&self, facet: &str) -> usize {
        self.groups
            .get(facet)
            .map(|group| group.values().sum())
            .unwrap_or(0)
    }

    pub fn facets(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}

/// Matching items and per-criterion counts for one compact query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub matching_items: ItemSet,
    pub highlight_map: HighlightMap,
}

impl Resolution {
    /// The caller's items at the matching positions, in ascending order.
    ///
    /// Positions outside `items` are skipped.
    pub fn project<'a, T>(&'a self, items: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
        self.matching_items
            .iter()
            .filter_map(move |position: ItemPos| items.get(position))
    }
}

/// Resolve a compact query against the index.
///
/// With an empty query the result depends on `policy`: no items at all
/// (`NoResults`, the default) or every item (`AllItems`).
///
/// # Errors
///
/// `EngineError::Selection` if the query names an ID the index does not
/// know; `EngineError::Internal` if an item set is not sorted.
pub fn resolve(
    index: &FacetIndex,
    compact_query: &[CriterionId],
    policy: EmptyQueryPolicy,
) -> Result<Resolution, EngineError> {
    let matching_items = if compact_query.is_empty() {
        match policy {
            EmptyQueryPolicy::NoResults => ItemSet::empty(),
            EmptyQueryPolicy::AllItems => ItemSet::all(index.item_count()),
        }
    } else {
        let sets = compact_query
            .iter()
            .map(|&id| {
                index
                    .criterion(id)
                    .map(|criterion| criterion.item_positions().as_slice())
                    .ok_or(SelectionError::UnknownCriterionId(id))
            })
            .collect::<Result<Vec<_>, _>>()?;
        intersect(&sets)?
    };

    let mut groups: BTreeMap<String, BTreeMap<CriterionId, usize>> = index
        .facets()
        .iter()
        .map(|facet| (facet.name.clone(), BTreeMap::new()))
        .collect();

    for criterion in index.criteria() {
        let count = if matching_items.is_empty() {
            0
        } else {
            count_common(criterion.item_positions(), &matching_items)
        };
        if let Some(group) = index
            .facet(criterion.facet())
            .and_then(|facet| groups.get_mut(&facet.name))
        {
            group.insert(criterion.id(), count);
        }
    }

    debug!(
        query = ?compact_query,
        matching = matching_items.len(),
        "query resolved"
    );

    Ok(Resolution {
        matching_items,
        highlight_map: HighlightMap { groups },
    })
}
