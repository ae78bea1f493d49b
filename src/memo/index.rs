// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Inverted index from criteria to item positions.
//!
//! Built once from the declared facets and the item sequence, then frozen.
//! Criteria live in an arena indexed by `CriterionId`, with a side table from
//! facet to member IDs, so the resolver never does string lookups.

use crate::error::IndexError;
use crate::memo::dedup::{Deduplicator, Resolved};
use crate::model::{Criterion, CriterionId, Facet, FacetId, ItemPos, ItemSet, Record, RecordError};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

/// The frozen criterion table plus per-facet membership.
#[derive(Debug, Clone)]
pub struct FacetIndex {
    facets: Vec<Facet>,

    /// Facet name to declaration position.
    facet_ids: HashMap<String, FacetId>,

    /// Per facet, member criterion IDs in order of first appearance.
    members: Vec<Vec<CriterionId>>,

    /// Arena: criterion with ID `n` is at slot `n - 1`.
    criteria: Vec<Criterion>,

    item_count: usize,
}

/// One criterion as listed for the initial render of a facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedCriterion {
    pub id: CriterionId,
    pub text: String,
    /// Initial count: number of items carrying the criterion.
    pub count: usize,
}

/// A facet with its criteria sorted by text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetListing {
    pub facet: Facet,
    pub criteria: Vec<ListedCriterion>,
}

/// Criterion under construction: positions are still being appended.
struct PendingCriterion {
    id: CriterionId,
    text: String,
    facet: FacetId,
    positions: Vec<ItemPos>,
}

impl FacetIndex {
    /// Build the index from facet declarations and items.
    ///
    /// Items are scanned in input order and facets in declaration order, so
    /// criterion IDs are assigned deterministically.
    ///
    /// # Errors
    ///
    /// Returns `IndexError` for an unnamed or duplicated facet, an item that
    /// is not an object, a non-string facet value, or more distinct values
    /// than a criterion ID can number.
    pub fn build<R: Record>(facets: Vec<Facet>, items: &[R]) -> Result<Self, IndexError> {
        let facet_ids = Self::validate_facets(&facets)?;

        let mut dedup = Deduplicator::new();
        let mut pending: Vec<PendingCriterion> = Vec::new();
        let mut members: Vec<Vec<CriterionId>> = vec![Vec::new(); facets.len()];

        for (position, item) in items.iter().enumerate() {
            for (facet_index, facet) in facets.iter().enumerate() {
                let facet_id = FacetId::new(facet_index);
                let values = item.facet_values(&facet.name).map_err(|err| match err {
                    RecordError::NotAnObject => IndexError::NotAnObject { item: position },
                    RecordError::NonString => IndexError::NonStringValue {
                        item: position,
                        facet: facet.name.clone(),
                    },
                })?;

                for text in values {
                    let id = match dedup.resolve(facet_id, text)? {
                        Resolved::New(id) => {
                            pending.push(PendingCriterion {
                                id,
                                text: text.to_owned(),
                                facet: facet_id,
                                positions: Vec::new(),
                            });
                            members[facet_index].push(id);
                            id
                        }
                        Resolved::Existing(id) => id,
                    };

                    // Same value twice on one item: record the item once.
                    let positions = &mut pending[id.get() as usize - 1].positions;
                    if positions.last() != Some(&position) {
                        positions.push(position);
                    }
                }
            }
        }

        let criteria: Vec<Criterion> = pending
            .into_iter()
            .map(|p| {
                Criterion::new(
                    p.id,
                    p.text,
                    p.facet,
                    ItemSet::from_unsorted(p.positions),
                )
            })
            .collect();

        info!(
            facets = facets.len(),
            items = items.len(),
            criteria = criteria.len(),
            "facet index built"
        );

        Ok(Self {
            facets,
            facet_ids,
            members,
            criteria,
            item_count: items.len(),
        })
    }

    fn validate_facets(facets: &[Facet]) -> Result<HashMap<String, FacetId>, IndexError> {
        let mut facet_ids = HashMap::with_capacity(facets.len());
        for (position, facet) in facets.iter().enumerate() {
            if facet.name.is_empty() {
                return Err(IndexError::MissingFacetName { position });
            }
            if facet_ids.insert(facet.name.clone(), FacetId::new(position)).is_some() {
                return Err(IndexError::DuplicateFacet {
                    name: facet.name.clone(),
                });
            }
        }
        debug!(count = facets.len(), "facet declarations validated");
        Ok(facet_ids)
    }

    /// Look up a criterion by ID.
    #[inline]
    pub fn criterion(&self, id: CriterionId) -> Option<&Criterion> {
        id.slot().and_then(|slot| self.criteria.get(slot))
    }

    /// All criteria in ID order.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Find a criterion by facet name and exact text.
    pub fn find(&self, facet: &str, text: &str) -> Option<&Criterion> {
        let facet = self.facet_by_name(facet)?;
        self.facet_members(facet)
            .iter()
            .filter_map(|&id| self.criterion(id))
            .find(|criterion| criterion.text() == text)
    }

    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    pub fn facet(&self, id: FacetId) -> Option<&Facet> {
        self.facets.get(id.index())
    }

    pub fn facet_by_name(&self, name: &str) -> Option<FacetId> {
        self.facet_ids.get(name).copied()
    }

    /// Member IDs of a facet, in order of first appearance.
    pub fn facet_members(&self, facet: FacetId) -> &[CriterionId] {
        self.members
            .get(facet.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of items the index was built from.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Number of criteria.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Every facet with its criteria sorted by text (ordinal, case-sensitive),
    /// each carrying its initial count.
    pub fn facet_listing(&self) -> Vec<FacetListing> {
        self.facets
            .iter()
            .enumerate()
            .map(|(index, facet)| {
                let mut criteria: Vec<ListedCriterion> = self
                    .facet_members(FacetId::new(index))
                    .iter()
                    .filter_map(|&id| self.criterion(id))
                    .map(|criterion| ListedCriterion {
                        id: criterion.id(),
                        text: criterion.text().to_owned(),
                        count: criterion.item_count(),
                    })
                    .collect();
                criteria.sort_by(|a, b| a.text.cmp(&b.text));
                FacetListing {
                    facet: facet.clone(),
                    criteria,
                }
            })
            .collect()
    }
}
