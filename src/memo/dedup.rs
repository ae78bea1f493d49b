// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Criterion deduplication.
//!
//! Hands out one stable ID per distinct `(facet, text)` pair, sequentially
//! from 1 in order of first appearance.

use crate::error::IndexError;
use crate::model::{CriterionId, FacetId};
use std::collections::HashMap;

/// Assigns stable criterion IDs by exact text equality within a facet.
#[derive(Debug)]
pub struct Deduplicator {
    /// Per facet: text to ID.
    by_facet: HashMap<FacetId, HashMap<String, CriterionId>>,
    next: u32,
}

/// Result of resolving a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    /// First time this value was seen; the ID was just allocated.
    New(CriterionId),
    Existing(CriterionId),
}

impl Resolved {
    pub fn id(self) -> CriterionId {
        match self {
            Resolved::New(id) | Resolved::Existing(id) => id,
        }
    }
}

impl Deduplicator {
    pub fn new() -> Self {
        Self {
            by_facet: HashMap::new(),
            next: CriterionId::FIRST.get(),
        }
    }

    /// Look up the ID for `text` under `facet`, allocating one on first sight.
    ///
    /// # Errors
    ///
    /// `IndexError::TooManyCriteria` once the ID space is exhausted.
    pub fn resolve(&mut self, facet: FacetId, text: &str) -> Result<Resolved, IndexError> {
        let ids = self.by_facet.entry(facet).or_default();
        if let Some(&id) = ids.get(text) {
            return Ok(Resolved::Existing(id));
        }

        let id = CriterionId::new(self.next);
        self.next = self
            .next
            .checked_add(1)
            .ok_or(IndexError::TooManyCriteria)?;
        ids.insert(text.to_owned(), id);
        Ok(Resolved::New(id))
    }

    /// Number of IDs allocated so far.
    pub fn len(&self) -> usize {
        (self.next - CriterionId::FIRST.get()) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Deduplicator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_from_one() {
        let mut dedup = Deduplicator::new();
        let color = FacetId::new(0);

        assert_eq!(dedup.resolve(color, "red"), Ok(Resolved::New(CriterionId::new(1))));
        assert_eq!(dedup.resolve(color, "blue"), Ok(Resolved::New(CriterionId::new(2))));
        assert_eq!(dedup.resolve(color, "red"), Ok(Resolved::Existing(CriterionId::new(1))));
        assert_eq!(dedup.len(), 2);
    }

    #[test]
    fn test_exact_match_only() {
        let mut dedup = Deduplicator::new();
        let color = FacetId::new(0);

        let lower = dedup.resolve(color, "red").unwrap().id();
        let upper = dedup.resolve(color, "Red").unwrap().id();
        let padded = dedup.resolve(color, "red ").unwrap().id();
        assert_ne!(lower, upper);
        assert_ne!(lower, padded);
    }

    #[test]
    fn test_same_text_in_two_facets() {
        let mut dedup = Deduplicator::new();

        let a = dedup.resolve(FacetId::new(0), "none").unwrap().id();
        let b = dedup.resolve(FacetId::new(1), "none").unwrap().id();
        assert_ne!(a, b);
        assert_eq!(dedup.resolve(FacetId::new(1), "none"), Ok(Resolved::Existing(b)));
    }

    #[test]
    fn test_id_space_exhausted() {
        let mut dedup = Deduplicator {
            by_facet: HashMap::new(),
            next: u32::MAX - 1,
        };
        let color = FacetId::new(0);

        let last = dedup.resolve(color, "red").unwrap().id();
        assert_eq!(last, CriterionId::new(u32::MAX - 1));
        assert_eq!(dedup.resolve(color, "blue"), Err(IndexError::TooManyCriteria));

        // Known values still resolve
        assert_eq!(dedup.resolve(color, "red"), Ok(Resolved::Existing(last)));
    }

    #[test]
    fn test_empty() {
        assert!(Deduplicator::new().is_empty());
    }
}
