// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The working query: selected criteria in click order.
//!
//! Deselecting a criterion tombstones its slot instead of removing it, so the
//! slot index of every other selected criterion stays valid. The compact
//! query (live IDs in slot order) is rebuilt after every mutation.

use crate::model::CriterionId;
use std::collections::HashMap;

/// Ordered slots of selected criteria, with tombstones for deselections.
#[derive(Debug, Clone, Default)]
pub struct WorkingQuery {
    /// `None` is a tombstone.
    slots: Vec<Option<CriterionId>>,

    /// Slot of every live criterion. IDs are unique among live slots.
    slot_of: HashMap<CriterionId, usize>,

    /// Live IDs in slot order.
    compact: Vec<CriterionId>,
}

impl WorkingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `id` as a new live slot and return its slot index.
    ///
    /// An ID that is already live keeps its existing slot.
    pub fn push(&mut self, id: CriterionId) -> usize {
        if let Some(&slot) = self.slot_of.get(&id) {
            return slot;
        }
        let slot = self.slots.len();
        self.slots.push(Some(id));
        self.slot_of.insert(id, slot);
        self.recompact();
        slot
    }

    /// Tombstone the slot holding `id`, returning that slot index.
    pub fn tombstone(&mut self, id: CriterionId) -> Option<usize> {
        let slot = self.slot_of.remove(&id)?;
        self.slots[slot] = None;
        self.recompact();
        Some(slot)
    }

    /// Drop every slot, tombstones included.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.slot_of.clear();
        self.compact.clear();
    }

    pub fn contains(&self, id: CriterionId) -> bool {
        self.slot_of.contains_key(&id)
    }

    /// All slots, tombstones shown as `None`.
    pub fn slots(&self) -> &[Option<CriterionId>] {
        &self.slots
    }

    /// Live IDs in selection order.
    pub fn compact(&self) -> &[CriterionId] {
        &self.compact
    }

    /// True when no slot is live.
    pub fn is_empty(&self) -> bool {
        self.compact.is_empty()
    }

    fn recompact(&mut self) {
        self.compact.clear();
        self.compact.extend(self.slots.iter().flatten().copied());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> CriterionId {
        CriterionId::new(raw)
    }

    #[test]
    fn test_push_and_compact() {
        let mut query = WorkingQuery::new();
        assert_eq!(query.push(id(5)), 0);
        assert_eq!(query.push(id(2)), 1);
        assert_eq!(query.push(id(9)), 2);

        assert_eq!(query.compact(), &[id(5), id(2), id(9)]);
        assert!(query.contains(id(2)));
    }

    #[test]
    fn test_tombstone_preserves_slots() {
        let mut query = WorkingQuery::new();
        query.push(id(5));
        query.push(id(2));
        query.push(id(9));

        assert_eq!(query.tombstone(id(2)), Some(1));
        assert_eq!(query.slots(), &[Some(id(5)), None, Some(id(9))]);
        assert_eq!(query.compact(), &[id(5), id(9)]);

        // Reselecting appends a fresh slot rather than reviving the tombstone
        assert_eq!(query.push(id(2)), 3);
        assert_eq!(query.compact(), &[id(5), id(9), id(2)]);
    }

    #[test]
    fn test_tombstone_unknown() {
        let mut query = WorkingQuery::new();
        query.push(id(1));
        assert_eq!(query.tombstone(id(4)), None);
        assert_eq!(query.compact(), &[id(1)]);
    }

    #[test]
    fn test_duplicate_push_keeps_slot() {
        let mut query = WorkingQuery::new();
        query.push(id(1));
        assert_eq!(query.push(id(1)), 0);
        assert_eq!(query.slots().len(), 1);
    }

    #[test]
    fn test_empties_and_clear() {
        let mut query = WorkingQuery::new();
        query.push(id(1));
        query.tombstone(id(1));
        assert!(query.is_empty());
        assert_eq!(query.slots().len(), 1);

        query.push(id(3));
        query.clear();
        assert!(query.is_empty());
        assert!(query.slots().is_empty());
    }
}
