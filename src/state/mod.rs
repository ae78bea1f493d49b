// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state (mutable, changed by every click).
//!
//! This module contains the selection state of one interactive session:
//! - WorkingQuery: selected criteria in click order, tombstoned on deselect
//! - CriterionFlags: `selected` / `highlighted` per criterion
//! - QueryPhase: whether a query is active at all
//! - Statistics: per-session counters
//!
//! # Click rules
//!
//! 1. Clicking a criterion that is not highlighted is a hard reset: the
//!    working query is dropped and every criterion of every other facet loses
//!    its flags. A new query holding only the clicked criterion starts.
//! 2. Clicking a highlighted criterion toggles it: a new slot is appended on
//!    select, its slot is tombstoned on deselect.
//! 3. The compact query is rebuilt and handed to the resolver.

pub mod flags;
pub mod statistics;
pub mod working_query;

pub use flags::{CriterionFlags, FlagChange};
pub use statistics::{Counters, Statistics};
pub use working_query::WorkingQuery;

use crate::engine::resolver::HighlightMap;
use crate::error::SelectionError;
use crate::memo::FacetIndex;
use crate::model::{CriterionId, FacetId};
use serde::Serialize;
use tracing::debug;

/// Whether the session currently narrows anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryPhase {
    #[default]
    NoSelection,
    ActiveQuery,
}

/// What a click did to the working query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// First pick from `NoSelection`.
    Start,
    /// Unhighlighted pick during an active query: query restarted.
    Reset,
    Select,
    Deselect,
}

/// Result of applying one click to the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionOutcome {
    pub transition: Transition,
    /// Live criterion IDs in selection order.
    pub compact_query: Vec<CriterionId>,
}

/// Working query plus per-criterion flags for one session.
#[derive(Debug, Clone)]
pub struct SelectionState {
    query: WorkingQuery,

    /// Indexed by criterion slot (`id - 1`).
    flags: Vec<CriterionFlags>,

    phase: QueryPhase,
}

impl SelectionState {
    /// Create an empty selection for an index with `criterion_count` criteria.
    pub fn new(criterion_count: usize) -> Self {
        Self {
            query: WorkingQuery::new(),
            flags: vec![CriterionFlags::CLEAR; criterion_count],
            phase: QueryPhase::NoSelection,
        }
    }

    /// Apply a click on criterion `id`.
    ///
    /// # Errors
    ///
    /// `SelectionError::UnknownCriterionId` if `id` is not in the index; the
    /// selection is left unchanged.
    pub fn apply_click(
        &mut self,
        index: &FacetIndex,
        id: CriterionId,
    ) -> Result<SelectionOutcome, SelectionError> {
        let criterion = index
            .criterion(id)
            .ok_or(SelectionError::UnknownCriterionId(id))?;
        let slot = id.slot().ok_or(SelectionError::UnknownCriterionId(id))?;
        let current = self
            .flags
            .get(slot)
            .copied()
            .ok_or(SelectionError::UnknownCriterionId(id))?;

        let transition = if !current.highlighted {
            let transition = match self.phase {
                QueryPhase::NoSelection => Transition::Start,
                QueryPhase::ActiveQuery => Transition::Reset,
            };
            self.hard_reset(index, criterion.facet());
            self.flags[slot] = CriterionFlags::SELECTED;
            self.query.push(id);
            transition
        } else if current.selected {
            self.flags[slot].selected = false;
            self.query.tombstone(id);
            Transition::Deselect
        } else {
            self.flags[slot].selected = true;
            self.query.push(id);
            Transition::Select
        };

        self.phase = if self.query.is_empty() {
            QueryPhase::NoSelection
        } else {
            QueryPhase::ActiveQuery
        };

        debug!(
            criterion = %id,
            ?transition,
            query = ?self.query.compact(),
            "click applied"
        );

        Ok(SelectionOutcome {
            transition,
            compact_query: self.query.compact().to_vec(),
        })
    }

    /// Drop the working query and clear flags outside `keep_facet`.
    ///
    /// The clicked criterion's own facet keeps its flags; they are brought in
    /// line with the new query by `sync_flags`.
    fn hard_reset(&mut self, index: &FacetIndex, keep_facet: FacetId) {
        self.query.clear();
        for criterion in index.criteria() {
            if criterion.facet() == keep_facet {
                continue;
            }
            if let Some(flags) = criterion.id().slot().and_then(|slot| self.flags.get_mut(slot)) {
                *flags = CriterionFlags::CLEAR;
            }
        }
    }

    /// Bring flags in line with a resolved query.
    ///
    /// `selected` follows membership in the working query and `highlighted`
    /// follows a non-zero count. Returns the criteria whose flags changed.
    pub fn sync_flags(&mut self, highlights: &HighlightMap) -> Vec<FlagChange> {
        let mut changes = Vec::new();
        for (slot, flags) in self.flags.iter_mut().enumerate() {
            let Some(id) = CriterionId::from_slot(slot) else {
                break;
            };
            let selected = self.query.contains(id);
            let updated = CriterionFlags {
                selected,
                highlighted: selected || highlights.count(id) > 0,
            };
            if *flags != updated {
                *flags = updated;
                changes.push(FlagChange { id, flags: updated });
            }
        }
        changes
    }

    /// Forget the whole selection: back to `NoSelection` with every flag clear.
    pub fn clear(&mut self) {
        self.query.clear();
        self.flags.fill(CriterionFlags::CLEAR);
        self.phase = QueryPhase::NoSelection;
    }

    pub fn flags(&self, id: CriterionId) -> Option<CriterionFlags> {
        id.slot().and_then(|slot| self.flags.get(slot)).copied()
    }

    pub fn working_query(&self) -> &WorkingQuery {
        &self.query
    }

    pub fn compact_query(&self) -> &[CriterionId] {
        self.query.compact()
    }

    pub fn phase(&self) -> QueryPhase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Facet, Item};

    /// red(1) S(2) M(3) blue(4)
    fn index() -> FacetIndex {
        let items = vec![
            Item::new().with("color", "red").with("size", "S"),
            Item::new().with("color", "red").with("size", "M"),
            Item::new().with("color", "blue").with("size", "S"),
        ];
        FacetIndex::build(vec![Facet::named("color"), Facet::named("size")], &items).unwrap()
    }

    fn id(raw: u32) -> CriterionId {
        CriterionId::new(raw)
    }

    fn highlight_all(state: &mut SelectionState, ids: &[u32]) {
        for &raw in ids {
            state.flags[raw as usize - 1].highlighted = true;
        }
    }

    #[test]
    fn test_first_click_starts_query() {
        let index = index();
        let mut state = SelectionState::new(index.len());
        assert_eq!(state.phase(), QueryPhase::NoSelection);

        let outcome = state.apply_click(&index, id(1)).unwrap();
        assert_eq!(outcome.transition, Transition::Start);
        assert_eq!(outcome.compact_query, vec![id(1)]);
        assert_eq!(state.phase(), QueryPhase::ActiveQuery);
        assert_eq!(state.flags(id(1)), Some(CriterionFlags::SELECTED));
    }

    #[test]
    fn test_select_and_deselect_highlighted() {
        let index = index();
        let mut state = SelectionState::new(index.len());
        state.apply_click(&index, id(1)).unwrap();
        highlight_all(&mut state, &[2, 3]);

        let outcome = state.apply_click(&index, id(2)).unwrap();
        assert_eq!(outcome.transition, Transition::Select);
        assert_eq!(outcome.compact_query, vec![id(1), id(2)]);

        let outcome = state.apply_click(&index, id(1)).unwrap();
        assert_eq!(outcome.transition, Transition::Deselect);
        assert_eq!(outcome.compact_query, vec![id(2)]);
        assert_eq!(state.working_query().slots(), &[None, Some(id(2))]);
    }

    #[test]
    fn test_unhighlighted_click_resets() {
        let index = index();
        let mut state = SelectionState::new(index.len());
        state.apply_click(&index, id(1)).unwrap();
        highlight_all(&mut state, &[2, 3]);
        state.apply_click(&index, id(2)).unwrap();

        // blue is not highlighted
        let outcome = state.apply_click(&index, id(4)).unwrap();
        assert_eq!(outcome.transition, Transition::Reset);
        assert_eq!(outcome.compact_query, vec![id(4)]);
        assert!(state.working_query().slots().len() == 1);

        // size facet flags cleared, color facet untouched until sync
        assert_eq!(state.flags(id(2)), Some(CriterionFlags::CLEAR));
        assert_eq!(state.flags(id(3)), Some(CriterionFlags::CLEAR));
        assert_eq!(state.flags(id(1)), Some(CriterionFlags::SELECTED));
    }

    #[test]
    fn test_deselect_last_returns_to_no_selection() {
        let index = index();
        let mut state = SelectionState::new(index.len());
        state.apply_click(&index, id(3)).unwrap();
        let outcome = state.apply_click(&index, id(3)).unwrap();

        assert_eq!(outcome.transition, Transition::Deselect);
        assert!(outcome.compact_query.is_empty());
        assert_eq!(state.phase(), QueryPhase::NoSelection);
    }

    #[test]
    fn test_unknown_click_leaves_state() {
        let index = index();
        let mut state = SelectionState::new(index.len());
        state.apply_click(&index, id(1)).unwrap();

        assert_eq!(
            state.apply_click(&index, id(99)),
            Err(SelectionError::UnknownCriterionId(id(99)))
        );
        assert_eq!(
            state.apply_click(&index, id(0)),
            Err(SelectionError::UnknownCriterionId(id(0)))
        );
        assert_eq!(state.compact_query(), &[id(1)]);
    }

    #[test]
    fn test_clear() {
        let index = index();
        let mut state = SelectionState::new(index.len());
        state.apply_click(&index, id(1)).unwrap();
        state.clear();

        assert_eq!(state.phase(), QueryPhase::NoSelection);
        assert!(state.compact_query().is_empty());
        assert_eq!(state.flags(id(1)), Some(CriterionFlags::CLEAR));
    }
}
