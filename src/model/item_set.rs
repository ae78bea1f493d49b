// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ItemSet type for representing sets of item positions.
//!
//! An ItemSet is a strictly ascending vector of item positions. Keeping the
//! positions sorted is what lets the intersection engine merge two sets in
//! linear time instead of testing membership element by element.
//!
//! # Examples
//!
//! ```
//! use facet_search::model::ItemSet;
//!
//! let set = ItemSet::from_unsorted(vec![4, 1, 4, 2]);
//! assert_eq!(set.as_slice(), &[1, 2, 4]);
//! assert!(set.contains(2));
//! assert!(!set.contains(3));
//! ```

use serde::Serialize;
use std::fmt;

/// Position of an item in the caller's input sequence.
pub type ItemPos = usize;

/// A sorted, duplicate-free set of item positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemSet(Vec<ItemPos>);

impl ItemSet {
    /// Create an empty item set.
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Create the set `0..count`.
    pub fn all(count: usize) -> Self {
        Self((0..count).collect())
    }

    /// Create an item set by sorting and deduplicating arbitrary positions.
    pub fn from_unsorted(mut positions: Vec<ItemPos>) -> Self {
        positions.sort_unstable();
        positions.dedup();
        Self(positions)
    }

    /// Wrap positions produced by a merge of sorted inputs.
    pub(crate) fn from_sorted_unchecked(positions: Vec<ItemPos>) -> Self {
        debug_assert!(first_unsorted(&positions).is_none());
        Self(positions)
    }

    /// Check if the set contains a position (binary search).
    pub fn contains(&self, position: ItemPos) -> bool {
        self.0.binary_search(&position).is_ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[ItemPos] {
        &self.0
    }

    /// Iterate over positions in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = ItemPos> + '_ {
        self.0.iter().copied()
    }

    pub fn into_vec(self) -> Vec<ItemPos> {
        self.0
    }
}

/// Offset of the first element that breaks strict ascending order, if any.
pub(crate) fn first_unsorted(positions: &[ItemPos]) -> Option<usize> {
    positions
        .windows(2)
        .position(|pair| pair[0] >= pair[1])
        .map(|offset| offset + 1)
}

impl AsRef<[ItemPos]> for ItemSet {
    fn as_ref(&self) -> &[ItemPos] {
        &self.0
    }
}

impl FromIterator<ItemPos> for ItemSet {
    fn from_iter<I: IntoIterator<Item = ItemPos>>(iter: I) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ItemSet {
    type Item = &'a ItemPos;
    type IntoIter = std::slice::Iter<'a, ItemPos>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ItemSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, position) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", position)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unsorted() {
        let set: ItemSet = [9, 3, 3, 0].into_iter().collect();
        assert_eq!(set.as_slice(), &[0, 3, 9]);
    }

    #[test]
    fn test_all_and_empty() {
        assert_eq!(ItemSet::all(3).as_slice(), &[0, 1, 2]);
        assert!(ItemSet::empty().is_empty());
        assert!(ItemSet::all(0).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ItemSet::from_unsorted(vec![1, 0])), "{0,1}");
        assert_eq!(format!("{}", ItemSet::empty()), "{}");
    }
}
