// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sorted-set intersection.
//!
//! All inputs are strictly ascending position lists. Intersecting k sets is a
//! left-to-right fold of two-cursor merges, O(Σ sizes) overall. The running
//! result never grows from one fold step to the next, and the fold stops as
//! soon as it is empty.
//!
//! # Example
//!
//! ```
//! use facet_search::engine::intersection::intersect;
//!
//! let result = intersect(&[&[0, 1, 4, 7], &[1, 2, 7], &[1, 7, 9]]).unwrap();
//! assert_eq!(result.as_slice(), &[1, 7]);
//!
//! assert!(intersect(&[&[2, 1]]).is_err());
//! ```

use crate::error::IntersectionError;
use crate::model::item_set::first_unsorted;
use crate::model::{ItemPos, ItemSet};
use std::cmp::Ordering;

/// Intersect any number of strictly ascending position lists.
///
/// Zero sets give the empty set; one set is returned unchanged.
///
/// # Errors
///
/// `IntersectionError::InvalidInput` if any input is not strictly ascending.
pub fn intersect(sets: &[&[ItemPos]]) -> Result<ItemSet, IntersectionError> {
    for (set, positions) in sets.iter().enumerate() {
        if let Some(position) = first_unsorted(positions) {
            return Err(IntersectionError::InvalidInput { set, position });
        }
    }

    let Some((first, rest)) = sets.split_first() else {
        return Ok(ItemSet::empty());
    };

    let mut running = first.to_vec();
    for other in rest {
        if running.is_empty() {
            break;
        }
        running = merge(&running, other);
    }

    Ok(ItemSet::from_sorted_unchecked(running))
}

/// Size of the intersection of two item sets, without allocating it.
pub fn count_common(a: &ItemSet, b: &ItemSet) -> usize {
    let (a, b) = (a.as_slice(), b.as_slice());
    let (mut i, mut j, mut count) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                count += 1;
                i += 1;
                j += 1;
            }
        }
    }
    count
}

/// Two-cursor merge: advance the smaller side, emit on equality.
fn merge(left: &[ItemPos], right: &[ItemPos]) -> Vec<ItemPos> {
    let mut result = Vec::with_capacity(left.len().min(right.len()));
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        match left[i].cmp(&right[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                result.push(left[i]);
                i += 1;
                j += 1;
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_sets() {
        assert!(intersect(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_single_set_unchanged() {
        assert_eq!(intersect(&[&[3, 5, 8]]).unwrap().as_slice(), &[3, 5, 8]);
        assert!(intersect(&[&[]]).unwrap().is_empty());
    }

    #[test]
    fn test_pairwise() {
        let result = intersect(&[&[0, 2, 4, 6, 8], &[1, 2, 3, 4, 5]]).unwrap();
        assert_eq!(result.as_slice(), &[2, 4]);
    }

    #[test]
    fn test_disjoint() {
        assert!(intersect(&[&[0, 2], &[1, 3]]).unwrap().is_empty());
    }

    #[test]
    fn test_empty_member_short_circuits() {
        assert!(intersect(&[&[1, 2], &[], &[1, 2]]).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_unsorted_input() {
        assert_eq!(
            intersect(&[&[0, 1], &[4, 3]]),
            Err(IntersectionError::InvalidInput { set: 1, position: 1 })
        );
        assert_eq!(
            intersect(&[&[1, 1]]),
            Err(IntersectionError::InvalidInput { set: 0, position: 1 })
        );
    }

    #[test]
    fn test_count_common() {
        let a = ItemSet::from_unsorted(vec![1, 3, 5, 7]);
        let b = ItemSet::from_unsorted(vec![3, 4, 5]);
        assert_eq!(count_common(&a, &b), 2);
        assert_eq!(count_common(&a, &ItemSet::empty()), 0);
    }
}
