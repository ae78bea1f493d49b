// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for index construction, selection and intersection.

use crate::model::CriterionId;
use thiserror::Error;

/// Malformed facet or item data, detected while building the index.
///
/// Fatal to the index being built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("facet descriptor {position} has an empty name")]
    MissingFacetName { position: usize },

    #[error("facet '{name}' is declared more than once")]
    DuplicateFacet { name: String },

    #[error("item {item} is not an object")]
    NotAnObject { item: usize },

    #[error("item {item} has a non-string value for facet '{facet}'")]
    NonStringValue { item: usize, facet: String },

    #[error("too many distinct criteria for a 32-bit criterion id")]
    TooManyCriteria,
}

/// A click that could not be applied.
///
/// The selection is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unknown criterion id {0}")]
    UnknownCriterionId(CriterionId),
}

/// Input to the intersection engine broke the sorted-set precondition.
///
/// Only reachable through a bug in whoever built the input sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntersectionError {
    #[error("input set {set} is not strictly ascending at offset {position}")]
    InvalidInput { set: usize, position: usize },
}

/// Errors surfaced by the engine session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("internal invariant violated: {0}")]
    Internal(#[from] IntersectionError),
}
