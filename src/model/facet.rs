// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Facet descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a facet in the declaration order given at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacetId(usize);

impl FacetId {
    /// Create a facet ID from its declaration position.
    pub const fn new(position: usize) -> Self {
        Self(position)
    }

    /// Get the declaration position.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for FacetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named category of criteria, e.g. "color".
///
/// The `name` is the key looked up on every item; `display_label` is only
/// carried through for the presentation layer. Older data files spell the
/// label `text`, so that name is accepted on input as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facet {
    /// Left empty when absent so the index builder can report it.
    #[serde(default)]
    pub name: String,

    #[serde(default, alias = "display_label", alias = "text")]
    pub display_label: String,
}

impl Facet {
    pub fn new(name: impl Into<String>, display_label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_label: display_label.into(),
        }
    }

    /// A facet whose label is its name.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            display_label: name.clone(),
            name,
        }
    }
}
