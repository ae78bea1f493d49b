// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Read access to caller-owned items.
//!
//! The engine never copies or mutates items. It only asks each one, facet by
//! facet, for the string value(s) it carries. A value may be a single string
//! or a list of strings; both are handed back as a list.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Why an item could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("item is not an object")]
    NotAnObject,

    #[error("value is not a string")]
    NonString,
}

/// An item the index can read facet values from.
pub trait Record {
    /// The values this item carries under `facet`, in order.
    ///
    /// A missing facet yields an empty list.
    fn facet_values(&self, facet: &str) -> Result<Vec<&str>, RecordError>;
}

impl Record for Value {
    fn facet_values(&self, facet: &str) -> Result<Vec<&str>, RecordError> {
        let object = self.as_object().ok_or(RecordError::NotAnObject)?;
        match object.get(facet) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::String(text)) => Ok(vec![text.as_str()]),
            Some(Value::Array(values)) => values
                .iter()
                .map(|value| value.as_str().ok_or(RecordError::NonString))
                .collect(),
            Some(_) => Err(RecordError::NonString),
        }
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn facet_values(&self, facet: &str) -> Result<Vec<&str>, RecordError> {
        (**self).facet_values(facet)
    }
}

/// A facet value on a typed item: one string or an ordered list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FacetValue {
    Single(String),
    Many(Vec<String>),
}

impl FacetValue {
    fn as_list(&self) -> Vec<&str> {
        match self {
            FacetValue::Single(text) => vec![text.as_str()],
            FacetValue::Many(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

/// A typed item: facet name to value(s).
///
/// # Example
///
/// ```
/// use facet_search::model::{Item, Record};
///
/// let item = Item::new().with("color", "red").with_many("tags", ["new", "sale"]);
/// assert_eq!(item.facet_values("color").unwrap(), vec!["red"]);
/// assert_eq!(item.facet_values("tags").unwrap(), vec!["new", "sale"]);
/// assert!(item.facet_values("size").unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(BTreeMap<String, FacetValue>);

impl Item {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single value for a facet.
    pub fn with(mut self, facet: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(facet.into(), FacetValue::Single(value.into()));
        self
    }

    /// Set a list of values for a facet.
    pub fn with_many<I, S>(mut self, facet: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.0.insert(facet.into(), FacetValue::Many(values));
        self
    }

    pub fn get(&self, facet: &str) -> Option<&FacetValue> {
        self.0.get(facet)
    }
}

impl Record for Item {
    fn facet_values(&self, facet: &str) -> Result<Vec<&str>, RecordError> {
        Ok(self.0.get(facet).map(FacetValue::as_list).unwrap_or_default())
    }
}
