// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The `{facets, items}` data shape consumed by the engine.

use crate::model::Facet;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Facet declarations plus the items to index.
///
/// Items are kept as raw JSON so that malformed values are reported by the
/// index builder (with item and facet) rather than by the JSON parser.
///
/// # Example
///
/// ```
/// use facet_search::model::Dataset;
///
/// let data = Dataset::from_json_str(r#"{
///     "facets": [{"name": "color", "text": "Color"}],
///     "items": [{"color": "red"}, {"color": ["red", "blue"]}]
/// }"#).unwrap();
/// assert_eq!(data.facets[0].display_label, "Color");
/// assert_eq!(data.items.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub facets: Vec<Facet>,

    #[serde(default)]
    pub items: Vec<Value>,
}

impl Dataset {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}
