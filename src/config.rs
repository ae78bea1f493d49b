// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Engine configuration.

use serde::{Deserialize, Serialize};

/// What an empty working query matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyQueryPolicy {
    /// Nothing matches until a first criterion is picked.
    #[default]
    NoResults,
    /// Every item matches, so every criterion starts highlighted.
    AllItems,
}

/// Settings of one engine session.
///
/// # Example
///
/// ```
/// use facet_search::config::{EngineConfig, EmptyQueryPolicy};
///
/// let config: EngineConfig = serde_json::from_str(r#"{"empty_query": "all_items"}"#).unwrap();
/// assert_eq!(config.empty_query, EmptyQueryPolicy::AllItems);
///
/// let config: EngineConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(config, EngineConfig::default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub empty_query: EmptyQueryPolicy,
}

impl EngineConfig {
    pub fn with_empty_query(mut self, policy: EmptyQueryPolicy) -> Self {
        self.empty_query = policy;
        self
    }
}
