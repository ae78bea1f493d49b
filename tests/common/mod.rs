// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use facet_search::model::{Facet, Item};
use facet_search::{CriterionId, EngineConfig, FacetEngine};

/// The three-item color/size catalogue.
///
/// Criterion IDs by first appearance: red=1, S=2, M=3, blue=4.
pub fn color_size_items() -> Vec<Item> {
    vec![
        Item::new().with("color", "red").with("size", "S"),
        Item::new().with("color", "red").with("size", "M"),
        Item::new().with("color", "blue").with("size", "S"),
    ]
}

pub fn color_size_engine() -> FacetEngine {
    FacetEngine::new(
        vec![Facet::new("color", "Color"), Facet::new("size", "Size")],
        &color_size_items(),
        EngineConfig::default(),
    )
    .unwrap()
}

/// A wider catalogue with a multi-valued facet.
pub fn catalogue_items() -> Vec<Item> {
    vec![
        Item::new().with("brand", "acme").with("color", "red").with_many("tags", ["new", "sale"]),
        Item::new().with("brand", "acme").with("color", "blue").with_many("tags", ["sale"]),
        Item::new().with("brand", "zenith").with("color", "red").with_many("tags", ["new"]),
        Item::new().with("brand", "zenith").with("color", "green"),
        Item::new().with("brand", "orbit").with("color", "red").with_many("tags", ["sale", "eco"]),
        Item::new().with("color", "blue").with_many("tags", ["eco"]),
    ]
}

pub fn catalogue_engine() -> FacetEngine {
    FacetEngine::new(
        vec![Facet::named("brand"), Facet::named("color"), Facet::named("tags")],
        &catalogue_items(),
        EngineConfig::default(),
    )
    .unwrap()
}

/// Look up a criterion that must exist.
pub fn criterion(engine: &FacetEngine, facet: &str, text: &str) -> CriterionId {
    engine
        .find_criterion(facet, text)
        .unwrap_or_else(|| panic!("no criterion {}={}", facet, text))
}
