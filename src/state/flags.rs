// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-criterion selection flags.

use crate::model::CriterionId;
use serde::Serialize;

/// Transient flags of one criterion.
///
/// `highlighted` means reachable under the current query (non-zero count).
/// A selected criterion is always highlighted once the query is resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CriterionFlags {
    pub selected: bool,
    pub highlighted: bool,
}

impl CriterionFlags {
    pub const CLEAR: Self = Self {
        selected: false,
        highlighted: false,
    };

    pub const SELECTED: Self = Self {
        selected: true,
        highlighted: true,
    };
}

/// New flags of a criterion whose flags changed during a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlagChange {
    pub id: CriterionId,
    pub flags: CriterionFlags,
}
