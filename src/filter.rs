// ABOUTME: The user-editable filter configuration aggregate
// ABOUTME: Typed fields resolved from catalog selections, with registry defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Track Insights

//! # Filter Configuration
//!
//! The mutable aggregate behind the bestlist query form. Fields hold typed
//! domain values (already run through the catalog codec); only the
//! discipline selection stays a key, because resolving it to an id needs
//! the currently available discipline list.
//!
//! The configuration is owned and mutated by
//! [`crate::engine::BestlistEngine`]; the query builder and tests read it
//! as a snapshot. It is created with registry defaults when a view opens
//! and discarded with the view — nothing here is persisted.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogSet;
use crate::constants::{limits, score_range};

/// Current state of every user-editable filter field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfiguration {
    /// Selected year; `None` queries all years
    pub year: Option<i64>,
    /// Selected category identifier
    pub category: String,
    /// Indoor (true) or outdoor (false) season
    pub season_indoor: bool,
    /// Selected result-count limit
    pub result_limit: i64,
    /// Selected range-filter kind, if any
    pub range_kind: Option<String>,
    /// Keep only each athlete's best result
    pub one_result_per_athlete: bool,
    /// Only count results achieved while the athlete was in the category
    pub restrict_category: bool,
    /// Exclude non-homologated results
    pub only_homologated: bool,
    /// Include wind-assisted results
    pub allow_wind: bool,
    /// Selection key of the chosen discipline, if any
    pub selected_discipline_key: Option<String>,
    /// Score range filter bounds, within the fixed slider domain
    pub score_range: (i64, i64),
    /// Whether the user has interacted with the discipline field at least
    /// once. Gates error display only; carries no query semantics.
    pub discipline_touched: bool,
}

impl FilterConfiguration {
    /// Build a configuration holding every catalog's default selection
    #[must_use]
    pub fn with_defaults(catalogs: &CatalogSet) -> Self {
        let year = catalogs
            .years
            .resolve(catalogs.years.default_selection())
            .as_number();
        let category = catalogs
            .categories
            .resolve(catalogs.categories.default_selection())
            .as_text()
            .map_or_else(|| crate::constants::categories::ALL_MEN.to_owned(), str::to_owned);
        let season_indoor = catalogs
            .seasons
            .resolve(catalogs.seasons.default_selection())
            .as_flag()
            .unwrap_or(false);
        let result_limit = catalogs
            .result_limits
            .resolve(catalogs.result_limits.default_selection())
            .as_number()
            .unwrap_or(limits::RESULT_LIMIT_TIERS[limits::DEFAULT_TIER_INDEX]);
        let range_kind = catalogs
            .range_kinds
            .resolve(catalogs.range_kinds.default_selection())
            .as_text()
            .map(str::to_owned);

        Self {
            year,
            category,
            season_indoor,
            result_limit,
            range_kind,
            one_result_per_athlete: true,
            restrict_category: false,
            only_homologated: true,
            allow_wind: false,
            selected_discipline_key: None,
            score_range: (score_range::SCORE_MIN, score_range::SCORE_MAX),
            discipline_touched: false,
        }
    }
}
