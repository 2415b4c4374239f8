// ABOUTME: Builds the bestlist request payload from a configuration snapshot
// ABOUTME: Pure mapping with field suppression for disciplines without a score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Track Insights

//! # Query Builder
//!
//! Maps the current [`FilterConfiguration`] and available-discipline list
//! to a complete [`BestlistQuery`]. No I/O happens here; identical inputs
//! always yield structurally identical output.
//!
//! Suppression rules: the range kind (and with it both range bounds) is
//! dropped when the resolved discipline carries no score, and a stored
//! allow-wind flag is dropped when wind is not relevant for the
//! discipline — both may linger in the configuration from an earlier,
//! differently-capable selection.

use crate::errors::{EngineError, EngineResult};
use crate::filter::FilterConfiguration;
use crate::models::{BestlistQuery, DisciplineDescriptor};

/// Assemble the bestlist request for the current configuration.
///
/// # Errors
///
/// [`EngineError::MissingDiscipline`] when no discipline is selected, or
/// when the selected key is absent from `disciplines` (the resolver clears
/// such selections, so reaching that case is a contract violation by the
/// caller). No query is issued in either case.
pub fn build_query(
    config: &FilterConfiguration,
    disciplines: &[DisciplineDescriptor],
) -> EngineResult<BestlistQuery> {
    let selected_key = config
        .selected_discipline_key
        .as_deref()
        .ok_or(EngineError::MissingDiscipline)?;
    let discipline = disciplines
        .iter()
        .find(|d| d.key() == selected_key)
        .ok_or(EngineError::MissingDiscipline)?;

    let range_kind = if discipline.score_available {
        config.range_kind.clone()
    } else {
        None
    };
    let (range_start, range_end) = if range_kind.is_some() {
        (Some(config.score_range.0), Some(config.score_range.1))
    } else {
        (None, None)
    };

    Ok(BestlistQuery {
        year: config.year,
        category: config.category.clone(),
        discipline_id: discipline.id,
        only_homologated: config.only_homologated,
        restrict_category: config.restrict_category,
        one_result_per_athlete: config.one_result_per_athlete,
        allow_wind: config.allow_wind && discipline.wind_relevant,
        range_kind,
        range_start,
        range_end,
        limit: config.result_limit,
    })
}
