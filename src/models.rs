// ABOUTME: Wire and domain models for the discipline catalog and bestlist services
// ABOUTME: Defines query payloads, result rows and the discipline metadata descriptor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Track Insights

//! # Data Models
//!
//! Request and response shapes of the two remote collaborators (the
//! discipline catalog service and the bestlist query service), plus the
//! domain types the engine derives from them.
//!
//! Field names follow the wire contract; where the engine-side name reads
//! better, serde renames bridge the difference. Performances are integers
//! in hundredths of the discipline's base unit — see
//! [`crate::formatters::format_result`] for the display rule.

use serde::{Deserialize, Serialize};

/// Broad discipline classes; each implies a result display format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisciplineType {
    /// Throwing events (shot put, javelin, ...)
    Throw,
    /// Track events timed in seconds (sprints, hurdles)
    ShortTrack,
    /// Track events timed in minutes and seconds (800m and up)
    LongTrack,
    /// Jumping events
    Jump,
    /// Combined events scored in points
    Multi,
    /// Road and distance events measured in plain units
    Distance,
}

/// Metadata for one discipline as served by the discipline catalog service.
///
/// The engine's available-discipline list holds these wholesale; they are
/// replaced on every successful refresh, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisciplineDescriptor {
    /// Stable discipline id
    pub id: i64,
    /// Display name (e.g. "100m")
    pub name: String,
    /// Whether results in this discipline carry a score
    pub score_available: bool,
    /// Whether wind readings are relevant for this discipline
    pub wind_relevant: bool,
}

impl DisciplineDescriptor {
    /// Selection key for this discipline, as carried by the UI
    #[must_use]
    pub fn key(&self) -> String {
        self.id.to_string()
    }
}

/// Response envelope of the discipline catalog service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisciplinesResponse {
    /// Disciplines valid for the requested filter combination
    pub disciplines: Vec<DisciplineDescriptor>,
}

/// Request payload for the discipline catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisciplineQuery {
    /// Restrict to results of this year; all years when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    /// Category identifier (e.g. "m", "u18_f", "all_m")
    #[serde(rename = "category_identifier")]
    pub category: String,
    /// Indoor (true) or outdoor (false) season
    pub indoor: bool,
    /// Only count results achieved while the athlete was in the category
    pub restrict_category: bool,
}

/// Request payload for the bestlist query service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestlistQuery {
    /// Restrict to results of this year; all years when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    /// Category identifier
    #[serde(rename = "category_identifier")]
    pub category: String,
    /// Discipline to query, resolved from the current selection
    pub discipline_id: i64,
    /// Exclude non-homologated results
    pub only_homologated: bool,
    /// Only count results achieved while the athlete was in the category
    pub restrict_category: bool,
    /// Keep only each athlete's best result
    pub one_result_per_athlete: bool,
    /// Include wind-assisted results
    pub allow_wind: bool,
    /// Range-filter kind; omitted for disciplines without a score
    #[serde(rename = "range_type", skip_serializing_if = "Option::is_none")]
    pub range_kind: Option<String>,
    /// Lower range bound, present only when a range kind is sent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_start: Option<i64>,
    /// Upper range bound, present only when a range kind is sent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_end: Option<i64>,
    /// Maximum number of results to return
    pub limit: i64,
}

/// Display-relevant properties of the queried discipline, echoed by the
/// bestlist service alongside the results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationInformation {
    /// Whether a wind column applies
    pub wind_relevant: bool,
    /// Whether homologation status applies
    pub homologation_relevant: bool,
    /// Whether a score column applies
    pub score_available: bool,
    /// Discipline class, selects the performance display format
    pub discipline_type: DisciplineType,
}

/// Athlete part of a bestlist row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthleteInformation {
    /// Stable athlete id
    pub id: i64,
    /// Full name
    pub name: String,
    /// Nationality code
    pub nationality: String,
    /// Birthdate as an ISO date string
    pub birthdate: String,
}

/// Club part of a bestlist row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubInformation {
    /// Stable club id
    pub id: i64,
    /// Club name
    pub name: String,
}

/// Competition part of a bestlist row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventInformation {
    /// Stable event id
    pub id: i64,
    /// Competition name
    pub name: String,
}

/// Result part of a bestlist row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultInformation {
    /// Performance in hundredths of the discipline's base unit
    pub performance: i64,
    /// Wind reading, where recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind: Option<f64>,
    /// Rank string as recorded at the competition (e.g. "1.", "3.")
    pub rank: String,
    /// Competition location
    pub location: String,
    /// Result date as an ISO date string
    pub date: String,
    /// Whether the result is homologated
    pub homologated: bool,
    /// Score points for this performance
    pub points: i64,
}

/// One row of a bestlist result set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestlistRow {
    /// Athlete who achieved the result
    pub athlete: AthleteInformation,
    /// Club the athlete competed for
    pub club: ClubInformation,
    /// Competition the result was achieved at
    pub event: EventInformation,
    /// The result itself
    pub result: ResultInformation,
}

/// Response envelope of the bestlist query service.
///
/// Rows arrive pre-sorted in display order; the engine annotates ranks but
/// never reorders them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestlistResponse {
    /// Display-relevant discipline properties
    pub configuration: ConfigurationInformation,
    /// Result rows in display order
    pub results: Vec<BestlistRow>,
}
