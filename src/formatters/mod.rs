// ABOUTME: Display formatting for performances and dates
// ABOUTME: Renders integer-encoded performances per discipline type and ISO dates as DD.MM.YYYY
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Track Insights

//! # Result Formatting
//!
//! Performances are stored as integers in hundredths of the discipline's
//! base unit (seconds, metres or points). The display format depends on the
//! discipline class:
//!
//! - throws, jumps and short track: two fixed decimals (`850` → `"8.50"`)
//! - long track: `minutes:seconds`, seconds zero-padded to width 5
//!   (`18930` → `"3:09.30"`)
//! - combined events and distance: plain decimal, no fixed precision
//!   (`850` → `"8.5"`, `800` → `"8"`)
//!
//! All formatting is integer arithmetic; hundredths survive exactly.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::DisciplineType;

/// Hundredths per base unit of the performance encoding
const UNIT: i64 = 100;
/// Hundredths per minute, for minute:second display
const MINUTE: i64 = 6000;

/// Format an integer-encoded performance for display
#[must_use]
pub fn format_result(performance: i64, discipline_type: DisciplineType) -> String {
    match discipline_type {
        DisciplineType::Throw | DisciplineType::Jump | DisciplineType::ShortTrack => {
            format!("{}.{:02}", performance / UNIT, performance % UNIT)
        }
        DisciplineType::LongTrack => {
            let minutes = performance / MINUTE;
            let rest = performance % MINUTE;
            format!("{minutes}:{:02}.{:02}", rest / UNIT, rest % UNIT)
        }
        DisciplineType::Multi | DisciplineType::Distance => {
            let whole = performance / UNIT;
            match performance % UNIT {
                0 => whole.to_string(),
                frac if frac % 10 == 0 => format!("{whole}.{}", frac / 10),
                frac => format!("{whole}.{frac:02}"),
            }
        }
    }
}

/// Render an ISO-parseable date string as `DD.MM.YYYY`.
///
/// Strings that fail to parse are passed through unchanged, matching how
/// the result tables show free-form date fields.
#[must_use]
pub fn format_date(date: &str) -> String {
    parse_iso_date(date).map_or_else(|| date.to_owned(), |d| d.format("%d.%m.%Y").to_string())
}

fn parse_iso_date(date: &str) -> Option<NaiveDate> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return Some(parsed.date_naive());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S") {
        return Some(parsed.date());
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}
