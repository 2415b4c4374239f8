// ABOUTME: Integration tests for performance and date formatting
// ABOUTME: Covers every discipline class and the date pass-through rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Track Insights

use bestlist_engine::formatters::{format_date, format_result};
use bestlist_engine::models::DisciplineType;

#[test]
fn test_short_track_fixed_two_decimals() {
    assert_eq!(format_result(850, DisciplineType::ShortTrack), "8.50");
    assert_eq!(format_result(1009, DisciplineType::ShortTrack), "10.09");
    assert_eq!(format_result(999, DisciplineType::ShortTrack), "9.99");
}

#[test]
fn test_throw_and_jump_fixed_two_decimals() {
    assert_eq!(format_result(6521, DisciplineType::Throw), "65.21");
    assert_eq!(format_result(700, DisciplineType::Jump), "7.00");
    assert_eq!(format_result(205, DisciplineType::Jump), "2.05");
}

#[test]
fn test_long_track_minutes_and_padded_seconds() {
    assert_eq!(format_result(18930, DisciplineType::LongTrack), "3:09.30");
    assert_eq!(format_result(6000, DisciplineType::LongTrack), "1:00.00");
    assert_eq!(format_result(12345, DisciplineType::LongTrack), "2:03.45");
    // over ten seconds needs no padding
    assert_eq!(format_result(7150, DisciplineType::LongTrack), "1:11.50");
    // under a minute keeps a zero minute field
    assert_eq!(format_result(5432, DisciplineType::LongTrack), "0:54.32");
}

#[test]
fn test_multi_and_distance_plain_decimal() {
    assert_eq!(format_result(850, DisciplineType::Multi), "8.5");
    assert_eq!(format_result(800, DisciplineType::Multi), "8");
    assert_eq!(format_result(18930, DisciplineType::Distance), "189.3");
    assert_eq!(format_result(123456, DisciplineType::Multi), "1234.56");
    assert_eq!(format_result(123407, DisciplineType::Distance), "1234.07");
}

#[test]
fn test_date_formats_iso_timestamps() {
    assert_eq!(format_date("2024-03-05T00:00:00Z"), "05.03.2024");
    assert_eq!(format_date("2023-12-31T14:30:00+01:00"), "31.12.2023");
}

#[test]
fn test_date_formats_plain_dates() {
    assert_eq!(format_date("2000-01-01"), "01.01.2000");
    assert_eq!(format_date("1998-11-23"), "23.11.1998");
}

#[test]
fn test_unparseable_date_passes_through() {
    assert_eq!(format_date("N/A"), "N/A");
    assert_eq!(format_date(""), "");
    assert_eq!(format_date("sometime in spring"), "sometime in spring");
}
