// ABOUTME: Integration tests for the selection catalogs and the codec
// ABOUTME: Covers default rules, calendar-relative construction and key resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Track Insights

use chrono::NaiveDate;

use bestlist_engine::catalog::{CatalogSet, DomainValue, SelectionCatalog};
use bestlist_engine::filter::FilterConfiguration;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

fn summer_catalogs() -> CatalogSet {
    CatalogSet::for_date(date(2024, 6, 1))
}

/// Every declared default resolves to the entry's own domain value
fn assert_default_round_trips(catalog: &SelectionCatalog) {
    let default = catalog.default_selection().expect("catalog has a default");
    let entry = catalog.get(default).expect("default names an entry");
    assert_eq!(catalog.resolve(Some(default)), entry.value);
}

#[test]
fn test_defaults_round_trip_through_codec() {
    let catalogs = summer_catalogs();
    assert_default_round_trips(&catalogs.years);
    assert_default_round_trips(&catalogs.seasons);
    assert_default_round_trips(&catalogs.categories);
    assert_default_round_trips(&catalogs.result_limits);
}

#[test]
fn test_years_run_from_current_down_to_floor() {
    let catalogs = summer_catalogs();
    let keys: Vec<&str> = catalogs
        .years
        .entries()
        .iter()
        .map(|e| e.key.as_str())
        .collect();

    assert_eq!(keys[0], "all");
    assert_eq!(keys[1], "2024");
    assert_eq!(keys[keys.len() - 1], "2006");
    // contiguous and descending
    assert_eq!(keys.len(), 1 + (2024 - 2006 + 1));
    assert_eq!(catalogs.years.default_selection(), Some("2024"));
    assert_eq!(catalogs.years.resolve(Some("all")), DomainValue::Absent);
    assert_eq!(
        catalogs.years.resolve(Some("2019")),
        DomainValue::Number(2019)
    );
}

#[test]
fn test_season_defaults_follow_indoor_window() {
    let indoor = CatalogSet::for_date(date(2025, 2, 1));
    assert_eq!(indoor.seasons.default_selection(), Some("i"));
    assert_eq!(
        indoor.seasons.resolve(Some("i")),
        DomainValue::Flag(true)
    );

    let outdoor = CatalogSet::for_date(date(2025, 8, 1));
    assert_eq!(outdoor.seasons.default_selection(), Some("o"));
    assert_eq!(
        outdoor.seasons.resolve(Some("o")),
        DomainValue::Flag(false)
    );

    // both window edges still count as indoor
    assert_eq!(
        CatalogSet::for_date(date(2025, 1, 20)).seasons.default_selection(),
        Some("i")
    );
    assert_eq!(
        CatalogSet::for_date(date(2025, 3, 20)).seasons.default_selection(),
        Some("i")
    );
    assert_eq!(
        CatalogSet::for_date(date(2025, 1, 19)).seasons.default_selection(),
        Some("o")
    );
}

#[test]
fn test_category_catalog_ids() {
    let catalogs = summer_catalogs();
    assert_eq!(catalogs.categories.default_selection(), Some("all_m"));
    assert_eq!(
        catalogs.categories.resolve(Some("men")),
        DomainValue::Text("m".to_owned())
    );
    assert_eq!(
        catalogs.categories.resolve(Some("women")),
        DomainValue::Text("f".to_owned())
    );
    assert_eq!(
        catalogs.categories.resolve(Some("u18_f")),
        DomainValue::Text("u18_f".to_owned())
    );
}

#[test]
fn test_result_limit_tiers() {
    let catalogs = summer_catalogs();
    let values: Vec<i64> = catalogs
        .result_limits
        .entries()
        .iter()
        .filter_map(|e| e.value.as_number())
        .collect();
    assert_eq!(values, vec![10, 30, 100, 500, 5000]);
    assert_eq!(catalogs.result_limits.default_selection(), Some("30"));
}

#[test]
fn test_range_kinds_have_no_default() {
    let catalogs = summer_catalogs();
    assert_eq!(catalogs.range_kinds.default_selection(), None);
    assert_eq!(catalogs.range_kinds.resolve(None), DomainValue::Absent);
    assert_eq!(
        catalogs.range_kinds.resolve(Some("score")),
        DomainValue::Text("score".to_owned())
    );
}

#[test]
fn test_unknown_key_resolves_absent() {
    let catalogs = summer_catalogs();
    assert_eq!(catalogs.years.resolve(Some("1999")), DomainValue::Absent);
    assert_eq!(
        catalogs.categories.resolve(Some("masters")),
        DomainValue::Absent
    );
}

#[test]
fn test_filter_defaults_mirror_catalog_defaults() {
    let config = FilterConfiguration::with_defaults(&summer_catalogs());

    assert_eq!(config.year, Some(2024));
    assert_eq!(config.category, "all_m");
    assert!(!config.season_indoor);
    assert_eq!(config.result_limit, 30);
    assert_eq!(config.range_kind, None);
    assert!(config.one_result_per_athlete);
    assert!(!config.restrict_category);
    assert!(config.only_homologated);
    assert!(!config.allow_wind);
    assert_eq!(config.selected_discipline_key, None);
    assert_eq!(config.score_range, (0, 1400));
    assert!(!config.discipline_touched);
}

#[test]
fn test_winter_filter_defaults_select_indoor() {
    let config = FilterConfiguration::with_defaults(&CatalogSet::for_date(date(2025, 2, 1)));
    assert!(config.season_indoor);
    assert_eq!(config.year, Some(2025));
}
