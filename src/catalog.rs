// ABOUTME: Selection catalogs and the key-to-domain-value codec
// ABOUTME: Defines the fixed option sets (years, seasons, categories, limits, range kinds) and their defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Track Insights

//! # Selection Catalogs
//!
//! A catalog is a fixed, ordered set of selectable options with unique keys
//! and an optional default. The UI edits selections as keys; the codec on
//! [`SelectionCatalog`] resolves a key to its typed [`DomainValue`].
//!
//! Catalogs are immutable values constructed once at startup and injected
//! into the engine. Two of them depend on the calendar (the years catalog
//! runs from the current year down to a fixed floor; the season default
//! depends on whether today falls inside the indoor window), so
//! [`CatalogSet::for_date`] takes the reference date explicitly and
//! [`CatalogSet::new`] supplies the current local date.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::{categories, limits, range_kinds, season, years};

/// Typed value a catalog key resolves to.
///
/// `Absent` covers both "nothing selected" and keys that deliberately map
/// to no value (e.g. the "All" entry of the years catalog).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum DomainValue {
    /// No value selected, or the selected entry carries no value
    #[default]
    Absent,
    /// Numeric value (year, result limit)
    Number(i64),
    /// Textual identifier (category, range kind)
    Text(String),
    /// Boolean flag (season: indoor = true)
    Flag(bool),
}

impl DomainValue {
    /// True when no concrete value is carried
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Numeric value, if this is a number
    #[must_use]
    pub const fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Textual value, if this is text
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean value, if this is a flag
    #[must_use]
    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

/// A single selectable option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique key within the catalog, as carried by the selection UI
    pub key: String,
    /// English display label
    pub label_en: String,
    /// German display label, where it differs from the English one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_de: Option<String>,
    /// Domain value this entry resolves to
    pub value: DomainValue,
}

impl CatalogEntry {
    fn new(key: &str, label_en: &str, value: DomainValue) -> Self {
        Self {
            key: key.to_owned(),
            label_en: label_en.to_owned(),
            label_de: None,
            value,
        }
    }

    fn with_german(key: &str, label_en: &str, label_de: &str, value: DomainValue) -> Self {
        Self {
            key: key.to_owned(),
            label_en: label_en.to_owned(),
            label_de: Some(label_de.to_owned()),
            value,
        }
    }
}

/// An ordered, immutable set of selectable options with an optional default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionCatalog {
    entries: Vec<CatalogEntry>,
    default_key: Option<String>,
}

impl SelectionCatalog {
    /// Build a catalog from its entries.
    ///
    /// Keys must be unique and a declared default must name an existing
    /// entry; both are construction invariants of the fixed option tables,
    /// so violations abort construction.
    #[must_use]
    pub fn new(entries: Vec<CatalogEntry>, default_key: Option<&str>) -> Self {
        for (i, entry) in entries.iter().enumerate() {
            assert!(
                !entries[..i].iter().any(|e| e.key == entry.key),
                "duplicate catalog key: {}",
                entry.key
            );
        }
        if let Some(key) = default_key {
            assert!(
                entries.iter().any(|e| e.key == key),
                "default key not present in catalog: {key}"
            );
        }
        Self {
            entries,
            default_key: default_key.map(str::to_owned),
        }
    }

    /// Entries in catalog order
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Look up an entry by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Resolve a selected key to its domain value.
    ///
    /// Returns [`DomainValue::Absent`] when nothing is selected, the key is
    /// unknown, or the entry deliberately carries no value.
    #[must_use]
    pub fn resolve(&self, selected: Option<&str>) -> DomainValue {
        selected
            .and_then(|key| self.get(key))
            .map_or(DomainValue::Absent, |entry| entry.value.clone())
    }

    /// The catalog's configured default key, if it declares one
    #[must_use]
    pub fn default_selection(&self) -> Option<&str> {
        self.default_key.as_deref()
    }
}

/// The five catalogs the filter configuration selects from
#[derive(Debug, Clone)]
pub struct CatalogSet {
    /// Years, newest first, with a leading "All" entry
    pub years: SelectionCatalog,
    /// Indoor/outdoor season
    pub seasons: SelectionCatalog,
    /// Age/sex categories, including the aggregate all-men/all-women entries
    pub categories: SelectionCatalog,
    /// Result-count limit tiers
    pub result_limits: SelectionCatalog,
    /// Range-filter kinds
    pub range_kinds: SelectionCatalog,
}

impl CatalogSet {
    /// Build the catalogs relative to the current local date
    #[must_use]
    pub fn new() -> Self {
        Self::for_date(chrono::Local::now().date_naive())
    }

    /// Build the catalogs relative to an explicit reference date.
    ///
    /// This is the injectable form used by tests: the years catalog and the
    /// season default are the only date-dependent pieces of the engine.
    #[must_use]
    pub fn for_date(today: NaiveDate) -> Self {
        Self {
            years: years_catalog(today),
            seasons: seasons_catalog(today),
            categories: categories_catalog(),
            result_limits: result_limits_catalog(),
            range_kinds: range_kinds_catalog(),
        }
    }
}

impl Default for CatalogSet {
    fn default() -> Self {
        Self::new()
    }
}

fn years_catalog(today: NaiveDate) -> SelectionCatalog {
    let current_year = today.year();
    let mut entries = vec![CatalogEntry::with_german(
        "all",
        "All",
        "Alle",
        DomainValue::Absent,
    )];
    for year in (years::FLOOR_YEAR..=current_year).rev() {
        let key = year.to_string();
        entries.push(CatalogEntry::new(
            &key,
            &key,
            DomainValue::Number(i64::from(year)),
        ));
    }
    let default = current_year.to_string();
    SelectionCatalog::new(entries, Some(&default))
}

fn seasons_catalog(today: NaiveDate) -> SelectionCatalog {
    let entries = vec![
        CatalogEntry::new("i", "Indoor", DomainValue::Flag(true)),
        CatalogEntry::new("o", "Outdoor", DomainValue::Flag(false)),
    ];
    let default = if in_indoor_window(today) { "i" } else { "o" };
    SelectionCatalog::new(entries, Some(default))
}

/// Both window edges are inclusive: Jan 20 and Mar 20 still default to indoor.
fn in_indoor_window(today: NaiveDate) -> bool {
    let start =
        NaiveDate::from_ymd_opt(today.year(), season::INDOOR_START_MONTH, season::INDOOR_START_DAY);
    let end = NaiveDate::from_ymd_opt(today.year(), season::INDOOR_END_MONTH, season::INDOOR_END_DAY);
    match (start, end) {
        (Some(start), Some(end)) => today >= start && today <= end,
        _ => false,
    }
}

fn categories_catalog() -> SelectionCatalog {
    let text = |id: &str| DomainValue::Text(id.to_owned());
    let entries = vec![
        CatalogEntry::with_german("all_m", "All Men", "Alle Männer", text(categories::ALL_MEN)),
        CatalogEntry::with_german("all_f", "All Women", "Alle Frauen", text(categories::ALL_WOMEN)),
        CatalogEntry::with_german("men", "Men", "Männer", text("m")),
        CatalogEntry::with_german("women", "Women", "Frauen", text("f")),
        CatalogEntry::new("u23_m", "U23 M", text("u23_m")),
        CatalogEntry::new("u23_f", "U23 W", text("u23_f")),
        CatalogEntry::new("u20_m", "U20 M", text("u20_m")),
        CatalogEntry::new("u20_f", "U20 W", text("u20_f")),
        CatalogEntry::new("u18_m", "U18 M", text("u18_m")),
        CatalogEntry::new("u18_f", "U18 W", text("u18_f")),
        CatalogEntry::new("u16_m", "U16 M", text("u16_m")),
        CatalogEntry::new("u16_f", "U16 W", text("u16_f")),
        CatalogEntry::new("u14_m", "U14 M", text("u14_m")),
        CatalogEntry::new("u14_f", "U14 W", text("u14_f")),
        CatalogEntry::new("u12_m", "U12 M", text("u12_m")),
        CatalogEntry::new("u12_f", "U12 W", text("u12_f")),
        CatalogEntry::new("u10_m", "U10 M", text("u10_m")),
        CatalogEntry::new("u10_f", "U10 W", text("u10_f")),
    ];
    SelectionCatalog::new(entries, Some("all_m"))
}

fn result_limits_catalog() -> SelectionCatalog {
    let entries = limits::RESULT_LIMIT_TIERS
        .iter()
        .map(|limit| {
            let key = limit.to_string();
            CatalogEntry::new(&key, &key, DomainValue::Number(*limit))
        })
        .collect();
    let default = limits::RESULT_LIMIT_TIERS[limits::DEFAULT_TIER_INDEX].to_string();
    SelectionCatalog::new(entries, Some(&default))
}

fn range_kinds_catalog() -> SelectionCatalog {
    let entries = vec![CatalogEntry::with_german(
        range_kinds::SCORE,
        "Score",
        "Punkte",
        DomainValue::Text(range_kinds::SCORE.to_owned()),
    )];
    SelectionCatalog::new(entries, None)
}
