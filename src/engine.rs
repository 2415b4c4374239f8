// ABOUTME: The dependent filter-configuration engine and discipline-list resolver
// ABOUTME: Owns configuration state, reacts to edits, and keeps refreshes race-free via sequence tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Track Insights

//! # Bestlist Engine
//!
//! [`BestlistEngine`] owns the filter configuration, the currently valid
//! discipline list and the last successful result set. All mutation goes
//! through `&mut self` on one logical sequencing context (the UI event
//! loop); nothing here needs a lock.
//!
//! ## Reactive rules
//!
//! Instead of recompute-everything passes, each edit declares what it
//! triggers via [`EditEffect`]:
//!
//! - edits to year, category, season or the restrict-category flag
//!   invalidate the discipline list and require a refresh;
//! - category edits additionally force the restrict-category flag off for
//!   the aggregate all-men/all-women categories;
//! - discipline-dependent filter gating is derived on every read from the
//!   selected discipline's capabilities and never stored.
//!
//! ## Refresh ordering
//!
//! Discipline refreshes can overlap: edits in quick succession issue fetch
//! N+1 before fetch N resolves. Every refresh carries a monotonically
//! increasing token; a response is applied only when its token still is
//! the latest, otherwise it is discarded as [`RefreshOutcome::Stale`]
//! without touching the list or the selection. Callers driving fetches
//! themselves use [`BestlistEngine::begin_discipline_refresh`] /
//! [`BestlistEngine::apply_discipline_refresh`]; the serialized
//! convenience [`BestlistEngine::refresh_disciplines`] awaits in place, so
//! only the latest request is ever in flight.

use tracing::{debug, trace, warn};

use crate::catalog::{CatalogEntry, CatalogSet, DomainValue};
use crate::constants::{categories, range_kinds, score_range};
use crate::errors::EngineResult;
use crate::external::{DisciplineSource, ResultsSource};
use crate::filter::FilterConfiguration;
use crate::models::{
    BestlistQuery, BestlistResponse, BestlistRow, ConfigurationInformation, DisciplineDescriptor,
    DisciplineQuery,
};
use crate::query::build_query;
use crate::ranking::compute_ranks;

/// Derived action a state transition triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditEffect {
    /// The edit has no downstream effect
    None,
    /// The edit invalidated the discipline list; a refresh must be issued
    RefreshDisciplines,
}

impl EditEffect {
    /// True when the edit requires a discipline refresh
    #[must_use]
    pub const fn triggers_refresh(&self) -> bool {
        matches!(self, Self::RefreshDisciplines)
    }
}

/// An issued discipline refresh: its ordering token and the request
/// snapshot to send
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRefresh {
    /// Token identifying this refresh; only the latest token is applied
    pub token: u64,
    /// Request parameters snapshotted at issue time
    pub query: DisciplineQuery,
}

/// What became of an arrived discipline-refresh response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The response was current and replaced the discipline list
    Applied {
        /// Whether the previously selected discipline fell out of the new
        /// list and the selection was cleared
        selection_cleared: bool,
    },
    /// The response belonged to a superseded request and was dropped.
    /// Never surfaced to the user.
    Stale,
}

/// A result set annotated with computed competition ranks
#[derive(Debug, Clone)]
pub struct RankedBestlist {
    /// Display-relevant discipline properties echoed by the service
    pub configuration: ConfigurationInformation,
    /// Result rows in display order
    pub results: Vec<BestlistRow>,
    /// Competition rank per row, ties shared, gaps after ties
    pub ranks: Vec<u32>,
}

/// The dependent filter-configuration engine
#[derive(Debug)]
pub struct BestlistEngine {
    catalogs: CatalogSet,
    config: FilterConfiguration,
    disciplines: Vec<DisciplineDescriptor>,
    refresh_token: u64,
    latest_results: Option<RankedBestlist>,
}

impl BestlistEngine {
    /// Create an engine with registry defaults over the given catalogs
    #[must_use]
    pub fn new(catalogs: CatalogSet) -> Self {
        let config = FilterConfiguration::with_defaults(&catalogs);
        Self {
            catalogs,
            config,
            disciplines: Vec::new(),
            refresh_token: 0,
            latest_results: None,
        }
    }

    /// The catalogs this engine selects from
    #[must_use]
    pub fn catalogs(&self) -> &CatalogSet {
        &self.catalogs
    }

    /// Read-only view of the current configuration
    #[must_use]
    pub fn config(&self) -> &FilterConfiguration {
        &self.config
    }

    /// The currently valid discipline list, wholesale-replaced on every
    /// successful refresh
    #[must_use]
    pub fn available_disciplines(&self) -> &[DisciplineDescriptor] {
        &self.disciplines
    }

    /// The last successfully fetched, rank-annotated result set
    #[must_use]
    pub fn latest_results(&self) -> Option<&RankedBestlist> {
        self.latest_results.as_ref()
    }

    // ── Edits ───────────────────────────────────────────────────────────

    /// Select a year by catalog key. The "all" entry clears the year.
    pub fn select_year(&mut self, key: &str) -> EditEffect {
        let year = self.catalogs.years.resolve(Some(key)).as_number();
        if year == self.config.year {
            return EditEffect::None;
        }
        self.config.year = year;
        debug!(?year, "year changed, discipline list invalidated");
        EditEffect::RefreshDisciplines
    }

    /// Select a season by catalog key
    pub fn select_season(&mut self, key: &str) -> EditEffect {
        let Some(indoor) = self.catalogs.seasons.resolve(Some(key)).as_flag() else {
            return EditEffect::None;
        };
        if indoor == self.config.season_indoor {
            return EditEffect::None;
        }
        self.config.season_indoor = indoor;
        debug!(indoor, "season changed, discipline list invalidated");
        EditEffect::RefreshDisciplines
    }

    /// Select a category by catalog key.
    ///
    /// The aggregate all-men/all-women categories force the
    /// restrict-category flag off and keep it disabled.
    pub fn select_category(&mut self, key: &str) -> EditEffect {
        let resolved = self.catalogs.categories.resolve(Some(key));
        let changed = match resolved {
            DomainValue::Text(id) if id != self.config.category => {
                self.config.category = id;
                true
            }
            _ => false,
        };
        let gated = self.apply_category_gating();
        if changed || gated {
            debug!(category = %self.config.category, "category changed, discipline list invalidated");
            EditEffect::RefreshDisciplines
        } else {
            EditEffect::None
        }
    }

    /// Select a discipline by its list key, or clear the selection
    pub fn select_discipline(&mut self, key: Option<&str>) -> EditEffect {
        self.config.selected_discipline_key = key.map(str::to_owned);
        EditEffect::None
    }

    /// Record that the user has interacted with the discipline field
    pub fn mark_discipline_touched(&mut self) {
        self.config.discipline_touched = true;
    }

    /// Select a result-limit tier by catalog key
    pub fn select_result_limit(&mut self, key: &str) -> EditEffect {
        if let Some(limit) = self.catalogs.result_limits.resolve(Some(key)).as_number() {
            self.config.result_limit = limit;
        }
        EditEffect::None
    }

    /// Select a range-filter kind by catalog key, or clear it
    pub fn select_range_kind(&mut self, key: Option<&str>) -> EditEffect {
        self.config.range_kind = self.catalogs.range_kinds.resolve(key).as_text().map(str::to_owned);
        EditEffect::None
    }

    /// Toggle the one-result-per-athlete flag
    pub fn set_one_result_per_athlete(&mut self, value: bool) -> EditEffect {
        self.config.one_result_per_athlete = value;
        EditEffect::None
    }

    /// Toggle the only-homologated flag
    pub fn set_only_homologated(&mut self, value: bool) -> EditEffect {
        self.config.only_homologated = value;
        EditEffect::None
    }

    /// Toggle the allow-wind flag.
    ///
    /// The stored value is inert while the selected discipline is not
    /// wind-relevant; the query builder drops it.
    pub fn set_allow_wind(&mut self, value: bool) -> EditEffect {
        self.config.allow_wind = value;
        EditEffect::None
    }

    /// Toggle the restrict-category flag.
    ///
    /// While the category does not support the restriction the flag stays
    /// off regardless of the requested value.
    pub fn set_restrict_category(&mut self, value: bool) -> EditEffect {
        let effective = value && self.restrict_category_enabled();
        if effective == self.config.restrict_category {
            return EditEffect::None;
        }
        self.config.restrict_category = effective;
        debug!(
            restrict_category = effective,
            "category restriction changed, discipline list invalidated"
        );
        EditEffect::RefreshDisciplines
    }

    /// Set the score-range filter bounds, clamped to the slider domain
    pub fn set_score_range(&mut self, start: i64, end: i64) -> EditEffect {
        self.config.score_range = (
            start.clamp(score_range::SCORE_MIN, score_range::SCORE_MAX),
            end.clamp(score_range::SCORE_MIN, score_range::SCORE_MAX),
        );
        EditEffect::None
    }

    /// Force the restriction flag off while the category does not support
    /// it. Idempotent. Returns whether the flag was flipped.
    fn apply_category_gating(&mut self) -> bool {
        if self.restrict_category_enabled() || !self.config.restrict_category {
            return false;
        }
        self.config.restrict_category = false;
        true
    }

    // ── Derived state, recomputed on every read ─────────────────────────

    /// The descriptor of the currently selected discipline, if the
    /// selection is set and present in the current list
    #[must_use]
    pub fn selected_discipline(&self) -> Option<&DisciplineDescriptor> {
        let key = self.config.selected_discipline_key.as_deref()?;
        self.disciplines.iter().find(|d| d.key() == key)
    }

    /// Whether the allow-wind toggle is meaningful for the selection
    #[must_use]
    pub fn wind_filter_relevant(&self) -> bool {
        self.selected_discipline().is_some_and(|d| d.wind_relevant)
    }

    /// Whether the score-range filter applies to the selection
    #[must_use]
    pub fn score_filter_available(&self) -> bool {
        self.selected_discipline().is_some_and(|d| d.score_available)
    }

    /// Range-kind options selectable right now: the score kind is excluded
    /// while no discipline is selected or the selection has no score
    #[must_use]
    pub fn selectable_range_kinds(&self) -> Vec<&CatalogEntry> {
        let score_ok = self.score_filter_available();
        self.catalogs
            .range_kinds
            .entries()
            .iter()
            .filter(|e| score_ok || e.key != range_kinds::SCORE)
            .collect()
    }

    /// Whether the restrict-category checkbox is meaningful for the
    /// current category
    #[must_use]
    pub fn restrict_category_enabled(&self) -> bool {
        self.config.category != categories::ALL_MEN && self.config.category != categories::ALL_WOMEN
    }

    /// Whether the discipline field should currently display as invalid
    #[must_use]
    pub fn discipline_error_visible(&self) -> bool {
        self.config.discipline_touched && self.config.selected_discipline_key.is_none()
    }

    // ── Discipline refresh ──────────────────────────────────────────────

    /// Issue a discipline refresh: bump the ordering token and snapshot
    /// the request parameters.
    ///
    /// The caller sends the returned query to the discipline source and
    /// hands the response to [`Self::apply_discipline_refresh`] together
    /// with the token.
    pub fn begin_discipline_refresh(&mut self) -> PendingRefresh {
        self.refresh_token += 1;
        let query = DisciplineQuery {
            year: self.config.year,
            category: self.config.category.clone(),
            indoor: self.config.season_indoor,
            restrict_category: self.config.restrict_category,
        };
        debug!(token = self.refresh_token, ?query, "discipline refresh issued");
        PendingRefresh {
            token: self.refresh_token,
            query,
        }
    }

    /// Apply a discipline-refresh response.
    ///
    /// A response for a superseded token is dropped wholesale: the list
    /// and the selection stay untouched. A current response replaces the
    /// list and clears the selection if its key is no longer present.
    pub fn apply_discipline_refresh(
        &mut self,
        token: u64,
        disciplines: Vec<DisciplineDescriptor>,
    ) -> RefreshOutcome {
        if token != self.refresh_token {
            trace!(
                token,
                latest = self.refresh_token,
                "stale discipline response dropped"
            );
            return RefreshOutcome::Stale;
        }
        self.disciplines = disciplines;

        let selection_stale = self
            .config
            .selected_discipline_key
            .as_deref()
            .is_some_and(|key| !self.disciplines.iter().any(|d| d.key() == key));
        if selection_stale {
            debug!(
                key = ?self.config.selected_discipline_key,
                "selected discipline no longer available, selection cleared"
            );
            self.config.selected_discipline_key = None;
        }
        RefreshOutcome::Applied {
            selection_cleared: selection_stale,
        }
    }

    /// Refresh the discipline list in place, serialized: issue, await,
    /// apply.
    ///
    /// # Errors
    ///
    /// [`crate::errors::EngineError::Fetch`] when the source fails; the
    /// previous list and selection are retained and further edits are not
    /// blocked.
    pub async fn refresh_disciplines(
        &mut self,
        source: &dyn DisciplineSource,
    ) -> EngineResult<RefreshOutcome> {
        let pending = self.begin_discipline_refresh();
        match source.fetch_disciplines(&pending.query).await {
            Ok(disciplines) => Ok(self.apply_discipline_refresh(pending.token, disciplines)),
            Err(err) => {
                warn!(error = %err, "discipline refresh failed, keeping previous list");
                Err(err)
            }
        }
    }

    // ── Results ─────────────────────────────────────────────────────────

    /// Build the bestlist request for the current configuration snapshot
    ///
    /// # Errors
    ///
    /// [`crate::errors::EngineError::MissingDiscipline`] when no
    /// discipline is selected.
    pub fn build_query(&self) -> EngineResult<BestlistQuery> {
        build_query(&self.config, &self.disciplines)
    }

    /// Store a bestlist response, annotating it with competition ranks
    pub fn apply_results(&mut self, response: BestlistResponse) -> &RankedBestlist {
        let ranks = compute_ranks(&response.results);
        self.latest_results.insert(RankedBestlist {
            configuration: response.configuration,
            results: response.results,
            ranks,
        })
    }

    /// Fetch results for the current configuration.
    ///
    /// The query is a snapshot taken before the await point; later edits
    /// do not affect a request already in flight. On failure the last
    /// successful result set stays visible.
    ///
    /// # Errors
    ///
    /// [`crate::errors::EngineError::MissingDiscipline`] when no
    /// discipline is selected (the trigger is expected to be disabled in
    /// that state), or [`crate::errors::EngineError::Fetch`] when the
    /// source fails.
    pub async fn fetch_results(
        &mut self,
        source: &dyn ResultsSource,
    ) -> EngineResult<&RankedBestlist> {
        let query = self.build_query()?;
        match source.fetch_bestlist(&query).await {
            Ok(response) => Ok(self.apply_results(response)),
            Err(err) => {
                warn!(error = %err, "bestlist fetch failed, keeping previous results");
                Err(err)
            }
        }
    }
}

impl Default for BestlistEngine {
    fn default() -> Self {
        Self::new(CatalogSet::new())
    }
}
