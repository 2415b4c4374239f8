// ABOUTME: Main library entry point for the bestlist query engine
// ABOUTME: Wires catalogs, filter configuration, dependency resolution, ranking and formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Track Insights

// deny(unsafe_code): nothing in this crate needs unsafe
#![deny(unsafe_code)]

//! # Bestlist Engine
//!
//! The query-configuration core of an athletics best-performance
//! statistics service. It sits between a user-editable filter form and the
//! remote results query and owns the parts with real behavior:
//!
//! - **Selection catalogs** — the fixed option sets (years, seasons,
//!   categories, result limits, range kinds), their defaults and the
//!   key-to-value codec
//! - **Dependency resolution** — year/category/season/restriction edits
//!   invalidate the valid-discipline list; refreshes are fetched
//!   asynchronously and kept race-free with sequence tokens; a selection
//!   that falls out of the refreshed list is cleared
//! - **Query building** — an internally consistent request payload from
//!   the current configuration snapshot, with discipline-dependent field
//!   suppression
//! - **Competition ranking** — tied results share a rank, the next
//!   distinct result skips to its 1-based position
//! - **Formatting** — discipline-type-dependent performance rendering and
//!   `DD.MM.YYYY` dates
//!
//! ## Example
//!
//! ```rust,no_run
//! use bestlist_engine::catalog::CatalogSet;
//! use bestlist_engine::config::ApiConfig;
//! use bestlist_engine::engine::BestlistEngine;
//! use bestlist_engine::external::StatsApiClient;
//!
//! # async fn example() -> bestlist_engine::errors::EngineResult<()> {
//! let client = StatsApiClient::new(ApiConfig::from_env());
//! let mut engine = BestlistEngine::new(CatalogSet::new());
//!
//! engine.refresh_disciplines(&client).await?;
//! let first_key = engine.available_disciplines().first().map(|d| d.key());
//! if let Some(key) = first_key {
//!     engine.select_discipline(Some(&key));
//!     let ranked = engine.fetch_results(&client).await?;
//!     println!("{} results", ranked.results.len());
//! }
//! # Ok(())
//! # }
//! ```

/// Selection catalogs and the key-to-domain-value codec
pub mod catalog;

/// Environment-driven configuration for the statistics API client
pub mod config;

/// Fixed domain values grouped by concern
pub mod constants;

/// The dependent filter-configuration engine and discipline resolver
pub mod engine;

/// Unified error handling with the shared result alias
pub mod errors;

/// Seams and HTTP client for the two remote collaborators
pub mod external;

/// The user-editable filter configuration aggregate
pub mod filter;

/// Display formatting for performances and dates
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Wire and domain models for both services
pub mod models;

/// Bestlist request assembly from a configuration snapshot
pub mod query;

/// Competition ranking with shared ranks for ties
pub mod ranking;
