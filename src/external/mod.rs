// ABOUTME: External collaborator seams for the discipline catalog and bestlist services
// ABOUTME: Declares the async source traits the engine fetches through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Track Insights

//! # External Sources
//!
//! The engine talks to two remote collaborators: the discipline catalog
//! service (which disciplines are valid for a filter combination) and the
//! bestlist query service (the result rows themselves). Both are reached
//! through the traits below so the resolver can be driven by in-process
//! fakes in tests; [`stats_api::StatsApiClient`] is the HTTP
//! implementation of both.

/// HTTP client for the track statistics API
pub mod stats_api;

pub use stats_api::StatsApiClient;

use async_trait::async_trait;

use crate::errors::EngineResult;
use crate::models::{BestlistQuery, BestlistResponse, DisciplineDescriptor, DisciplineQuery};

/// Supplier of the valid-discipline list for a filter combination
#[async_trait]
pub trait DisciplineSource: Send + Sync {
    /// Fetch the disciplines valid for the given filter combination.
    ///
    /// # Errors
    ///
    /// [`crate::errors::EngineError::Fetch`] when the request fails or the
    /// service answers with a non-success status.
    async fn fetch_disciplines(
        &self,
        query: &DisciplineQuery,
    ) -> EngineResult<Vec<DisciplineDescriptor>>;
}

/// Supplier of bestlist result sets
#[async_trait]
pub trait ResultsSource: Send + Sync {
    /// Fetch the bestlist for a fully built query.
    ///
    /// # Errors
    ///
    /// [`crate::errors::EngineError::Fetch`] when the request fails or the
    /// service answers with a non-success status.
    async fn fetch_bestlist(&self, query: &BestlistQuery) -> EngineResult<BestlistResponse>;
}
