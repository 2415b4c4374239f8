// ABOUTME: Unified error handling for the bestlist engine
// ABOUTME: Defines error kinds, convenience constructors and the shared result alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Track Insights

//! # Unified Error Handling
//!
//! This module provides the centralized error type for the bestlist engine.
//! All fallible operations across the crate return [`EngineResult`] so that
//! callers handle failures uniformly.
//!
//! A response arriving for a superseded discipline refresh is deliberately
//! NOT an error: it is reported as [`crate::engine::RefreshOutcome::Stale`]
//! and dropped without surfacing anything to the user.

use thiserror::Error;

/// Unified error type for the engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// An external request failed or returned a non-success status.
    ///
    /// The prior valid state (discipline list, last result set) is retained
    /// by the engine; the caller surfaces this as a transient notification.
    #[error("{service}: {message}")]
    Fetch {
        /// Logical name of the external service that failed
        service: String,
        /// Human-readable failure description
        message: String,
    },

    /// A query was built while no discipline is selected.
    ///
    /// UI gating is expected to prevent this from ever being reached; the
    /// builder still rejects it and no query is issued.
    #[error("no discipline selected")]
    MissingDiscipline,

    /// Payload (de)serialization failed
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// Engine or client configuration is invalid
    #[error("configuration error: {0}")]
    Config(String),
}

impl EngineError {
    /// External request failure
    pub fn fetch(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Serialization failure
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Configuration failure
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result type alias for convenience
pub type EngineResult<T> = Result<T, EngineError>;
