// ABOUTME: Environment-driven configuration for the statistics API client
// ABOUTME: Base URL and timeout settings with sensible development defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Track Insights

//! # Configuration
//!
//! Runtime settings for reaching the track statistics backend. Values come
//! from the environment with development defaults, so a locally running
//! backend works with no configuration at all.

use std::env;

/// Statistics API connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the statistics API, without a trailing slash
    pub base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Connection-establishment timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5050/api".to_owned(),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

impl ApiConfig {
    /// Load the configuration from environment variables, falling back to
    /// the defaults for anything unset or unparseable.
    ///
    /// Recognized variables: `BESTLIST_API_URL`,
    /// `BESTLIST_API_TIMEOUT_SECS`, `BESTLIST_API_CONNECT_TIMEOUT_SECS`.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("BESTLIST_API_URL")
                .map(|url| url.trim_end_matches('/').to_owned())
                .unwrap_or(defaults.base_url),
            request_timeout_secs: env_u64("BESTLIST_API_TIMEOUT_SECS")
                .unwrap_or(defaults.request_timeout_secs),
            connect_timeout_secs: env_u64("BESTLIST_API_CONNECT_TIMEOUT_SECS")
                .unwrap_or(defaults.connect_timeout_secs),
        }
    }
}

fn env_u64(name: &str) -> Option<u64> {
    env::var(name).ok().and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:5050/api");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.connect_timeout_secs, 10);
    }
}
