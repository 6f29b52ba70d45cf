// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured for local runs.

use crate::services::reports::DEFAULT_MAX_BINS;
use crate::services::ReportOptions;
use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the activities CSV export
    pub data_path: PathBuf,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Upper bound on distance histogram bins
    pub max_histogram_bins: usize,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("Activities.csv"),
            frontend_url: "http://localhost:8050".to_string(),
            port: 8080,
            max_histogram_bins: DEFAULT_MAX_BINS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_histogram_bins = match lookup("MAX_HISTOGRAM_BINS") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|v| *v > 0)
                .ok_or(ConfigError::Invalid {
                    name: "MAX_HISTOGRAM_BINS",
                    value: raw,
                })?,
            None => defaults.max_histogram_bins,
        };

        Ok(Self {
            data_path: lookup("DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            frontend_url: lookup("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            max_histogram_bins,
        })
    }

    /// Report tunables derived from this configuration.
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            max_histogram_bins: self.max_histogram_bins,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(|_| None).expect("Config should load");

        assert_eq!(config.data_path, PathBuf::from("Activities.csv"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_histogram_bins, DEFAULT_MAX_BINS);
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATA_PATH", "/data/garmin.csv"),
            ("PORT", "9000"),
            ("FRONTEND_URL", "https://dash.example.com"),
            ("MAX_HISTOGRAM_BINS", "500"),
        ]))
        .expect("Config should load");

        assert_eq!(config.data_path, PathBuf::from("/data/garmin.csv"));
        assert_eq!(config.port, 9000);
        assert_eq!(config.frontend_url, "https://dash.example.com");
        assert_eq!(config.report_options().max_histogram_bins, 500);
    }

    #[test]
    fn test_unparsable_port_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_invalid_bin_limit_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("MAX_HISTOGRAM_BINS", "0")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "MAX_HISTOGRAM_BINS",
                ..
            }
        ));
    }
}
