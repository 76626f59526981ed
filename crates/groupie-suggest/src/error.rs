// SPDX-License-Identifier: Apache-2.0

//! Error types for candidate loading and configuration.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain the candidate list. Callers treat this as degraded
/// mode: the cache stays empty and no suggestions are shown.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed reading suggestions file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to fetch suggestions from {url} (curl/wget unavailable or request failed)")]
    Transport { url: String },

    #[error("suggestion response from {url} was not utf-8")]
    NotUtf8 { url: String },

    #[error("invalid suggestions json: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Failure to read or parse a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed reading config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
