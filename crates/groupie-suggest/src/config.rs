// SPDX-License-Identifier: Apache-2.0

//! Suggestion runtime configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::search::DEFAULT_MIN_SCORE;

/// Path of the suggestion endpoint relative to `base_url`.
pub const SUGGESTIONS_PATH: &str = "/search-suggestions?init=true";

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_DEBOUNCE_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Origin serving both the suggestion endpoint and search pages.
    pub base_url: String,
    pub debounce_ms: u64,
    pub min_score: u32,
    /// Local JSON file used instead of the endpoint when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions_file: Option<PathBuf>,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_score: DEFAULT_MIN_SCORE,
            suggestions_file: None,
        }
    }
}

impl SuggestConfig {
    /// Reads a config file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads `path` when it exists, otherwise returns defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Full URL of the one-shot suggestion endpoint.
    pub fn suggestions_url(&self) -> String {
        format!("{}{SUGGESTIONS_PATH}", self.base_url.trim_end_matches('/'))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
