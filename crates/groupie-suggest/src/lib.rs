// SPDX-License-Identifier: Apache-2.0

//! Suggestion candidates, relevance ranking and candidate loading for groupie.

pub mod config;
pub mod error;
pub mod search;
pub mod seed;
pub mod types;

use config::SuggestConfig;
use error::FetchError;
use search::{rank, score_candidates};
use seed::load_seed_suggestions;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use types::{Candidate, ScoredCandidate};

/// Where the candidate list is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateSource {
    File(PathBuf),
    Url(String),
    Seed,
}

impl CandidateSource {
    /// Resolves the source from `GROUPIE_SUGGESTIONS_FILE`,
    /// `GROUPIE_SUGGESTIONS_URL` and then the config, in that order.
    pub fn from_env(config: &SuggestConfig) -> Self {
        if let Some(path) = env::var_os("GROUPIE_SUGGESTIONS_FILE") {
            return CandidateSource::File(PathBuf::from(path));
        }
        if let Some(url) = env::var("GROUPIE_SUGGESTIONS_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
        {
            return CandidateSource::Url(url);
        }
        if let Some(path) = &config.suggestions_file {
            return CandidateSource::File(path.clone());
        }
        CandidateSource::Url(config.suggestions_url())
    }

    /// Loads the full candidate list from this source.
    pub fn load(&self) -> Result<Vec<Candidate>, FetchError> {
        match self {
            CandidateSource::File(path) => load_candidates_file(path),
            CandidateSource::Url(url) => {
                let data = fetch_suggestions_json(url)?;
                parse_candidates(&data)
            }
            CandidateSource::Seed => Ok(load_seed_suggestions()),
        }
    }
}

/// Candidate list held for the lifetime of a session.
///
/// Populated at most once. A failed load leaves it empty for good, so every
/// later search yields nothing.
#[derive(Debug, Default)]
pub struct CandidateCache {
    state: CacheState,
}

#[derive(Debug, Default)]
enum CacheState {
    #[default]
    Uninitialized,
    Populated(Vec<Candidate>),
    Failed,
}

impl CandidateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an already populated cache.
    pub fn with_candidates(candidates: Vec<Candidate>) -> Self {
        CandidateCache {
            state: CacheState::Populated(candidates),
        }
    }

    /// Stores the outcome of the initial load. Returns `false` when the
    /// cache was already settled and the outcome was ignored.
    pub fn populate(&mut self, outcome: Result<Vec<Candidate>, FetchError>) -> bool {
        if !matches!(self.state, CacheState::Uninitialized) {
            tracing::debug!("candidate cache already settled; ignoring load outcome");
            return false;
        }
        self.state = match outcome {
            Ok(candidates) => {
                tracing::debug!(count = candidates.len(), "candidate cache populated");
                CacheState::Populated(candidates)
            }
            Err(err) => {
                tracing::warn!(error = %err, "error fetching initial suggestions");
                CacheState::Failed
            }
        };
        true
    }

    /// Returns cached candidates; empty until populated or after a failure.
    pub fn candidates(&self) -> &[Candidate] {
        match &self.state {
            CacheState::Populated(candidates) => candidates,
            CacheState::Uninitialized | CacheState::Failed => &[],
        }
    }

    /// Ranks cached candidates against a query.
    pub fn search(&self, query: &str, min_score: u32) -> Vec<String> {
        rank(self.candidates(), query, min_score)
    }

    /// Ranks cached candidates and keeps their scores.
    pub fn search_scored(&self, query: &str, min_score: u32) -> Vec<ScoredCandidate> {
        score_candidates(self.candidates(), query, min_score)
    }
}

fn load_candidates_file(path: &Path) -> Result<Vec<Candidate>, FetchError> {
    let data = fs::read_to_string(path).map_err(|source| FetchError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_candidates(&data)
}

/// Parses a suggestion endpoint payload.
pub fn parse_candidates(data: &str) -> Result<Vec<Candidate>, FetchError> {
    Ok(serde_json::from_str(data)?)
}

fn fetch_suggestions_json(url: &str) -> Result<String, FetchError> {
    let curl_output = Command::new("curl")
        .args(["-fsSL", "--max-time", "5", url])
        .output();
    if let Ok(output) = curl_output {
        if output.status.success() {
            return String::from_utf8(output.stdout).map_err(|_| FetchError::NotUtf8 {
                url: url.to_string(),
            });
        }
    }

    let wget_output = Command::new("wget")
        .args(["-q", "-O", "-", "--timeout=5", url])
        .output();
    if let Ok(output) = wget_output {
        if output.status.success() {
            return String::from_utf8(output.stdout).map_err(|_| FetchError::NotUtf8 {
                url: url.to_string(),
            });
        }
    }

    Err(FetchError::Transport {
        url: url.to_string(),
    })
}
