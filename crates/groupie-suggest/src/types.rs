// SPDX-License-Identifier: Apache-2.0

//! Core suggestion types parsed from the suggestion endpoint.

use serde::{Deserialize, Serialize};

/// Separator between a suggestion and its provenance in a rendered label.
pub const LABEL_SEPARATOR: &str = " - ";

/// One fetched suggestion entry.
///
/// The endpoint may send more fields than these two; they are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub suggestion: String,
    pub from: String,
}

impl Candidate {
    pub fn new(suggestion: impl Into<String>, from: impl Into<String>) -> Self {
        Candidate {
            suggestion: suggestion.into(),
            from: from.into(),
        }
    }
}

/// A ranked label paired with the score that placed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredCandidate {
    pub label: String,
    pub score: u32,
}
