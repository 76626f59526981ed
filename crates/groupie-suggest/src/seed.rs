//! Embedded seed suggestion loader.

use crate::types::Candidate;

const SEED_DATA: &str = include_str!("../data/seed_suggestions.json");

/// Parses the embedded seed suggestions into candidates.
pub fn load_seed_suggestions() -> Vec<Candidate> {
    serde_json::from_str(SEED_DATA).expect("embedded seed suggestions should be valid JSON")
}
