// SPDX-License-Identifier: Apache-2.0

//! Command handler for `groupie suggest`.

use colored::Colorize;
use groupie_suggest::search::dedup_by_label;
use groupie_suggest::{CandidateCache, CandidateSource};

use super::describe_source;

/// Executes the `groupie suggest` command.
pub fn execute(query: &str, min_score: u32, json: bool, scores: bool, source: &CandidateSource) {
    let mut cache = CandidateCache::new();
    cache.populate(source.load());
    tracing::debug!(
        source = %describe_source(source),
        candidates = cache.candidates().len(),
        "loaded candidates"
    );

    let query = query.trim();
    let results = dedup_by_label(cache.search_scored(query, min_score), |r| r.label.as_str());

    if json {
        let labels: Vec<&str> = results.iter().map(|r| r.label.as_str()).collect();
        match serde_json::to_string_pretty(&labels) {
            Ok(out) => println!("{out}"),
            Err(e) => eprintln!("{} Failed to encode suggestions: {}", "✗".red().bold(), e),
        }
        return;
    }

    if results.is_empty() {
        println!(
            "{} No suggestions found matching '{}'",
            "!".yellow().bold(),
            query
        );
        return;
    }

    println!(
        "{} Found {} suggestion(s) matching '{}':\n",
        "✓".green().bold(),
        results.len(),
        query
    );

    for result in &results {
        let (suggestion, from) = split_label(&result.label);
        if scores {
            println!(
                "  {:>5}  {} {}",
                result.score.to_string().dimmed(),
                suggestion.cyan(),
                format!("- {from}").dimmed()
            );
        } else {
            println!("  {} {}", suggestion.cyan(), format!("- {from}").dimmed());
        }
    }

    println!();
    println!(
        "  Run {} to try the interactive search box.",
        "groupie session".bold()
    );
}

fn split_label(label: &str) -> (&str, &str) {
    label
        .split_once(groupie_suggest::types::LABEL_SEPARATOR)
        .unwrap_or((label, ""))
}
