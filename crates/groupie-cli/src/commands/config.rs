//! Command handler for `groupie config`.

use colored::Colorize;
use groupie_suggest::config::SuggestConfig;
use groupie_suggest::CandidateSource;
use std::process;

use super::describe_source;
use crate::paths;

/// Executes the `groupie config` command.
pub fn execute(config: &SuggestConfig, config_flag: Option<&str>) {
    let rendered = match toml::to_string_pretty(config) {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("{} Failed to render config: {}", "✗".red().bold(), e);
            process::exit(1);
        }
    };

    let location = paths::config_path(config_flag)
        .filter(|p| p.exists())
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults (no config file)".to_string());

    println!("{} Configuration from {}:\n", "✓".green().bold(), location.cyan());
    for line in rendered.lines() {
        println!("  {line}");
    }
    println!();
    println!(
        "  {:<18} {}",
        "Candidates:".dimmed(),
        describe_source(&CandidateSource::from_env(config))
    );
}
