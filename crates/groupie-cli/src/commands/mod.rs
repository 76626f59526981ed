//! CLI subcommand declarations and dispatch.

pub mod config;
pub mod range;
pub mod session;
pub mod suggest;

use clap::{Args, Subcommand};
use colored::Colorize;
use groupie_suggest::config::SuggestConfig;
use groupie_suggest::CandidateSource;
use std::path::PathBuf;
use std::process;

use crate::paths;

/// Top-level CLI subcommands supported by `groupie`.
#[derive(Subcommand)]
pub enum Commands {
    /// Rank suggestions for a query
    Suggest {
        /// Search query
        query: String,

        /// Drop suggestions scoring below this (defaults to config, 2)
        #[arg(long)]
        min_score: Option<u32>,

        /// Print suggestions as a JSON array
        #[arg(long)]
        json: bool,

        /// Show the score next to each suggestion
        #[arg(long)]
        scores: bool,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Drive a search box from scripted events on stdin
    ///
    /// Plain lines are input values. Commands: `:down`, `:up`, `:enter`,
    /// `:click N`, `:hover N`, `:outside`, `:submit`, `:wait MS`.
    Session {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Move the handles of a range selector and print each change
    Range {
        /// Lowest selectable value
        #[arg(long, allow_negative_numbers = true, default_value = "0")]
        min: f64,

        /// Highest selectable value
        #[arg(long, allow_negative_numbers = true, default_value = "100")]
        max: f64,

        /// Initial low value (defaults to --min)
        #[arg(long, allow_negative_numbers = true)]
        low: Option<f64>,

        /// Initial high value (defaults to --max)
        #[arg(long, allow_negative_numbers = true)]
        high: Option<f64>,

        /// Pointer drag as `low:X` or `high:X`, X in track pixels
        #[arg(long = "drag", value_name = "HANDLE:X")]
        drags: Vec<String>,

        /// Slider identifier reported with each change
        #[arg(long, default_value = "range")]
        id: String,

        /// Print changes as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration and candidate source
    Config,
}

/// Where to load candidates from, overriding config and environment.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Load candidates from a JSON file
    #[arg(long, value_name = "FILE", conflicts_with_all = ["url", "seed"])]
    file: Option<PathBuf>,

    /// Fetch candidates from this URL
    #[arg(long, conflicts_with = "seed")]
    url: Option<String>,

    /// Use the embedded seed suggestions
    #[arg(long)]
    seed: bool,
}

impl SourceArgs {
    pub fn resolve(&self, config: &SuggestConfig) -> CandidateSource {
        if let Some(path) = &self.file {
            return CandidateSource::File(path.clone());
        }
        if let Some(url) = &self.url {
            return CandidateSource::Url(url.clone());
        }
        if self.seed {
            return CandidateSource::Seed;
        }
        CandidateSource::from_env(config)
    }
}

/// Dispatches a parsed CLI command to its command module.
pub fn execute(command: Commands, config_flag: Option<&str>) {
    let config = load_config(config_flag);
    match command {
        Commands::Suggest {
            query,
            min_score,
            json,
            scores,
            source,
        } => suggest::execute(
            &query,
            min_score.unwrap_or(config.min_score),
            json,
            scores,
            &source.resolve(&config),
        ),
        Commands::Session { source } => session::execute(&config, source.resolve(&config)),
        Commands::Range {
            min,
            max,
            low,
            high,
            drags,
            id,
            json,
        } => range::execute(&id, min, max, low, high, &drags, json),
        Commands::Config => config::execute(&config, config_flag),
    }
}

/// Loads the config, exiting on an unreadable or malformed file. A missing
/// default config is not an error; a missing `--config` file is.
fn load_config(flag: Option<&str>) -> SuggestConfig {
    let path = paths::config_path(flag);
    let loaded = match (flag, path.as_deref()) {
        (Some(_), Some(path)) => SuggestConfig::load(path),
        (_, path) => SuggestConfig::load_or_default(path),
    };
    match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e);
            process::exit(1);
        }
    }
}

/// Describes a candidate source for humans.
pub fn describe_source(source: &CandidateSource) -> String {
    match source {
        CandidateSource::File(path) => format!("file {}", path.display()),
        CandidateSource::Url(url) => format!("url {url}"),
        CandidateSource::Seed => "embedded seed suggestions".to_string(),
    }
}
