// SPDX-License-Identifier: Apache-2.0

//! Command handler for `groupie session`.

use colored::Colorize;
use groupie_runtime::{
    run_session, Key, LocationNavigator, SearchController, SearchEvent, Transition,
};
use groupie_suggest::config::SuggestConfig;
use groupie_suggest::CandidateSource;
use std::io::{self, BufRead};
use std::process;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc;

use super::describe_source;

/// One parsed line of a session script.
#[derive(Debug, PartialEq)]
enum ScriptLine {
    Event(SearchEventSpec),
    Wait(Duration),
}

/// Script-level mirror of [`SearchEvent`] without the load outcome.
#[derive(Debug, Clone, PartialEq)]
enum SearchEventSpec {
    Input(String),
    Key(Key),
    Click(usize),
    Hover(usize),
    ClickOutside,
    Submit,
}

impl From<SearchEventSpec> for SearchEvent {
    fn from(spec: SearchEventSpec) -> Self {
        match spec {
            SearchEventSpec::Input(value) => SearchEvent::Input(value),
            SearchEventSpec::Key(key) => SearchEvent::Key(key),
            SearchEventSpec::Click(index) => SearchEvent::Click(index),
            SearchEventSpec::Hover(index) => SearchEvent::Hover(index),
            SearchEventSpec::ClickOutside => SearchEvent::ClickOutside,
            SearchEventSpec::Submit => SearchEvent::Submit,
        }
    }
}

/// Executes the `groupie session` command.
pub fn execute(config: &SuggestConfig, source: CandidateSource) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("{} Failed to start event loop: {}", "✗".red().bold(), e);
            process::exit(1);
        }
    };

    let controller = SearchController::new(
        LocationNavigator::new(config.base_url.clone()),
        config.debounce(),
        config.min_score,
    );

    runtime.block_on(async move {
        let (tx, rx) = mpsc::channel(64);

        tracing::debug!(source = %describe_source(&source), "fetching candidates");
        let fetch_tx = tx.clone();
        tokio::task::spawn_blocking(move || {
            let _ = fetch_tx.blocking_send(SearchEvent::CandidatesLoaded(source.load()));
        });

        thread::spawn(move || read_script(io::stdin().lock(), tx));

        run_session(controller, rx, print_transition).await;
    });
}

/// Feeds script lines into the session until stdin closes.
fn read_script<R: BufRead>(input: R, tx: mpsc::Sender<SearchEvent>) {
    for line in input.lines() {
        let Ok(line) = line else {
            break;
        };
        match parse_line(&line) {
            Ok(Some(ScriptLine::Event(spec))) => {
                if tx.blocking_send(spec.into()).is_err() {
                    break;
                }
            }
            Ok(Some(ScriptLine::Wait(duration))) => thread::sleep(duration),
            Ok(None) => {}
            Err(message) => eprintln!("{} {}", "!".yellow().bold(), message),
        }
    }
}

/// Parses one script line. Lines starting with `:` are commands, `#` starts
/// a comment, anything else is the new input value.
fn parse_line(line: &str) -> Result<Option<ScriptLine>, String> {
    if line.starts_with('#') {
        return Ok(None);
    }
    let Some(command) = line.strip_prefix(':') else {
        return Ok(Some(ScriptLine::Event(SearchEventSpec::Input(
            line.to_string(),
        ))));
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or("");
    let arg = parts.next();
    let spec = match (name, arg) {
        ("down", None) => SearchEventSpec::Key(Key::ArrowDown),
        ("up", None) => SearchEventSpec::Key(Key::ArrowUp),
        ("enter", None) => SearchEventSpec::Key(Key::Enter),
        ("outside", None) => SearchEventSpec::ClickOutside,
        ("submit", None) => SearchEventSpec::Submit,
        ("click", Some(n)) => SearchEventSpec::Click(parse_index(n)?),
        ("hover", Some(n)) => SearchEventSpec::Hover(parse_index(n)?),
        ("wait", Some(ms)) => {
            let ms: u64 = ms
                .parse()
                .map_err(|_| format!("invalid wait duration '{ms}'"))?;
            return Ok(Some(ScriptLine::Wait(Duration::from_millis(ms))));
        }
        _ => return Err(format!("unknown session command ':{command}'")),
    };
    Ok(Some(ScriptLine::Event(spec)))
}

fn parse_index(value: &str) -> Result<usize, String> {
    value
        .parse()
        .map_err(|_| format!("invalid suggestion index '{value}'"))
}

fn print_transition(controller: &SearchController<LocationNavigator>, transition: &Transition) {
    match transition {
        Transition::Rendered => {
            println!("suggestions ({}):", controller.rendered().len());
            for (index, label) in controller.rendered().iter().enumerate() {
                println!("  [{index}] {label}");
            }
        }
        Transition::Focused(index) => {
            if let Some(label) = controller.rendered().get(*index) {
                println!("focus [{index}] {label}");
            }
        }
        Transition::Cleared => println!("cleared"),
        Transition::Navigated(_) => {
            if let Some(location) = controller.navigator().last() {
                println!("navigate {location}");
            }
        }
        Transition::Loaded => {
            tracing::debug!(
                candidates = controller.cache().candidates().len(),
                "candidate cache settled"
            );
        }
        Transition::Scheduled(_) | Transition::Unchanged => {}
    }
}
