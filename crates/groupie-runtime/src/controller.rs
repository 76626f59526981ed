// SPDX-License-Identifier: Apache-2.0

//! Search box state machine: debounced ranking, rendered list and
//! keyboard/mouse selection.

use groupie_suggest::error::FetchError;
use groupie_suggest::search::{canonical_query, dedup_by_label};
use groupie_suggest::types::Candidate;
use groupie_suggest::CandidateCache;
use std::fmt;
use std::time::Duration;
use tokio::time::Instant;

use crate::debounce::Debouncer;
use crate::navigate::Navigator;

/// Where the controller is in its input cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No pending debounce and nothing rendered.
    Idle,
    /// A keystroke is waiting out the quiet period.
    Debouncing,
    /// A suggestion list (possibly empty) is displayed.
    Rendered,
}

impl fmt::Display for ControllerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerState::Idle => write!(f, "idle"),
            ControllerState::Debouncing => write!(f, "debouncing"),
            ControllerState::Rendered => write!(f, "rendered"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
}

/// Events delivered to the controller by the hosting surface.
#[derive(Debug)]
pub enum SearchEvent {
    /// Current value of the text input after a change.
    Input(String),
    Key(Key),
    /// Click on the rendered suggestion at this index.
    Click(usize),
    /// Pointer entered the rendered suggestion at this index.
    Hover(usize),
    /// Click anywhere outside the input and the suggestion list.
    ClickOutside,
    /// Search button pressed.
    Submit,
    /// Outcome of the one-time candidate fetch.
    CandidatesLoaded(Result<Vec<Candidate>, FetchError>),
}

/// What an event changed, for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    /// The list was emptied and the controller is idle.
    Cleared,
    /// Ranking is scheduled for this deadline.
    Scheduled(Instant),
    /// A fresh list was rendered with no focus.
    Rendered,
    /// Exactly this item is now focused and should be scrolled into view.
    Focused(usize),
    /// The navigator was invoked with this query.
    Navigated(String),
    /// The candidate cache settled.
    Loaded,
}

pub struct SearchController<N> {
    cache: CandidateCache,
    min_score: u32,
    debouncer: Debouncer<String>,
    state: ControllerState,
    input: String,
    rendered: Vec<String>,
    focus: Option<usize>,
    renders: u64,
    navigator: N,
}

impl<N: Navigator> SearchController<N> {
    pub fn new(navigator: N, debounce: Duration, min_score: u32) -> Self {
        SearchController {
            cache: CandidateCache::new(),
            min_score,
            debouncer: Debouncer::new(debounce),
            state: ControllerState::Idle,
            input: String::new(),
            rendered: Vec::new(),
            focus: None,
            renders: 0,
            navigator,
        }
    }

    /// Replaces the (still empty) cache with a populated one.
    pub fn with_cache(mut self, cache: CandidateCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn rendered(&self) -> &[String] {
        &self.rendered
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    /// Number of ranking passes rendered so far.
    pub fn renders(&self) -> u64 {
        self.renders
    }

    pub fn cache(&self) -> &CandidateCache {
        &self.cache
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn into_navigator(self) -> N {
        self.navigator
    }

    /// Deadline of the pending ranking pass, if one is scheduled.
    pub fn debounce_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Dispatches one event.
    pub fn handle(&mut self, event: SearchEvent, now: Instant) -> Transition {
        match event {
            SearchEvent::Input(value) => self.on_input(value, now),
            SearchEvent::Key(key) => self.on_key(key),
            SearchEvent::Click(index) => self.on_click(index),
            SearchEvent::Hover(index) => self.on_hover(index),
            SearchEvent::ClickOutside => self.on_click_outside(),
            SearchEvent::Submit => self.on_submit(),
            SearchEvent::CandidatesLoaded(outcome) => {
                if self.cache.populate(outcome) {
                    Transition::Loaded
                } else {
                    Transition::Unchanged
                }
            }
        }
    }

    /// Handles a change of the text input.
    pub fn on_input(&mut self, value: String, now: Instant) -> Transition {
        self.debouncer.cancel();
        let query = value.trim().to_string();
        self.input = value;

        if query.is_empty() {
            self.clear();
            return Transition::Cleared;
        }

        let deadline = self.debouncer.schedule(query, now);
        self.state = ControllerState::Debouncing;
        Transition::Scheduled(deadline)
    }

    /// Runs the pending ranking pass once its quiet period is over.
    pub fn poll(&mut self, now: Instant) -> Transition {
        let Some(query) = self.debouncer.take_if_elapsed(now) else {
            return Transition::Unchanged;
        };
        let labels = self.cache.search(&query, self.min_score);
        tracing::debug!(%query, matches = labels.len(), "ranked suggestions");
        self.render(labels);
        Transition::Rendered
    }

    fn render(&mut self, labels: Vec<String>) {
        self.rendered = dedup_by_label(labels, |label| label.as_str());
        self.focus = None;
        self.state = ControllerState::Rendered;
        self.renders += 1;
    }

    fn clear(&mut self) {
        self.debouncer.cancel();
        self.rendered.clear();
        self.focus = None;
        self.state = ControllerState::Idle;
    }

    pub fn on_key(&mut self, key: Key) -> Transition {
        match key {
            Key::ArrowDown => self.move_focus(true),
            Key::ArrowUp => self.move_focus(false),
            Key::Enter => match self.focus {
                Some(index) => self.on_click(index),
                None => self.on_submit(),
            },
        }
    }

    fn move_focus(&mut self, forward: bool) -> Transition {
        // The previous list stays visible while a new ranking is pending.
        let count = self.rendered.len();
        if count == 0 {
            return Transition::Unchanged;
        }
        let next = match (self.focus, forward) {
            (None, true) => 0,
            (Some(index), true) if index + 1 >= count => 0,
            (Some(index), true) => index + 1,
            (None, false) | (Some(0), false) => count - 1,
            (Some(index), false) => (index - 1).min(count - 1),
        };
        self.focus = Some(next);
        Transition::Focused(next)
    }

    /// Commits the suggestion at `index`.
    pub fn on_click(&mut self, index: usize) -> Transition {
        let Some(label) = self.rendered.get(index) else {
            return Transition::Unchanged;
        };
        let query = canonical_query(label).to_string();
        self.input = query.clone();
        self.navigate(query)
    }

    pub fn on_hover(&mut self, index: usize) -> Transition {
        if index >= self.rendered.len() {
            return Transition::Unchanged;
        }
        self.focus = Some(index);
        Transition::Focused(index)
    }

    pub fn on_click_outside(&mut self) -> Transition {
        if self.state == ControllerState::Idle {
            return Transition::Unchanged;
        }
        self.clear();
        Transition::Cleared
    }

    /// Searches for the raw input text.
    pub fn on_submit(&mut self) -> Transition {
        let query = self.input.trim().to_string();
        self.navigate(query)
    }

    fn navigate(&mut self, query: String) -> Transition {
        tracing::info!(%query, "search requested");
        self.navigator.navigate(&query);
        Transition::Navigated(query)
    }
}
