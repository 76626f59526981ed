// SPDX-License-Identifier: Apache-2.0

//! Search navigation collaborator.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves untouched.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Receives the query a user committed to.
pub trait Navigator {
    fn navigate(&mut self, query: &str);
}

impl<F: FnMut(&str)> Navigator for F {
    fn navigate(&mut self, query: &str) {
        self(query)
    }
}

/// Builds the search page location for a query.
pub fn search_location(base_url: &str, query: &str) -> String {
    format!(
        "{}/?query={}",
        base_url.trim_end_matches('/'),
        utf8_percent_encode(query, QUERY_COMPONENT)
    )
}

/// Navigator that records search page locations in visit order.
#[derive(Debug, Clone, Default)]
pub struct LocationNavigator {
    base_url: String,
    visited: Vec<String>,
}

impl LocationNavigator {
    pub fn new(base_url: impl Into<String>) -> Self {
        LocationNavigator {
            base_url: base_url.into(),
            visited: Vec::new(),
        }
    }

    pub fn visited(&self) -> &[String] {
        &self.visited
    }

    pub fn last(&self) -> Option<&str> {
        self.visited.last().map(String::as_str)
    }
}

impl Navigator for LocationNavigator {
    fn navigate(&mut self, query: &str) {
        let location = search_location(&self.base_url, query);
        tracing::debug!(%location, "navigating to search page");
        self.visited.push(location);
    }
}
