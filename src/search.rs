//! Search request lifecycle
//!
//! `Idle -> Loading -> {Success, Error} -> Loading -> ...`
//!
//! Every submit bumps a generation counter. Outcomes are tagged with the
//! generation they were issued under and only the latest one is applied,
//! so a slow superseded request can never overwrite newer state.

use crate::github::{SearchError, SearchResult};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Success(Vec<SearchResult>),
    Error(String),
}

/// A request the caller must now issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub query: String,
}

/// Trim `query`, rejecting it when nothing is left
pub fn normalize_query(query: &str) -> Result<&str, SearchError> {
    let query = query.trim();
    if query.is_empty() {
        Err(SearchError::EmptyQuery)
    } else {
        Ok(query)
    }
}

#[derive(Debug, Default)]
pub struct SearchController {
    state: SearchState,
    generation: u64,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == SearchState::Loading
    }

    /// Start a search. Blank queries are ignored and yield no ticket.
    pub fn submit(&mut self, query: &str) -> Option<Ticket> {
        let Ok(query) = normalize_query(query) else {
            return None;
        };

        self.generation += 1;
        self.state = SearchState::Loading;
        tracing::info!(generation = self.generation, "Searching for {:?}", query);

        Some(Ticket {
            generation: self.generation,
            query: query.to_string(),
        })
    }

    /// Back to `Idle` for a fresh page view. The generation keeps counting
    /// so responses to requests issued before the reset are dropped.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = SearchState::Idle;
    }

    /// Apply the outcome of the request issued under `generation`.
    ///
    /// Returns `false` when the outcome was stale and dropped.
    pub fn resolve(
        &mut self,
        generation: u64,
        outcome: Result<Vec<SearchResult>, SearchError>,
    ) -> bool {
        if generation != self.generation {
            tracing::debug!(
                generation,
                latest = self.generation,
                "Discarding stale search response"
            );
            return false;
        }

        self.state = match outcome {
            Ok(results) if results.is_empty() => {
                SearchState::Error(SearchError::NoResults.to_string())
            }
            Ok(results) => {
                tracing::info!(generation, count = results.len(), "Search complete");
                SearchState::Success(results)
            }
            Err(e) => {
                tracing::warn!(generation, "Search failed: {}", e);
                SearchState::Error(e.to_string())
            }
        };
        true
    }
}
