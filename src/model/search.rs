//! Search lifecycle state: query, results and fetch status

use super::error::FetchError;
use super::types::CatalogItem;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Identity of one logical request, handed out by [`SearchState::begin`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
    term: String,
}

impl RequestTicket {
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Search state of one screen.
///
/// Only the most recently issued ticket may change `results` or `status`.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    query: String,
    results: Vec<CatalogItem>,
    status: SearchStatus,
    generation: u64,
}

impl SearchState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[CatalogItem] {
        &self.results
    }

    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    /// Start a new logical request for `term`, superseding any in flight.
    pub fn begin(&mut self, term: &str) -> RequestTicket {
        self.generation += 1;
        self.query = term.to_string();
        self.status = SearchStatus::Loading;
        RequestTicket {
            generation: self.generation,
            term: self.query.clone(),
        }
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply the outcome of a request. Returns false, leaving the state
    /// untouched, when the ticket has been superseded.
    pub fn apply(
        &mut self,
        ticket: &RequestTicket,
        outcome: Result<Vec<CatalogItem>, FetchError>,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        match outcome {
            Ok(items) => {
                self.results = items;
                self.status = SearchStatus::Ready;
            }
            Err(error) => {
                self.results.clear();
                self.status = SearchStatus::Failed(error.reason());
            }
        }
        true
    }

    /// Drop results for an empty query. Any request still in flight becomes stale.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.query.clear();
        self.results.clear();
        self.status = SearchStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::sample_item;

    #[test]
    fn begin_then_apply_reaches_ready() {
        let mut state = SearchState::default();
        let ticket = state.begin("rust");
        assert_eq!(state.status(), &SearchStatus::Loading);
        assert_eq!(ticket.term(), "rust");

        assert!(state.apply(&ticket, Ok(vec![sample_item("1", "Rust")])));
        assert_eq!(state.status(), &SearchStatus::Ready);
        assert_eq!(state.results().len(), 1);
    }

    #[test]
    fn late_response_for_older_term_is_discarded() {
        let mut state = SearchState::default();
        let older = state.begin("ru");
        let newer = state.begin("rust");

        assert!(state.apply(&newer, Ok(vec![sample_item("b", "Rust in Action")])));
        assert!(!state.apply(&older, Ok(vec![sample_item("a", "Ruby")])));

        assert_eq!(state.query(), "rust");
        assert_eq!(state.results()[0].id, "b");
        assert_eq!(state.status(), &SearchStatus::Ready);
    }

    #[test]
    fn stale_failure_does_not_clobber_fresh_results() {
        let mut state = SearchState::default();
        let older = state.begin("a");
        let newer = state.begin("ab");
        state.apply(&newer, Ok(vec![sample_item("n", "New")]));

        assert!(!state.apply(&older, Err(FetchError::Http { status: 500 })));
        assert_eq!(state.status(), &SearchStatus::Ready);
    }

    #[test]
    fn failure_clears_previous_results() {
        let mut state = SearchState::default();
        let first = state.begin("a");
        state.apply(&first, Ok(vec![sample_item("1", "One")]));

        let second = state.begin("b");
        state.apply(&second, Err(FetchError::Http { status: 500 }));

        assert!(state.results().is_empty());
        assert_eq!(
            state.status(),
            &SearchStatus::Failed("The catalog service is unavailable right now (HTTP 500).".to_string())
        );
    }

    #[test]
    fn clear_invalidates_in_flight_request() {
        let mut state = SearchState::default();
        let ticket = state.begin("physics");
        state.clear();

        assert!(!state.apply(&ticket, Ok(vec![sample_item("p", "Physics")])));
        assert!(state.results().is_empty());
        assert_eq!(state.status(), &SearchStatus::Idle);
    }

    #[test]
    fn each_fetch_replaces_the_previous_list() {
        let mut state = SearchState::default();
        let first = state.begin("a");
        state.apply(&first, Ok(vec![sample_item("1", "One"), sample_item("2", "Two")]));
        let second = state.begin("b");
        state.apply(&second, Ok(vec![sample_item("1", "One again")]));

        assert_eq!(state.results().len(), 1);
        assert_eq!(state.results()[0].title, "One again");
    }
}
