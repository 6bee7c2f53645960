//! The application state machine.
//!
//! [`AppController`] owns every piece of UI state: the query text and filter, the phase of the
//! current search, the last successful result list and the selected entry. Searching is split in
//! two events so any front end can drive it: [`AppController::submit`] hands out a
//! [`SearchRequest`] and the outcome of that request is fed back with
//! [`AppController::complete`].

use log::{debug, info, trace, warn};

use crate::{
    api::{self, Client},
    catalog::CatalogEntry,
    query::{Filter, SearchTerm},
    view::{DetailView, ResultsView},
    DefaultClient, Error, DEFAULT_MAX_RESULTS,
};

/// Message shown when a search could not be completed, whatever the cause.
pub const SEARCH_FAILED: &str = "Failed to search for books, please try again.";

/// Message shown when a search completed without any matching entries.
pub const NO_RESULTS: &str = "No books found";

/// Where the controller is in the search cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing has been searched yet.
    Idle,
    /// A request is in flight.
    Searching,
    /// The last request succeeded, possibly with no entries.
    Results,
    /// The last request failed.
    Failed,
}

/// Sequence number identifying one submitted search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// A search to be run against the catalog, produced by [`AppController::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    ticket: Ticket,
    term: SearchTerm,
    max_results: u8,
}

impl SearchRequest {
    /// The ticket to pass to [`AppController::complete`].
    #[must_use]
    pub const fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// The encoded search term.
    #[must_use]
    pub const fn term(&self) -> &SearchTerm {
        &self.term
    }

    /// The result cap requested.
    #[must_use]
    pub const fn max_results(&self) -> u8 {
        self.max_results
    }

    /// Run the request using the default HTTP client.
    ///
    /// # Errors
    ///
    /// See [`crate::search`].
    pub fn execute(&self) -> Result<Vec<CatalogEntry>, Error> {
        self.execute_with::<DefaultClient>()
    }

    /// Run the request using the client `C`.
    ///
    /// # Errors
    ///
    /// See [`crate::search`].
    pub fn execute_with<C: Client>(&self) -> Result<Vec<CatalogEntry>, Error> {
        api::google_books::search::<C>(&self.term, self.max_results)
    }
}

/// Single owner of the book search UI state.
#[derive(Debug)]
pub struct AppController {
    query: String,
    filter: Filter,
    phase: Phase,
    error: Option<String>,
    entries: Vec<CatalogEntry>,
    // index into `entries`, cleared whenever `entries` is replaced
    selected: Option<usize>,
    last_ticket: u64,
    max_results: u8,
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}

impl AppController {
    /// A controller in [`Phase::Idle`] with the default result cap.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            query: String::new(),
            filter: Filter::All,
            phase: Phase::Idle,
            error: None,
            entries: Vec::new(),
            selected: None,
            last_ticket: 0,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Use `max_results` as the result cap of every following search.
    #[must_use]
    pub fn with_max_results(mut self, max_results: u8) -> Self {
        self.max_results = max_results;
        self
    }

    /// Start a new search for `query` scoped by `filter`.
    ///
    /// A blank `query`, or one left with no text once normalised for the `filter`, is ignored: no
    /// state changes and `None` is returned. Otherwise the controller moves to
    /// [`Phase::Searching`] and the returned [`SearchRequest`] must be run and its result passed to
    /// [`AppController::complete`]. Any request still in flight is superseded by this one.
    pub fn submit(&mut self, query: &str, filter: Filter) -> Option<SearchRequest> {
        if SearchTerm::is_blank(query) {
            trace!("Blank query submitted - nothing to search");
            return None;
        }

        let term = SearchTerm::new(query, filter);
        if term.is_empty() {
            trace!("Query '{query}' has no {filter} text to search");
            return None;
        }

        self.last_ticket += 1;
        let ticket = Ticket(self.last_ticket);
        info!("Submitting search {ticket:?} for '{term}'");

        query.clone_into(&mut self.query);
        self.filter = filter;
        self.phase = Phase::Searching;
        self.error = None;

        Some(SearchRequest {
            ticket,
            term,
            max_results: self.max_results,
        })
    }

    /// Apply the result of the search identified by `ticket`.
    ///
    /// Results of any search other than the most recently submitted one are discarded and
    /// `false` is returned.
    pub fn complete(&mut self, ticket: Ticket, result: Result<Vec<CatalogEntry>, Error>) -> bool {
        if self.phase != Phase::Searching || ticket != Ticket(self.last_ticket) {
            debug!("Discarding stale result of search {ticket:?}");
            return false;
        }

        self.selected = None;
        match result {
            Ok(entries) => {
                trace!("Search {ticket:?} found {} entries", entries.len());
                self.entries = entries;
                self.error = None;
                self.phase = Phase::Results;
            }
            Err(err) => {
                warn!("Search {ticket:?} failed: {err}");
                self.entries.clear();
                self.error = Some(SEARCH_FAILED.to_owned());
                self.phase = Phase::Failed;
            }
        }
        true
    }

    /// Submit and run a search in one step using the client `C`.
    ///
    /// Returns `false` when `query` is blank and nothing was searched.
    pub fn search_with<C: Client>(&mut self, query: &str, filter: Filter) -> bool {
        self.submit(query, filter).map_or(false, |request| {
            let result = request.execute_with::<C>();
            self.complete(request.ticket(), result)
        })
    }

    /// Select the entry at `index` of the current result list.
    ///
    /// An index outside the list leaves the selection as it was and returns `None`.
    pub fn select(&mut self, index: usize) -> Option<&CatalogEntry> {
        let entry = self.entries.get(index)?;
        self.selected = Some(index);
        Some(entry)
    }

    /// Select the first entry of the current result list with the `id`.
    pub fn select_by_id(&mut self, id: &str) -> Option<&CatalogEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        self.select(index)
    }

    /// Clear the selection, nothing else changes.
    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// The current phase of the search cycle.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Is a search in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Searching
    }

    /// The message describing why the last search has nothing to show.
    ///
    /// This is the generic failure message after a failed search and [`NO_RESULTS`] after a
    /// successful search with no entries.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self.phase {
            Phase::Results if self.entries.is_empty() => Some(NO_RESULTS),
            Phase::Failed => self.error.as_deref(),
            _ => None,
        }
    }

    /// Entries of the last successful search.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// The entry opened in the detail view.
    #[must_use]
    pub fn selected(&self) -> Option<&CatalogEntry> {
        self.selected.and_then(|i| self.entries.get(i))
    }

    /// Text of the last submitted search.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Filter of the last submitted search.
    #[must_use]
    pub const fn filter(&self) -> Filter {
        self.filter
    }

    /// The results view of the current state.
    #[must_use]
    pub fn results_view(&self) -> ResultsView<'_> {
        ResultsView::new(&self.entries, self.is_loading(), self.error())
    }

    /// The detail view of the selected entry, if any.
    #[must_use]
    pub fn detail_view(&self) -> Option<DetailView<'_>> {
        self.selected().map(DetailView::new)
    }
}
