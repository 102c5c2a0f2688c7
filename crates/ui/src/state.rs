//! Application State Management for the Atlas explorer
//!
//! This module provides centralized state management using Dioxus Signals.
//! It holds the selection/search/pagination machine driving the explorer:
//! the chosen HTTP method, the paged entity search, and the detail record
//! with its nested-entity selection.
//!
//! Network completions are applied through tickets carrying a sequence
//! number. Every state transition that supersedes in-flight work bumps the
//! sequence, so a slow response for an older request can never overwrite a
//! fresher one.

use dioxus::prelude::*;

use atlas_catalog::{
    Cursor, EntityDetails, EntityId, EntityOption, HttpMethod, NestedEntity, SearchResponse,
};

// ============================================================================
// Search State
// ============================================================================

/// Ticket identifying one issued search request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    page: u32,
    append: bool,
}

impl SearchTicket {
    /// Page this request asked for
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Whether the response should append to the current result set
    pub fn append(&self) -> bool {
        self.append
    }
}

/// State of the paged entity search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// Live text in the search box (not yet committed)
    pub input: String,

    /// Committed query plus scroll position in its result stream
    pub cursor: Cursor,

    /// Current result set, in arrival order
    pub options: Vec<EntityOption>,

    /// Whether a search request is in flight
    pub loading: bool,

    /// Last failure, kept until the next attempt; retryable
    pub error: Option<String>,

    /// Sequence of the most recently issued search
    seq: u64,

    /// Generation bumped on every keystroke; guards the debounce timer
    keystroke_gen: u64,

    /// Page and append flag of the most recently issued search, for retry
    retry_page: u32,
    retry_append: bool,
}

impl SearchState {
    /// Create an empty search state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a keystroke in the search box
    ///
    /// Returns the keystroke generation the debounce timer must present to
    /// [`SearchState::commit_query`]. A later keystroke invalidates it.
    pub fn note_keystroke(&mut self, text: impl Into<String>) -> u64 {
        self.input = text.into();
        self.keystroke_gen += 1;
        self.keystroke_gen
    }

    /// Commit the typed query after the debounce quiet period
    ///
    /// No-op returning false when a newer keystroke has superseded the
    /// generation. On success the cursor resets to page 1 for the new query.
    pub fn commit_query(&mut self, generation: u64) -> bool {
        if generation != self.keystroke_gen {
            return false;
        }
        self.cursor.reset(self.input.clone());
        true
    }

    /// Issue a new search request
    ///
    /// Supersedes any in-flight search; its completion will be discarded.
    pub fn begin(&mut self, page: u32, append: bool) -> SearchTicket {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        self.retry_page = page;
        self.retry_append = append;
        SearchTicket {
            seq: self.seq,
            page,
            append,
        }
    }

    /// The request a retry should repeat: the most recently issued one
    pub fn retry_request(&self) -> (u32, bool) {
        (self.retry_page.max(1), self.retry_append)
    }

    /// Whether a completion for this ticket has been superseded
    pub fn is_stale(&self, ticket: SearchTicket) -> bool {
        ticket.seq != self.seq
    }

    /// Apply a successful search response
    ///
    /// Returns false (leaving state untouched) when the ticket is stale.
    /// Otherwise replaces or appends the result set, preserving arrival
    /// order, and advances the cursor.
    pub fn apply_response(&mut self, ticket: SearchTicket, response: SearchResponse) -> bool {
        if self.is_stale(ticket) {
            return false;
        }
        self.loading = false;
        if ticket.append {
            self.options.extend(response.results);
        } else {
            self.options = response.results;
        }
        self.cursor.advance_to(ticket.page, response.pagination.has_more);
        true
    }

    /// Apply a failed search
    ///
    /// Existing results stay untouched; the failure is surfaced for retry.
    pub fn apply_failure(&mut self, ticket: SearchTicket, message: impl Into<String>) -> bool {
        if self.is_stale(ticket) {
            return false;
        }
        self.loading = false;
        self.error = Some(message.into());
        true
    }

    /// Whether a follow-up page can be requested right now
    pub fn can_fetch_next(&self) -> bool {
        self.cursor.has_more && !self.loading
    }

    /// Clear everything, superseding any in-flight search
    pub fn reset(&mut self) {
        self.input.clear();
        self.cursor.reset("");
        self.options.clear();
        self.loading = false;
        self.error = None;
        self.seq += 1;
        self.keystroke_gen += 1;
        self.retry_page = 1;
        self.retry_append = false;
    }
}

// ============================================================================
// Detail State
// ============================================================================

/// Ticket identifying one issued detail fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailTicket {
    seq: u64,
    id: EntityId,
}

impl DetailTicket {
    /// Entity the fetch was issued for
    pub fn id(&self) -> EntityId {
        self.id
    }
}

/// State of the selected entity and its detail record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailState {
    /// Currently selected top-level entity
    pub selected: Option<EntityId>,

    /// Loaded detail record; survives a failed refresh
    pub details: Option<EntityDetails>,

    /// Currently selected nested entity, if any
    pub nested: Option<EntityId>,

    /// Whether a detail fetch is in flight
    pub loading: bool,

    /// Last failure, kept until the next attempt; retryable
    pub error: Option<String>,

    /// Sequence of the most recently issued fetch
    seq: u64,
}

impl DetailState {
    /// Create an empty detail state
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a top-level entity (or clear the selection with None)
    ///
    /// Any selected nested entity is cleared first. Clearing the selection
    /// drops the detail record synchronously and issues no request; the
    /// returned ticket, when present, is the fetch the caller must run.
    pub fn select(&mut self, id: Option<EntityId>) -> Option<DetailTicket> {
        self.nested = None;
        self.selected = id;
        self.error = None;
        self.seq += 1;
        match id {
            Some(id) => {
                self.loading = true;
                Some(DetailTicket { seq: self.seq, id })
            }
            None => {
                self.details = None;
                self.loading = false;
                None
            }
        }
    }

    /// Whether a completion for this ticket has been superseded
    pub fn is_stale(&self, ticket: DetailTicket) -> bool {
        ticket.seq != self.seq
    }

    /// Apply a fetched detail record; false when the ticket is stale
    pub fn apply_details(&mut self, ticket: DetailTicket, details: EntityDetails) -> bool {
        if self.is_stale(ticket) {
            return false;
        }
        self.loading = false;
        self.details = Some(details);
        true
    }

    /// Apply a failed fetch
    ///
    /// The previous detail record stays untouched; the failure is surfaced
    /// for retry.
    pub fn apply_failure(&mut self, ticket: DetailTicket, message: impl Into<String>) -> bool {
        if self.is_stale(ticket) {
            return false;
        }
        self.loading = false;
        self.error = Some(message.into());
        true
    }

    /// Select a nested entity, or return to the top-level view with None
    pub fn select_nested(&mut self, id: Option<EntityId>) {
        self.nested = id;
    }

    /// Clear everything, superseding any in-flight fetch
    pub fn reset(&mut self) {
        self.selected = None;
        self.details = None;
        self.nested = None;
        self.loading = false;
        self.error = None;
        self.seq += 1;
    }
}

// ============================================================================
// Detail View Resolution
// ============================================================================

/// What the details panel should currently show
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailView<'a> {
    /// Nothing selected or loaded yet
    Empty,
    /// The selected top-level entity
    Entity(&'a EntityDetails),
    /// A nested entity of the selected entity
    Nested(&'a EntityDetails, &'a NestedEntity),
}

// ============================================================================
// Explorer State
// ============================================================================

/// Main application state container
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExplorerState {
    /// Currently chosen HTTP method; everything downstream depends on it
    pub method: Option<HttpMethod>,

    /// Paged entity search
    pub search: SearchState,

    /// Selected entity details
    pub detail: DetailState,
}

impl ExplorerState {
    /// Create empty explorer state
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a method, resetting all downstream state
    ///
    /// Entity list, search text, pagination cursor, detail record, and
    /// nested selection are all invalidated; in-flight requests are
    /// superseded.
    pub fn select_method(&mut self, method: Option<HttpMethod>) {
        self.method = method;
        self.search.reset();
        self.detail.reset();
    }

    /// Nested entities of the loaded details under the current method
    ///
    /// Empty when no details are loaded or no method is selected.
    pub fn nested_entities(&self) -> &[NestedEntity] {
        match (&self.detail.details, self.method) {
            (Some(details), Some(method)) => details.nested_for(method),
            _ => &[],
        }
    }

    /// Resolve what the details panel should show
    ///
    /// A nested selection that no longer resolves under the current method
    /// falls back to the top-level entity view.
    pub fn detail_view(&self) -> DetailView<'_> {
        let Some(details) = &self.detail.details else {
            return DetailView::Empty;
        };
        if let (Some(nested_id), Some(method)) = (self.detail.nested, self.method) {
            if let Some(nested) = details.find_nested(method, nested_id) {
                return DetailView::Nested(details, nested);
            }
        }
        DetailView::Entity(details)
    }
}

// ============================================================================
// Global State
// ============================================================================

/// Global explorer state signal
/// Use this in components to access and modify app state
pub static EXPLORER: GlobalSignal<ExplorerState> = Signal::global(ExplorerState::new);

// ============================================================================
// State Hooks (for component use)
// ============================================================================

/// Hook to read the currently selected method
pub fn use_selected_method() -> Option<HttpMethod> {
    EXPLORER.read().method
}

/// Hook to check whether a search is in flight
pub fn use_search_loading() -> bool {
    EXPLORER.read().search.loading
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_catalog::{Field, Pagination};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn option(id: EntityId, name: &str) -> EntityOption {
        EntityOption {
            method: HttpMethod::Get,
            name: name.to_string(),
            id,
            has_nested: false,
        }
    }

    fn page_of(ids: std::ops::Range<u64>, has_more: bool) -> SearchResponse {
        SearchResponse {
            results: ids.map(|i| option(i, &format!("entity-{i}"))).collect(),
            pagination: Pagination { has_more },
        }
    }

    fn nested(id: EntityId, name: &str) -> NestedEntity {
        NestedEntity {
            name: name.to_string(),
            description: None,
            url: format!("/api/{name}"),
            filters: Vec::new(),
            payload_fields: vec![Field::keyed("amount", true)],
            response_fields: Vec::new(),
            id,
            method: HttpMethod::Get,
        }
    }

    fn details(id: EntityId) -> EntityDetails {
        let mut nested_entities = HashMap::new();
        nested_entities.insert(HttpMethod::Get, vec![nested(10, "orders")]);
        EntityDetails {
            name: "customers".to_string(),
            description: Some("Customer registry".to_string()),
            url: "/api/customers".to_string(),
            filters: vec![Field::bare("status")],
            payload_fields: Vec::new(),
            response_fields: Vec::new(),
            id,
            method: HttpMethod::Get,
            nested_entities,
        }
    }

    #[test]
    fn test_method_change_resets_everything() {
        let mut state = ExplorerState::new();
        state.select_method(Some(HttpMethod::Get));

        // Populate every downstream piece of state
        let generation = state.search.note_keystroke("cust");
        assert!(state.search.commit_query(generation));
        let ticket = state.search.begin(1, false);
        assert!(state.search.apply_response(ticket, page_of(0..20, true)));
        let detail_ticket = state.detail.select(Some(42)).unwrap();
        assert!(state.detail.apply_details(detail_ticket, details(42)));
        state.detail.select_nested(Some(10));

        state.select_method(Some(HttpMethod::Post));

        assert_eq!(state.method, Some(HttpMethod::Post));
        assert!(state.search.options.is_empty());
        assert!(state.search.input.is_empty());
        assert_eq!(state.search.cursor.page, 1);
        assert!(!state.search.cursor.has_more);
        assert_eq!(state.detail.details, None);
        assert_eq!(state.detail.selected, None);
        assert_eq!(state.detail.nested, None);
    }

    #[test]
    fn test_method_change_supersedes_inflight_search() {
        let mut state = ExplorerState::new();
        state.select_method(Some(HttpMethod::Get));
        let ticket = state.search.begin(1, false);

        state.select_method(Some(HttpMethod::Put));

        // The old completion must not land in the new method's view
        assert!(!state.search.apply_response(ticket, page_of(0..20, true)));
        assert!(state.search.options.is_empty());
    }

    #[test]
    fn test_debounce_generation_commits_only_latest() {
        let mut search = SearchState::new();
        let first = search.note_keystroke("A");
        let second = search.note_keystroke("AB");

        // The stale timer fires first and must not commit
        assert!(!search.commit_query(first));
        assert!(search.cursor.query.is_empty());

        // The current timer commits exactly one query, the latest text
        assert!(search.commit_query(second));
        assert_eq!(search.cursor.query, "AB");
        assert_eq!(search.cursor.page, 1);
    }

    #[test]
    fn test_query_commit_preserves_method() {
        let mut state = ExplorerState::new();
        state.select_method(Some(HttpMethod::Delete));
        let generation = state.search.note_keystroke("inv");
        assert!(state.search.commit_query(generation));
        assert_eq!(state.method, Some(HttpMethod::Delete));
    }

    #[test]
    fn test_replace_then_append_preserves_order() {
        let mut search = SearchState::new();

        let ticket = search.begin(1, false);
        assert!(search.apply_response(ticket, page_of(0..20, true)));
        assert_eq!(search.options.len(), 20);
        assert_eq!(search.cursor.page, 1);
        assert!(search.cursor.has_more);

        let ticket = search.begin(2, true);
        assert!(search.apply_response(ticket, page_of(20..40, false)));
        assert_eq!(search.options.len(), 40);
        assert_eq!(search.options[0].name, "entity-0");
        assert_eq!(search.options[19].name, "entity-19");
        assert_eq!(search.options[20].name, "entity-20");
        assert_eq!(search.cursor.page, 2);
        assert!(!search.cursor.has_more);
    }

    #[test]
    fn test_non_append_replaces_wholesale() {
        let mut search = SearchState::new();
        let ticket = search.begin(1, false);
        search.apply_response(ticket, page_of(0..20, true));

        let ticket = search.begin(1, false);
        assert!(search.apply_response(ticket, page_of(100..105, false)));
        assert_eq!(search.options.len(), 5);
        assert_eq!(search.options[0].name, "entity-100");
    }

    #[test]
    fn test_stale_search_response_is_discarded() {
        let mut search = SearchState::new();
        let stale = search.begin(1, false);
        let fresh = search.begin(1, false);

        // The slower, older response arrives after the newer request
        assert!(!search.apply_response(stale, page_of(0..3, false)));
        assert!(search.options.is_empty());
        assert!(search.loading);

        assert!(search.apply_response(fresh, page_of(10..12, false)));
        assert_eq!(search.options.len(), 2);
        assert!(!search.loading);
    }

    #[test]
    fn test_search_failure_keeps_results_and_surfaces_error() {
        let mut search = SearchState::new();
        let ticket = search.begin(1, false);
        search.apply_response(ticket, page_of(0..20, true));

        let ticket = search.begin(2, true);
        assert!(search.apply_failure(ticket, "connection refused"));
        assert_eq!(search.options.len(), 20);
        assert!(!search.loading);
        assert_eq!(search.error.as_deref(), Some("connection refused"));

        // The next attempt clears the surfaced failure
        search.begin(2, true);
        assert_eq!(search.error, None);
    }

    #[test]
    fn test_retry_repeats_the_failed_request() {
        let mut search = SearchState::new();
        assert_eq!(search.retry_request(), (1, false));

        let ticket = search.begin(1, false);
        search.apply_response(ticket, page_of(0..20, true));

        let ticket = search.begin(2, true);
        search.apply_failure(ticket, "timeout");
        assert_eq!(search.retry_request(), (2, true));

        search.reset();
        assert_eq!(search.retry_request(), (1, false));
    }

    #[test]
    fn test_can_fetch_next() {
        let mut search = SearchState::new();
        assert!(!search.can_fetch_next());

        let ticket = search.begin(1, false);
        search.apply_response(ticket, page_of(0..20, true));
        assert!(search.can_fetch_next());

        // Not while a request is already in flight
        search.begin(2, true);
        assert!(!search.can_fetch_next());
    }

    #[test]
    fn test_scroll_scenario_two_pages() {
        let mut state = ExplorerState::new();
        state.select_method(Some(HttpMethod::Get));

        let ticket = state.search.begin(1, false);
        state.search.apply_response(ticket, page_of(0..20, true));
        assert!(state.search.can_fetch_next());

        let page = state.search.cursor.next_page();
        assert_eq!(page, 2);
        let ticket = state.search.begin(page, true);
        assert!(ticket.append());
        state.search.apply_response(ticket, page_of(20..40, true));

        assert_eq!(state.search.options.len(), 40);
        assert_eq!(state.search.options[0].name, "entity-0");
        assert_eq!(state.search.options[39].name, "entity-39");
    }

    #[test]
    fn test_select_entity_clears_nested() {
        let mut detail = DetailState::new();
        let ticket = detail.select(Some(42)).unwrap();
        detail.apply_details(ticket, details(42));
        detail.select_nested(Some(10));
        assert_eq!(detail.nested, Some(10));

        // Switching the top-level entity drops the nested selection
        let ticket = detail.select(Some(43)).unwrap();
        assert_eq!(detail.nested, None);
        assert!(detail.loading);
        // Previous record stays visible while the new fetch runs
        assert_eq!(detail.details.as_ref().map(|d| d.id), Some(42));

        detail.apply_details(ticket, details(43));
        assert_eq!(detail.details.as_ref().map(|d| d.id), Some(43));
    }

    #[test]
    fn test_clearing_selection_is_synchronous() {
        let mut detail = DetailState::new();
        let ticket = detail.select(Some(42)).unwrap();
        detail.apply_details(ticket, details(42));

        assert_eq!(detail.select(None), None);
        assert_eq!(detail.details, None);
        assert!(!detail.loading);

        // The superseded fetch, had one been in flight, cannot land
        assert!(!detail.apply_details(ticket, details(42)));
        assert_eq!(detail.details, None);
    }

    #[test]
    fn test_stale_detail_fetch_is_discarded() {
        let mut detail = DetailState::new();
        let stale = detail.select(Some(42)).unwrap();
        let fresh = detail.select(Some(43)).unwrap();

        assert!(!detail.apply_details(stale, details(42)));
        assert!(detail.apply_details(fresh, details(43)));
        assert_eq!(detail.details.as_ref().map(|d| d.id), Some(43));
    }

    #[test]
    fn test_detail_failure_keeps_previous_record() {
        let mut detail = DetailState::new();
        let ticket = detail.select(Some(42)).unwrap();
        detail.apply_details(ticket, details(42));

        let ticket = detail.select(Some(43)).unwrap();
        assert!(detail.apply_failure(ticket, "catalog returned HTTP 500"));
        assert_eq!(detail.details.as_ref().map(|d| d.id), Some(42));
        assert!(!detail.loading);
        assert!(detail.error.is_some());
    }

    #[test]
    fn test_nested_entities_filtered_by_current_method() {
        let mut state = ExplorerState::new();
        state.select_method(Some(HttpMethod::Get));
        let ticket = state.detail.select(Some(42)).unwrap();
        state.detail.apply_details(ticket, details(42));

        assert_eq!(state.nested_entities().len(), 1);
        assert_eq!(state.nested_entities()[0].name, "orders");

        // Details stay loaded but the nested map has no POST key
        state.method = Some(HttpMethod::Post);
        assert!(state.nested_entities().is_empty());
    }

    #[test]
    fn test_detail_view_resolution() {
        let mut state = ExplorerState::new();
        assert_eq!(state.detail_view(), DetailView::Empty);

        state.select_method(Some(HttpMethod::Get));
        let ticket = state.detail.select(Some(42)).unwrap();
        state.detail.apply_details(ticket, details(42));
        assert!(matches!(state.detail_view(), DetailView::Entity(d) if d.id == 42));

        state.detail.select_nested(Some(10));
        assert!(matches!(state.detail_view(), DetailView::Nested(_, n) if n.id == 10));

        // A nested id that does not resolve falls back to the entity view
        state.detail.select_nested(Some(99));
        assert!(matches!(state.detail_view(), DetailView::Entity(_)));

        state.detail.select_nested(None);
        assert!(matches!(state.detail_view(), DetailView::Entity(_)));
    }
}
