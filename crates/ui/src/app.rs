//! Main Application Component for the Atlas explorer
//!
//! This module contains the root Dioxus component and the controller
//! functions that connect user events to backend fetches. All fetch
//! completions flow back through the ticketed `state` methods, so stale
//! responses are discarded rather than applied.

use dioxus::prelude::*;

use atlas_catalog::{EntityId, HttpMethod};
use atlas_client::{CatalogClient, ClientConfig, SearchRequest};

use crate::components::{DetailsPanel, EntityList, MethodSelect};
use crate::hooks::{DEBOUNCE, use_debouncer};
use crate::state::EXPLORER;

// ============================================================================
// Backend Client
// ============================================================================

/// Shared backend client
/// One connection pool for the whole UI; cheap to clone per request
pub static CLIENT: GlobalSignal<CatalogClient> =
    Signal::global(|| CatalogClient::new(ClientConfig::default()));

// ============================================================================
// Controller Functions
// ============================================================================

/// Issue a search for the given page of the committed query
///
/// No-op when no method is selected. The response is applied under the
/// ticket issued here; anything that supersedes the search in the meantime
/// makes the completion a no-op.
pub fn run_search(page: u32, append: bool) {
    let (method, query, ticket) = {
        let mut state = EXPLORER.write();
        let Some(method) = state.method else {
            return;
        };
        let ticket = state.search.begin(page, append);
        (method, state.search.cursor.query.clone(), ticket)
    };

    let client = CLIENT.read().clone();
    spawn(async move {
        let request = SearchRequest {
            query: &query,
            method,
            page,
            limit: client.config().page_size,
        };

        match client.search_entities(&request).await {
            Ok(response) => {
                let applied = EXPLORER.write().search.apply_response(ticket, response);
                if !applied {
                    tracing::debug!(page, "discarded superseded search response");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, page, "entity search failed");
                EXPLORER.write().search.apply_failure(ticket, e.to_string());
            }
        }
    });
}

/// Retry after a surfaced search failure, repeating the failed request
pub fn retry_search() {
    let (page, append) = EXPLORER.read().search.retry_request();
    run_search(page, append);
}

/// Select an entity and fetch its detail record
///
/// Selecting clears any nested selection first; the fetch completion is
/// applied under the ticket issued by the selection.
pub fn load_details(id: EntityId) {
    let ticket = EXPLORER.write().detail.select(Some(id));
    let Some(ticket) = ticket else {
        return;
    };

    let client = CLIENT.read().clone();
    spawn(async move {
        match client.entity_details(id).await {
            Ok(details) => {
                let applied = EXPLORER.write().detail.apply_details(ticket, details);
                if !applied {
                    tracing::debug!(entity_id = id, "discarded superseded detail fetch");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, entity_id = id, "detail fetch failed");
                EXPLORER.write().detail.apply_failure(ticket, e.to_string());
            }
        }
    });
}

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Atlas explorer UI initialized");
    });

    let mut debouncer = use_debouncer(DEBOUNCE);

    let state = EXPLORER.read();
    let method = state.method;
    let search_input = state.search.input.clone();
    let options = state.search.options.clone();
    let selected = state.detail.selected;
    let search_loading = state.search.loading;
    let search_error = state.search.error.clone();
    let has_more = state.search.cursor.has_more;
    drop(state);

    let result_count = options.len();

    rsx! {
        div {
            class: "app-container",

            // Top bar: title and method picker
            header {
                class: "app-header",

                div {
                    class: "app-title",
                    span { class: "app-logo", "🧭" }
                    span { class: "app-name", "Atlas" }
                    span { class: "app-subtitle", "API catalog explorer" }
                }

                MethodSelect {
                    selected: method,
                    on_select: move |m: HttpMethod| {
                        EXPLORER.write().select_method(Some(m));
                        run_search(1, false);
                    },
                }
            }

            // Main content: result list and details
            div {
                class: "explorer-body",

                EntityList {
                    options: options,
                    input: search_input,
                    selected: selected,
                    loading: search_loading,
                    error: search_error,
                    enabled: method.is_some(),
                    has_more: has_more,
                    on_query_input: move |text: String| {
                        let generation = EXPLORER.write().search.note_keystroke(text);
                        debouncer.debounce(async move {
                            let committed = EXPLORER.write().search.commit_query(generation);
                            if committed {
                                run_search(1, false);
                            }
                        });
                    },
                    on_select: move |id| load_details(id),
                    on_retry: move |_| retry_search(),
                    on_near_end: move |_| {
                        let next = {
                            let state = EXPLORER.read();
                            state
                                .search
                                .can_fetch_next()
                                .then(|| state.search.cursor.next_page())
                        };
                        if let Some(page) = next {
                            run_search(page, true);
                        }
                    },
                }

                DetailsPanel {
                    on_retry: move |id| load_details(id),
                }
            }

            // Status bar
            StatusBar {
                result_count: result_count,
                has_more: has_more,
                method: method,
            }
        }
    }
}

// ============================================================================
// Status Bar Component
// ============================================================================

/// Properties for StatusBar component
#[derive(Props, Clone, PartialEq)]
struct StatusBarProps {
    result_count: usize,
    has_more: bool,
    method: Option<HttpMethod>,
}

/// Bottom status line: scope, result count, version
#[component]
fn StatusBar(props: StatusBarProps) -> Element {
    let scope = props
        .method
        .map(|m| m.to_string())
        .unwrap_or_else(|| "none".to_string());

    rsx! {
        footer {
            class: "status-bar",

            span { class: "status-item", "Method: {scope}" }

            span {
                class: "status-item",
                if props.has_more {
                    "{props.result_count} loaded · more available"
                } else {
                    "{props.result_count} loaded"
                }
            }

            div { class: "status-spacer" }

            span { class: "status-item status-version", "v{crate::VERSION}" }
        }
    }
}
