//! # Entity List Component
//!
//! The left pane of the explorer: the search box and the scrollable result
//! list. Scrolling close to the end of the list asks the parent for the
//! next page; the parent decides whether one can actually be fetched.
//!
//! Loading, failure, and empty states are rendered distinctly so "nothing
//! matched" never looks the same as "the search failed".

use dioxus::prelude::*;
use std::rc::Rc;

use atlas_catalog::{EntityId, EntityOption};

use crate::components::method_select::MethodBadge;

// ============================================================================
// Constants
// ============================================================================

/// How close to the end of the list (in pixels) scrolling must get before
/// the next page is requested
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Whether a scroll position is within the fetch-ahead window
pub fn near_list_end(scroll_top: f64, viewport_height: f64, content_height: f64) -> bool {
    scroll_top + viewport_height >= content_height - SCROLL_THRESHOLD_PX
}

// ============================================================================
// Entity List Component
// ============================================================================

/// Properties for EntityList component
#[derive(Props, Clone, PartialEq)]
pub struct EntityListProps {
    /// Current result set, in arrival order
    pub options: Vec<EntityOption>,

    /// Live search box text
    pub input: String,

    /// Currently selected entity (if any)
    #[props(default)]
    pub selected: Option<EntityId>,

    /// Whether a search is in flight
    #[props(default = false)]
    pub loading: bool,

    /// Surfaced search failure (if any)
    #[props(default)]
    pub error: Option<String>,

    /// Whether searching is enabled (a method has been picked)
    #[props(default = false)]
    pub enabled: bool,

    /// Whether the backend reported more pages
    #[props(default = false)]
    pub has_more: bool,

    /// Callback on every keystroke in the search box
    #[props(default)]
    pub on_query_input: EventHandler<String>,

    /// Callback when an entity row is clicked
    #[props(default)]
    pub on_select: EventHandler<EntityId>,

    /// Callback when the user retries after a failure
    #[props(default)]
    pub on_retry: EventHandler<()>,

    /// Callback when the list is scrolled near its end
    #[props(default)]
    pub on_near_end: EventHandler<()>,
}

/// Searchable, infinitely scrolling entity list
#[component]
pub fn EntityList(props: EntityListProps) -> Element {
    // Mounted list element, used to measure scroll geometry
    let mut list_element: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let result_count = props.options.len();
    let on_near_end = props.on_near_end;
    let placeholder = if props.enabled {
        "Search entities…"
    } else {
        "Pick a method to search"
    };

    let handle_scroll = move |_| {
        spawn(async move {
            let Some(element) = list_element() else {
                return;
            };
            let (Ok(offset), Ok(content), Ok(rect)) = (
                element.get_scroll_offset().await,
                element.get_scroll_size().await,
                element.get_client_rect().await,
            ) else {
                return;
            };
            if near_list_end(offset.y, rect.size.height, content.height) {
                on_near_end.call(());
            }
        });
    };

    rsx! {
        div {
            class: "entity-pane",

            // Search box
            div {
                class: "search-box",
                input {
                    class: "search-input",
                    r#type: "text",
                    value: "{props.input}",
                    placeholder: "{placeholder}",
                    disabled: !props.enabled,
                    oninput: move |e| props.on_query_input.call(e.value()),
                }
            }

            // Result list
            div {
                class: "entity-list",
                onmounted: move |e| list_element.set(Some(e.data())),
                onscroll: handle_scroll,

                for option in props.options.iter() {
                    EntityRow {
                        key: "{option.id}",
                        option: option.clone(),
                        selected: props.selected == Some(option.id),
                        on_click: move |id| props.on_select.call(id),
                    }
                }

                // Failure state, distinct from "no results"
                if let Some(error) = &props.error {
                    div {
                        class: "list-error",
                        p { class: "list-error-message", "{error}" }
                        button {
                            class: "retry-button",
                            r#type: "button",
                            onclick: move |_| props.on_retry.call(()),
                            "Retry"
                        }
                    }
                }

                // Loading indicator
                if props.loading {
                    div {
                        class: "list-loading",
                        "Searching…"
                    }
                }

                // Empty states
                if !props.loading && props.error.is_none() && props.options.is_empty() {
                    div {
                        class: "list-empty",
                        if props.enabled {
                            "No matching entities"
                        } else {
                            "Pick an HTTP method to browse the catalog"
                        }
                    }
                }
            }

            // Footer: count and paging state
            if result_count > 0 {
                div {
                    class: "list-footer",
                    if props.has_more {
                        "{result_count} results · scroll for more"
                    } else {
                        "{result_count} results"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Entity Row Component
// ============================================================================

/// Properties for EntityRow component
#[derive(Props, Clone, PartialEq)]
pub struct EntityRowProps {
    /// The search result to display
    pub option: EntityOption,

    /// Whether this row is currently selected
    #[props(default = false)]
    pub selected: bool,

    /// Callback when the row is clicked
    #[props(default)]
    pub on_click: EventHandler<EntityId>,
}

/// One row of the entity result list
#[component]
pub fn EntityRow(props: EntityRowProps) -> Element {
    let option = &props.option;
    let id = option.id;

    rsx! {
        div {
            class: "entity-row",
            class: if props.selected { "entity-row-selected" } else { "" },
            onclick: move |_| props.on_click.call(id),

            MethodBadge { method: option.method }

            span {
                class: "entity-name",
                title: "{option.name}",
                "{option.name}"
            }

            // Marker for entities with nested sub-resources
            if option.has_nested {
                span {
                    class: "entity-nested-marker",
                    title: "Has nested entities",
                    "›"
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
