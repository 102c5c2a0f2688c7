//! # Details Panel Component
//!
//! The right pane of the explorer: the full record of the selected entity,
//! or of the selected nested entity with a breadcrumb back to its parent.
//!
//! The panel is a pure function of [`EXPLORER`]: it resolves the active
//! view through the state machine and never fetches anything itself. A
//! failed fetch keeps the previous record visible with a retry affordance
//! on top.

use dioxus::prelude::*;

use atlas_catalog::{EntityId, Field, HttpMethod};

use crate::components::field_row::{FieldList, field_summary};
use crate::components::method_select::MethodBadge;
use crate::state::{DetailView, EXPLORER};

// ============================================================================
// Details Panel Component
// ============================================================================

/// Properties for DetailsPanel component
#[derive(Props, Clone, PartialEq)]
pub struct DetailsPanelProps {
    /// Callback when the user retries a failed detail fetch
    #[props(default)]
    pub on_retry: EventHandler<EntityId>,
}

/// Detail view for the selected entity or nested entity
#[component]
pub fn DetailsPanel(props: DetailsPanelProps) -> Element {
    let state = EXPLORER.read();
    let loading = state.detail.loading;
    let error = state.detail.error.clone();
    let selected = state.detail.selected;

    // Clone the resolved view out of the read guard before rendering
    let view = match state.detail_view() {
        DetailView::Empty => None,
        DetailView::Entity(details) => Some((details.clone(), None)),
        DetailView::Nested(details, nested) => Some((details.clone(), Some(nested.clone()))),
    };
    let nested_list: Vec<_> = state
        .nested_entities()
        .iter()
        .map(|n| (n.id, n.name.clone()))
        .collect();
    drop(state);

    rsx! {
        div {
            class: "details-pane",

            // Failure state with retry, on top of whatever is still shown
            if let Some(error) = &error {
                div {
                    class: "details-error",
                    p { class: "details-error-message", "{error}" }
                    if let Some(id) = selected {
                        button {
                            class: "retry-button",
                            r#type: "button",
                            onclick: move |_| props.on_retry.call(id),
                            "Retry"
                        }
                    }
                }
            }

            // Loading indicator
            if loading {
                div {
                    class: "details-loading",
                    "Loading details…"
                }
            }

            {match view {
                None => rsx! {
                    if !loading && error.is_none() {
                        div {
                            class: "details-empty",
                            "Select an entity to inspect its filters and fields"
                        }
                    }
                },
                Some((details, None)) => rsx! {
                    DetailBody {
                        name: details.name.clone(),
                        method: details.method,
                        description: details.description.clone(),
                        url: details.url.clone(),
                        filters: details.filters.clone(),
                        payload_fields: details.payload_fields.clone(),
                        response_fields: details.response_fields.clone(),
                    }

                    // Nested entities reachable under the current method
                    if !nested_list.is_empty() {
                        div {
                            class: "details-section",
                            h3 { class: "section-title", "Nested entities" }
                            div {
                                class: "nested-list",
                                for (id, name) in nested_list.iter() {
                                    NestedChip {
                                        key: "{id}",
                                        id: *id,
                                        name: name.clone(),
                                    }
                                }
                            }
                        }
                    }
                },
                Some((details, Some(nested))) => rsx! {
                    // Breadcrumb back to the top-level entity
                    button {
                        class: "details-breadcrumb",
                        r#type: "button",
                        onclick: move |_| EXPLORER.write().detail.select_nested(None),
                        "‹ {details.name}"
                    }

                    DetailBody {
                        name: nested.name.clone(),
                        method: nested.method,
                        description: nested.description.clone(),
                        url: nested.url.clone(),
                        filters: nested.filters.clone(),
                        payload_fields: nested.payload_fields.clone(),
                        response_fields: nested.response_fields.clone(),
                    }
                },
            }}
        }
    }
}

// ============================================================================
// Detail Body Component
// ============================================================================

/// Properties for DetailBody component
#[derive(Props, Clone, PartialEq)]
struct DetailBodyProps {
    name: String,
    method: HttpMethod,
    description: Option<String>,
    url: String,
    filters: Vec<Field>,
    payload_fields: Vec<Field>,
    response_fields: Vec<Field>,
}

/// The shared record layout for entities and nested entities
#[component]
fn DetailBody(props: DetailBodyProps) -> Element {
    rsx! {
        div {
            class: "details-header",
            MethodBadge { method: props.method }
            h2 { class: "details-name", "{props.name}" }
        }

        if let Some(description) = &props.description {
            if !description.is_empty() {
                p { class: "details-description", "{description}" }
            }
        }

        if !props.url.is_empty() {
            div {
                class: "details-url",
                code { "{props.url}" }
            }
        }

        FieldSection {
            title: "Filters",
            fields: props.filters.clone(),
        }

        // Payload only makes sense for methods that carry one, but the
        // backend decides; an empty section renders as such either way
        if props.method.has_payload() || !props.payload_fields.is_empty() {
            FieldSection {
                title: "Payload fields",
                fields: props.payload_fields.clone(),
            }
        }

        FieldSection {
            title: "Response fields",
            fields: props.response_fields.clone(),
        }
    }
}

// ============================================================================
// Field Section Component
// ============================================================================

/// Properties for FieldSection component
#[derive(Props, Clone, PartialEq)]
struct FieldSectionProps {
    title: &'static str,
    fields: Vec<Field>,
}

/// Titled section wrapping a field list
#[component]
fn FieldSection(props: FieldSectionProps) -> Element {
    let summary = field_summary(&props.fields);

    rsx! {
        div {
            class: "details-section",
            h3 {
                class: "section-title",
                "{props.title}"
                span { class: "section-summary", "{summary}" }
            }
            FieldList {
                fields: props.fields.clone(),
                empty_label: "None".to_string(),
            }
        }
    }
}

// ============================================================================
// Nested Chip Component
// ============================================================================

/// Properties for NestedChip component
#[derive(Props, Clone, PartialEq)]
struct NestedChipProps {
    id: EntityId,
    name: String,
}

/// Clickable chip selecting a nested entity
#[component]
fn NestedChip(props: NestedChipProps) -> Element {
    let id = props.id;

    rsx! {
        button {
            class: "nested-chip",
            r#type: "button",
            onclick: move |_| EXPLORER.write().detail.select_nested(Some(id)),
            "{props.name}"
        }
    }
}
