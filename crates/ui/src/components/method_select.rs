//! # Method Selection Components
//!
//! The five-way HTTP method picker that scopes the whole explorer, plus the
//! small colored badge used wherever a method is displayed next to an
//! entity.

use dioxus::prelude::*;

use atlas_catalog::HttpMethod;

// ============================================================================
// Badge Styling
// ============================================================================

/// Get the badge CSS class for an HTTP method
pub fn method_badge_class(method: HttpMethod) -> &'static str {
    match method {
        HttpMethod::Get => "method-badge method-get",
        HttpMethod::Put => "method-badge method-put",
        HttpMethod::Patch => "method-badge method-patch",
        HttpMethod::Post => "method-badge method-post",
        HttpMethod::Delete => "method-badge method-delete",
    }
}

// ============================================================================
// Method Badge Component
// ============================================================================

/// Properties for MethodBadge component
#[derive(Props, Clone, PartialEq)]
pub struct MethodBadgeProps {
    /// Method to display
    pub method: HttpMethod,
}

/// Small colored badge showing an HTTP method name
#[component]
pub fn MethodBadge(props: MethodBadgeProps) -> Element {
    rsx! {
        span {
            class: "{method_badge_class(props.method)}",
            "{props.method}"
        }
    }
}

// ============================================================================
// Method Select Component
// ============================================================================

/// Properties for MethodSelect component
#[derive(Props, Clone, PartialEq)]
pub struct MethodSelectProps {
    /// Currently selected method (if any)
    #[props(default)]
    pub selected: Option<HttpMethod>,

    /// Callback when a method is picked
    #[props(default)]
    pub on_select: EventHandler<HttpMethod>,
}

/// Button group for picking the HTTP method scope
#[component]
pub fn MethodSelect(props: MethodSelectProps) -> Element {
    rsx! {
        div {
            class: "method-select",

            for method in HttpMethod::all() {
                button {
                    key: "{method}",
                    r#type: "button",
                    class: "method-button",
                    class: if props.selected == Some(method) { "method-button-active" } else { "" },
                    onclick: move |_| props.on_select.call(method),

                    span {
                        class: "{method_badge_class(method)}",
                        "{method}"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
