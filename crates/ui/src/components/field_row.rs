//! # Field Row Component
//!
//! Displays a single filter/payload/response field of an entity.
//!
//! Bare and structured fields render identically except for the required
//! marker; the row shows:
//! - Field name
//! - Required indicator (asterisk) for structured fields marked required
//!

use dioxus::prelude::*;

use atlas_catalog::Field;

// ============================================================================
// Field Row Component
// ============================================================================

/// Properties for the FieldRow component
#[derive(Props, Clone, PartialEq)]
pub struct FieldRowProps {
    /// The field to display
    pub field: Field,
}

/// Field row component for displaying a single field
#[component]
pub fn FieldRow(props: FieldRowProps) -> Element {
    let field = &props.field;

    rsx! {
        div {
            class: "field-row",

            // Field name
            span {
                class: "field-name",
                class: if field.is_required() { "field-name-required" } else { "" },
                title: "{field.label()}",
                "{field.label()}"
            }

            // Required indicator (asterisk)
            if field.is_required() {
                span {
                    class: "field-required",
                    title: "Required",
                    "*"
                }
            }
        }
    }
}

// ============================================================================
// Field List Component
// ============================================================================

/// Properties for FieldList component
#[derive(Props, Clone, PartialEq)]
pub struct FieldListProps {
    /// List of fields to display
    pub fields: Vec<Field>,

    /// Text shown when the list is empty
    #[props(default = "No fields".to_string())]
    pub empty_label: String,
}

/// Component for displaying a list of fields
#[component]
pub fn FieldList(props: FieldListProps) -> Element {
    rsx! {
        div {
            class: "field-list",

            for (i, field) in props.fields.iter().enumerate() {
                FieldRow {
                    key: "{i}-{field.label()}",
                    field: field.clone(),
                }
            }

            // Empty state
            if props.fields.is_empty() {
                div {
                    class: "field-list-empty",
                    "{props.empty_label}"
                }
            }
        }
    }
}

// ============================================================================
// Field Summary
// ============================================================================

/// Summarize a field list for a section header, e.g. "3 fields, 1 required"
pub fn field_summary(fields: &[Field]) -> String {
    let total = fields.len();
    let required = fields.iter().filter(|f| f.is_required()).count();

    match (total, required) {
        (0, _) => "empty".to_string(),
        (1, 0) => "1 field".to_string(),
        (n, 0) => format!("{n} fields"),
        (1, _) => "1 field, required".to_string(),
        (n, r) => format!("{n} fields, {r} required"),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_summary_empty() {
        assert_eq!(field_summary(&[]), "empty");
    }

    #[test]
    fn test_field_summary_counts() {
        let fields = vec![Field::bare("status")];
        assert_eq!(field_summary(&fields), "1 field");

        let fields = vec![
            Field::bare("status"),
            Field::keyed("amount", true),
            Field::keyed("note", false),
        ];
        assert_eq!(field_summary(&fields), "3 fields, 1 required");
    }

    #[test]
    fn test_field_summary_single_required() {
        let fields = vec![Field::keyed("amount", true)];
        assert_eq!(field_summary(&fields), "1 field, required");
    }
}
