//! View-facing state projections.
//!
//! Each variant projects a different subset of `FieldState` into the shape
//! its widget consumes. Projections copy out of the snapshot; nothing
//! borrows the tree.

use crate::state::{FieldState, OptionRecord};

/// Projection for a plain input field.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextView {
    pub value: String,
    pub hint: Option<String>,
    pub error_text: String,
    pub show_error: bool,
    pub focused: bool,
    pub disabled: bool,
}

/// Projection for a dropdown field: the plain projection plus the
/// dropdown-box state.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DropdownView {
    pub field: TextView,
    pub open: bool,
    pub options: Vec<OptionRecord>,
    pub search_text: String,
}

/// Projection for a radio group. `None` means no option is selected.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RadioView {
    pub selected_value: Option<String>,
}

/// Variant-shaped view of one field's state.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldView {
    Text(TextView),
    Dropdown(DropdownView),
    Radio(RadioView),
}

/// Append the required marker to a placeholder.
///
/// Purely presentational; the marker has no effect on the state machine.
pub fn mark_required(placeholder: &str) -> String {
    format!("{} *", placeholder)
}

pub(crate) fn text_view(field: &FieldState) -> TextView {
    TextView {
        value: field.value.clone().unwrap_or_default(),
        hint: field.hint.clone(),
        error_text: field.error_text.clone(),
        show_error: field.error_shown,
        focused: field.focused,
        disabled: !field.enabled,
    }
}

pub(crate) fn dropdown_view(field: &FieldState) -> DropdownView {
    DropdownView {
        field: text_view(field),
        open: field.open,
        options: field.options.clone(),
        search_text: field.search_text.clone(),
    }
}

pub(crate) fn radio_view(field: &FieldState) -> RadioView {
    RadioView {
        selected_value: field.value.clone(),
    }
}
