//! Action vocabulary and creators.
//!
//! Each action carries a typed payload and maps to one ordered transform
//! sequence in the reducer. The creators validate payload shape up front:
//! a field cannot live at the tree root, so an empty path fails fast with
//! `FormError::InvalidPayload` instead of surfacing as a misaddressed
//! write later. Actions serialize, so a dispatch queue can log or replay
//! them.

use crate::error::{FormError, FormResult};
use crate::path::FieldPath;
use crate::validate::Validation;
use serde::{Deserialize, Serialize};

/// Specifies every state-changing event the reducer understands.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Value edit on a plain input or radio group, carrying the failures
    /// its validator run produced
    SetValue {
        path: FieldPath,
        value: String,
        errors: Vec<Validation>,
    },
    /// Search text edit inside an open dropdown
    SetDropdownSearch { path: FieldPath, value: String },
    /// Free-standing open/close of a dropdown box
    SetDropdownStatus { path: FieldPath, open: bool },
    /// Option picked from a dropdown list
    SetDropdownValue {
        path: FieldPath,
        value: String,
        label: String,
    },
    /// Field lost focus
    Blur { path: FieldPath },
    /// Field gained focus
    Focus { path: FieldPath },
    /// Dropdown arrow toggled; the flag is the focus/open state to adopt
    ArrowClick { path: FieldPath, focused: bool },
    /// Dropdown clear button pressed
    CrossClick { path: FieldPath },
}

impl Action {
    /// Stable kind tag for logs and dispatch traces.
    ///
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetValue { .. } => "SET_VALUE",
            Action::SetDropdownSearch { .. } => "SET_DROPDOWN_SEARCH",
            Action::SetDropdownStatus { .. } => "SET_DROPDOWN_STATUS",
            Action::SetDropdownValue { .. } => "SET_DROPDOWN_VALUE",
            Action::Blur { .. } => "ON_BLUR",
            Action::Focus { .. } => "ON_FOCUS",
            Action::ArrowClick { .. } => "ON_ARROW_CLICK",
            Action::CrossClick { .. } => "ON_CROSS_CLICK",
        }
    }

    /// The field path this action addresses.
    ///
    pub fn path(&self) -> &FieldPath {
        match self {
            Action::SetValue { path, .. }
            | Action::SetDropdownSearch { path, .. }
            | Action::SetDropdownStatus { path, .. }
            | Action::SetDropdownValue { path, .. }
            | Action::Blur { path }
            | Action::Focus { path }
            | Action::ArrowClick { path, .. }
            | Action::CrossClick { path } => path,
        }
    }

    /// Create a value edit carrying its validator failures.
    ///
    pub fn set_value(
        path: FieldPath,
        value: impl Into<String>,
        errors: Vec<Validation>,
    ) -> FormResult<Action> {
        check_path("SET_VALUE", &path)?;
        Ok(Action::SetValue {
            path,
            value: value.into(),
            errors,
        })
    }

    /// Create a dropdown search edit.
    ///
    pub fn set_dropdown_search(path: FieldPath, value: impl Into<String>) -> FormResult<Action> {
        check_path("SET_DROPDOWN_SEARCH", &path)?;
        Ok(Action::SetDropdownSearch {
            path,
            value: value.into(),
        })
    }

    /// Create a free-standing dropdown open/close.
    ///
    pub fn set_dropdown_status(path: FieldPath, open: bool) -> FormResult<Action> {
        check_path("SET_DROPDOWN_STATUS", &path)?;
        Ok(Action::SetDropdownStatus { path, open })
    }

    /// Create a dropdown selection.
    ///
    pub fn set_dropdown_value(
        path: FieldPath,
        value: impl Into<String>,
        label: impl Into<String>,
    ) -> FormResult<Action> {
        check_path("SET_DROPDOWN_VALUE", &path)?;
        Ok(Action::SetDropdownValue {
            path,
            value: value.into(),
            label: label.into(),
        })
    }

    /// Create a blur event.
    ///
    pub fn blur(path: FieldPath) -> FormResult<Action> {
        check_path("ON_BLUR", &path)?;
        Ok(Action::Blur { path })
    }

    /// Create a focus event.
    ///
    pub fn focus(path: FieldPath) -> FormResult<Action> {
        check_path("ON_FOCUS", &path)?;
        Ok(Action::Focus { path })
    }

    /// Create an arrow toggle with the focus/open state to adopt.
    ///
    pub fn arrow_click(path: FieldPath, focused: bool) -> FormResult<Action> {
        check_path("ON_ARROW_CLICK", &path)?;
        Ok(Action::ArrowClick { path, focused })
    }

    /// Create a clear-button event.
    ///
    pub fn cross_click(path: FieldPath) -> FormResult<Action> {
        check_path("ON_CROSS_CLICK", &path)?;
        Ok(Action::CrossClick { path })
    }
}

fn check_path(action: &'static str, path: &FieldPath) -> FormResult<()> {
    if path.is_empty() {
        return Err(FormError::InvalidPayload {
            action,
            reason: "empty field path".to_string(),
        });
    }
    Ok(())
}
