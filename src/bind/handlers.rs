//! Event handler projections.
//!
//! Handlers first dispatch the corresponding core action, then invoke the
//! caller's optional supplemental callback, so a consumer can observe
//! every event without re-implementing state logic. Which events a field
//! responds to is decided by its variant; events a variant does not
//! expose are ignored.

use crate::actions::Action;
use crate::bind::FieldVariant;
use crate::path::FieldPath;
use crate::state::OptionRecord;
use crate::validate::{run_validators, Validator};
use log::*;

/// Applies an action to the binding layer's owned tree.
///
pub trait Dispatch {
    fn dispatch(&mut self, action: Action);
}

impl<F: FnMut(Action)> Dispatch for F {
    fn dispatch(&mut self, action: Action) {
        self(action)
    }
}

/// Optional caller-supplied observers, invoked after the core dispatch.
/// Absent handlers default to no-ops.
///
#[derive(Default)]
pub struct SupplementalHandlers {
    pub on_change: Option<Box<dyn FnMut(&str)>>,
    pub on_focus: Option<Box<dyn FnMut()>>,
    pub on_blur: Option<Box<dyn FnMut()>>,
    pub on_item_click: Option<Box<dyn FnMut(&OptionRecord)>>,
}

/// Event handlers bound to one field.
///
pub struct FieldHandlers<D: Dispatch> {
    variant: FieldVariant,
    path: FieldPath,
    validators: Vec<Validator>,
    dispatch: D,
    extra: SupplementalHandlers,
}

impl<D: Dispatch> FieldHandlers<D> {
    pub(crate) fn new(
        variant: FieldVariant,
        path: FieldPath,
        validators: Vec<Validator>,
        dispatch: D,
        extra: SupplementalHandlers,
    ) -> FieldHandlers<D> {
        FieldHandlers {
            variant,
            path,
            validators,
            dispatch,
            extra,
        }
    }

    /// Value edit. Plain fields validate and set the value, dropdowns
    /// treat edits as search input, radio groups set the selection with
    /// no validators.
    ///
    pub fn change(&mut self, value: &str) {
        match self.variant {
            FieldVariant::Text => {
                let errors = run_validators(&self.validators, value);
                self.dispatch.dispatch(Action::SetValue {
                    path: self.path.clone(),
                    value: value.to_string(),
                    errors,
                });
                if let Some(on_change) = &mut self.extra.on_change {
                    on_change(value);
                }
            }
            FieldVariant::Dropdown => {
                self.dispatch.dispatch(Action::SetDropdownSearch {
                    path: self.path.clone(),
                    value: value.to_string(),
                });
                if let Some(on_change) = &mut self.extra.on_change {
                    on_change(value);
                }
            }
            FieldVariant::Radio => {
                self.dispatch.dispatch(Action::SetValue {
                    path: self.path.clone(),
                    value: value.to_string(),
                    errors: vec![],
                });
            }
        }
    }

    /// Field gained focus.
    ///
    pub fn focus(&mut self) {
        if self.variant == FieldVariant::Radio {
            debug!("Ignoring focus on radio field '{}'", self.path);
            return;
        }
        self.dispatch.dispatch(Action::Focus {
            path: self.path.clone(),
        });
        if let Some(on_focus) = &mut self.extra.on_focus {
            on_focus();
        }
    }

    /// Field lost focus.
    ///
    pub fn blur(&mut self) {
        if self.variant == FieldVariant::Radio {
            debug!("Ignoring blur on radio field '{}'", self.path);
            return;
        }
        self.dispatch.dispatch(Action::Blur {
            path: self.path.clone(),
        });
        if let Some(on_blur) = &mut self.extra.on_blur {
            on_blur();
        }
    }

    /// Dropdown arrow toggle. `was_focused` is the focus state the widget
    /// observed at click time; the dispatched action adopts its inverse.
    ///
    pub fn arrow_click(&mut self, was_focused: bool) {
        if self.variant != FieldVariant::Dropdown {
            debug!("Ignoring arrow click on non-dropdown field '{}'", self.path);
            return;
        }
        self.dispatch.dispatch(Action::ArrowClick {
            path: self.path.clone(),
            focused: !was_focused,
        });
    }

    /// Dropdown clear button.
    ///
    pub fn cross_click(&mut self) {
        if self.variant != FieldVariant::Dropdown {
            debug!("Ignoring cross click on non-dropdown field '{}'", self.path);
            return;
        }
        self.dispatch.dispatch(Action::CrossClick {
            path: self.path.clone(),
        });
    }

    /// Dropdown option picked.
    ///
    pub fn item_click(&mut self, option: &OptionRecord) {
        if self.variant != FieldVariant::Dropdown {
            debug!("Ignoring item click on non-dropdown field '{}'", self.path);
            return;
        }
        self.dispatch.dispatch(Action::SetDropdownValue {
            path: self.path.clone(),
            value: option.submit_value().to_string(),
            label: option.label.clone(),
        });
        if let Some(on_item_click) = &mut self.extra.on_item_click {
            on_item_click(option);
        }
    }
}
