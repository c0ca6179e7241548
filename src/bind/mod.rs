//! Field-type dispatch.
//!
//! This module is the seam between the tree and the binding layer:
//! - Variant flags select which state subset a field projects to a view
//! - Handler projections turn widget events into dispatched actions
//!
//! The binding layer owns the tree and the dispatch machinery; it passes a
//! snapshot of one field's state plus that field's base path, validators
//! and optional supplemental handlers, and receives the view shape and the
//! handler set for the field's variant.

mod handlers;
mod view;

pub use handlers::{Dispatch, FieldHandlers, SupplementalHandlers};
pub use view::{mark_required, DropdownView, FieldView, RadioView, TextView};

use crate::error::{FormError, FormResult};
use crate::path::FieldPath;
use crate::state::FieldState;
use crate::validate::Validator;

/// One of the three field variants.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldVariant {
    Text,
    Dropdown,
    Radio,
}

/// Variant selection flags. Dropdown and radio are mutually exclusive by
/// convention; dropdown wins when both are set, neither means plain.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VariantFlags {
    pub dropdown: bool,
    pub radio: bool,
}

impl VariantFlags {
    /// Resolve the flags to a variant.
    ///
    pub fn variant(&self) -> FieldVariant {
        if self.dropdown {
            FieldVariant::Dropdown
        } else if self.radio {
            FieldVariant::Radio
        } else {
            FieldVariant::Text
        }
    }
}

/// A projected field: its view state and bound event handlers.
///
pub struct FieldBinding<D: Dispatch> {
    pub view: FieldView,
    pub handlers: FieldHandlers<D>,
}

/// Project one field's state and event handlers for its variant.
///
/// Pure with respect to the tree: the caller passes a snapshot of the
/// field's state and receives the projection; nothing is retained across
/// calls. Fails fast when `path` addresses the tree root.
pub fn project_field<D: Dispatch>(
    field: &FieldState,
    dispatch: D,
    path: FieldPath,
    validators: Vec<Validator>,
    supplemental: SupplementalHandlers,
    flags: VariantFlags,
) -> FormResult<FieldBinding<D>> {
    if path.is_empty() {
        return Err(FormError::EmptyPath);
    }
    let variant = flags.variant();
    let view = match variant {
        FieldVariant::Text => FieldView::Text(view::text_view(field)),
        FieldVariant::Dropdown => FieldView::Dropdown(view::dropdown_view(field)),
        FieldVariant::Radio => FieldView::Radio(view::radio_view(field)),
    };
    Ok(FieldBinding {
        view,
        handlers: FieldHandlers::new(variant, path, validators, dispatch, supplemental),
    })
}
