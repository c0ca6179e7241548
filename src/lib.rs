//! Path-addressed, immutable form state management.
//!
//! This crate is the state-transition core for multi-field forms. It
//! tracks, per field, value, focus, touch, validation and dropdown/radio
//! selection state inside one path-addressed tree, and derives aggregate
//! validity/completeness booleans for whole forms:
//! - `actions` / `reducer`: the action vocabulary and the pure reducer
//! - `state`: the `FormState` tree and per-field records
//! - `path`: field addressing and the per-attribute sub-path helpers
//! - `validate`: the synchronous validation runner and stock validators
//! - `bind`: per-variant projection of state and event handlers
//! - `select`: memoized aggregate selectors
//!
//! The tree is owned by the binding layer: every operation is a pure
//! function from old tree to new tree, applied to completion before the
//! result is observable. The core holds no state of its own, performs no
//! I/O, and never retains a tree across calls, so a synchronous dispatch
//! queue serializes all updates.

pub mod actions;
pub mod bind;
pub mod error;
pub mod path;
pub mod reducer;
pub mod select;
pub mod state;
pub mod validate;

pub use actions::Action;
pub use bind::{
    mark_required, project_field, Dispatch, DropdownView, FieldBinding, FieldHandlers,
    FieldVariant, FieldView, RadioView, SupplementalHandlers, TextView, VariantFlags,
};
pub use error::{FormError, FormResult};
pub use path::{AttrPath, FieldAttr, FieldPath};
pub use reducer::reduce;
pub use select::{form_filled, form_valid, FormSelector};
pub use state::{AttrValue, FieldState, FormState, OptionRecord};
pub use validate::{run_validators, Validation, Validator};
