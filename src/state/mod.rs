//! Form state data model.
//!
//! This module contains the data half of the crate:
//! - Per-field records (`FieldState`, `OptionRecord`)
//! - The path-addressed, structurally shared tree (`FormState`)

mod field;
mod tree;

pub use field::{FieldState, OptionRecord};
pub use tree::{AttrValue, FormState, Node};
