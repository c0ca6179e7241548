//! Per-attribute transform constructors.
//!
//! One constructor per tree mutation plus the two predicates the reducer
//! branches on. Each step captures its target path up front and is total
//! over unvisited paths (default-on-read applies).

use crate::path::{self, FieldPath};
use crate::reducer::pipeline::{Predicate, Transform};
use crate::state::FormState;
use crate::validate::Validation;

/// Set the field's value.
///
pub fn put_value(base: &FieldPath, value: &str) -> Transform {
    let at = path::value_path(base);
    let value = value.to_string();
    Box::new(move |state: FormState| state.write(&at, value.as_str().into()))
}

/// Set the field's error text.
///
pub fn put_error_text(base: &FieldPath, message: &str) -> Transform {
    let at = path::error_text_path(base);
    let message = message.to_string();
    Box::new(move |state: FormState| state.write(&at, message.as_str().into()))
}

/// Clear the field's error text.
///
pub fn clear_error_text(base: &FieldPath) -> Transform {
    put_error_text(base, "")
}

/// Set the field's error-visibility flag.
///
pub fn put_error_shown(base: &FieldPath, shown: bool) -> Transform {
    let at = path::error_shown_path(base);
    Box::new(move |state: FormState| state.write(&at, shown.into()))
}

/// Set the field's focus flag.
///
pub fn put_focused(base: &FieldPath, focused: bool) -> Transform {
    let at = path::focus_path(base);
    Box::new(move |state: FormState| state.write(&at, focused.into()))
}

/// Set the field's touched flag.
///
pub fn put_touched(base: &FieldPath, touched: bool) -> Transform {
    let at = path::touched_path(base);
    Box::new(move |state: FormState| state.write(&at, touched.into()))
}

/// Set the dropdown's open flag.
///
pub fn put_open(base: &FieldPath, open: bool) -> Transform {
    let at = path::dropdown_open_path(base);
    Box::new(move |state: FormState| state.write(&at, open.into()))
}

/// Set the dropdown's search text.
///
pub fn put_search(base: &FieldPath, text: &str) -> Transform {
    let at = path::dropdown_search_path(base);
    let text = text.to_string();
    Box::new(move |state: FormState| state.write(&at, text.as_str().into()))
}

/// Holds when the payload's validator run produced at least one failure.
/// Decided by the payload alone, not the tree.
///
pub fn has_failures(errors: &[Validation]) -> Predicate {
    let failing = !errors.is_empty();
    Box::new(move |_state| failing)
}

/// Holds when the field at `base` has been touched.
///
pub fn field_touched(base: &FieldPath) -> Predicate {
    let at = path::touched_path(base);
    Box::new(move |state| state.read(&at) == crate::state::AttrValue::Flag(true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AttrValue;

    fn name_path() -> FieldPath {
        FieldPath::new(["profile", "name"])
    }

    #[test]
    fn test_put_value() {
        let state = put_value(&name_path(), "Ada")(FormState::new());
        assert_eq!(state.field(&name_path()).value.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_error_text_round() {
        let state = put_error_text(&name_path(), "Required")(FormState::new());
        assert_eq!(state.field(&name_path()).error_text, "Required");
        let cleared = clear_error_text(&name_path())(state);
        assert!(cleared.field(&name_path()).error_text.is_empty());
    }

    #[test]
    fn test_flag_steps() {
        let state = put_focused(&name_path(), true)(FormState::new());
        let state = put_touched(&name_path(), true)(state);
        let state = put_open(&name_path(), true)(state);
        let state = put_error_shown(&name_path(), true)(state);
        let field = state.field(&name_path());
        assert!(field.focused && field.touched && field.open && field.error_shown);
    }

    #[test]
    fn test_put_search() {
        let state = put_search(&name_path(), "uni")(FormState::new());
        assert_eq!(state.field(&name_path()).search_text, "uni");
    }

    #[test]
    fn test_has_failures_ignores_state() {
        let failing = vec![Validation::fail("Required")];
        assert!(has_failures(&failing)(&FormState::new()));
        assert!(!has_failures(&[])(&FormState::new()));
    }

    #[test]
    fn test_field_touched_reads_tree() {
        let state = FormState::new();
        assert!(!field_touched(&name_path())(&state));
        let touched = put_touched(&name_path(), true)(state);
        assert!(field_touched(&name_path())(&touched));
        assert_eq!(
            touched.read(&path::touched_path(&name_path())),
            AttrValue::Flag(true)
        );
    }
}
