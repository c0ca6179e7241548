//! Action reduction.
//!
//! `reduce` maps every action kind to its ordered transform sequence and
//! runs it through the pipeline. The match is exhaustive over the closed
//! action enum, so dispatch is total by construction, and each invocation
//! applies its full sequence before the resulting tree is observable.

pub mod pipeline;
pub mod steps;

pub use pipeline::{branch_if, pipe, Predicate, Transform};

use crate::actions::Action;
use crate::state::FormState;
use log::*;

/// Apply one action to the tree, returning the new tree.
///
pub fn reduce(state: &FormState, action: &Action) -> FormState {
    debug!("Reducing {} at '{}'", action.kind(), action.path());
    match action {
        Action::SetValue {
            path,
            value,
            errors,
        } => {
            let first_failure = errors
                .first()
                .map(|failure| failure.message.clone())
                .unwrap_or_default();
            pipe(
                vec![
                    steps::put_value(path, value),
                    steps::put_touched(path, true),
                    branch_if(
                        steps::has_failures(errors),
                        steps::put_error_text(path, &first_failure),
                        Some(steps::clear_error_text(path)),
                    ),
                ],
                state.clone(),
            )
        }
        Action::SetDropdownSearch { path, value } => {
            pipe(vec![steps::put_search(path, value)], state.clone())
        }
        Action::SetDropdownStatus { path, open } => {
            pipe(vec![steps::put_open(path, *open)], state.clone())
        }
        Action::SetDropdownValue { path, value, label } => pipe(
            vec![
                steps::put_value(path, value),
                steps::put_touched(path, true),
                steps::put_search(path, label),
                steps::put_open(path, false),
            ],
            state.clone(),
        ),
        Action::Blur { path } => pipe(
            vec![
                steps::put_focused(path, false),
                steps::put_open(path, false),
                branch_if(
                    steps::field_touched(path),
                    steps::put_error_shown(path, true),
                    None,
                ),
            ],
            state.clone(),
        ),
        Action::Focus { path } => pipe(
            vec![
                steps::put_focused(path, true),
                steps::put_open(path, true),
            ],
            state.clone(),
        ),
        Action::ArrowClick { path, focused } => pipe(
            vec![
                steps::put_focused(path, *focused),
                steps::put_open(path, *focused),
            ],
            state.clone(),
        ),
        // Unlike Blur, the clear button re-focuses and re-opens the box
        // while clearing the search text. Kept as the original behaves.
        Action::CrossClick { path } => pipe(
            vec![
                steps::put_focused(path, true),
                steps::put_open(path, true),
                steps::put_search(path, ""),
            ],
            state.clone(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::FieldPath;
    use crate::validate::Validation;

    fn email_path() -> FieldPath {
        FieldPath::new(["login", "email"])
    }

    fn country_path() -> FieldPath {
        FieldPath::new(["country"])
    }

    #[test]
    fn test_set_value_without_failures() {
        let action = Action::set_value(email_path(), "a@b.c", vec![]).unwrap();
        let state = reduce(&FormState::new(), &action);
        let field = state.field(&email_path());
        assert_eq!(field.value.as_deref(), Some("a@b.c"));
        assert!(field.touched);
        assert!(field.error_text.is_empty());
    }

    #[test]
    fn test_set_value_with_failures_takes_first_message() {
        let errors = vec![Validation::fail("Required"), Validation::fail("Too short")];
        let action = Action::set_value(email_path(), "", errors).unwrap();
        let state = reduce(&FormState::new(), &action);
        assert_eq!(state.field(&email_path()).error_text, "Required");
    }

    #[test]
    fn test_set_value_clears_stale_error() {
        let failing =
            Action::set_value(email_path(), "", vec![Validation::fail("Required")]).unwrap();
        let passing = Action::set_value(email_path(), "a@b.c", vec![]).unwrap();
        let state = reduce(&reduce(&FormState::new(), &failing), &passing);
        assert!(state.field(&email_path()).error_text.is_empty());
    }

    #[test]
    fn test_set_value_is_idempotent() {
        let action =
            Action::set_value(email_path(), "", vec![Validation::fail("Required")]).unwrap();
        let once = reduce(&FormState::new(), &action);
        let twice = reduce(&once, &action);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_blur_without_touch_hides_error() {
        let focus = Action::focus(email_path()).unwrap();
        let blur = Action::blur(email_path()).unwrap();
        let state = reduce(&reduce(&FormState::new(), &focus), &blur);
        let field = state.field(&email_path());
        assert!(!field.error_shown);
        assert!(!field.focused);
        assert!(!field.open);
    }

    #[test]
    fn test_blur_after_touch_shows_error() {
        let set = Action::set_value(email_path(), "", vec![Validation::fail("Required")]).unwrap();
        let blur = Action::blur(email_path()).unwrap();
        let state = reduce(&reduce(&FormState::new(), &set), &blur);
        let field = state.field(&email_path());
        assert!(field.error_shown);
        assert!(!field.focused);
    }

    #[test]
    fn test_touched_never_reverts() {
        let set = Action::set_value(email_path(), "x", vec![]).unwrap();
        let blur = Action::blur(email_path()).unwrap();
        let focus = Action::focus(email_path()).unwrap();
        let mut state = reduce(&FormState::new(), &set);
        for action in [&blur, &focus, &blur] {
            state = reduce(&state, action);
            assert!(state.field(&email_path()).touched);
        }
    }

    #[test]
    fn test_focus_blur_restores_flags_despite_dropdown_actions() {
        let focus = Action::focus(country_path()).unwrap();
        let open = Action::set_dropdown_status(country_path(), true).unwrap();
        let search = Action::set_dropdown_search(country_path(), "uni").unwrap();
        let blur = Action::blur(country_path()).unwrap();
        let mut state = reduce(&FormState::new(), &focus);
        state = reduce(&state, &open);
        state = reduce(&state, &search);
        state = reduce(&state, &blur);
        let field = state.field(&country_path());
        assert!(!field.focused);
        assert!(!field.open);
        assert_eq!(field.search_text, "uni");
    }

    #[test]
    fn test_dropdown_status_diverges_from_focus() {
        let focus = Action::focus(country_path()).unwrap();
        let close = Action::set_dropdown_status(country_path(), false).unwrap();
        let state = reduce(&reduce(&FormState::new(), &focus), &close);
        let field = state.field(&country_path());
        assert!(field.focused);
        assert!(!field.open);
    }

    #[test]
    fn test_dropdown_value_selection() {
        let select =
            Action::set_dropdown_value(country_path(), "US", "United States").unwrap();
        let state = reduce(&FormState::new(), &select);
        let field = state.field(&country_path());
        assert_eq!(field.value.as_deref(), Some("US"));
        assert_eq!(field.search_text, "United States");
        assert!(!field.open);
        assert!(field.touched);
    }

    #[test]
    fn test_arrow_click_drives_both_flags() {
        let on = Action::arrow_click(country_path(), true).unwrap();
        let off = Action::arrow_click(country_path(), false).unwrap();
        let opened = reduce(&FormState::new(), &on);
        let field = opened.field(&country_path());
        assert!(field.focused && field.open);
        let closed = reduce(&opened, &off);
        let field = closed.field(&country_path());
        assert!(!field.focused && !field.open);
    }

    #[test]
    fn test_cross_click_reopens_and_clears_search() {
        let search = Action::set_dropdown_search(country_path(), "uni").unwrap();
        let blur = Action::blur(country_path()).unwrap();
        let cross = Action::cross_click(country_path()).unwrap();
        let mut state = reduce(&FormState::new(), &search);
        state = reduce(&state, &blur);
        state = reduce(&state, &cross);
        let field = state.field(&country_path());
        assert!(field.focused);
        assert!(field.open);
        assert!(field.search_text.is_empty());
    }

    #[test]
    fn test_login_email_scenario() {
        let set = Action::set_value(email_path(), "", vec![Validation::fail("Required")]).unwrap();
        let state = reduce(&FormState::new(), &set);
        let field = state.field(&email_path());
        assert_eq!(field.value.as_deref(), Some(""));
        assert_eq!(field.error_text, "Required");
        assert!(field.touched);

        let blur = Action::blur(email_path()).unwrap();
        let state = reduce(&state, &blur);
        let field = state.field(&email_path());
        assert!(field.error_shown);
        assert!(!field.focused);
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let before = FormState::new();
        let action = Action::focus(email_path()).unwrap();
        let _after = reduce(&before, &action);
        assert!(before.subtree(&email_path()).is_none());
    }
}
