//! Derived form selectors.
//!
//! Boolean aggregates over a form subtree, recomputed only when the
//! subtree's structural identity changes. Each selector retains the last
//! seen subtree handle and its result, so re-selecting against an
//! unchanged subtree never re-scans field records; updates elsewhere in
//! the tree leave the subtree's `Arc` untouched.

use crate::path::FieldPath;
use crate::state::{FieldState, FormState, Node};
use std::cell::RefCell;
use std::sync::Arc;

/// A memoized boolean aggregate over one form subtree.
///
/// Single-threaded by design, matching the synchronous dispatch queue the
/// binding layer serializes all updates through.
pub struct FormSelector {
    path: FieldPath,
    accept: fn(&FieldState) -> bool,
    cache: RefCell<Option<(Arc<Node>, bool)>>,
}

impl FormSelector {
    fn new(path: FieldPath, accept: fn(&FieldState) -> bool) -> FormSelector {
        FormSelector {
            path,
            accept,
            cache: RefCell::new(None),
        }
    }

    /// Evaluate against the given tree. Vacuously true when nothing under
    /// the form path carries field state.
    ///
    pub fn select(&self, state: &FormState) -> bool {
        let subtree = match state.subtree(&self.path) {
            Some(subtree) => subtree,
            None => return true,
        };
        if let Some((cached, result)) = &*self.cache.borrow() {
            if Arc::ptr_eq(cached, &subtree) {
                return *result;
            }
        }
        let result = subtree.all_fields(self.accept);
        *self.cache.borrow_mut() = Some((subtree, result));
        result
    }
}

/// True iff every field under `form_path` has empty error text.
///
pub fn form_valid(form_path: FieldPath) -> FormSelector {
    FormSelector::new(form_path, |field| field.error_text.is_empty())
}

/// True iff every field under `form_path` has a non-empty value.
///
pub fn form_filled(form_path: FieldPath) -> FormSelector {
    FormSelector::new(form_path, |field| {
        field.value.as_deref().is_some_and(|value| !value.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;
    use crate::reducer::reduce;
    use crate::validate::Validation;

    fn login() -> FieldPath {
        FieldPath::new(["login"])
    }

    #[test]
    fn test_valid_vacuously_true_for_absent_subtree() {
        assert!(form_valid(login()).select(&FormState::new()));
        assert!(form_filled(login()).select(&FormState::new()));
    }

    #[test]
    fn test_valid_flips_on_error_text() {
        let selector = form_valid(login());
        let set = Action::set_value(login().child("email"), "a@b.c", vec![]).unwrap();
        let state = reduce(&FormState::new(), &set);
        assert!(selector.select(&state));

        let fail = Action::set_value(
            login().child("email"),
            "",
            vec![Validation::fail("Required")],
        )
        .unwrap();
        let state = reduce(&state, &fail);
        assert!(!selector.select(&state));
    }

    #[test]
    fn test_filled_requires_every_value() {
        let selector = form_filled(login());
        let email = Action::set_value(login().child("email"), "a@b.c", vec![]).unwrap();
        let password = Action::set_value(login().child("password"), "", vec![]).unwrap();
        let state = reduce(&FormState::new(), &email);
        assert!(selector.select(&state));
        let state = reduce(&state, &password);
        assert!(!selector.select(&state));
    }

    #[test]
    fn test_cache_keyed_on_subtree_identity() {
        let selector = form_valid(login());
        let set = Action::set_value(login().child("email"), "a@b.c", vec![]).unwrap();
        let state = reduce(&FormState::new(), &set);
        assert!(selector.select(&state));
        let cached = selector.cache.borrow().as_ref().unwrap().0.clone();

        // An update outside the subtree keeps its identity and the cache.
        let other = Action::set_value(FieldPath::new(["billing", "zip"]), "1", vec![]).unwrap();
        let state = reduce(&state, &other);
        assert!(selector.select(&state));
        let reused = selector.cache.borrow().as_ref().unwrap().0.clone();
        assert!(Arc::ptr_eq(&cached, &reused));

        // An update inside it replaces the cached handle.
        let inside = Action::focus(login().child("email")).unwrap();
        let state = reduce(&state, &inside);
        assert!(selector.select(&state));
        let replaced = selector.cache.borrow().as_ref().unwrap().0.clone();
        assert!(!Arc::ptr_eq(&cached, &replaced));
    }

    #[test]
    fn test_selector_scans_nested_fields() {
        let selector = form_valid(FieldPath::new(["checkout"]));
        let nested = Action::set_value(
            FieldPath::new(["checkout", "address", "street"]),
            "",
            vec![Validation::fail("Required")],
        )
        .unwrap();
        let state = reduce(&FormState::new(), &nested);
        assert!(!selector.select(&state));
    }
}
