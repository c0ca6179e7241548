//! Transform composition primitives.
//!
//! Every action reduces to an ordered list of pure state transforms run
//! through `pipe`. `branch_if` is the sole conditional primitive, keeping
//! the per-action handlers free of ad-hoc branching and every transform
//! independently testable.

use crate::state::FormState;

/// A pure transform from form state to form state.
///
pub type Transform = Box<dyn Fn(FormState) -> FormState>;

/// A predicate evaluated against the state current at its position in the
/// pipeline.
///
pub type Predicate = Box<dyn Fn(&FormState) -> bool>;

/// Apply each transform in order, threading the result of each into the
/// next, and return the final state.
///
pub fn pipe(transforms: Vec<Transform>, state: FormState) -> FormState {
    transforms
        .into_iter()
        .fold(state, |state, transform| transform(state))
}

/// Build a transform that applies `then` when `predicate` holds, otherwise
/// `otherwise` when supplied, otherwise the identity.
///
pub fn branch_if(predicate: Predicate, then: Transform, otherwise: Option<Transform>) -> Transform {
    Box::new(move |state| {
        if predicate(&state) {
            then(state)
        } else if let Some(otherwise) = &otherwise {
            otherwise(state)
        } else {
            state
        }
    })
}
