//! Value validation.
//!
//! Validators are pure, synchronous checks applied to a candidate value on
//! value changes only. Each produces a `Validation` record; the runner
//! keeps the failing subset in order. Nothing accumulates across calls and
//! failures never raise errors.

use log::*;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Outcome of one validator applied to one candidate value.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub is_error: bool,
    pub message: String,
}

impl Validation {
    /// A passing outcome.
    ///
    pub fn ok() -> Validation {
        Validation {
            is_error: false,
            message: String::new(),
        }
    }

    /// A failing outcome carrying the message shown to the user.
    ///
    pub fn fail(message: impl Into<String>) -> Validation {
        Validation {
            is_error: true,
            message: message.into(),
        }
    }
}

/// Pure check applied to a candidate field value.
///
pub type Validator = Box<dyn Fn(&str) -> Validation>;

/// Apply every validator to `value` and return only the failures,
/// preserving the original validator order.
///
pub fn run_validators(validators: &[Validator], value: &str) -> Vec<Validation> {
    validators
        .iter()
        .map(|validator| validator(value))
        .filter(|outcome| outcome.is_error)
        .collect()
}

/// Fails empty or whitespace-only values.
///
pub fn required(message: &str) -> Validator {
    let message = message.to_string();
    Box::new(move |value| {
        if value.trim().is_empty() {
            Validation::fail(message.clone())
        } else {
            Validation::ok()
        }
    })
}

/// Fails values shorter than `min` characters. Empty values pass; combine
/// with `required` when emptiness should also fail.
///
pub fn min_length(min: usize, message: &str) -> Validator {
    let message = message.to_string();
    Box::new(move |value| {
        if !value.is_empty() && value.chars().count() < min {
            Validation::fail(message.clone())
        } else {
            Validation::ok()
        }
    })
}

/// Fails non-empty values not matching `pattern`.
///
/// A pattern that fails to compile is logged and the check passes
/// everything, since it cannot run.
pub fn pattern(pattern: &str, message: &str) -> Validator {
    let compiled = match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Failed to compile validator pattern '{}': {}", pattern, e);
            None
        }
    };
    let message = message.to_string();
    Box::new(move |value| match &compiled {
        Some(re) if !value.is_empty() && !re.is_match(value) => Validation::fail(message.clone()),
        _ => Validation::ok(),
    })
}

/// Fails non-empty values that do not look like an email address.
///
pub fn email(message: &str) -> Validator {
    pattern(r"^[^@\s]+@[^@\s]+\.[^@\s]+$", message)
}
