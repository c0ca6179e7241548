//! Per-field state records.
//!
//! A `FieldState` is the full record for one form field. It is a superset
//! over the three field variants (plain input, dropdown, radio); the
//! variant decides which attributes the view projection reads.

use fake::Dummy;
use serde::{Deserialize, Serialize};

/// Defines one selectable option of a dropdown field.
///
#[derive(Clone, Debug, Default, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRecord {
    pub value: Option<String>,
    pub code: Option<String>,
    pub label: String,
}

impl OptionRecord {
    /// The value a selection submits: `value`, falling back to `code`.
    ///
    pub fn submit_value(&self) -> &str {
        self.value
            .as_deref()
            .or(self.code.as_deref())
            .unwrap_or_default()
    }
}

/// Full state record for one form field.
///
/// `value` doubles as the radio selection slot: `None` means the field was
/// never set, which radio groups treat as "unselected" and text fields
/// project as an empty string.
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    pub value: Option<String>,
    pub hint: Option<String>,
    /// First failing validator message from the most recent run, or empty.
    pub error_text: String,
    pub error_shown: bool,
    pub focused: bool,
    pub touched: bool,
    pub enabled: bool,
    pub open: bool,
    pub search_text: String,
    pub options: Vec<OptionRecord>,
}

/// Defines default field state: enabled, untouched, no value.
///
impl Default for FieldState {
    fn default() -> FieldState {
        FieldState {
            value: None,
            hint: None,
            error_text: String::new(),
            error_shown: false,
            focused: false,
            touched: false,
            enabled: true,
            open: false,
            search_text: String::new(),
            options: vec![],
        }
    }
}
