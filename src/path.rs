//! Field path addressing.
//!
//! A form is one ordered, path-addressed tree. A `FieldPath` names a
//! field's position in that tree; an `AttrPath` narrows the address to one
//! fixed attribute of the field's state record. The helpers here are the
//! only way reducer steps address attributes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered key sequence uniquely addressing a field within the form tree.
///
/// Two fields never share a path. Paths are cheap to copy and never
/// mutated in place by this crate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// Build a path from key segments.
    ///
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldPath(segments.into_iter().map(Into::into).collect())
    }

    /// Whether the path addresses the tree root.
    ///
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The key segments, outermost first.
    ///
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Return a copy of this path with one key appended.
    ///
    pub fn child(&self, key: impl Into<String>) -> FieldPath {
        let mut segments = self.0.clone();
        segments.push(key.into());
        FieldPath(segments)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl<S: Into<String>> FromIterator<S> for FieldPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        FieldPath::new(iter)
    }
}

/// Fixed attribute keys of a field's state record.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldAttr {
    Value,
    Focused,
    Touched,
    ErrorShown,
    ErrorText,
    Open,
    SearchText,
}

impl FieldAttr {
    /// The attribute's key as it appears in serialized paths and logs.
    ///
    pub fn key(&self) -> &'static str {
        match self {
            FieldAttr::Value => "value",
            FieldAttr::Focused => "focused",
            FieldAttr::Touched => "touched",
            FieldAttr::ErrorShown => "error_shown",
            FieldAttr::ErrorText => "error_text",
            FieldAttr::Open => "open",
            FieldAttr::SearchText => "search_text",
        }
    }
}

/// A field path narrowed to one attribute of the field's state record.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttrPath {
    pub base: FieldPath,
    pub attr: FieldAttr,
}

/// Address a field's value.
///
pub fn value_path(base: &FieldPath) -> AttrPath {
    attr_path(base, FieldAttr::Value)
}

/// Address a field's focus flag.
///
pub fn focus_path(base: &FieldPath) -> AttrPath {
    attr_path(base, FieldAttr::Focused)
}

/// Address a field's touched flag.
///
pub fn touched_path(base: &FieldPath) -> AttrPath {
    attr_path(base, FieldAttr::Touched)
}

/// Address a field's error-visibility flag.
///
pub fn error_shown_path(base: &FieldPath) -> AttrPath {
    attr_path(base, FieldAttr::ErrorShown)
}

/// Address a field's error text.
///
pub fn error_text_path(base: &FieldPath) -> AttrPath {
    attr_path(base, FieldAttr::ErrorText)
}

/// Address a dropdown field's open flag.
///
pub fn dropdown_open_path(base: &FieldPath) -> AttrPath {
    attr_path(base, FieldAttr::Open)
}

/// Address a dropdown field's search text.
///
pub fn dropdown_search_path(base: &FieldPath) -> AttrPath {
    attr_path(base, FieldAttr::SearchText)
}

fn attr_path(base: &FieldPath, attr: FieldAttr) -> AttrPath {
    AttrPath {
        base: base.clone(),
        attr,
    }
}
