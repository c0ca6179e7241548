//! The path-addressed form state tree.
//!
//! `FormState` is an ordered tree of nodes behind `Arc`s. Writes copy the
//! nodes along the written path and share everything else, so a subtree's
//! `Arc` identity changes exactly when something under it changed. That
//! identity is what the selectors memoize on. The tree is owned by the binding
//! layer; every operation here is a pure function from old tree to new
//! tree, and this crate never retains a tree across calls.

use crate::path::{AttrPath, FieldAttr, FieldPath};
use crate::state::field::FieldState;
use indexmap::IndexMap;
use log::*;
use std::sync::Arc;

/// One tree node: field data, if any action or seed has addressed this
/// path as a field, plus ordered children.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Node {
    field: Option<FieldState>,
    children: IndexMap<String, Arc<Node>>,
}

impl Node {
    /// Field data at this node, if present.
    ///
    pub fn field(&self) -> Option<&FieldState> {
        self.field.as_ref()
    }

    /// Child node for `key`, if present.
    ///
    pub fn child(&self, key: &str) -> Option<&Arc<Node>> {
        self.children.get(key)
    }

    /// Whether `accept` holds for every field record in this subtree,
    /// visited in insertion order. Vacuously true with no fields.
    ///
    pub fn all_fields(&self, accept: fn(&FieldState) -> bool) -> bool {
        if let Some(field) = &self.field {
            if !accept(field) {
                return false;
            }
        }
        self.children.values().all(|child| child.all_fields(accept))
    }
}

/// Attribute value carried by tree reads and writes.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrValue {
    Text(String),
    Flag(bool),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> AttrValue {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> AttrValue {
        AttrValue::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> AttrValue {
        AttrValue::Flag(value)
    }
}

/// The whole form tree. Cloning shares the root and is cheap.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    root: Arc<Node>,
}

impl FormState {
    /// An empty tree.
    ///
    pub fn new() -> FormState {
        FormState::default()
    }

    /// Resolve the node at `path`, if any write has created it. The empty
    /// path resolves to the root.
    ///
    pub fn subtree(&self, path: &FieldPath) -> Option<Arc<Node>> {
        let mut node = &self.root;
        for key in path.segments() {
            node = node.child(key)?;
        }
        Some(node.clone())
    }

    /// Field state at `path`. Unvisited paths read as the default record.
    ///
    pub fn field(&self, path: &FieldPath) -> FieldState {
        self.subtree(path)
            .and_then(|node| node.field().cloned())
            .unwrap_or_default()
    }

    /// Read one attribute. Unvisited paths read as the default record.
    ///
    pub fn read(&self, path: &AttrPath) -> AttrValue {
        let field = self.field(&path.base);
        match path.attr {
            FieldAttr::Value => AttrValue::Text(field.value.unwrap_or_default()),
            FieldAttr::ErrorText => AttrValue::Text(field.error_text),
            FieldAttr::SearchText => AttrValue::Text(field.search_text),
            FieldAttr::Focused => AttrValue::Flag(field.focused),
            FieldAttr::Touched => AttrValue::Flag(field.touched),
            FieldAttr::ErrorShown => AttrValue::Flag(field.error_shown),
            FieldAttr::Open => AttrValue::Flag(field.open),
        }
    }

    /// Write one attribute, creating the field record on first touch.
    ///
    /// A value of the wrong shape for the attribute is a caller error; it
    /// is logged and leaves the tree unchanged.
    pub fn write(&self, path: &AttrPath, value: AttrValue) -> FormState {
        let base = &path.base;
        match (path.attr, value) {
            (FieldAttr::Value, AttrValue::Text(text)) => {
                self.update_field(base, move |field| field.value = Some(text))
            }
            (FieldAttr::ErrorText, AttrValue::Text(text)) => {
                self.update_field(base, move |field| field.error_text = text)
            }
            (FieldAttr::SearchText, AttrValue::Text(text)) => {
                self.update_field(base, move |field| field.search_text = text)
            }
            (FieldAttr::Focused, AttrValue::Flag(flag)) => {
                self.update_field(base, move |field| field.focused = flag)
            }
            (FieldAttr::Touched, AttrValue::Flag(flag)) => {
                self.update_field(base, move |field| field.touched = flag)
            }
            (FieldAttr::ErrorShown, AttrValue::Flag(flag)) => {
                self.update_field(base, move |field| field.error_shown = flag)
            }
            (FieldAttr::Open, AttrValue::Flag(flag)) => {
                self.update_field(base, move |field| field.open = flag)
            }
            (attr, value) => {
                warn!(
                    "Ignoring write of {:?} to attribute '{}' at '{}'",
                    value,
                    attr.key(),
                    base
                );
                self.clone()
            }
        }
    }

    /// Apply `mutate` to the field record at `path`, creating a default
    /// record on first touch. Rebuilds the written path, shares the rest.
    ///
    /// This is also the binding layer's seeding entry point for the
    /// attributes no action writes (`hint`, `options`, `enabled`).
    pub fn update_field(
        &self,
        path: &FieldPath,
        mutate: impl FnOnce(&mut FieldState),
    ) -> FormState {
        FormState {
            root: Arc::new(set_node(&self.root, path.segments(), mutate)),
        }
    }
}

fn set_node(node: &Node, keys: &[String], mutate: impl FnOnce(&mut FieldState)) -> Node {
    let mut next = node.clone();
    match keys.split_first() {
        None => {
            let mut field = next.field.take().unwrap_or_default();
            mutate(&mut field);
            next.field = Some(field);
        }
        Some((key, rest)) => {
            let updated = match next.children.get(key) {
                Some(child) => set_node(child, rest, mutate),
                None => set_node(&Node::default(), rest, mutate),
            };
            next.children.insert(key.clone(), Arc::new(updated));
        }
    }
    next
}
