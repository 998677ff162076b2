//! Leaf types shared across the chartview crates.

use serde::{Deserialize, Serialize};

/// A single parsed quick-notes value.
///
/// Questionnaire exports carry three value shapes: an explicit textual
/// absence (the literal `None`, stored as [`NoteValue::Null`]), a scalar
/// answer, or a bracket-delimited multi-value answer. The serde
/// representation is untagged so the wire shape matches what downstream
/// viewers already consume: JSON `null`, a string, or an array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoteValue {
    /// Explicit absence (the source answered `None`).
    Null,
    /// A scalar answer, stored verbatim after trimming.
    Text(String),
    /// A multi-value answer from a bracket-delimited source value.
    List(Vec<String>),
}

impl NoteValue {
    /// Returns `true` for an explicit-absence value.
    pub fn is_null(&self) -> bool {
        matches!(self, NoteValue::Null)
    }

    /// Returns the scalar text, if this value is a scalar.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            NoteValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the list items, if this value is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            NoteValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<String> for NoteValue {
    fn from(value: String) -> Self {
        NoteValue::Text(value)
    }
}

impl From<&str> for NoteValue {
    fn from(value: &str) -> Self {
        NoteValue::Text(value.to_owned())
    }
}

impl From<Vec<String>> for NoteValue {
    fn from(items: Vec<String>) -> Self {
        NoteValue::List(items)
    }
}
