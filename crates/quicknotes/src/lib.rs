//! # Quick notes
//!
//! Parser and formatter for practice-management "quick notes": the HTML-ish
//! blob a questionnaire export attaches to a patient record. The pipeline is
//! one-way:
//!
//! ```text
//! raw blob -> normalize -> extract -> ParsedNotes -> format -> FormattedNotes
//! ```
//!
//! Everything here is pure, synchronous and infallible: malformed input
//! degrades to a smaller or less structured result instead of an error,
//! because the upstream data is loosely structured prose. Best-effort
//! heuristics, not a schema parser — lossless recovery of the original
//! questionnaire semantics is explicitly not guaranteed.
//!
//! **No transport concerns**: fetching records and rendering tabs belong to
//! the `healthie` crate and the viewer respectively.

pub mod display;
pub mod extract;
pub mod format;
pub mod normalize;

pub use chartview_types::NoteValue;
pub use display::{display_item, display_value, format_snake_case};
pub use extract::extract;
pub use format::{LabelTable, NoteFormatter};
pub use normalize::normalize;

use std::collections::BTreeMap;

/// Parsed quick notes: field name to typed value, last occurrence winning
/// for repeated fields.
pub type ParsedNotes = BTreeMap<String, NoteValue>;

/// Quick notes after label substitution. Same key set as the parsed mapping.
pub type FormattedNotes = BTreeMap<String, NoteValue>;

/// Runs the full normalise-then-extract pipeline over a raw blob.
pub fn parse_notes(raw: &str) -> ParsedNotes {
    extract::extract(normalize::normalize(raw))
}
