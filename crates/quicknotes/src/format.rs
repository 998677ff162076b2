//! Label substitution for parsed quick-notes values.
//!
//! The export encodes answers as coded tokens (`morning_7_10_am`,
//! `breakfast_other`). A curated [`LabelTable`] maps those tokens to
//! human-readable labels. The table is explicit configuration injected into
//! the formatter, so tests and deployments can substitute their own
//! entries; it is not derived from the data.

use crate::{FormattedNotes, ParsedNotes};
use chartview_types::NoteValue;
use std::collections::HashMap;

/// Curated token → label entries for the questionnaire export.
///
/// Keyed by the raw *value* token, never by the field name. Tokens absent
/// from the table are left for the display layer's generic fallback.
const BUILTIN_LABELS: [(&str, &str); 10] = [
    // Meal-time slots
    ("morning_7_10_am", "Morning (7-10am)"),
    ("midday_11_am_2_pm", "Midday (11am-2pm)"),
    ("evening_5_8_pm", "Evening (5-8pm)"),
    ("morning_6_10_am", "Morning (6-10am)"),
    ("late_night_9pm_later", "Late Night (9pm+)"),
    ("late_night_after_8_pm", "Late Night (After 8pm)"),
    // Typical-food answers
    ("breakfast_other", "Other Breakfast Foods"),
    ("lunch_other", "Other Lunch Foods"),
    ("drinks_other", "Other Drinks"),
    ("rice_dishes", "Rice Dishes"),
];

/// Immutable association from raw coded token to human-readable label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTable {
    labels: HashMap<String, String>,
}

impl LabelTable {
    /// The curated built-in table.
    pub fn builtin() -> Self {
        Self::from_pairs(
            BUILTIN_LABELS
                .iter()
                .map(|(token, label)| ((*token).to_owned(), (*label).to_owned())),
        )
    }

    /// An empty table; useful as a fixture when substitution should be a
    /// no-op.
    pub fn empty() -> Self {
        Self {
            labels: HashMap::new(),
        }
    }

    /// Builds a table from arbitrary token/label pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            labels: pairs.into_iter().collect(),
        }
    }

    /// Merges override entries over this table. An override with an existing
    /// token replaces the built-in label.
    pub fn with_overrides(mut self, overrides: impl IntoIterator<Item = (String, String)>) -> Self {
        self.labels.extend(overrides);
        self
    }

    /// Looks up the label for a raw token.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.labels.get(token).map(String::as_str)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for LabelTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Applies a [`LabelTable`] to parsed quick-notes mappings.
#[derive(Debug, Clone, Default)]
pub struct NoteFormatter {
    labels: LabelTable,
}

impl NoteFormatter {
    /// Creates a formatter over the given table.
    pub fn new(labels: LabelTable) -> Self {
        Self { labels }
    }

    /// The table this formatter substitutes from.
    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Substitutes labels over every entry of a parsed mapping.
    ///
    /// Each key is handled independently: list values get per-element
    /// substitution, scalars get whole-value substitution, and null values
    /// pass through. Unmapped tokens are left unchanged; the generic
    /// underscore-to-space fallback is deliberately *not* applied here (see
    /// [`crate::display`]), because curated labels must take precedence over
    /// it and some tokens only ever get the fallback.
    ///
    /// Formatting is not idempotent for table-mapped values: the output
    /// holds display labels, not round-trippable raw tokens.
    pub fn format(&self, parsed: &ParsedNotes) -> FormattedNotes {
        parsed
            .iter()
            .map(|(field, value)| (field.clone(), self.format_value(value)))
            .collect()
    }

    fn format_value(&self, value: &NoteValue) -> NoteValue {
        match value {
            NoteValue::List(items) => {
                NoteValue::List(items.iter().map(|item| self.substitute(item)).collect())
            }
            NoteValue::Text(text) => NoteValue::Text(self.substitute(text)),
            NoteValue::Null => NoteValue::Null,
        }
    }

    fn substitute(&self, token: &str) -> String {
        match self.labels.get(token) {
            Some(label) => label.to_owned(),
            None => token.to_owned(),
        }
    }
}
