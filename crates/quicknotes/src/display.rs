//! Display-value resolution for the viewer layer.
//!
//! Consumers hold both the parsed (raw) and formatted mappings for a note
//! and need one display string per field. Resolution precedence: curated
//! label, then per-element generic fallback, then scalar generic fallback.

use crate::LabelTable;
use chartview_types::NoteValue;

/// Generic fallback transform: underscores become spaces.
///
/// This is the last-resort rendering for tokens with no curated label. It is
/// kept separate from [`crate::NoteFormatter`] so curated labels always take
/// precedence over it.
pub fn format_snake_case(text: &str) -> String {
    text.replace('_', " ")
}

/// Resolves the display string for one field.
///
/// The formatted value wins when it differs from the raw value (lists are
/// joined with `", "`). Otherwise raw lists get the generic fallback
/// element-wise, joined with `", "`, and raw scalars get the generic
/// fallback directly. An explicit-absence value resolves to `None`; the
/// viewer skips those fields.
pub fn display_value(formatted: Option<&NoteValue>, raw: &NoteValue) -> Option<String> {
    if let Some(formatted) = formatted {
        if formatted != raw {
            match formatted {
                NoteValue::Text(label) => return Some(label.clone()),
                NoteValue::List(labels) => return Some(labels.join(", ")),
                // A null formatted value expresses no preference.
                NoteValue::Null => {}
            }
        }
    }

    match raw {
        NoteValue::List(items) => Some(
            items
                .iter()
                .map(|item| format_snake_case(item))
                .collect::<Vec<_>>()
                .join(", "),
        ),
        NoteValue::Text(text) => Some(format_snake_case(text)),
        NoteValue::Null => None,
    }
}

/// Resolves the display string for a single list item.
///
/// Used when the viewer renders list elements individually: the curated
/// label wins when the table has one that differs from the raw item,
/// otherwise the generic fallback applies.
pub fn display_item(item: &str, labels: &LabelTable) -> String {
    match labels.get(item) {
        Some(label) if label != item => label.to_owned(),
        _ => format_snake_case(item),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case_fallback() {
        assert_eq!(format_snake_case("family_of_4"), "family of 4");
        assert_eq!(format_snake_case(""), "");
        assert_eq!(format_snake_case("plain"), "plain");
    }

    #[test]
    fn test_formatted_scalar_wins_when_different() {
        let raw = NoteValue::Text("morning_7_10_am".into());
        let formatted = NoteValue::Text("Morning (7-10am)".into());
        assert_eq!(
            display_value(Some(&formatted), &raw),
            Some("Morning (7-10am)".to_owned())
        );
    }

    #[test]
    fn test_identical_scalar_falls_back_to_snake_case() {
        let raw = NoteValue::Text("family_of_4".into());
        assert_eq!(
            display_value(Some(&raw.clone()), &raw),
            Some("family of 4".to_owned())
        );
    }

    #[test]
    fn test_identical_list_joins_with_comma_space() {
        let raw = NoteValue::List(vec!["soup".into(), "rice".into()]);
        assert_eq!(
            display_value(Some(&raw.clone()), &raw),
            Some("soup, rice".to_owned())
        );
    }

    #[test]
    fn test_list_fallback_applies_snake_case_per_element() {
        let raw = NoteValue::List(vec!["rice_dishes".into(), "misc_soups".into()]);
        assert_eq!(
            display_value(None, &raw),
            Some("rice dishes, misc soups".to_owned())
        );
    }

    #[test]
    fn test_formatted_list_wins_when_different() {
        let raw = NoteValue::List(vec!["rice_dishes".into()]);
        let formatted = NoteValue::List(vec!["Rice Dishes".into()]);
        assert_eq!(
            display_value(Some(&formatted), &raw),
            Some("Rice Dishes".to_owned())
        );
    }

    #[test]
    fn test_null_resolves_to_none() {
        assert_eq!(display_value(None, &NoteValue::Null), None);
        assert_eq!(display_value(Some(&NoteValue::Null), &NoteValue::Null), None);
    }

    #[test]
    fn test_display_item_prefers_curated_label() {
        let labels = LabelTable::builtin();
        assert_eq!(display_item("rice_dishes", &labels), "Rice Dishes");
        assert_eq!(display_item("lentil_soup", &labels), "lentil soup");
    }
}
