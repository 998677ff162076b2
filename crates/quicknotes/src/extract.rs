//! Field extraction over normalised quick-notes lines.
//!
//! Each line is expected to be a `field_name: value` pair. Values are either
//! scalars (with the literal `None` meaning explicit absence) or
//! bracket-delimited multi-value answers. The multi-value parsing is
//! heuristic: the export does not quote items, so splitting is guessed from
//! the field name and the delimiters actually present. Worst case is a
//! degraded, less granular parse; this module never errors.

use crate::ParsedNotes;
use chartview_types::NoteValue;

/// Fields whose bracket-delimited values hold free-prose condition names
/// rather than coded tokens, and therefore need delimiter-aware splitting.
const MEDICAL_LIST_FIELDS: [&str; 3] =
    ["family_history", "medical_conditions", "health_conditions"];

/// Extracts a `field -> value` mapping from normalised lines.
///
/// A line without a colon, or with the colon as its first character, is
/// dropped; nothing partial is recorded for it. When a field name repeats,
/// the last occurrence wins. Insertion follows line order but carries no
/// meaning for consumers.
pub fn extract<I, S>(lines: I) -> ParsedNotes
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = ParsedNotes::new();

    for line in lines {
        let line = line.as_ref();
        let Some(colon) = line.find(':') else {
            tracing::debug!("dropping quick-notes line without field separator");
            continue;
        };
        if colon == 0 {
            tracing::debug!("dropping quick-notes line with empty field name");
            continue;
        }

        let field = line[..colon].trim();
        let value = line[colon + 1..].trim();

        parsed.insert(field.to_owned(), parse_value(field, value));
    }

    parsed
}

/// Parses one trimmed value into its [`NoteValue`] shape.
fn parse_value(field: &str, value: &str) -> NoteValue {
    if value.starts_with('[') && value.ends_with(']') {
        // Single-character delimiters, no nested-bracket awareness.
        let interior = value[1..value.len() - 1].trim();
        return NoteValue::List(parse_list_items(field, interior));
    }

    if value == "None" {
        NoteValue::Null
    } else {
        NoteValue::Text(value.to_owned())
    }
}

/// Splits a bracket interior into items.
///
/// Medical-list fields are tried against explicit delimiters first (comma,
/// then the literal `" and "`); `family_history` additionally gets a
/// capitalisation-based grouping pass when neither delimiter is present.
/// A medical-list interior that matches none of these stays a single item.
/// Every other field splits on whitespace, which is lossy for multi-word
/// items; that is the export's convention for coded-token answers.
fn parse_list_items(field: &str, interior: &str) -> Vec<String> {
    if interior.is_empty() {
        return Vec::new();
    }

    if MEDICAL_LIST_FIELDS.contains(&field) {
        if interior.contains(',') {
            return split_trimmed(interior, ",");
        }
        // Exact literal match, not word-boundary-aware.
        if interior.contains(" and ") {
            return split_trimmed(interior, " and ");
        }

        let words: Vec<&str> = interior.split_whitespace().collect();
        if field == "family_history" && words.len() > 1 {
            return group_by_capitalisation(&words, interior);
        }

        return vec![interior.to_owned()];
    }

    interior.split_whitespace().map(str::to_owned).collect()
}

fn split_trimmed(interior: &str, delimiter: &str) -> Vec<String> {
    interior
        .split(delimiter)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Groups whitespace tokens into condition names by capitalisation.
///
/// A token whose first character has no lowercase form (uppercase letters,
/// digits, symbols) starts a new group unless the current group is empty.
/// If only one group results, the whole interior is kept as a single item.
/// The heuristic misclassifies multi-word names that start lowercase; it is
/// kept as-is for parity with the export's known consumers.
fn group_by_capitalisation(words: &[&str], interior: &str) -> Vec<String> {
    let mut groups: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for &word in words {
        let boundary = word.chars().next().is_some_and(|c| !c.is_lowercase());
        if boundary && !current.is_empty() {
            groups.push(current.join(" "));
            current = vec![word];
        } else {
            current.push(word);
        }
    }
    if !current.is_empty() {
        groups.push(current.join(" "));
    }

    if groups.len() > 1 {
        groups
    } else {
        vec![interior.to_owned()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_field() {
        let parsed = extract(["age: 42"]);
        assert_eq!(parsed["age"], NoteValue::Text("42".into()));
    }

    #[test]
    fn test_empty_value_is_kept_as_empty_text() {
        let parsed = extract(["age:"]);
        assert_eq!(parsed["age"], NoteValue::Text(String::new()));
    }

    #[test]
    fn test_none_becomes_null() {
        let parsed = extract(["notes: None"]);
        assert_eq!(parsed["notes"], NoteValue::Null);
    }

    #[test]
    fn test_line_without_colon_is_dropped() {
        assert!(extract(["no colon here"]).is_empty());
    }

    #[test]
    fn test_leading_colon_is_dropped() {
        assert!(extract([": orphan value"]).is_empty());
    }

    #[test]
    fn test_repeated_field_last_occurrence_wins() {
        let parsed = extract(["mood: low", "mood: high"]);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed["mood"], NoteValue::Text("high".into()));
    }

    #[test]
    fn test_bracketed_value_splits_on_whitespace() {
        let parsed = extract(["color: [red blue green]"]);
        assert_eq!(
            parsed["color"],
            NoteValue::List(vec!["red".into(), "blue".into(), "green".into()])
        );
    }

    #[test]
    fn test_empty_brackets_yield_empty_list() {
        let parsed = extract(["diet: []", "tools: [  ]"]);
        assert_eq!(parsed["diet"], NoteValue::List(Vec::new()));
        assert_eq!(parsed["tools"], NoteValue::List(Vec::new()));
    }

    #[test]
    fn test_lone_open_bracket_stays_scalar() {
        let parsed = extract(["odd: ["]);
        assert_eq!(parsed["odd"], NoteValue::Text("[".into()));
    }

    #[test]
    fn test_family_history_splits_on_comma() {
        let parsed = extract(["family_history: [Diabetes, Hypertension]"]);
        assert_eq!(
            parsed["family_history"],
            NoteValue::List(vec!["Diabetes".into(), "Hypertension".into()])
        );
    }

    #[test]
    fn test_family_history_splits_on_and() {
        let parsed = extract(["family_history: [Diabetes mellitus and high blood pressure]"]);
        assert_eq!(
            parsed["family_history"],
            NoteValue::List(vec!["Diabetes mellitus".into(), "high blood pressure".into()])
        );
    }

    #[test]
    fn test_comma_takes_priority_over_and() {
        let parsed = extract(["medical_conditions: [asthma, anxiety and depression]"]);
        assert_eq!(
            parsed["medical_conditions"],
            NoteValue::List(vec!["asthma".into(), "anxiety and depression".into()])
        );
    }

    #[test]
    fn test_family_history_groups_by_capitalisation() {
        let parsed = extract(["family_history: [Diabetes mellitus High blood pressure]"]);
        assert_eq!(
            parsed["family_history"],
            NoteValue::List(vec![
                "Diabetes mellitus".into(),
                "High blood pressure".into()
            ])
        );
    }

    #[test]
    fn test_grouping_falls_back_to_whole_interior() {
        // All-lowercase tokens produce one group, so the interior is kept whole.
        let parsed = extract(["family_history: [diabetes mellitus]"]);
        assert_eq!(
            parsed["family_history"],
            NoteValue::List(vec!["diabetes mellitus".into()])
        );
    }

    #[test]
    fn test_medical_conditions_without_delimiters_stay_whole() {
        // Only family_history gets the grouping pass; the other medical-list
        // fields keep the interior as a single item.
        let parsed = extract(["medical_conditions: [chronic kidney disease]"]);
        assert_eq!(
            parsed["medical_conditions"],
            NoteValue::List(vec!["chronic kidney disease".into()])
        );
    }

    #[test]
    fn test_single_word_family_history_stays_whole() {
        let parsed = extract(["family_history: [Diabetes]"]);
        assert_eq!(
            parsed["family_history"],
            NoteValue::List(vec!["Diabetes".into()])
        );
    }

    #[test]
    fn test_mixed_lines() {
        let parsed = extract([
            "household: family_of_4",
            "garbage line",
            "patient_motivation: None",
            "diet: [vegan gluten_free]",
        ]);
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed["household"], NoteValue::Text("family_of_4".into()));
        assert_eq!(parsed["patient_motivation"], NoteValue::Null);
        assert_eq!(
            parsed["diet"],
            NoteValue::List(vec!["vegan".into(), "gluten_free".into()])
        );
    }
}
