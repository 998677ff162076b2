//! Quick-notes service: the seam between fetched records and the viewer.
//!
//! Wraps the pure `quicknotes` pipeline with the defensive guarantees the
//! surrounding application needs: parsing a patient's notes must never
//! crash a request, no matter how malformed the export is.

use quicknotes::{display_value, FormattedNotes, LabelTable, NoteFormatter, ParsedNotes};
use std::collections::BTreeMap;

/// Parses and formats quick-notes exports for the viewer.
#[derive(Debug, Clone, Default)]
pub struct NotesService {
    formatter: NoteFormatter,
}

impl NotesService {
    /// Creates a service formatting with the given label table.
    pub fn new(labels: LabelTable) -> Self {
        Self {
            formatter: NoteFormatter::new(labels),
        }
    }

    /// The label table this service formats with.
    pub fn labels(&self) -> &LabelTable {
        self.formatter.labels()
    }

    /// Parses a raw quick-notes export into a field mapping.
    ///
    /// An absent or empty export yields an empty mapping. The pipeline
    /// itself never errors, but as a last line of defence any panic inside
    /// it is caught, logged and converted to an empty mapping; parsing is
    /// deterministic, so there is nothing to retry and nothing for the
    /// caller to handle.
    pub fn parse_quick_notes(&self, raw: Option<&str>) -> ParsedNotes {
        let Some(raw) = raw else {
            return ParsedNotes::new();
        };

        match std::panic::catch_unwind(|| quicknotes::parse_notes(raw)) {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::error!("quick-notes parsing panicked; returning empty mapping");
                ParsedNotes::new()
            }
        }
    }

    /// Applies label substitution to a parsed mapping.
    pub fn format_quick_notes(&self, parsed: &ParsedNotes) -> FormattedNotes {
        self.formatter.format(parsed)
    }

    /// Resolves one display string per field.
    ///
    /// Fields whose value is an explicit absence are skipped, matching how
    /// the viewer hides them.
    pub fn resolve_display(
        &self,
        parsed: &ParsedNotes,
        formatted: &FormattedNotes,
    ) -> BTreeMap<String, String> {
        parsed
            .iter()
            .filter_map(|(field, raw)| {
                display_value(formatted.get(field), raw).map(|text| (field.clone(), text))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quicknotes::NoteValue;

    const BLOB: &str = "household: family_of_4<br>patient_motivation: None<br>\
                        meal_times: [morning_7_10_am evening_5_8_pm]<br>diet: [soup rice]";

    #[test]
    fn test_absent_export_yields_empty_mapping() {
        let service = NotesService::default();
        assert!(service.parse_quick_notes(None).is_empty());
        assert!(service.parse_quick_notes(Some("")).is_empty());
    }

    #[test]
    fn test_parse_quick_notes_end_to_end() {
        let service = NotesService::default();
        let parsed = service.parse_quick_notes(Some(BLOB));
        assert_eq!(parsed.len(), 4);
        assert_eq!(parsed["household"], NoteValue::Text("family_of_4".into()));
        assert_eq!(parsed["patient_motivation"], NoteValue::Null);
    }

    #[test]
    fn test_format_applies_curated_labels() {
        let service = NotesService::default();
        let parsed = service.parse_quick_notes(Some(BLOB));
        let formatted = service.format_quick_notes(&parsed);
        assert_eq!(
            formatted["meal_times"],
            NoteValue::List(vec!["Morning (7-10am)".into(), "Evening (5-8pm)".into()])
        );
        // No table hit: passthrough.
        assert_eq!(formatted["diet"], parsed["diet"]);
    }

    #[test]
    fn test_resolve_display_precedence() {
        let service = NotesService::default();
        let parsed = service.parse_quick_notes(Some(BLOB));
        let formatted = service.format_quick_notes(&parsed);
        let display = service.resolve_display(&parsed, &formatted);

        // Curated labels win.
        assert_eq!(display["meal_times"], "Morning (7-10am), Evening (5-8pm)");
        // No label: element-wise fallback, comma-space join.
        assert_eq!(display["diet"], "soup, rice");
        // Scalar fallback.
        assert_eq!(display["household"], "family of 4");
        // Explicit absence is skipped entirely.
        assert!(!display.contains_key("patient_motivation"));
    }

    #[test]
    fn test_fixture_table_is_injectable() {
        let labels = LabelTable::from_pairs([("soup".to_owned(), "Soups".to_owned())]);
        let service = NotesService::new(labels);
        let parsed = service.parse_quick_notes(Some("diet: [soup rice]"));
        let formatted = service.format_quick_notes(&parsed);
        assert_eq!(
            formatted["diet"],
            NoteValue::List(vec!["Soups".into(), "rice".into()])
        );
    }
}
