//! Result sink: renders the deduplicated document and the changelog report.

use serde::Serialize;

use crate::error::DedupeError;
use crate::model::{ChangeEvent, Lead};

/// Wire shape of the deduplicated output document.
#[derive(Serialize)]
struct Document<'a> {
    leads: &'a [Lead],
}

/// Render the kept records as a pretty `{"leads": [...]}` document.
pub fn render_document(leads: &[Lead]) -> Result<String, DedupeError> {
    serde_json::to_string_pretty(&Document { leads })
        .map_err(|e| DedupeError::Render(e.to_string()))
}

/// Render the change-event log as a human-readable report, one block per
/// replacement.
pub fn render_changelog(changes: &[ChangeEvent]) -> String {
    let mut out = String::from("CHANGE LOGS:\n");
    for change in changes {
        out.push_str(&change.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(id: &str, email: &str) -> Lead {
        Lead {
            id: id.into(),
            email: email.into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            address: "1 Main St".into(),
            entry_date: "2024-05-07".into(),
        }
    }

    #[test]
    fn document_round_trips_through_source() {
        let leads = vec![lead("1", "a@x.com"), lead("2", "b@x.com")];
        let rendered = render_document(&leads).unwrap();
        let parsed = crate::source::parse_document(&rendered, "leads").unwrap();
        assert_eq!(parsed, leads);
    }

    #[test]
    fn document_uses_wire_field_names() {
        let rendered = render_document(&[lead("1", "a@x.com")]).unwrap();
        assert!(rendered.contains("\"_id\""));
        assert!(rendered.contains("\"firstName\""));
        assert!(rendered.contains("\"entryDate\""));
    }

    #[test]
    fn changelog_lists_one_block_per_event() {
        let changes = vec![
            ChangeEvent {
                from: lead("1", "a@x.com"),
                to: lead("2", "a@x.com"),
            },
            ChangeEvent {
                from: lead("3", "c@x.com"),
                to: lead("3", "d@x.com"),
            },
        ];
        let report = render_changelog(&changes);
        assert!(report.starts_with("CHANGE LOGS:\n"));
        assert_eq!(report.matches("--- START CHANGE LOG ---").count(), 2);
        assert_eq!(report.matches("---  END CHANGE LOG  ---").count(), 2);
    }

    #[test]
    fn changelog_with_no_events_is_just_the_header() {
        assert_eq!(render_changelog(&[]), "CHANGE LOGS:\n");
    }
}
