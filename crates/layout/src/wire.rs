//! YAML boundary for composed layouts and attendee rosters.
//!
//! Parsing uses `serde_path_to_error` so a schema mismatch reports a
//! best-effort path (e.g. `blocks[2].paragraph.runs`) to the failing field
//! rather than a bare YAML error.

use crate::model::DocumentLayout;
use crate::LayoutError;
use acta_types::{Attendee, NonEmptyText};

/// Parse a composed document layout from YAML text.
///
/// # Errors
///
/// Returns [`LayoutError::SchemaMismatch`] if the YAML does not match the
/// [`DocumentLayout`] wire schema, including when unknown keys are present.
pub fn layout_parse(yaml_text: &str) -> Result<DocumentLayout, LayoutError> {
    parse_with_path(yaml_text)
}

/// Render a composed document layout as YAML text.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidYaml`] if serialisation fails.
pub fn layout_render(layout: &DocumentLayout) -> Result<String, LayoutError> {
    Ok(serde_yaml::to_string(layout)?)
}

/// Parse an attendee roster from YAML text.
///
/// The wire shape is a YAML sequence of `{ name, title, attended }` mappings
/// in roster order. Attendees with blank names or titles are rejected: the
/// attendance table and signature block would render meaningless rows for
/// them.
///
/// # Errors
///
/// Returns [`LayoutError::SchemaMismatch`] for shape errors and
/// [`LayoutError::InvalidRoster`] for blank names or titles.
pub fn roster_parse(yaml_text: &str) -> Result<Vec<Attendee>, LayoutError> {
    let roster: Vec<Attendee> = parse_with_path(yaml_text)?;

    for (index, attendee) in roster.iter().enumerate() {
        if NonEmptyText::new(&attendee.name).is_err() {
            return Err(LayoutError::InvalidRoster(format!(
                "attendee {} has a blank name",
                index + 1
            )));
        }
        if NonEmptyText::new(&attendee.title).is_err() {
            return Err(LayoutError::InvalidRoster(format!(
                "attendee {} has a blank title",
                index + 1
            )));
        }
    }

    Ok(roster)
}

/// Render an attendee roster as YAML text.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidYaml`] if serialisation fails.
pub fn roster_render(roster: &[Attendee]) -> Result<String, LayoutError> {
    Ok(serde_yaml::to_string(roster)?)
}

fn parse_with_path<T>(yaml_text: &str) -> Result<T, LayoutError>
where
    T: serde::de::DeserializeOwned,
{
    let deserializer = serde_yaml::Deserializer::from_str(yaml_text);
    serde_path_to_error::deserialize(deserializer).map_err(|err| {
        let path = err.path().to_string();
        let path = if path.is_empty() || path == "." {
            "<root>".to_string()
        } else {
            path
        };
        LayoutError::SchemaMismatch {
            path,
            source: err.into_inner(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alignment, LayoutBlock, Paragraph, TextRun};

    fn sample_layout() -> DocumentLayout {
        DocumentLayout {
            page_header: vec![Paragraph::new(
                vec![TextRun::emphasised("ACTA DE LA SESIÓN ORDINARIA DE CABILDO.")],
                Alignment::Right,
            )],
            blocks: vec![
                LayoutBlock::Paragraph(
                    Paragraph::new(vec![TextRun::plain("1.- Lista de asistencia.")], Alignment::Justified)
                        .with_filler(),
                ),
                LayoutBlock::Paragraph(Paragraph::empty()),
            ],
        }
    }

    #[test]
    fn layout_round_trips_through_yaml() {
        let layout = sample_layout();
        let yaml = layout_render(&layout).expect("render layout");
        let reparsed = layout_parse(&yaml).expect("parse layout");
        assert_eq!(layout, reparsed);
    }

    #[test]
    fn layout_parse_rejects_unknown_keys_with_path() {
        let yaml = "page_header: []\nblocks: []\nunexpected_key: true\n";
        let err = layout_parse(yaml).expect_err("should reject unknown key");
        match err {
            LayoutError::SchemaMismatch { path: _, source } => {
                assert!(source.to_string().contains("unexpected_key"));
            }
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }

    #[test]
    fn roster_round_trips_through_yaml() {
        let roster = vec![
            Attendee::present("C. Rogel Ismael Gamboa Castillo", "Presidente Municipal"),
            Attendee::absent("C. María Adela Canché Chable", "Regidor"),
        ];
        let yaml = roster_render(&roster).expect("render roster");
        let reparsed = roster_parse(&yaml).expect("parse roster");
        assert_eq!(roster, reparsed);
    }

    #[test]
    fn roster_parse_rejects_blank_name() {
        let yaml = "- name: \"  \"\n  title: Regidor\n  attended: true\n";
        let err = roster_parse(yaml).expect_err("should reject blank name");
        match err {
            LayoutError::InvalidRoster(msg) => assert!(msg.contains("attendee 1")),
            other => panic!("expected InvalidRoster, got {other:?}"),
        }
    }

    #[test]
    fn roster_parse_reports_path_for_wrong_type() {
        let yaml = "- name: Regidor\n  title: Regidor\n  attended: \"yes\"\n";
        let err = roster_parse(yaml).expect_err("should reject wrong type");
        match err {
            LayoutError::SchemaMismatch { path, .. } => assert!(path.contains("attended")),
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }
}
