//! Document assembly: narrative text plus roster in, layout blocks out.

use acta_layout::{Alignment, DocumentLayout, LayoutBlock, Paragraph, TextRun};
use acta_types::Attendee;

use crate::attendance::attendance_table;
use crate::classifier::{classify_line, Classified, ClassifiedLine};
use crate::constants::HEADER_LINE_COUNT;
use crate::signatures::signature_blocks;

/// Assembles the composed document from a substituted narrative and roster.
///
/// The first four narrative lines become the repeating page header
/// (right-aligned uppercase captions); every later line runs through the
/// classifier in order, with the attendance and signature markers expanded
/// from the roster. The assembler rewrites no text of its own, so composing
/// the same inputs twice yields identical output.
pub fn assemble(narrative: &str, roster: &[Attendee]) -> DocumentLayout {
    let lines: Vec<&str> = narrative.split('\n').collect();

    let page_header = lines
        .iter()
        .take(HEADER_LINE_COUNT)
        .map(|line| header_caption(line))
        .collect();

    let body = &lines[lines.len().min(HEADER_LINE_COUNT)..];
    let mut blocks: Vec<LayoutBlock> = Vec::new();
    let mut index = 0;
    while index < body.len() {
        let Classified { line, consumed } = classify_line(body, index);
        match line {
            ClassifiedLine::Blocks(mut classified) => blocks.append(&mut classified),
            ClassifiedLine::AttendanceMarker => blocks.push(attendance_table(roster)),
            ClassifiedLine::SignatureMarker => blocks.extend(signature_blocks(roster)),
        }
        index += consumed;
    }

    DocumentLayout {
        page_header,
        blocks,
    }
}

fn header_caption(line: &str) -> Paragraph {
    Paragraph::new(
        vec![TextRun {
            text: line.to_string(),
            bold: false,
            uppercase: true,
        }],
        Alignment::Right,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const NARRATIVE: &str = "\
ACTA DE LA SESIÓN ORDINARIA DE CABILDO. DEL
HONORABLE AYUNTAMIENTO DE TEPAKÁN,
YUCATÁN, 2024-2027, CELEBRADA EL DÍA
CINCO DE SEPTIEMBRE DE DOS MIL VEINTICUATRO.

1.- Lista de asistencia.

{{ASISTENCIA_TABLE}}

ACUERDOS

en cumplimiento del Primer Punto, se pasa lista.

{{FIRMAS}}";

    fn roster() -> Vec<Attendee> {
        vec![
            Attendee::present("C. Rogel Ismael Gamboa Castillo", "Presidente Municipal"),
            Attendee::present("C. Nelsi Margeli Chan Chan", "Síndico Municipal"),
            Attendee::absent("C. María Adela Canché Chable", "Regidor"),
        ]
    }

    #[test]
    fn first_four_lines_become_the_page_header() {
        let layout = assemble(NARRATIVE, &roster());
        assert_eq!(layout.page_header.len(), 4);
        for caption in &layout.page_header {
            assert_eq!(caption.alignment, Alignment::Right);
            assert!(caption.runs[0].uppercase);
            assert!(!caption.runs[0].bold);
        }
        assert!(layout.page_header[1]
            .runs[0]
            .text
            .contains("HONORABLE AYUNTAMIENTO"));
    }

    #[test]
    fn markers_expand_into_roster_blocks() {
        let layout = assemble(NARRATIVE, &roster());
        let tables = layout
            .blocks
            .iter()
            .filter(|block| matches!(block, LayoutBlock::Table(_)))
            .count();
        // Attendance table, plus the chair-less pair table from signatures.
        assert!(tables >= 2);
    }

    #[test]
    fn body_blocks_keep_reading_order() {
        let layout = assemble(NARRATIVE, &roster());
        let agenda = layout
            .blocks
            .iter()
            .position(|block| match block {
                LayoutBlock::Paragraph(paragraph) => {
                    paragraph.text().starts_with("1.- Lista de asistencia.")
                }
                LayoutBlock::Table(_) => false,
            })
            .expect("agenda line present");
        let attendance = layout
            .blocks
            .iter()
            .position(|block| matches!(block, LayoutBlock::Table(_)))
            .expect("attendance table present");
        assert!(agenda < attendance);
    }

    #[test]
    fn composing_twice_is_identical() {
        let first = assemble(NARRATIVE, &roster());
        let second = assemble(NARRATIVE, &roster());
        assert_eq!(first, second);
    }

    #[test]
    fn short_narrative_has_no_body() {
        let layout = assemble("solo\ndos líneas", &roster());
        assert_eq!(layout.page_header.len(), 2);
        assert!(layout.blocks.is_empty());
    }
}
