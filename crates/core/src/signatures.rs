//! Signature block builder.
//!
//! Only attendees marked as present sign. The chair signs alone at the top;
//! everyone else signs two abreast in roster order, laid out as borderless
//! half-width tables so the stanzas sit side by side.

use acta_layout::{Alignment, LayoutBlock, Paragraph, Table, TableCell, TableRow, TextRun};
use acta_types::Attendee;

use crate::constants::{CHAIR_TITLE, SIGNATURE_RULE_LEN};

/// Builds the signature blocks for the attended subset of the roster.
///
/// The first present attendee titled exactly "Presidente Municipal" gets a
/// standalone centered stanza and is removed from pairing; a roster without
/// a present chair simply has no standalone stanza. The remaining attendees
/// pair up in roster order; a trailing group of one takes the left cell and
/// leaves a single empty paragraph on the right.
pub fn signature_blocks(roster: &[Attendee]) -> Vec<LayoutBlock> {
    let present: Vec<&Attendee> = roster.iter().filter(|attendee| attendee.attended).collect();

    let chair_index = present
        .iter()
        .position(|attendee| attendee.title == CHAIR_TITLE);
    if chair_index.is_none() {
        tracing::debug!("no present chair in roster, omitting standalone stanza");
    }

    let mut blocks = Vec::new();
    if let Some(index) = chair_index {
        blocks.extend(
            stanza(present[index])
                .into_iter()
                .map(LayoutBlock::Paragraph),
        );
    }

    let others: Vec<&Attendee> = present
        .iter()
        .enumerate()
        .filter(|(index, _)| Some(*index) != chair_index)
        .map(|(_, attendee)| *attendee)
        .collect();

    for pair in others.chunks(2) {
        blocks.push(pair_table(pair));
    }

    blocks
}

/// One signatory's stanza: a spacer, the signing rule, then the bold
/// uppercase name and title, all centered.
fn stanza(attendee: &Attendee) -> Vec<Paragraph> {
    vec![
        Paragraph::empty(),
        Paragraph::new(
            vec![TextRun::plain("_".repeat(SIGNATURE_RULE_LEN))],
            Alignment::Center,
        ),
        Paragraph::new(
            vec![TextRun::emphasised(attendee.name.as_str())],
            Alignment::Center,
        ),
        Paragraph::new(
            vec![TextRun::emphasised(attendee.title.as_str())],
            Alignment::Center,
        ),
    ]
}

fn pair_table(pair: &[&Attendee]) -> LayoutBlock {
    let left = TableCell {
        paragraphs: stanza(pair[0]),
        width_pct: Some(50),
    };
    let right = TableCell {
        paragraphs: match pair.get(1) {
            Some(attendee) => stanza(attendee),
            None => vec![Paragraph::empty()],
        },
        width_pct: Some(50),
    };

    LayoutBlock::Table(Table {
        rows: vec![TableRow {
            cells: vec![left, right],
        }],
        borderless: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_table(block: &LayoutBlock) -> &Table {
        match block {
            LayoutBlock::Table(table) => table,
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn chair_gets_standalone_stanza_then_pairs_follow() {
        let roster = vec![
            Attendee::present("C. Rogel Ismael Gamboa Castillo", "Presidente Municipal"),
            Attendee::present("C. Nelsi Margeli Chan Chan", "Síndico Municipal"),
            Attendee::present("C. Miguel Angel Chi Uicab", "Secretario Municipal"),
            Attendee::present("C. María Adela Canché Chable", "Regidor"),
            Attendee::present("C. Wendy Abigail Estrella Tun", "Regidora"),
        ];
        let blocks = signature_blocks(&roster);
        // 4 stanza paragraphs + 2 pair tables.
        assert_eq!(blocks.len(), 6);
        assert!(matches!(blocks[0], LayoutBlock::Paragraph(_)));
        let name = match &blocks[2] {
            LayoutBlock::Paragraph(paragraph) => &paragraph.runs[0],
            other => panic!("expected paragraph, got {other:?}"),
        };
        assert_eq!(name.text, "C. Rogel Ismael Gamboa Castillo");
        assert!(name.bold && name.uppercase);
        assert!(matches!(blocks[4], LayoutBlock::Table(_)));
        assert!(matches!(blocks[5], LayoutBlock::Table(_)));
    }

    #[test]
    fn absent_attendees_never_sign() {
        let roster = vec![
            Attendee::present("C. Rogel Ismael Gamboa Castillo", "Presidente Municipal"),
            Attendee::present("C. Nelsi Margeli Chan Chan", "Síndico Municipal"),
            Attendee::absent("C. Miguel Angel Chi Uicab", "Secretario Municipal"),
            Attendee::present("C. María Adela Canché Chable", "Regidor"),
        ];
        let blocks = signature_blocks(&roster);
        // Chair stanza + one full pair table.
        assert_eq!(blocks.len(), 5);
        let table = expect_table(&blocks[4]);
        let right = &table.rows[0].cells[1];
        assert_eq!(
            right.paragraphs[2].runs[0].text,
            "C. María Adela Canché Chable"
        );
    }

    #[test]
    fn missing_chair_yields_pairs_only() {
        let roster = vec![
            Attendee::present("C. Nelsi Margeli Chan Chan", "Síndico Municipal"),
            Attendee::present("C. María Adela Canché Chable", "Regidor"),
            Attendee::present("C. Wendy Abigail Estrella Tun", "Regidora"),
            Attendee::present("C. Miguel Angel Chi Uicab", "Secretario Municipal"),
        ];
        let blocks = signature_blocks(&roster);
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|block| matches!(block, LayoutBlock::Table(_))));
    }

    #[test]
    fn odd_group_leaves_empty_right_cell() {
        let roster = vec![Attendee::present("C. María Adela Canché Chable", "Regidor")];
        let blocks = signature_blocks(&roster);
        assert_eq!(blocks.len(), 1);
        let table = expect_table(&blocks[0]);
        let cells = &table.rows[0].cells;
        assert_eq!(cells[0].width_pct, Some(50));
        assert_eq!(cells[1].paragraphs.len(), 1);
        assert!(cells[1].paragraphs[0].runs.is_empty());
    }

    #[test]
    fn second_chair_title_pairs_normally() {
        let roster = vec![
            Attendee::present("C. Rogel Ismael Gamboa Castillo", "Presidente Municipal"),
            Attendee::present("C. Otro Presidente", "Presidente Municipal"),
        ];
        let blocks = signature_blocks(&roster);
        // First chair stands alone, the second falls into a half-filled pair.
        assert_eq!(blocks.len(), 5);
        let table = expect_table(&blocks[4]);
        assert_eq!(
            table.rows[0].cells[0].paragraphs[2].runs[0].text,
            "C. Otro Presidente"
        );
    }
}
