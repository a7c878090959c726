//! Attendance table builder.

use acta_layout::{Alignment, LayoutBlock, Paragraph, Table, TableCell, TableRow, TextRun};
use acta_types::Attendee;

/// Relative column widths: number, name, title, attendance.
const COLUMN_WIDTHS: [u32; 4] = [5, 45, 35, 15];

/// Builds the attendance table for the full roster.
///
/// One borderless table: a bold uppercase header row (N° / NOMBRE / CARGO /
/// ASISTENCIA at widths 5/45/35/15) and one row per roster entry in roster
/// order, carrying the 1-based roster number, name, title and a centered
/// "SI"/"NO". Absent attendees keep their row; the table reflects the whole
/// roster, not the present subset.
pub fn attendance_table(roster: &[Attendee]) -> LayoutBlock {
    let mut rows = Vec::with_capacity(roster.len() + 1);
    rows.push(header_row());

    for (index, attendee) in roster.iter().enumerate() {
        rows.push(TableRow {
            cells: vec![
                centered_cell(TextRun {
                    text: (index + 1).to_string(),
                    bold: true,
                    uppercase: false,
                }),
                plain_cell(&attendee.name),
                plain_cell(&attendee.title),
                centered_cell(TextRun::plain(if attendee.attended { "SI" } else { "NO" })),
            ],
        });
    }

    LayoutBlock::Table(Table {
        rows,
        borderless: true,
    })
}

fn header_row() -> TableRow {
    let captions = ["N°", "NOMBRE", "CARGO", "ASISTENCIA"];
    let cells = captions
        .iter()
        .zip(COLUMN_WIDTHS)
        .map(|(caption, width)| {
            // Only the narrow number column is centered in the header.
            let alignment = if *caption == "N°" {
                Alignment::Center
            } else {
                Alignment::Left
            };
            TableCell::sized(
                Paragraph::new(vec![TextRun::emphasised(*caption)], alignment),
                width,
            )
        })
        .collect();
    TableRow { cells }
}

fn plain_cell(text: &str) -> TableCell {
    TableCell::unsized_single(Paragraph::new(vec![TextRun::plain(text)], Alignment::Left))
}

fn centered_cell(run: TextRun) -> TableCell {
    TableCell::unsized_single(Paragraph::new(vec![run], Alignment::Center))
}
