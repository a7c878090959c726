//! Line classification for the narrative body.
//!
//! Each body line (or line-pair) is assigned exactly one structural role
//! and rendered with that role's typography. Matching always happens on
//! the trimmed line while rendering keeps the line as written, so leading
//! indentation survives into the record text.

use once_cell::sync::Lazy;
use regex::Regex;

use acta_layout::{Alignment, LayoutBlock, Paragraph, TextRun};

use crate::constants::{
    AGREEMENTS_CAPTION, AGREEMENTS_DASH_RUN, AGREEMENTS_SPACER_RUN, ATTENDANCE_MARKER,
    CLOSING_CAPTION, CLOSING_DASH_RUN, SIGNATURE_MARKER,
};
use crate::emphasis::emphasise;

/// Lines (trimmed) that open an enumerated agenda item: "1.-", "12.-".
static NUMBERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.-").expect("numbered item pattern is valid"));

/// Leading "PUNTO <word>" span, with optional trailing period and dash.
static POINT_LEAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(PUNTO\s+[A-ZÑÁÉÍÓÚÜ]+\.?\s*[-–]?\s*)").expect("point lead pattern is valid")
});

/// Suffix that triggers the two-line merge into a single paragraph.
const MERGE_SUFFIX: &str = "manifestando:";

/// The structural role assigned to a narrative line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassifiedLine {
    /// Ordinary content, already rendered to layout blocks.
    Blocks(Vec<LayoutBlock>),
    /// The attendance-table marker; the assembler expands it.
    AttendanceMarker,
    /// The signature-block marker; the assembler expands it.
    SignatureMarker,
}

/// A classification result: the role plus how many input lines it consumed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classified {
    pub line: ClassifiedLine,
    pub consumed: usize,
}

impl Classified {
    fn single(line: ClassifiedLine) -> Self {
        Self { line, consumed: 1 }
    }

    fn blocks(blocks: Vec<LayoutBlock>) -> Self {
        Self::single(ClassifiedLine::Blocks(blocks))
    }
}

/// Classifies the body line at `index`.
///
/// Roles are tested in priority order; the first match wins. `consumed` is
/// 1 for every role except the merge rule, which folds the following line
/// into the same paragraph and reports 2.
pub fn classify_line(lines: &[&str], index: usize) -> Classified {
    let line = lines[index];
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Classified::blocks(vec![LayoutBlock::Paragraph(Paragraph::empty())]);
    }
    if trimmed == ATTENDANCE_MARKER {
        return Classified::single(ClassifiedLine::AttendanceMarker);
    }
    if trimmed == SIGNATURE_MARKER {
        return Classified::single(ClassifiedLine::SignatureMarker);
    }
    if trimmed == AGREEMENTS_CAPTION {
        return Classified::blocks(vec![
            divider(AGREEMENTS_CAPTION, AGREEMENTS_DASH_RUN),
            dash_spacer(AGREEMENTS_SPACER_RUN),
        ]);
    }
    if trimmed == CLOSING_CAPTION {
        return Classified::blocks(vec![divider(CLOSING_CAPTION, CLOSING_DASH_RUN)]);
    }
    if trimmed.ends_with(MERGE_SUFFIX) {
        let next = lines.get(index + 1).map(|next| next.trim()).unwrap_or("");
        let merged = format!("{} {}", line, next);
        let paragraph = Paragraph::new(emphasise(&merged), Alignment::Justified);
        return Classified {
            line: ClassifiedLine::Blocks(vec![LayoutBlock::Paragraph(paragraph)]),
            consumed: if index + 1 < lines.len() { 2 } else { 1 },
        };
    }
    if NUMBERED_ITEM.is_match(trimmed) {
        let paragraph =
            Paragraph::new(vec![TextRun::plain(line)], Alignment::Justified).with_filler();
        return Classified::blocks(vec![LayoutBlock::Paragraph(paragraph)]);
    }
    if trimmed.to_uppercase().starts_with("PUNTO ") {
        return Classified::blocks(vec![LayoutBlock::Paragraph(point_paragraph(line))]);
    }

    let wants_filler = trimmed.ends_with(':') || trimmed.ends_with('.');
    let mut paragraph = Paragraph::new(emphasise(line), Alignment::Justified);
    if wants_filler {
        paragraph = paragraph.with_filler();
    }
    Classified::blocks(vec![LayoutBlock::Paragraph(paragraph)])
}

/// An agenda-point line: the leading "PUNTO <word>" span bolded, the rest
/// plain, always finished with the dot-leader filler.
fn point_paragraph(line: &str) -> Paragraph {
    let runs = match POINT_LEAD.find(line) {
        Some(lead) => {
            let mut runs = vec![TextRun::emphasised(lead.as_str())];
            let rest = &line[lead.end()..];
            if !rest.is_empty() {
                runs.push(TextRun::plain(rest));
            }
            runs
        }
        None => vec![TextRun::plain(line)],
    };
    Paragraph::new(runs, Alignment::Justified).with_filler()
}

fn divider(caption: &str, dash_run: usize) -> LayoutBlock {
    let dashes = "-".repeat(dash_run);
    LayoutBlock::Paragraph(Paragraph::new(
        vec![
            TextRun::plain(&dashes),
            TextRun::emphasised(format!(" {caption} ")),
            TextRun::plain(&dashes),
        ],
        Alignment::Center,
    ))
}

fn dash_spacer(dash_run: usize) -> LayoutBlock {
    LayoutBlock::Paragraph(Paragraph::new(
        vec![TextRun::plain("-".repeat(dash_run))],
        Alignment::Center,
    ))
}
