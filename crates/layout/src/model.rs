//! Typed layout blocks produced by the composition core.
//!
//! The model is positional: block order is reading order, and no block
//! carries an absolute page position. The repeating page header is kept
//! outside the block sequence because it is re-rendered on every page rather
//! than read once.

use serde::{Deserialize, Serialize};

/// Horizontal alignment of a paragraph.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

/// A contiguous run of text sharing one emphasis setting.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TextRun {
    pub text: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub uppercase: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl TextRun {
    /// A run with no emphasis.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            uppercase: false,
        }
    }

    /// A bold, uppercased run, used for captions and point references.
    pub fn emphasised(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            uppercase: true,
        }
    }
}

/// A paragraph: ordered runs, an alignment, and an optional trailing
/// dot-leader tab.
///
/// When `filler_tab` is set the paragraph ends with a tab run and the
/// renderer declares a right-margin tab stop with a dotted leader, so the
/// prose ends mid-line with a row of dots trailing to the margin.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
    #[serde(default)]
    pub alignment: Alignment,
    #[serde(default, skip_serializing_if = "is_false")]
    pub filler_tab: bool,
}

impl Paragraph {
    /// A paragraph holding the given runs, flush (no filler tab).
    pub fn new(runs: Vec<TextRun>, alignment: Alignment) -> Self {
        Self {
            runs,
            alignment,
            filler_tab: false,
        }
    }

    /// An empty spacer paragraph.
    pub fn empty() -> Self {
        Self {
            runs: Vec::new(),
            alignment: Alignment::Left,
            filler_tab: false,
        }
    }

    /// Marks the paragraph as ending in a dot-leader tab run.
    pub fn with_filler(mut self) -> Self {
        self.runs.push(TextRun::plain("\t"));
        self.filler_tab = true;
        self
    }

    /// Concatenation of all run texts, in order.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// A single table cell: stacked paragraphs and an optional relative width.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TableCell {
    pub paragraphs: Vec<Paragraph>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_pct: Option<u32>,
}

impl TableCell {
    /// A cell holding a single paragraph at the given relative width.
    pub fn sized(paragraph: Paragraph, width_pct: u32) -> Self {
        Self {
            paragraphs: vec![paragraph],
            width_pct: Some(width_pct),
        }
    }

    /// A cell holding a single paragraph with no declared width.
    pub fn unsized_single(paragraph: Paragraph) -> Self {
        Self {
            paragraphs: vec![paragraph],
            width_pct: None,
        }
    }
}

/// One table row.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

/// A table block.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Table {
    pub rows: Vec<TableRow>,
    #[serde(default)]
    pub borderless: bool,
}

/// A tagged layout block: the sole output variant set of the core.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LayoutBlock {
    Paragraph(Paragraph),
    Table(Table),
}

/// A composed document: the repeating page header plus the reading-order
/// block sequence.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DocumentLayout {
    pub page_header: Vec<Paragraph>,
    pub blocks: Vec<LayoutBlock>,
}
