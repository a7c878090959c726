//! Constants used throughout the acta core crate.
//!
//! This module holds the fixed Spanish vocabulary and the structural
//! constants of the record: marker tokens, section captions, the chair
//! title, divider widths and the page-header height.

/// Marker line expanded into the attendance table.
pub const ATTENDANCE_MARKER: &str = "{{ASISTENCIA_TABLE}}";

/// Marker line expanded into the signature blocks.
pub const SIGNATURE_MARKER: &str = "{{FIRMAS}}";

/// Caption line opening the agreements section.
pub const AGREEMENTS_CAPTION: &str = "ACUERDOS";

/// Caption line opening the closing section.
pub const CLOSING_CAPTION: &str = "CLAUSURA DE LA SESIÓN.";

/// Exact attendee title that earns the standalone signature stanza.
pub const CHAIR_TITLE: &str = "Presidente Municipal";

/// Number of leading narrative lines rendered as the repeating page header.
pub const HEADER_LINE_COUNT: usize = 4;

/// Dashes on each side of the agreements caption divider.
pub const AGREEMENTS_DASH_RUN: usize = 32;

/// Dashes in the short spacer line under the agreements divider.
pub const AGREEMENTS_SPACER_RUN: usize = 8;

/// Dashes on each side of the closing caption divider.
pub const CLOSING_DASH_RUN: usize = 29;

/// Underscores in the signature rule above each signatory's name.
pub const SIGNATURE_RULE_LEN: usize = 25;

/// Spanish month names, January first.
pub const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Point-reference phrases bolded wherever they appear in body text.
pub const POINT_KEYWORDS: [&str; 12] = [
    "Primer Punto",
    "Segundo Punto",
    "Tercer Punto",
    "Cuarto Punto",
    "Quinto Punto",
    "Sexto Punto",
    "punto uno",
    "punto dos",
    "punto tres",
    "punto cuatro",
    "punto cinco",
    "punto seis",
];
