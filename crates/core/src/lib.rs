//! # Acta Core
//!
//! Composition engine for municipal session records (actas de sesión de
//! cabildo).
//!
//! This crate turns a placeholder-filled narrative text and an attendee
//! roster into an ordered sequence of typed layout blocks:
//! - Spanish numeral and date spelling for the formal clauses
//! - Line classification with role-specific typography
//! - Attendance table, signature pairing and agreements dividers
//!
//! **No I/O concerns**: reading input files, writing the layout YAML and
//! command parsing belong in `acta-cli`; the wire shapes live in
//! `acta-layout`.

pub mod assembler;
pub mod attendance;
pub mod classifier;
pub mod constants;
pub mod cuenta_publica;
pub mod emphasis;
pub mod error;
pub mod numerals;
pub mod phrases;
pub mod signatures;
pub mod template;

pub use assembler::assemble;
pub use attendance::attendance_table;
pub use classifier::{classify_line, Classified, ClassifiedLine};
pub use cuenta_publica::{monthly_account_content, AccountContent};
pub use emphasis::emphasise;
pub use error::{ActaError, ActaResult};
pub use numerals::spell;
pub use phrases::{phrase_clause, phrase_header_caption};
pub use signatures::signature_blocks;
pub use template::{
    fill_template, number_agreements, SessionDetails, ACCOUNT_REDUNDANT_PASSAGE, DEFAULT_TEMPLATE,
};
