//! Layout-block wire model and boundary for the acta composition engine.
//!
//! This crate is responsible for the structured output contract of the
//! composition core: an ordered sequence of typed layout blocks that a
//! downstream renderer turns into a binary document. It also reads and writes
//! the YAML shapes exchanged with callers (the roster file and the composed
//! layout file).
//!
//! Typography meaning lives in `acta-core`; this crate handles data shapes
//! and serialisation only.

pub mod model;
pub mod wire;

pub use model::{
    Alignment, DocumentLayout, LayoutBlock, Paragraph, Table, TableCell, TableRow, TextRun,
};
pub use wire::{layout_parse, layout_render, roster_parse, roster_render};

use thiserror::Error;

/// Errors returned by the `acta-layout` boundary crate.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("layout schema mismatch at {path}: {source}")]
    SchemaMismatch {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid roster: {0}")]
    InvalidRoster(String),
}
