#[derive(Debug, thiserror::Error)]
pub enum ActaError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unresolved placeholder: {0}")]
    UnresolvedPlaceholder(String),
    #[error("layout error: {0}")]
    Layout(#[from] acta_layout::LayoutError),
    #[error("invalid text: {0}")]
    Text(#[from] acta_types::TextError),
}

pub type ActaResult<T> = std::result::Result<T, ActaError>;
