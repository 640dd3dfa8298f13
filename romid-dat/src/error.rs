/// Errors that can occur while reading or parsing a DAT file.
#[derive(Debug, thiserror::Error)]
pub enum DatError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The parser met a token the grammar does not allow at that position.
    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),

    /// End of input was reached inside an open block.
    #[error("missing paren")]
    MissingClosingParen,
}

impl DatError {
    pub fn unexpected_token(text: impl Into<String>) -> Self {
        Self::UnexpectedToken(text.into())
    }
}
