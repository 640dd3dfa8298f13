use thiserror::Error;

use romid_dat::DatError;

/// Errors that can occur while hashing candidates or rendering results.
#[derive(Debug, Error)]
pub enum LibError {
    /// I/O error while reading a candidate file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The DAT file could not be read or parsed
    #[error("DAT error: {0}")]
    Dat(#[from] DatError),

    /// A ZIP archive could not be opened or read
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// The settings file is unreadable or malformed
    #[error("Settings error: {0}")]
    Settings(String),

    /// JSON rendering failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LibError {
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}
