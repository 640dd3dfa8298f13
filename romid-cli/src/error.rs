use thiserror::Error;

use romid_dat::DatError;
use romid_lib::LibError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// DAT file could not be read or parsed
    #[error("DAT error: {0}")]
    Dat(#[from] DatError),

    /// Hashing, settings, or rendering failed
    #[error("{0}")]
    Lib(#[from] LibError),

    /// No DAT was given and none is configured
    #[error("No DAT file given; pass --dat or run 'romid config set-dat <path>'")]
    NoDat,

    /// Logger setup failed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
