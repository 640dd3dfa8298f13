pub(crate) mod config;
pub(crate) mod identify;
pub(crate) mod info;

use std::path::PathBuf;

use romid_dat::Collection;

use crate::error::CliError;

/// What a successful command run reports through the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Success,
    /// Ran fine, but no candidate was identified.
    NothingFound,
}

impl Outcome {
    pub(crate) fn from_match_count(matched: usize) -> Self {
        if matched == 0 {
            Self::NothingFound
        } else {
            Self::Success
        }
    }
}

/// Process exit status for a finished command: 0 on success, 2 when nothing
/// was identified, 1 on any error.
pub(crate) fn exit_status(result: &Result<Outcome, CliError>) -> u8 {
    match result {
        Ok(Outcome::Success) => 0,
        Ok(Outcome::NothingFound) => 2,
        Err(_) => 1,
    }
}

/// Resolve and parse the DAT for a command.
///
/// Any parse failure aborts the whole run before candidates are touched.
pub(crate) fn load_dat(cli_override: Option<PathBuf>) -> Result<Collection, CliError> {
    let path = romid_lib::settings::resolve_dat_path(cli_override)?.ok_or(CliError::NoDat)?;
    log::debug!("Loading DAT {}", path.display());

    Ok(romid_dat::parse_dat_file(&path)?)
}
