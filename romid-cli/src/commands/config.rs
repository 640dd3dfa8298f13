use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use romid_lib::settings::{load_dat_path, save_dat_path, settings_path};

use super::Outcome;
use crate::error::CliError;

/// Show the settings file and the configured default DAT.
pub(crate) fn run_config_show() -> Result<Outcome, CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "romid Configuration".if_supports_color(Stderr, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stderr, |t| t.cyan()),
            "(exists)".if_supports_color(Stderr, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stderr, |t| t.cyan()),
            "(not found)".if_supports_color(Stderr, |t| t.dimmed()),
        );
    }

    match load_dat_path(&path)? {
        Some(dat) => {
            let status = if dat.exists() { "" } else { " (missing)" };
            log::info!(
                "  Default DAT:   {}{}",
                dat.display().if_supports_color(Stderr, |t| t.cyan()),
                status.if_supports_color(Stderr, |t| t.red()),
            );
        }
        None => {
            log::info!(
                "  Default DAT:   {}",
                "not set".if_supports_color(Stderr, |t| t.dimmed()),
            );
        }
    }

    Ok(Outcome::Success)
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<Outcome, CliError> {
    println!("{}", settings_path().display());
    Ok(Outcome::Success)
}

/// Store `dat` as the default DAT.
pub(crate) fn run_config_set_dat(dat: &Path) -> Result<Outcome, CliError> {
    let dat: PathBuf = if dat.exists() {
        std::fs::canonicalize(dat)?
    } else {
        log::warn!("{} does not exist (saving anyway)", dat.display());
        dat.to_path_buf()
    };

    save_dat_path(&settings_path(), Some(&dat))?;
    log::info!(
        "{} Default DAT set to {}",
        "\u{2714}".if_supports_color(Stderr, |t| t.green()),
        dat.display(),
    );
    Ok(Outcome::Success)
}

/// Remove the default DAT from the settings file.
pub(crate) fn run_config_clear_dat() -> Result<Outcome, CliError> {
    save_dat_path(&settings_path(), None)?;
    log::info!(
        "{} Default DAT cleared",
        "\u{2714}".if_supports_color(Stderr, |t| t.green()),
    );
    Ok(Outcome::Success)
}
