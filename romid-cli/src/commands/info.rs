use std::path::PathBuf;

use romid_lib::OutputFormat;
use romid_lib::display::{render_info_json, render_info_text};

use super::{Outcome, load_dat};
use crate::error::CliError;

/// Print the DAT's header block and entry counts.
pub(crate) fn run_info(dat: Option<PathBuf>, format: OutputFormat) -> Result<Outcome, CliError> {
    let col = load_dat(dat)?;

    match format {
        OutputFormat::Json => println!("{}", render_info_json(&col)?),
        // `name` is rejected by the argument parser.
        OutputFormat::Text | OutputFormat::Name => print!("{}", render_info_text(&col)),
    }

    Ok(Outcome::Success)
}
