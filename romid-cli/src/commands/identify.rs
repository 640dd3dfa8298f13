use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use romid_dat::Rom;
use romid_lib::display::{render_match_text, render_names, render_roms_json};
use romid_lib::{Identification, OutputFormat, identify_paths};

use super::{Outcome, load_dat};
use crate::error::CliError;

/// Identify each file (or each member of a .zip) against the DAT.
///
/// Unknown and unreadable files are reported and skipped; they never stop
/// the remaining files from being processed.
pub(crate) fn run_identify(
    dat: Option<PathBuf>,
    format: OutputFormat,
    files: &[PathBuf],
) -> Result<Outcome, CliError> {
    let col = load_dat(dat)?;

    let reports = identify_paths(&col, files);
    for report in &reports {
        match &report.result {
            Ok(ids) => {
                for id in ids.iter().filter(|id| id.matched().is_none()) {
                    log::warn!(
                        "{} {}: not found in DAT",
                        "\u{2718}".if_supports_color(Stderr, |t| t.red()),
                        id.candidate.label,
                    );
                }
            }
            Err(e) => {
                log::warn!(
                    "{} {}: {}",
                    "\u{2718}".if_supports_color(Stderr, |t| t.red()),
                    report.path.display(),
                    e,
                );
            }
        }
    }

    let matched: Vec<&Identification<'_>> = reports.iter().flat_map(|r| r.matches()).collect();
    let roms: Vec<&Rom> = matched
        .iter()
        .filter_map(|id| id.matched().map(|m| m.rom))
        .collect();

    match format {
        OutputFormat::Json => println!("{}", render_roms_json(&roms)?),
        OutputFormat::Name => print!("{}", render_names(&roms)),
        OutputFormat::Text => {
            for id in &matched {
                if let Some(m) = id.matched() {
                    print!("{}", render_match_text(&id.candidate.label, m));
                }
            }
        }
    }

    log::debug!(
        "Identified {} candidates from {} paths",
        matched.len(),
        reports.len()
    );

    Ok(Outcome::from_match_count(matched.len()))
}
