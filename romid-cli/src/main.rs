//! romid CLI
//!
//! Identify ROM files by matching their digests against ClrMamePro DAT files.
//!
//! Exit codes: 0 when something was identified (or the command succeeded),
//! 2 when no candidate matched, 1 on any error.

mod cli_types;
mod commands;
mod error;
mod logging;

use std::process::ExitCode;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use commands::Outcome;
use error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let result = run(cli.command);
    if let Err(e) = &result {
        log::error!("{e}");
    }
    ExitCode::from(commands::exit_status(&result))
}

fn run(command: Commands) -> Result<Outcome, CliError> {
    match command {
        Commands::Identify { dat, format, files } => {
            commands::identify::run_identify(dat.dat, format, &files)
        }
        Commands::Info { dat, format } => commands::info::run_info(dat.dat, format),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::SetDat { path } => commands::config::run_config_set_dat(&path),
            ConfigAction::ClearDat => commands::config::run_config_clear_dat(),
        },
    }
}
