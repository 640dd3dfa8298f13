//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use romid_lib::OutputFormat;

#[derive(Parser)]
#[command(name = "romid")]
#[command(about = "Identify ROM files against ClrMamePro DAT files", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which DAT file to load.
#[derive(Args, Clone)]
pub(crate) struct DatArgs {
    /// DAT file to match against (defaults to the configured DAT)
    #[arg(short, long)]
    pub dat: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Identify files (plain or .zip) by their MD5/SHA1 digests
    Identify {
        #[command(flatten)]
        dat: DatArgs,

        /// Output format: json, text, or name
        #[arg(short, long, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Files to identify
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Show DAT header information and entry counts
    Info {
        #[command(flatten)]
        dat: DatArgs,

        /// Output format: json or text
        #[arg(short, long, default_value_t = OutputFormat::Text, value_parser = parse_info_format)]
        format: OutputFormat,
    },

    /// Manage the default DAT setting
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective default DAT
    Show,

    /// Print the settings file path
    Path,

    /// Set the default DAT file
    SetDat {
        /// Path to a ClrMamePro DAT file
        path: PathBuf,
    },

    /// Remove the default DAT setting
    ClearDat,
}

/// `info` has no per-ROM output, so the `name` format does not apply.
fn parse_info_format(s: &str) -> Result<OutputFormat, String> {
    match s.parse::<OutputFormat>() {
        Ok(OutputFormat::Name) => Err("info supports json or text".to_string()),
        Ok(format) => Ok(format),
        Err(e) => Err(e.to_string()),
    }
}
