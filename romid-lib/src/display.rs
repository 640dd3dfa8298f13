//! Rendering of identification results and DAT metadata.
//!
//! Pure string formatting shared by every frontend. Colors are left to the
//! caller.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use romid_dat::dat::unquote;
use romid_dat::{Collection, FileInfo, MatchMethod, Rom, RomMatch};

use crate::error::LibError;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// Indented `key: value` lines
    Text,
    /// Bare ROM name, one per line
    Name,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown output format '{0}' (expected json, text, or name)")]
pub struct FormatParseError(String);

impl FromStr for OutputFormat {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            "name" => Ok(Self::Name),
            _ => Err(FormatParseError(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Name => "name",
        })
    }
}

pub fn method_label(method: MatchMethod) -> &'static str {
    match method {
        MatchMethod::Md5 => "MD5",
        MatchMethod::Sha1 => "SHA1",
    }
}

// ---------------------------------------------------------------------------
// Matches
// ---------------------------------------------------------------------------

/// JSON array of the matched ROM records, in the order given.
pub fn render_roms_json(roms: &[&Rom]) -> Result<String, LibError> {
    Ok(serde_json::to_string_pretty(roms)?)
}

/// One ROM name per line, quotes removed.
pub fn render_names(roms: &[&Rom]) -> String {
    roms.iter()
        .map(|r| format!("{}\n", r.display_name()))
        .collect()
}

/// Indented key/value block describing one match.
pub fn render_match_text(label: &str, m: &RomMatch<'_>) -> String {
    let mut out = format!("{label}\n");
    push_field(&mut out, "game", m.game.display_name());
    push_field(&mut out, "rom", m.rom.display_name());
    push_field(&mut out, "size", &m.rom.size);
    push_field(&mut out, "crc", &m.rom.crc);
    push_field(&mut out, "md5", &m.rom.md5);
    push_field(&mut out, "sha1", &m.rom.sha1);
    push_field(&mut out, "flags", &m.rom.flags);
    push_field(&mut out, "matched by", method_label(m.method));
    out
}

fn push_field(out: &mut String, key: &str, value: &str) {
    if !value.is_empty() {
        out.push_str(&format!("  {key}: {value}\n"));
    }
}

// ---------------------------------------------------------------------------
// DAT metadata
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct CatalogSummary<'a> {
    clrmamepro: &'a FileInfo,
    games: usize,
    roms: usize,
}

/// Header block plus game/ROM counts as JSON.
pub fn render_info_json(col: &Collection) -> Result<String, LibError> {
    let summary = CatalogSummary {
        clrmamepro: &col.file_info,
        games: col.games.len(),
        roms: col.rom_count(),
    };
    Ok(serde_json::to_string_pretty(&summary)?)
}

/// Header block plus game/ROM counts as indented text.
pub fn render_info_text(col: &Collection) -> String {
    let info = &col.file_info;
    let mut out = String::from("clrmamepro\n");
    push_field(&mut out, "name", unquote(&info.name));
    push_field(&mut out, "description", unquote(&info.description));
    push_field(&mut out, "version", unquote(&info.version));
    push_field(&mut out, "comment", unquote(&info.comment));
    out.push_str(&format!("  games: {}\n", col.games.len()));
    out.push_str(&format!("  roms: {}\n", col.rom_count()));
    out
}
