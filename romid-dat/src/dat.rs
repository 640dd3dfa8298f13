use serde::Serialize;

/// A parsed ClrMamePro DAT file.
///
/// Field values are kept exactly as they appeared in the source text,
/// including the surrounding quotes of quoted literals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Collection {
    #[serde(rename = "clrmamepro")]
    pub file_info: FileInfo,
    pub games: Vec<Game>,
}

/// The `clrmamepro ( ... )` header block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    pub name: String,
    pub description: String,
    pub version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// A single `game ( ... )` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Game {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub serial: String,
    #[serde(rename = "rom")]
    pub roms: Vec<Rom>,
}

/// A `rom ( ... )` record nested inside a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Rom {
    pub name: String,
    /// Decimal size as written; never parsed.
    pub size: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub crc: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub md5: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sha1: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub flags: String,
}

impl Collection {
    /// Total number of ROM records across all games.
    pub fn rom_count(&self) -> usize {
        self.games.iter().map(|g| g.roms.len()).sum()
    }
}

impl Game {
    /// Game name with surrounding quotes removed.
    pub fn display_name(&self) -> &str {
        unquote(&self.name)
    }
}

impl Rom {
    /// ROM name with surrounding quotes removed.
    pub fn display_name(&self) -> &str {
        unquote(&self.name)
    }
}

/// Strip one pair of surrounding double quotes, if present.
///
/// `"Game (USA)"` → `Game (USA)`; unquoted literals are returned as-is.
pub fn unquote(literal: &str) -> &str {
    literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(literal)
}
