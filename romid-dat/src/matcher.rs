use crate::dat::{Collection, Game, Rom};

/// The digests computed for one candidate file.
///
/// Digests are uppercased on construction so they compare equal to the
/// uppercase hex written in No-Intro style DATs. Empty strings are treated
/// as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateDigests {
    md5: Option<String>,
    sha1: Option<String>,
}

impl CandidateDigests {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_md5(mut self, md5: impl AsRef<str>) -> Self {
        self.md5 = normalize_digest(md5.as_ref());
        self
    }

    pub fn with_sha1(mut self, sha1: impl AsRef<str>) -> Self {
        self.sha1 = normalize_digest(sha1.as_ref());
        self
    }

    pub fn md5(&self) -> Option<&str> {
        self.md5.as_deref()
    }

    pub fn sha1(&self) -> Option<&str> {
        self.sha1.as_deref()
    }

    /// True if no digest was supplied; such a query can never match.
    pub fn is_empty(&self) -> bool {
        self.md5.is_none() && self.sha1.is_none()
    }
}

fn normalize_digest(digest: &str) -> Option<String> {
    let digest = digest.trim();
    if digest.is_empty() {
        None
    } else {
        Some(digest.to_uppercase())
    }
}

/// Which digest produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMethod {
    Md5,
    Sha1,
}

/// A ROM record found by [`find_rom`], together with the game that owns it.
#[derive(Debug, Clone, Copy)]
pub struct RomMatch<'a> {
    pub game: &'a Game,
    pub rom: &'a Rom,
    /// Index into `Collection::games`
    pub game_index: usize,
    /// Index of the ROM within the game
    pub rom_index: usize,
    pub method: MatchMethod,
}

/// Result of looking up a candidate's digests in a collection.
#[derive(Debug, Clone, Copy)]
pub enum LookupResult<'a> {
    Match(RomMatch<'a>),
    /// No ROM record carries either digest.
    NotFound,
}

impl<'a> LookupResult<'a> {
    pub fn into_match(self) -> Option<RomMatch<'a>> {
        match self {
            LookupResult::Match(m) => Some(m),
            LookupResult::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Match(_))
    }
}

/// Find the first ROM whose MD5 **or** SHA1 equals the candidate's.
///
/// Games are scanned in file order, then ROMs within each game. Either digest
/// alone is enough: DATs often record only one of the two, and each supplied
/// digest is compared independently against what the record has. Do not
/// tighten this to require both.
pub fn find_rom<'a>(col: &'a Collection, digests: &CandidateDigests) -> LookupResult<'a> {
    if digests.is_empty() {
        return LookupResult::NotFound;
    }

    for (game_index, game) in col.games.iter().enumerate() {
        for (rom_index, rom) in game.roms.iter().enumerate() {
            let method = if digests.md5().is_some_and(|md5| rom.md5 == md5) {
                MatchMethod::Md5
            } else if digests.sha1().is_some_and(|sha1| rom.sha1 == sha1) {
                MatchMethod::Sha1
            } else {
                continue;
            };

            return LookupResult::Match(RomMatch {
                game,
                rom,
                game_index,
                rom_index,
                method,
            });
        }
    }

    LookupResult::NotFound
}

#[cfg(test)]
#[path = "tests/matcher_tests.rs"]
mod tests;
