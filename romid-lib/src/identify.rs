//! Identify candidate files against a parsed DAT.

use std::path::{Path, PathBuf};

use romid_dat::{Collection, LookupResult, RomMatch, find_rom};

use crate::archive::{HashedCandidate, hash_candidates};
use crate::error::LibError;

/// The outcome for one candidate file.
#[derive(Debug, Clone)]
pub struct Identification<'a> {
    pub candidate: HashedCandidate,
    pub result: LookupResult<'a>,
}

impl<'a> Identification<'a> {
    pub fn matched(&self) -> Option<&RomMatch<'a>> {
        match &self.result {
            LookupResult::Match(m) => Some(m),
            LookupResult::NotFound => None,
        }
    }
}

/// Look up an already-hashed candidate.
pub fn identify_candidate(col: &Collection, candidate: HashedCandidate) -> Identification<'_> {
    let result = find_rom(col, &candidate.hashes.digests());
    match &result {
        LookupResult::Match(m) => log::debug!(
            "{} matched {} by {:?}",
            candidate.label,
            m.rom.display_name(),
            m.method
        ),
        LookupResult::NotFound => log::debug!("{} not found in DAT", candidate.label),
    }
    Identification { candidate, result }
}

/// Hash and look up every candidate under `path` (one for a plain file,
/// one per member for a ZIP archive).
pub fn identify_path<'a>(
    col: &'a Collection,
    path: &Path,
) -> Result<Vec<Identification<'a>>, LibError> {
    let candidates = hash_candidates(path)?;
    Ok(candidates
        .into_iter()
        .map(|c| identify_candidate(col, c))
        .collect())
}

/// Per-path outcome of [`identify_paths`].
#[derive(Debug)]
pub struct PathReport<'a> {
    pub path: PathBuf,
    pub result: Result<Vec<Identification<'a>>, LibError>,
}

impl<'a> PathReport<'a> {
    /// Matched identifications for this path; empty if the path failed.
    pub fn matches(&self) -> impl Iterator<Item = &Identification<'a>> {
        self.result
            .iter()
            .flatten()
            .filter(|id| id.matched().is_some())
    }
}

/// Identify every path in order. A path that cannot be read or hashed is
/// reported in its own entry and does not stop the rest.
pub fn identify_paths<'a, P: AsRef<Path>>(
    col: &'a Collection,
    paths: &[P],
) -> Vec<PathReport<'a>> {
    paths
        .iter()
        .map(|p| {
            let path = p.as_ref();
            let result = identify_path(col, path);
            if let Err(e) = &result {
                log::debug!("{}: {}", path.display(), e);
            }
            PathReport {
                path: path.to_path_buf(),
                result,
            }
        })
        .collect()
}
