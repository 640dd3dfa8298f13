//! Candidate sources: plain files and ZIP archive members.
//!
//! A `.zip` path yields one candidate per file inside the archive; anything
//! else is hashed as a single file.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Serialize;

use crate::error::LibError;
use crate::hasher::{FileHashes, compute_hashes};

/// A hashed file ready to be looked up in a DAT.
#[derive(Debug, Clone, Serialize)]
pub struct HashedCandidate {
    /// Path for plain files, `archive.zip/member` for archive members
    pub label: String,
    pub hashes: FileHashes,
}

/// Whether the path should be opened as a ZIP archive (by extension).
pub fn is_zip(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("zip"))
}

/// Hash every candidate reachable from `path`.
///
/// Archive members that cannot be read are logged and skipped; failing to
/// open `path` itself is an error.
pub fn hash_candidates(path: &Path) -> Result<Vec<HashedCandidate>, LibError> {
    if is_zip(path) {
        hash_zip_members(path)
    } else {
        let file = File::open(path)?;
        let hashes = compute_hashes(&mut BufReader::new(file))?;
        log::debug!("Hashed {} ({} bytes)", path.display(), hashes.data_size);
        Ok(vec![HashedCandidate {
            label: path.display().to_string(),
            hashes,
        }])
    }
}

fn hash_zip_members(path: &Path) -> Result<Vec<HashedCandidate>, LibError> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(BufReader::new(file))?;
    let mut candidates = Vec::with_capacity(archive.len());

    for i in 0..archive.len() {
        let mut entry = match archive.by_index(i) {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping entry {i} of {}: {e}", path.display());
                continue;
            }
        };
        if entry.is_dir() {
            continue;
        }

        let label = format!("{}/{}", path.display(), entry.name());
        match compute_hashes(&mut entry) {
            Ok(hashes) => {
                log::debug!("Hashed {label} ({} bytes)", hashes.data_size);
                candidates.push(HashedCandidate { label, hashes });
            }
            Err(e) => log::warn!("Failed to read {label}: {e}"),
        }
    }

    Ok(candidates)
}
