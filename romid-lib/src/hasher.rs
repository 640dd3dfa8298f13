use std::io::Read;

use serde::Serialize;
use sha1::Digest;

use romid_dat::CandidateDigests;

const CHUNK_SIZE: usize = 64 * 1024; // 64 KB

/// Hash results for a file. All digests are uppercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileHashes {
    pub crc32: String,
    pub md5: String,
    pub sha1: String,
    /// Number of bytes hashed
    pub data_size: u64,
}

impl FileHashes {
    /// The digests the DAT matcher compares against.
    pub fn digests(&self) -> CandidateDigests {
        CandidateDigests::new()
            .with_md5(&self.md5)
            .with_sha1(&self.sha1)
    }
}

/// Compute CRC32, MD5, and SHA1 of a stream in a single pass.
pub fn compute_hashes<R: Read + ?Sized>(reader: &mut R) -> std::io::Result<FileHashes> {
    compute_hashes_with_progress(reader, &|_| {})
}

/// Compute all hashes with a progress callback.
/// The callback receives the number of bytes processed so far.
pub fn compute_hashes_with_progress<R: Read + ?Sized>(
    reader: &mut R,
    progress: &dyn Fn(u64),
) -> std::io::Result<FileHashes> {
    let mut crc = crc32fast::Hasher::new();
    let mut sha = sha1::Sha1::new();
    let mut md5_ctx = md5::Context::new();
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut processed: u64 = 0;

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        crc.update(&buf[..n]);
        sha.update(&buf[..n]);
        md5_ctx.consume(&buf[..n]);
        processed += n as u64;
        progress(processed);
    }

    Ok(FileHashes {
        crc32: format!("{:08X}", crc.finalize()),
        md5: format!("{:X}", md5_ctx.compute()),
        sha1: format!("{:X}", sha.finalize()),
        data_size: processed,
    })
}

#[cfg(test)]
#[path = "tests/hasher_tests.rs"]
mod tests;
