//! Hashing, candidate discovery, and rendering around the `romid-dat` core.

pub mod archive;
pub mod display;
pub mod error;
pub mod hasher;
pub mod identify;
pub mod settings;

pub use archive::{HashedCandidate, hash_candidates, is_zip};
pub use display::OutputFormat;
pub use error::LibError;
pub use hasher::{FileHashes, compute_hashes};
pub use identify::{Identification, PathReport, identify_candidate, identify_path, identify_paths};
