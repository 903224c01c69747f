//! In-memory index of content digests already present in the output directory.
//!
//! Seeded once per run by hashing every regular file in the directory, then
//! grown by the fetch loop as images are saved. Nothing is persisted; the next
//! run rebuilds it from disk.

use crate::checksum::{digest_path, ContentDigest};
use crate::error::SeedError;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Default, Clone)]
pub struct DuplicateIndex {
    digests: HashSet<ContentDigest>,
}

impl DuplicateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hashes every regular file directly inside `dir`.
    ///
    /// Subdirectories and other non-regular entries are ignored. A missing
    /// directory yields an empty index. Any file that cannot be read aborts
    /// the seed with [`SeedError::ReadFile`].
    pub fn seed(dir: &Path) -> Result<Self, SeedError> {
        let mut index = Self::new();
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(index),
            Err(source) => {
                return Err(SeedError::ReadDir {
                    path: dir.to_path_buf(),
                    source,
                })
            }
        };

        for entry in entries {
            let entry = entry.map_err(|source| SeedError::ReadDir {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            // Follows symlinks, so a link to a regular file is hashed too.
            let is_file = fs::metadata(&path)
                .map(|m| m.is_file())
                .map_err(|source| SeedError::ReadFile {
                    path: path.clone(),
                    source,
                })?;
            if !is_file {
                continue;
            }
            let digest = digest_path(&path).map_err(|source| SeedError::ReadFile {
                path: path.clone(),
                source,
            })?;
            index.insert(digest);
        }

        tracing::debug!(
            "seeded duplicate index with {} digests from {}",
            index.len(),
            dir.display()
        );
        Ok(index)
    }

    pub fn contains(&self, digest: &ContentDigest) -> bool {
        self.digests.contains(digest)
    }

    /// Adds `digest`; returns false if it was already present.
    pub fn insert(&mut self, digest: ContentDigest) -> bool {
        self.digests.insert(digest)
    }

    pub fn len(&self) -> usize {
        self.digests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }
}
