//! Content digests (SHA-256) used to recognise identical images.
//!
//! Two byte-identical bodies always produce the same digest, whether they
//! came off the network or were read back from the output directory.

use sha2::{Digest, Sha256};
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// Lowercase hex SHA-256 of some content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentDigest(String);

impl ContentDigest {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Digest of an in-memory body. Never fails, including for empty input.
pub fn digest_bytes(data: &[u8]) -> ContentDigest {
    ContentDigest(hex::encode(Sha256::digest(data)))
}

/// Digest of a file on disk, read in chunks.
pub fn digest_path(path: &Path) -> io::Result<ContentDigest> {
    let mut f = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(ContentDigest(hex::encode(hasher.finalize())))
}
