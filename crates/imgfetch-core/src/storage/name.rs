//! Collision-free filename resolution inside the output directory.

use std::path::{Path, PathBuf};

/// Splits `name` into base and extension, keeping the dot with the extension.
///
/// Only the last dot counts, and leading dots never start an extension:
/// `a.tar.gz` → (`a.tar`, `.gz`), `.hidden` → (`.hidden`, ``).
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if name[..idx].chars().any(|c| c != '.') => (&name[..idx], &name[idx..]),
        _ => (name, ""),
    }
}

/// Returns `dir/filename` if nothing exists there yet, otherwise the first
/// free `dir/{base}_{n}{ext}` for n = 1, 2, ...
pub fn resolve_collision(dir: &Path, filename: &str) -> PathBuf {
    let candidate = dir.join(filename);
    if !candidate.exists() {
        return candidate;
    }
    let (base, ext) = split_extension(filename);
    let mut counter: u64 = 1;
    loop {
        let candidate = dir.join(format!("{}_{}{}", base, counter, ext));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
