//! The sequential fetch loop.
//!
//! For each URL, in input order: GET, content-type gate, duplicate check,
//! collision-free naming, write, index insert. A failing URL is recorded and
//! the loop moves on; nothing is retried.

mod report;

use crate::checksum::digest_bytes;
use crate::dedup::DuplicateIndex;
use crate::http::ImageSource;
use crate::storage::{ensure_output_dir, resolve_collision, write_image};
use crate::url_model::derive_filename;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub use report::{FetchReport, UrlOutcome, UrlReport};

/// Declared content types accepted for saving.
const IMAGE_CONTENT_TYPE_PREFIX: &str = "image/";

/// True if the declared content type is an image type. No sniffing.
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type.starts_with(IMAGE_CONTENT_TYPE_PREFIX)
}

pub struct Fetcher<S> {
    source: S,
    index: DuplicateIndex,
    output_dir: PathBuf,
}

impl<S: ImageSource> Fetcher<S> {
    /// Uses `index` as the initial duplicate set. `output_dir` must exist.
    pub fn new(source: S, index: DuplicateIndex, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            index,
            output_dir: output_dir.into(),
        }
    }

    /// Creates `output_dir` if needed and seeds the index from its files.
    /// A file that cannot be read aborts with an error.
    pub fn open(source: S, output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        ensure_output_dir(&output_dir)?;
        let index = DuplicateIndex::seed(&output_dir)?;
        tracing::info!(
            "output dir {} holds {} distinct images",
            output_dir.display(),
            index.len()
        );
        Ok(Self::new(source, index, output_dir))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn index(&self) -> &DuplicateIndex {
        &self.index
    }

    /// Processes every non-blank URL in order, calling `on_outcome` as soon as
    /// each one finishes.
    pub fn run<I, U, F>(&mut self, urls: I, mut on_outcome: F) -> FetchReport
    where
        I: IntoIterator<Item = U>,
        U: AsRef<str>,
        F: FnMut(&UrlReport),
    {
        let mut report = FetchReport::default();
        for url in urls {
            let url = url.as_ref().trim();
            if url.is_empty() {
                continue;
            }
            let entry = UrlReport {
                url: url.to_string(),
                outcome: self.process_url(url),
            };
            on_outcome(&entry);
            report.entries.push(entry);
        }
        tracing::info!(
            "run finished: {} saved, {} duplicates, {} not images, {} failed",
            report.saved(),
            report.duplicates(),
            report.rejected(),
            report.failed()
        );
        for path in report.saved_paths() {
            tracing::debug!("saved this run: {}", path.display());
        }
        report
    }

    /// Fetches one URL and saves it if it is a new image.
    pub fn process_url(&mut self, url: &str) -> UrlOutcome {
        let fetched = match self.source.fetch(url) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!("fetch {} failed: {}", url, e);
                return UrlOutcome::Failed(e);
            }
        };

        let content_type = fetched.content_type;
        if !content_type.as_deref().is_some_and(is_image_content_type) {
            tracing::info!("rejecting {} (content type {:?})", url, content_type);
            return UrlOutcome::NotImage { content_type };
        }

        let digest = digest_bytes(&fetched.body);
        if self.index.contains(&digest) {
            tracing::info!("duplicate content {} from {}", digest, url);
            return UrlOutcome::Duplicate;
        }

        let filename = derive_filename(url);
        let path = resolve_collision(&self.output_dir, &filename);
        if let Err(e) = write_image(&path, &fetched.body) {
            tracing::warn!("write for {} failed: {}", url, e);
            return UrlOutcome::Failed(e);
        }

        self.index.insert(digest);
        tracing::info!(
            "saved {} ({} bytes) to {}",
            url,
            fetched.body.len(),
            path.display()
        );
        UrlOutcome::Saved { path }
    }
}
