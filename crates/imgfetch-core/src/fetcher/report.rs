//! Per-URL outcomes and the end-of-run report.

use crate::error::FetchError;
use std::path::PathBuf;

/// What happened to one URL.
#[derive(Debug)]
pub enum UrlOutcome {
    /// Image written to `path`.
    Saved { path: PathBuf },
    /// Content already present in the output directory or earlier in this run.
    Duplicate,
    /// Response did not declare an `image/*` content type.
    NotImage { content_type: Option<String> },
    /// Transport, HTTP status, or write failure.
    Failed(FetchError),
}

#[derive(Debug)]
pub struct UrlReport {
    pub url: String,
    pub outcome: UrlOutcome,
}

/// Outcomes of a run, in input order.
#[derive(Debug, Default)]
pub struct FetchReport {
    pub entries: Vec<UrlReport>,
}

impl FetchReport {
    pub fn saved(&self) -> usize {
        self.count(|o| matches!(o, UrlOutcome::Saved { .. }))
    }

    pub fn duplicates(&self) -> usize {
        self.count(|o| matches!(o, UrlOutcome::Duplicate))
    }

    pub fn rejected(&self) -> usize {
        self.count(|o| matches!(o, UrlOutcome::NotImage { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, UrlOutcome::Failed(_)))
    }

    /// Paths written during the run.
    pub fn saved_paths(&self) -> Vec<&PathBuf> {
        self.entries
            .iter()
            .filter_map(|e| match &e.outcome {
                UrlOutcome::Saved { path } => Some(path),
                _ => None,
            })
            .collect()
    }

    fn count(&self, pred: impl Fn(&UrlOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }
}
