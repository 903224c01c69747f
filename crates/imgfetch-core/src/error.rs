//! Error types for the fetch loop and the duplicate-index seed.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while processing a single URL. Never aborts the run.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (bad URL, DNS, refused connection, timeout, ...).
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// Final response had a non-2xx status.
    #[error("HTTP {0}")]
    HttpStatus(u32),
    /// Writing the image to disk failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FetchError {
    /// True for network-level failures (transport errors and HTTP error statuses).
    pub fn is_connection(&self) -> bool {
        matches!(self, FetchError::Transport(_) | FetchError::HttpStatus(_))
    }
}

/// Failure while hashing the files already in the output directory.
/// Fatal to the whole run.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("cannot list {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read existing file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_is_connection_class() {
        let err = FetchError::HttpStatus(404);
        assert!(err.is_connection());
        assert_eq!(err.to_string(), "HTTP 404");
    }

    #[test]
    fn io_error_is_generic_class() {
        let err = FetchError::Io {
            path: PathBuf::from("Fetched_Images/a.png"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.is_connection());
        assert_eq!(err.to_string(), "Fetched_Images/a.png: denied");
    }

    #[test]
    fn seed_error_names_path() {
        let err = SeedError::ReadFile {
            path: PathBuf::from("Fetched_Images/locked.jpg"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("locked.jpg"));
    }
}
