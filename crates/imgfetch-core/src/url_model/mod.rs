//! URL modeling and filename derivation.
//!
//! Derives the local filename for a saved image purely from the URL path text,
//! and splits the user's comma-separated input into individual URLs.

mod list;
mod path;

pub use list::split_url_list;
pub use path::filename_from_url_path;

/// Filename used when the URL path yields nothing usable.
pub const FALLBACK_FILENAME: &str = "downloaded_image";

/// Derives the filename for saving the image fetched from `url`.
///
/// Takes the final path segment verbatim (no percent-decoding, no extension
/// inference from content type). URLs that do not parse, or whose path ends
/// in `/`, get [`FALLBACK_FILENAME`].
///
/// # Examples
///
/// - `derive_filename("https://example.com/cats/tabby.jpg")` → `"tabby.jpg"`
/// - `derive_filename("https://example.com/")` → `"downloaded_image"`
pub fn derive_filename(url: &str) -> String {
    filename_from_url_path(url).unwrap_or_else(|| FALLBACK_FILENAME.to_string())
}
