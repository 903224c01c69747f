//! Filename extraction from URL path.

/// Returns the final segment of the URL path as typed (text after the last `/`).
///
/// The URL must parse, but the segment is taken from the raw input so that
/// spaces and non-ASCII text are not percent-encoded. Query and fragment are
/// excluded. Returns `None` for an empty segment (root or trailing slash) or
/// a dot segment.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    url::Url::parse(url).ok()?;
    let raw = url.split(|c| c == '?' || c == '#').next().unwrap_or(url);
    let path = match raw.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("", |i| &rest[i..]),
        None => raw.split_once(':').map_or(raw, |(_, rest)| rest),
    };
    let segment = path.rsplit('/').next()?;
    if segment.is_empty() || segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}
