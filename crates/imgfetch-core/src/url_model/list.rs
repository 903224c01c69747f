//! Splitting of the comma-separated URL input line.

/// Splits `line` strictly on `,`, trims each entry and drops empty ones.
/// Order and repeated entries are preserved.
pub fn split_url_list(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
