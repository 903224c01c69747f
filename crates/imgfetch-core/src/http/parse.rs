//! Header line parsing for the final response.

/// Records one raw header line from curl. A status line starts a new response
/// (redirect hop), so earlier lines are discarded. Bytes that are not UTF-8
/// are replaced rather than dropping the line.
pub fn push_header_line(headers: &mut Vec<String>, data: &[u8]) {
    let line = String::from_utf8_lossy(data);
    let line = line.trim_end();
    if line.starts_with("HTTP/") {
        headers.clear();
    }
    headers.push(line.to_string());
}

/// Returns the `Content-Type` value from collected header lines, if present.
pub fn parse_content_type(lines: &[String]) -> Option<String> {
    lines.iter().find_map(|line| {
        let (name, value) = line.trim().split_once(':')?;
        if name.trim().eq_ignore_ascii_case("content-type") {
            Some(value.trim().to_string())
        } else {
            None
        }
    })
}
