//! Parse raw response header lines into `Headers`.

use crate::request::Headers;

/// Headers of the last response in `lines`.
///
/// With redirects followed, curl reports one header block per hop; each
/// status line (`HTTP/...`) starts a new block.
pub(crate) fn parse_headers(lines: &[String]) -> Headers {
    let mut headers = Headers::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            headers = Headers::new();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim(), value.trim());
        }
    }

    headers
}
