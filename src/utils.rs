//! Small helpers shared across the crate.
use percent_encoding::percent_decode_str;
use sanitize_filename::sanitize;
use url::Url;

/// Extracts a clean output filename from a URL.
///
/// 1. Parses the URL and takes the last path segment.
/// 2. URL-decodes it (`%20` becomes a space, and so on).
/// 3. Sanitizes characters the OS would reject.
/// 4. Falls back to `output.bin` when the URL has no usable segment.
pub fn filename_from_url(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| {
            u.path_segments()
                .map(|mut s| s.next_back().unwrap_or("").to_string())
        })
        .map(|s| percent_decode_str(&s).decode_utf8_lossy().to_string())
        .map(sanitize)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "output.bin".to_string())
}
