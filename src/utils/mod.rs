use url::Url;

const FALLBACK_FILENAME: &str = "download";

/// Sanitize filename to remove invalid characters
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            c if c.is_control() => '_',
            _ => c,
        })
        .collect::<String>()
        .trim()
        .trim_matches('.')
        .to_string()
}

/// Suggested save name for an asset URL: its last path segment, sanitized.
pub fn filename_from_url(raw: &str) -> String {
    Url::parse(raw.trim())
        .ok()
        .and_then(|url| {
            url.path_segments()
                .and_then(|segments| segments.filter(|s| !s.is_empty()).next_back())
                .map(sanitize_filename)
        })
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_FILENAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("test/file.bin"), "test_file.bin");
        assert_eq!(sanitize_filename("normal-name.bin"), "normal-name.bin");
        assert_eq!(sanitize_filename(" ..hidden. "), "hidden");
    }

    #[test]
    fn test_filename_from_url() {
        assert_eq!(filename_from_url("https://example.com/a.bin"), "a.bin");
        assert_eq!(
            filename_from_url("https://example.com/assets/pack.zip?v=2"),
            "pack.zip"
        );
        assert_eq!(filename_from_url("https://example.com/dir/"), "dir");
        assert_eq!(filename_from_url("https://example.com"), "download");
        assert_eq!(filename_from_url("not a url"), "download");
    }
}
