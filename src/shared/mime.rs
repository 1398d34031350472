//! File extension to MIME type lookup

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

/// MIME type used when the extension is unknown
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Global map of lowercase file extensions to MIME types
pub static MIME_TYPES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Images
    map.insert("png", "image/png");
    map.insert("jpg", "image/jpeg");
    map.insert("jpeg", "image/jpeg");
    map.insert("gif", "image/gif");
    map.insert("bmp", "image/bmp");
    map.insert("webp", "image/webp");
    map.insert("svg", "image/svg+xml");
    map.insert("ico", "image/vnd.microsoft.icon");
    map.insert("tif", "image/tiff");
    map.insert("tiff", "image/tiff");
    map.insert("avif", "image/avif");
    map.insert("heic", "image/heic");

    // Documents
    map.insert("pdf", "application/pdf");
    map.insert("doc", "application/msword");
    map.insert("docx", "application/vnd.openxmlformats-officedocument.wordprocessingml.document");
    map.insert("rtf", "application/rtf");
    map.insert("odt", "application/vnd.oasis.opendocument.text");

    // Text
    map.insert("txt", "text/plain");
    map.insert("md", "text/markdown");
    map.insert("csv", "text/csv");
    map.insert("html", "text/html");
    map.insert("htm", "text/html");
    map.insert("json", "application/json");

    // Archives
    map.insert("zip", "application/zip");
    map.insert("gz", "application/gzip");
    map.insert("tar", "application/x-tar");

    // Media
    map.insert("mp3", "audio/mpeg");
    map.insert("wav", "audio/wav");
    map.insert("mp4", "video/mp4");
    map.insert("mov", "video/quicktime");

    map
});

/// Guess the MIME type of a file name from its extension
pub fn guess_from_name(name: &str) -> &'static str {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| MIME_TYPES.get(ext.to_ascii_lowercase().as_str()).copied())
        .unwrap_or(OCTET_STREAM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_known_extensions() {
        assert_eq!(guess_from_name("shot.png"), "image/png");
        assert_eq!(guess_from_name("SHOT.JPG"), "image/jpeg");
        assert_eq!(guess_from_name("resume.pdf"), "application/pdf");
    }

    #[test]
    fn test_guess_unknown_falls_back() {
        assert_eq!(guess_from_name("Makefile"), OCTET_STREAM);
        assert_eq!(guess_from_name("archive.xyz"), OCTET_STREAM);
    }
}
