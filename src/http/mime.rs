//! MIME type selection
//!
//! Maps lowercase file extensions to Content-Type values. Text-like types
//! carry an explicit `charset=utf-8` so non-ASCII pages render correctly.

use std::collections::HashMap;
use std::path::Path;

/// Extension-to-content-type table. The empty-string key is the fallback
/// for files without an extension; unmapped extensions use it too.
#[derive(Debug)]
pub struct MimeTable {
    types: HashMap<&'static str, &'static str>,
}

impl Default for MimeTable {
    fn default() -> Self {
        let types = HashMap::from([
            ("", Self::GENERIC_BINARY),
            ("html", "text/html; charset=utf-8"),
            ("htm", "text/html; charset=utf-8"),
            ("css", "text/css; charset=utf-8"),
            ("js", "application/javascript; charset=utf-8"),
            ("json", "application/json; charset=utf-8"),
            ("png", "image/png"),
            ("jpg", "image/jpeg"),
            ("jpeg", "image/jpeg"),
            ("gif", "image/gif"),
            ("svg", "image/svg+xml"),
            ("ico", "image/x-icon"),
            ("txt", "text/plain; charset=utf-8"),
            ("pdf", "application/pdf"),
            ("zip", "application/zip"),
            ("mp3", "audio/mpeg"),
            ("mp4", "video/mp4"),
            ("woff", "font/woff"),
            ("woff2", "font/woff2"),
            ("ttf", "font/ttf"),
            ("eot", "application/vnd.ms-fontobject"),
        ]);
        Self { types }
    }
}

impl MimeTable {
    const GENERIC_BINARY: &'static str = "application/octet-stream";

    /// Content type for a file extension. Lookup is case-insensitive;
    /// unknown extensions fall back to the generic binary type.
    pub fn lookup(&self, extension: Option<&str>) -> &'static str {
        let ext = extension.unwrap_or_default().to_ascii_lowercase();
        self.types
            .get(ext.as_str())
            .or_else(|| self.types.get(""))
            .copied()
            .unwrap_or(Self::GENERIC_BINARY)
    }

    /// Content type for a resolved file path.
    pub fn for_path(&self, path: &Path) -> &'static str {
        self.lookup(path.extension().and_then(|e| e.to_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        let table = MimeTable::default();
        assert_eq!(table.lookup(Some("html")), "text/html; charset=utf-8");
        assert_eq!(table.lookup(Some("css")), "text/css; charset=utf-8");
        assert_eq!(table.lookup(Some("js")), "application/javascript; charset=utf-8");
        assert_eq!(table.lookup(Some("json")), "application/json; charset=utf-8");
        assert_eq!(table.lookup(Some("png")), "image/png");
        assert_eq!(table.lookup(Some("mp3")), "audio/mpeg");
        assert_eq!(table.lookup(Some("mp4")), "video/mp4");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = MimeTable::default();
        assert_eq!(table.lookup(Some("HTML")), "text/html; charset=utf-8");
        assert_eq!(table.lookup(Some("Mp3")), "audio/mpeg");
    }

    #[test]
    fn test_unknown_extension_falls_back_to_binary() {
        let table = MimeTable::default();
        assert_eq!(table.lookup(Some("xyz")), "application/octet-stream");
        assert_eq!(table.lookup(None), "application/octet-stream");
        assert_eq!(table.lookup(Some("")), "application/octet-stream");
    }

    #[test]
    fn test_for_path() {
        let table = MimeTable::default();
        assert_eq!(
            table.for_path(Path::new("/site/index.html")),
            "text/html; charset=utf-8"
        );
        assert_eq!(table.for_path(Path::new("/site/music/a.MP3")), "audio/mpeg");
        assert_eq!(
            table.for_path(Path::new("/site/README")),
            "application/octet-stream"
        );
    }
}
