//! Accept pattern matching
//!
//! An accept pattern maps MIME patterns to extension lists, e.g.
//! `{"image/*": [], "application/pdf": [".pdf"]}`. A file is accepted when its
//! MIME type matches any key or its name ends with any listed extension. An
//! empty pattern accepts everything.

use anyhow::Result;
use globset::GlobMatcher;
use std::collections::BTreeMap;

use super::filters::{Filter, FilterDecision};
use super::rejection::RejectionCode;
use crate::intake::UploadedFile;
use crate::shared::glob::mime_matcher;

/// Compiled accept pattern
#[derive(Debug, Clone)]
pub struct AcceptFilter {
    mime_types: Vec<GlobMatcher>,
    /// Lowercase extensions including the leading dot
    extensions: Vec<String>,
}

impl AcceptFilter {
    pub fn new(accept: &BTreeMap<String, Vec<String>>) -> Result<Self> {
        let mut mime_types = Vec::with_capacity(accept.len());
        let mut extensions = Vec::new();

        for (pattern, exts) in accept {
            mime_types.push(mime_matcher(pattern.trim())?);
            extensions.extend(exts.iter().map(|ext| normalize_extension(ext)).filter(|ext| ext.len() > 1));
        }

        tracing::debug!(
            "Compiled accept pattern: {} MIME pattern(s), {} extension(s)",
            mime_types.len(),
            extensions.len()
        );

        Ok(Self { mime_types, extensions })
    }

    /// Accepts every file
    pub fn accepts_all(&self) -> bool {
        self.mime_types.is_empty() && self.extensions.is_empty()
    }

    pub fn is_accepted(&self, file: &UploadedFile) -> bool {
        if self.accepts_all() {
            return true;
        }

        if self.mime_types.iter().any(|m| m.is_match(&file.mime_type)) {
            return true;
        }

        let name = file.name.to_lowercase();
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }
}

impl Filter for AcceptFilter {
    fn filter(&self, file: &UploadedFile) -> FilterDecision {
        if self.is_accepted(file) {
            FilterDecision::Accept
        } else {
            FilterDecision::Reject(RejectionCode::FileInvalidType)
        }
    }

    fn name(&self) -> &'static str {
        "AcceptFilter"
    }
}

fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.starts_with('.') { ext } else { format!(".{ext}") }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accept(entries: &[(&str, &[&str])]) -> AcceptFilter {
        let map = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
            .collect();
        AcceptFilter::new(&map).unwrap()
    }

    #[test]
    fn test_mime_wildcard() {
        let filter = accept(&[("image/*", &[])]);
        assert!(filter.is_accepted(&UploadedFile::new("a.jpg", 1, 1, "image/jpeg")));
        assert!(filter.is_accepted(&UploadedFile::new("a.png", 1, 1, "image/png")));
        assert!(!filter.is_accepted(&UploadedFile::new("document.pdf", 1, 1, "application/pdf")));
    }

    #[test]
    fn test_extension_list() {
        let filter = accept(&[("application/x-custom", &["PDF", ".Docx"])]);
        assert!(filter.is_accepted(&UploadedFile::new("resume.pdf", 1, 1, "application/octet-stream")));
        assert!(filter.is_accepted(&UploadedFile::new("CV.DOCX", 1, 1, "application/octet-stream")));
        assert!(!filter.is_accepted(&UploadedFile::new("notes.txt", 1, 1, "text/plain")));
    }

    #[test]
    fn test_empty_pattern_accepts_everything() {
        let filter = AcceptFilter::new(&BTreeMap::new()).unwrap();
        assert!(filter.accepts_all());
        assert_eq!(
            filter.filter(&UploadedFile::new("x.bin", 1, 1, "application/octet-stream")),
            FilterDecision::Accept
        );
    }

    #[test]
    fn test_rejection_code() {
        let filter = accept(&[("image/*", &[])]);
        assert_eq!(
            filter.filter(&UploadedFile::new("document.pdf", 1, 1, "application/pdf")),
            FilterDecision::Reject(RejectionCode::FileInvalidType)
        );
    }

    #[test]
    fn test_invalid_mime_pattern() {
        let map = BTreeMap::from([("image/[".to_string(), Vec::new())]);
        assert!(AcceptFilter::new(&map).is_err());
    }
}
