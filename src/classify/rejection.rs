//! Rejected files and why they were rejected

use serde::{Deserialize, Serialize};

use crate::intake::UploadedFile;

/// Reason a dropped file was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectionCode {
    /// Larger than the configured maximum size
    FileTooLarge,
    /// MIME type and extension match nothing in the accept pattern
    FileInvalidType,
    /// Several files dropped while only one is allowed
    TooManyFiles,
}

impl RejectionCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionCode::FileTooLarge => "file-too-large",
            RejectionCode::FileInvalidType => "file-invalid-type",
            RejectionCode::TooManyFiles => "too-many-files",
        }
    }
}

impl std::fmt::Display for RejectionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rejected file with every reason that applied to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRejection {
    pub file: UploadedFile,
    pub errors: Vec<RejectionCode>,
}

impl FileRejection {
    pub fn has(&self, code: RejectionCode) -> bool {
        self.errors.contains(&code)
    }
}

/// All rejections produced by one drop event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RejectionReport {
    pub entries: Vec<FileRejection>,
}

impl RejectionReport {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileRejection> {
        self.entries.iter()
    }

    /// Number of rejected files carrying `code`
    pub fn count(&self, code: RejectionCode) -> usize {
        self.entries.iter().filter(|entry| entry.has(code)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_use_kebab_case() {
        assert_eq!(RejectionCode::FileTooLarge.to_string(), "file-too-large");
        assert_eq!(
            serde_json::to_string(&RejectionCode::FileInvalidType).unwrap(),
            "\"file-invalid-type\""
        );
        assert_eq!(RejectionCode::TooManyFiles.as_str(), "too-many-files");
    }

    #[test]
    fn test_report_counts_by_code() {
        let report = RejectionReport {
            entries: vec![
                FileRejection {
                    file: UploadedFile::new("big.png", 10, 1, "image/png"),
                    errors: vec![RejectionCode::FileTooLarge],
                },
                FileRejection {
                    file: UploadedFile::new("big.pdf", 10, 1, "application/pdf"),
                    errors: vec![RejectionCode::FileInvalidType, RejectionCode::FileTooLarge],
                },
            ],
        };
        assert_eq!(report.len(), 2);
        assert_eq!(report.count(RejectionCode::FileTooLarge), 2);
        assert_eq!(report.count(RejectionCode::FileInvalidType), 1);
        assert_eq!(report.count(RejectionCode::TooManyFiles), 0);
    }
}
