//! Uploaded file descriptors

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use crate::shared::{bytes_to_mb, mime};

/// A file handed to the drop zone.
///
/// Only `name`, `size` and `last_modified` take part in de-duplication; the
/// source path is carried along for whoever consumes the list and is never
/// read by the intake logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Modification time in milliseconds since the Unix epoch
    pub last_modified: i64,
    pub mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

/// Identity of a file for duplicate detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileIdentity<'a> {
    pub name: &'a str,
    pub size: u64,
    pub last_modified: i64,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, size: u64, last_modified: i64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            last_modified,
            mime_type: mime_type.into(),
            source: None,
        }
    }

    /// Build a descriptor from a file on disk. The MIME type is guessed from
    /// the extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)
            .with_context(|| format!("Failed to read metadata for {}", path.display()))?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("Path has no file name: {}", path.display()))?;

        let last_modified = metadata
            .modified()
            .ok()
            .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
            .map(|elapsed| elapsed.as_millis() as i64)
            .unwrap_or_default();

        let mime_type = mime::guess_from_name(&name).to_string();

        Ok(Self {
            name,
            size: metadata.len(),
            last_modified,
            mime_type,
            source: Some(path.to_path_buf()),
        })
    }

    pub fn identity(&self) -> FileIdentity<'_> {
        FileIdentity {
            name: &self.name,
            size: self.size,
            last_modified: self.last_modified,
        }
    }

    /// Whether two descriptors refer to the same upload
    pub fn same_as(&self, other: &UploadedFile) -> bool {
        self.identity() == other.identity()
    }

    /// Size in megabytes
    pub fn size_mb(&self) -> f64 {
        bytes_to_mb(self.size)
    }

    /// Size as shown in the upload preview, e.g. `1.000 MB`
    pub fn display_size(&self) -> String {
        format!("{:.3} MB", self.size_mb())
    }
}
