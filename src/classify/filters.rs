//! Core filter trait for drop classification
//!
//! Every per-file check implements [`Filter`], so the classifier can run them
//! in order and collect all rejection codes for a file.

use super::rejection::RejectionCode;
use crate::intake::UploadedFile;

/// Decision for whether to accept or reject a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    /// File passes this filter
    Accept,
    /// File fails this filter
    Reject(RejectionCode),
}

/// Base filter trait that all per-file filters implement
pub trait Filter {
    /// Check a single file
    fn filter(&self, file: &UploadedFile) -> FilterDecision;

    /// Get the name of this filter for debugging/logging
    fn name(&self) -> &'static str;
}
