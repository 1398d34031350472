//! User-facing notification text

use crate::classify::RejectionCode;
use crate::intake::UploadedFile;
use crate::shared::bytes_to_mb;

pub const DUPLICATE_DESCRIPTION: &str = "Same file is already uploaded. Skipped duplicate upload.";
pub const UNSUPPORTED_TYPE_MESSAGE: &str = "File type not supported";
pub const SESSION_PENDING_MESSAGE: &str = "Please try again in a few seconds.";
pub const SIGN_IN_REQUIRED_TITLE: &str = "Sign in required";
pub const SIGN_IN_REQUIRED_DESCRIPTION: &str = "Sign in to submit job postings.";
pub const SUBMISSION_FAILED_TITLE: &str = "Submission failed";

/// Title of the aggregated rejection toast
pub fn upload_failed_title(rejected: usize) -> String {
    format!("{rejected} Upload Failed")
}

/// Title of the duplicate toast: `1 Duplicate Skipped`, `2 Duplicates Skipped`
pub fn duplicates_title(duplicates: usize) -> String {
    let plural = if duplicates > 1 { "s" } else { "" };
    format!("{duplicates} Duplicate{plural} Skipped")
}

/// Message for one rejection reason of `file`. Every reason other than size
/// reads as an unsupported type.
pub fn rejection_message(code: RejectionCode, file: &UploadedFile, max_size_bytes: u64) -> String {
    match code {
        RejectionCode::FileTooLarge => format!(
            "File is too large ({:.2}MB). Max size is {}MB.",
            file.size_mb(),
            bytes_to_mb(max_size_bytes)
        ),
        RejectionCode::FileInvalidType | RejectionCode::TooManyFiles => UNSUPPORTED_TYPE_MESSAGE.to_string(),
    }
}
