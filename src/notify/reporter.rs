//! Per-drop notifications
//!
//! Each function raises at most one toast and is called once per drop event.

use super::messages::{DUPLICATE_DESCRIPTION, duplicates_title, rejection_message, upload_failed_title};
use super::toast::{Toast, ToastSink};
use crate::classify::RejectionReport;

/// Raise one error toast summarizing every rejection of a drop event.
///
/// The description lists one message per rejection reason, one per line.
pub fn report_rejections<S: ToastSink + ?Sized>(
    sink: &mut S,
    report: &RejectionReport,
    max_size_bytes: u64,
    duration_ms: u64,
) -> bool {
    if report.is_empty() {
        return false;
    }

    let description = report
        .iter()
        .flat_map(|entry| {
            entry
                .errors
                .iter()
                .map(|code| rejection_message(*code, &entry.file, max_size_bytes))
        })
        .collect::<Vec<_>>()
        .join("\n");

    tracing::info!("{} file(s) rejected", report.len());
    sink.show(
        Toast::error(upload_failed_title(report.len()))
            .with_description(description)
            .with_duration(duration_ms),
    );
    true
}

/// Raise the duplicate warning if any files were skipped
pub fn report_duplicates<S: ToastSink + ?Sized>(sink: &mut S, duplicates: usize, duration_ms: u64) -> bool {
    if duplicates == 0 {
        return false;
    }

    tracing::info!("{} duplicate file(s) skipped", duplicates);
    sink.show(
        Toast::warning(duplicates_title(duplicates))
            .with_description(DUPLICATE_DESCRIPTION)
            .with_duration(duration_ms),
    );
    true
}
