//! File drop zone
//!
//! Ties classification, the intake list and notifications together. Every
//! drop or removal is handled to completion in one call: the list is updated,
//! the change callback runs once, and toasts are raised once. Nothing fires on
//! later reads of the state.

use anyhow::Result;
use serde::Serialize;

use crate::classify::{Classification, DropClassifier, RejectionReport};
use crate::config::{DEFAULT_TOAST_DURATION_MS, DropZoneConfig};
use crate::intake::{FileList, UploadedFile};
use crate::notify::{ToastSink, report_duplicates, report_rejections};

/// Called with the full list after every change
pub type FilesChangeCallback = Box<dyn FnMut(&[UploadedFile])>;

pub const DEFAULT_PLACEHOLDER: &str = "Drop files here or click to upload";

/// What one drop event did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DropOutcome {
    /// The zone was disabled and the drop was discarded
    pub ignored: bool,
    /// Files appended to the list
    pub added: usize,
    /// Accepted files skipped because they were already present
    pub duplicates: usize,
    pub rejections: RejectionReport,
}

/// One row of the upload preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilePreview {
    pub index: usize,
    pub name: String,
    pub size: String,
}

/// Presentation state of the drop zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropZoneView {
    pub placeholder: String,
    pub description: String,
    pub disabled: bool,
    pub files: Vec<FilePreview>,
}

impl DropZoneView {
    /// `Uploaded Files (N)`, or nothing when the list is empty
    pub fn heading(&self) -> Option<String> {
        (!self.files.is_empty()).then(|| format!("Uploaded Files ({})", self.files.len()))
    }
}

pub struct FileDropZone<S: ToastSink> {
    config: DropZoneConfig,
    classifier: DropClassifier,
    files: FileList,
    sink: S,
    on_files_change: Option<FilesChangeCallback>,
    toast_duration_ms: u64,
    placeholder: String,
    description: String,
}

impl<S: ToastSink> FileDropZone<S> {
    pub fn new(config: DropZoneConfig, sink: S) -> Result<Self> {
        let classifier = DropClassifier::new(&config)?;
        Ok(Self {
            config,
            classifier,
            files: FileList::new(),
            sink,
            on_files_change: None,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            description: String::new(),
        })
    }

    /// Register the change callback
    pub fn on_files_change(mut self, callback: impl FnMut(&[UploadedFile]) + 'static) -> Self {
        self.on_files_change = Some(Box::new(callback));
        self
    }

    pub fn with_toast_duration(mut self, duration_ms: u64) -> Self {
        self.toast_duration_ms = duration_ms;
        self
    }

    pub fn set_prompt(&mut self, placeholder: impl Into<String>, description: impl Into<String>) {
        self.placeholder = placeholder.into();
        self.description = description.into();
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        if self.config.disabled != disabled {
            tracing::debug!("Drop zone {}", if disabled { "disabled" } else { "enabled" });
        }
        self.config.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    pub fn config(&self) -> &DropZoneConfig {
        &self.config
    }

    pub fn files(&self) -> &FileList {
        &self.files
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Handle one drop event
    pub fn handle_drop(&mut self, batch: Vec<UploadedFile>) -> DropOutcome {
        if self.config.disabled {
            tracing::debug!("Ignoring drop of {} file(s) on disabled zone", batch.len());
            return DropOutcome {
                ignored: true,
                ..DropOutcome::default()
            };
        }

        let Classification { accepted, rejections } = self.classifier.classify(batch);
        let before = self.files.len();
        let duplicates = self.files.accumulate(accepted);
        let added = self.files.len() - before;

        self.notify_change();
        report_rejections(
            &mut self.sink,
            &rejections,
            self.classifier.max_size_bytes(),
            self.toast_duration_ms,
        );
        report_duplicates(&mut self.sink, duplicates, self.toast_duration_ms);

        DropOutcome {
            ignored: false,
            added,
            duplicates,
            rejections,
        }
    }

    /// Remove the file at `index`
    pub fn remove(&mut self, index: usize) -> Result<UploadedFile> {
        let removed = self.files.remove(index)?;
        tracing::debug!("Removed {} from uploads", removed.name);
        self.notify_change();
        Ok(removed)
    }

    /// Clear the list
    pub fn reset(&mut self) {
        self.files.clear();
        self.notify_change();
    }

    pub fn view(&self) -> DropZoneView {
        DropZoneView {
            placeholder: self.placeholder.clone(),
            description: self.description.clone(),
            disabled: self.config.disabled,
            files: self
                .files
                .iter()
                .enumerate()
                .map(|(index, file)| FilePreview {
                    index,
                    name: file.name.clone(),
                    size: file.display_size(),
                })
                .collect(),
        }
    }

    fn notify_change(&mut self) {
        if let Some(callback) = self.on_files_change.as_mut() {
            callback(self.files.as_slice());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{Toast, ToastLog};
    use std::cell::RefCell;
    use std::rc::Rc;

    type Calls = Rc<RefCell<Vec<Vec<UploadedFile>>>>;

    fn zone_with_calls(config: DropZoneConfig) -> (FileDropZone<ToastLog>, Calls) {
        let calls: Calls = Rc::default();
        let recorder = Rc::clone(&calls);
        let zone = FileDropZone::new(config, ToastLog::default())
            .unwrap()
            .on_files_change(move |files| recorder.borrow_mut().push(files.to_vec()));
        (zone, calls)
    }

    fn jpeg(name: &str, size: u64, modified: i64) -> UploadedFile {
        UploadedFile::new(name, size, modified, "image/jpeg")
    }

    #[test]
    fn test_drop_calls_back_with_files() {
        let (mut zone, calls) = zone_with_calls(DropZoneConfig::default());
        let files = vec![jpeg("test1.jpg", 9, 1), UploadedFile::new("test2.png", 9, 1, "image/png")];

        let outcome = zone.handle_drop(files.clone());

        assert_eq!(outcome.added, 2);
        assert_eq!(*calls.borrow(), vec![files]);
        assert!(zone.sink().is_empty());
    }

    #[test]
    fn test_duplicates_filtered_and_reported_once() {
        let (mut zone, calls) = zone_with_calls(DropZoneConfig::default());
        let existing = jpeg("existing.jpg", 1024, 1234567890);
        let new_file = jpeg("new.jpg", 7, 1700000000000);
        zone.handle_drop(vec![existing.clone()]);

        let outcome = zone.handle_drop(vec![new_file.clone(), existing.clone()]);

        assert_eq!(outcome.duplicates, 1);
        assert_eq!(calls.borrow().last().unwrap(), &vec![existing, new_file]);
        assert_eq!(
            zone.sink().toasts(),
            &[Toast::warning("1 Duplicate Skipped")
                .with_description("Same file is already uploaded. Skipped duplicate upload.")
                .with_duration(4000)]
        );

        // Viewing the state again raises nothing new
        let _ = zone.view();
        assert_eq!(zone.sink().len(), 1);
    }

    #[test]
    fn test_rejections_reported_alongside_accepted_files() {
        let (mut zone, calls) = zone_with_calls(DropZoneConfig::default());

        let outcome = zone.handle_drop(vec![
            jpeg("ok.jpg", 10, 1),
            jpeg("large-file.jpg", 10 * 1024 * 1024, 1),
        ]);

        assert_eq!(outcome.added, 1);
        assert_eq!(outcome.rejections.len(), 1);
        assert_eq!(calls.borrow().len(), 1);
        let toast = &zone.sink().toasts()[0];
        assert_eq!(toast.title, "1 Upload Failed");
        assert_eq!(
            toast.description.as_deref(),
            Some("File is too large (10.00MB). Max size is 5MB.")
        );
    }

    #[test]
    fn test_empty_drop_only_calls_back() {
        let (mut zone, calls) = zone_with_calls(DropZoneConfig::default());
        let existing = jpeg("existing.jpg", 1024, 1);
        zone.handle_drop(vec![existing.clone()]);

        let outcome = zone.handle_drop(vec![]);

        assert_eq!(outcome.added, 0);
        assert_eq!(outcome.duplicates, 0);
        assert!(outcome.rejections.is_empty());
        assert_eq!(*calls.borrow(), vec![vec![existing.clone()], vec![existing]]);
        assert!(zone.sink().is_empty());
    }

    #[test]
    fn test_disabled_zone_ignores_drop() {
        let (mut zone, calls) = zone_with_calls(DropZoneConfig::default());
        zone.set_disabled(true);

        let outcome = zone.handle_drop(vec![jpeg("a.jpg", 1, 1)]);

        assert!(outcome.ignored);
        assert!(zone.files().is_empty());
        assert!(calls.borrow().is_empty());
        assert!(zone.sink().is_empty());
    }

    #[test]
    fn test_remove_notifies_with_remaining_files() {
        let (mut zone, calls) = zone_with_calls(DropZoneConfig::default());
        let first = jpeg("test1.jpg", 1024 * 1024, 1);
        let second = UploadedFile::new("test2.png", 2 * 1024 * 1024, 2, "image/png");
        zone.handle_drop(vec![first.clone(), second.clone()]);

        let removed = zone.remove(0).unwrap();

        assert_eq!(removed, first);
        assert_eq!(calls.borrow().last().unwrap(), &vec![second]);
    }

    #[test]
    fn test_remove_out_of_range_does_not_notify() {
        let (mut zone, calls) = zone_with_calls(DropZoneConfig::default());
        assert!(zone.remove(0).is_err());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_reset_clears_and_notifies() {
        let (mut zone, calls) = zone_with_calls(DropZoneConfig::default());
        zone.handle_drop(vec![jpeg("a.jpg", 1, 1)]);
        zone.reset();
        assert!(zone.files().is_empty());
        assert_eq!(calls.borrow().last().unwrap(), &Vec::<UploadedFile>::new());
    }

    #[test]
    fn test_view_lists_previews() {
        let mut zone = FileDropZone::new(DropZoneConfig::default(), ToastLog::default()).unwrap();
        zone.set_prompt("Upload your files", "Max 5MB per file");
        assert_eq!(zone.view().heading(), None);

        zone.handle_drop(vec![
            jpeg("test1.jpg", 1024 * 1024, 1),
            UploadedFile::new("test2.png", 2 * 1024 * 1024, 2, "image/png"),
        ]);
        let view = zone.view();

        assert_eq!(view.placeholder, "Upload your files");
        assert_eq!(view.description, "Max 5MB per file");
        assert_eq!(view.heading().as_deref(), Some("Uploaded Files (2)"));
        assert_eq!(view.files[0].size, "1.000 MB");
        assert_eq!(view.files[1].size, "2.000 MB");
    }
}
