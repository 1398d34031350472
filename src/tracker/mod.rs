//! Job application tracker page
//!
//! A job posting comes in either as pasted text or as uploaded screenshots,
//! never both: non-empty text disables the drop zone, and uploaded files lock
//! the text input. Submission is gated by [`AuthGuard`].

pub mod auth;
pub mod submit;

use anyhow::Result;
use serde::Serialize;

use crate::config::DropZoneConfig;
use crate::dropzone::{DropOutcome, DropZoneView, FileDropZone};
use crate::intake::{FileList, UploadedFile};
use crate::notify::messages::{
    SESSION_PENDING_MESSAGE, SIGN_IN_REQUIRED_DESCRIPTION, SIGN_IN_REQUIRED_TITLE, SUBMISSION_FAILED_TITLE,
};
use crate::notify::{Toast, ToastSink};
use crate::shared::bytes_to_mb;

pub use auth::{AuthGuard, GuardOutcome, SessionState};
pub use submit::{ConfiguredSubmitter, HttpSubmitter, LogSubmitter, Submitter};

pub const TEXT_LOCKED_PLACEHOLDER: &str = "Clear text input to upload files instead";
pub const TEXT_LOCKED_DESCRIPTION: &str = "You can either paste job description OR upload screenshots";
pub const UPLOAD_PLACEHOLDER: &str = "Upload job posting screenshots";
pub const FILES_LOCKED_TEXTAREA: &str = "Remove uploaded files to paste job posting instead";
pub const TEXTAREA_PLACEHOLDER: &str = "Paste job posting here";

/// Words longer than this force break-all wrapping
const LONG_WORD_CHARS: usize = 30;

/// True when any space-separated word is too long to wrap normally
pub fn needs_break_all(text: &str) -> bool {
    text.split(' ').any(|word| word.chars().count() > LONG_WORD_CHARS)
}

fn upload_description(max_size_bytes: u64) -> String {
    format!(
        "Drag & drop or click to browse • Max {}MB per file",
        bytes_to_mb(max_size_bytes)
    )
}

/// What a submit attempt did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubmitOutcome {
    /// Session still loading; the user was asked to retry
    Pending,
    SignInRequired,
    /// Nothing to send
    Empty,
    Submitted,
    Failed,
}

/// Snapshot of the page for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackerView {
    pub text: String,
    pub text_disabled: bool,
    pub textarea_placeholder: &'static str,
    pub break_all: bool,
    pub show_auth_prompt: bool,
    pub dropzone: DropZoneView,
}

pub struct JobAppTracker<S: ToastSink> {
    zone: FileDropZone<S>,
    text: String,
    guard: AuthGuard,
    toast_duration_ms: u64,
}

impl<S: ToastSink> JobAppTracker<S> {
    pub fn new(config: DropZoneConfig, session: SessionState, sink: S, toast_duration_ms: u64) -> Result<Self> {
        let zone = FileDropZone::new(config, sink)?.with_toast_duration(toast_duration_ms);
        let mut tracker = Self {
            zone,
            text: String::new(),
            guard: AuthGuard::new(session),
            toast_duration_ms,
        };
        tracker.refresh_gating();
        Ok(tracker)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn files(&self) -> &FileList {
        self.zone.files()
    }

    pub fn sink(&self) -> &S {
        self.zone.sink()
    }

    pub fn sink_mut(&mut self) -> &mut S {
        self.zone.sink_mut()
    }

    pub fn auth(&self) -> &AuthGuard {
        &self.guard
    }

    pub fn auth_mut(&mut self) -> &mut AuthGuard {
        &mut self.guard
    }

    /// Text input is locked while files are uploaded
    pub fn text_disabled(&self) -> bool {
        !self.zone.files().is_empty()
    }

    pub fn textarea_placeholder(&self) -> &'static str {
        if self.text_disabled() {
            FILES_LOCKED_TEXTAREA
        } else {
            TEXTAREA_PLACEHOLDER
        }
    }

    pub fn break_all(&self) -> bool {
        needs_break_all(&self.text)
    }

    /// Replace the text input. Refused with a warning while files are
    /// uploaded.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        if self.text_disabled() {
            let toast = Toast::warning(FILES_LOCKED_TEXTAREA).with_duration(self.toast_duration_ms);
            self.zone.sink_mut().show(toast);
            return false;
        }
        self.text = text.into();
        self.refresh_gating();
        true
    }

    pub fn clear_text(&mut self) {
        self.text.clear();
        self.refresh_gating();
    }

    pub fn handle_drop(&mut self, batch: Vec<UploadedFile>) -> DropOutcome {
        self.zone.handle_drop(batch)
    }

    pub fn remove(&mut self, index: usize) -> Result<UploadedFile> {
        self.zone.remove(index)
    }

    /// Clear both inputs
    pub fn reset(&mut self) {
        self.zone.reset();
        self.clear_text();
    }

    pub fn view(&self) -> TrackerView {
        TrackerView {
            text: self.text.clone(),
            text_disabled: self.text_disabled(),
            textarea_placeholder: self.textarea_placeholder(),
            break_all: self.break_all(),
            show_auth_prompt: self.guard.show_auth_prompt(),
            dropzone: self.zone.view(),
        }
    }

    /// Submit whatever the page holds. Inputs are left as they are.
    pub async fn submit<T: Submitter>(&mut self, submitter: &T) -> SubmitOutcome {
        match self.guard.require_auth() {
            GuardOutcome::Pending => {
                let toast = Toast::info(SESSION_PENDING_MESSAGE).with_duration(self.toast_duration_ms);
                self.zone.sink_mut().show(toast);
                return SubmitOutcome::Pending;
            }
            GuardOutcome::SignInRequired => {
                let toast = Toast::warning(SIGN_IN_REQUIRED_TITLE)
                    .with_description(SIGN_IN_REQUIRED_DESCRIPTION)
                    .with_duration(self.toast_duration_ms);
                self.zone.sink_mut().show(toast);
                return SubmitOutcome::SignInRequired;
            }
            GuardOutcome::Allowed => {}
        }

        let text = self.text.trim().to_string();
        let files = self.zone.files().as_slice().to_vec();
        if text.is_empty() && files.is_empty() {
            tracing::debug!("Nothing to submit");
            return SubmitOutcome::Empty;
        }

        tracing::debug!("Submitting through {} submitter", submitter.name());
        let mut result = Ok(());
        if !text.is_empty() {
            result = submitter.submit_text(&text).await;
        }
        if result.is_ok() && !files.is_empty() {
            result = submitter.submit_files(&files).await;
        }

        match result {
            Ok(()) => SubmitOutcome::Submitted,
            Err(e) => {
                tracing::error!("Submission failed: {:#}", e);
                let toast = Toast::error(SUBMISSION_FAILED_TITLE)
                    .with_description(format!("{e:#}"))
                    .with_duration(self.toast_duration_ms);
                self.zone.sink_mut().show(toast);
                SubmitOutcome::Failed
            }
        }
    }

    fn refresh_gating(&mut self) {
        let locked = !self.text.trim().is_empty();
        self.zone.set_disabled(locked);
        if locked {
            self.zone.set_prompt(TEXT_LOCKED_PLACEHOLDER, TEXT_LOCKED_DESCRIPTION);
        } else {
            let description = upload_description(self.zone.config().max_size_bytes);
            self.zone.set_prompt(UPLOAD_PLACEHOLDER, description);
        }
    }
}
