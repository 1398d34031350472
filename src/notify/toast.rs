//! Toast notifications and the sinks that display them

use serde::Serialize;

use crate::config::DEFAULT_TOAST_DURATION_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

/// A transient notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub level: ToastLevel,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub duration_ms: u64,
}

impl Toast {
    pub fn new(level: ToastLevel, title: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            description: None,
            duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(ToastLevel::Info, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(ToastLevel::Warning, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, title)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// Anything that can show toasts
pub trait ToastSink {
    fn show(&mut self, toast: Toast);
}

impl<S: ToastSink + ?Sized> ToastSink for &mut S {
    fn show(&mut self, toast: Toast) {
        (**self).show(toast)
    }
}

impl<S: ToastSink + ?Sized> ToastSink for Box<S> {
    fn show(&mut self, toast: Toast) {
        (**self).show(toast)
    }
}

/// Records toasts in memory, in the order they were raised
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastLog {
    toasts: Vec<Toast>,
}

impl ToastLog {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn take(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl ToastSink for ToastLog {
    fn show(&mut self, toast: Toast) {
        tracing::debug!("toast [{:?}] {}", toast.level, toast.title);
        self.toasts.push(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let toast = Toast::warning("1 Duplicate Skipped");
        assert_eq!(toast.level, ToastLevel::Warning);
        assert_eq!(toast.duration_ms, 4000);
        assert!(toast.description.is_none());
    }

    #[test]
    fn test_log_records_in_order() {
        let mut log = ToastLog::default();
        log.show(Toast::error("first"));
        (&mut log).show(Toast::info("second").with_duration(10));

        let titles: Vec<_> = log.toasts().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
        assert_eq!(log.take().len(), 2);
        assert!(log.is_empty());
    }
}
