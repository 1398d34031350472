//! Toast notifications
//!
//! Drop outcomes are reported through a [`ToastSink`]. The CLI shows them on
//! the terminal ([`crate::cli::ConsoleToaster`]); tests and JSON output record
//! them with [`ToastLog`].

pub mod messages;
pub mod reporter;
pub mod toast;

pub use reporter::{report_duplicates, report_rejections};
pub use toast::{Toast, ToastLevel, ToastLog, ToastSink};
