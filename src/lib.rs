//! # yourOrbit - Job application tracker intake
//!
//! The intake side of the yourOrbit job application tracker: a file drop zone
//! that classifies dropped files against an accept pattern and a size limit,
//! skips files that are already in the list, and reports what happened as
//! toast notifications. The tracker page model on top of it gates text input
//! against file uploads and guards submission behind a session.
//!
//! ## Quick Start
//!
//! ```bash
//! # One drop event, printed as toasts plus the resulting file list
//! yourorbit drop screenshots/*.png
//!
//! # Interactive tracker session
//! yourorbit tracker
//!
//! # Probe the backend
//! yourorbit status
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use yourorbit::dropzone::FileDropZone;
//! use yourorbit::intake::UploadedFile;
//! use yourorbit::notify::ToastLog;
//! use yourorbit::config::DropZoneConfig;
//!
//! let mut zone = FileDropZone::new(DropZoneConfig::default(), ToastLog::default())?;
//! let outcome = zone.handle_drop(vec![
//!     UploadedFile::new("posting.png", 1024, 1_700_000_000_000, "image/png"),
//! ]);
//! assert_eq!(outcome.added, 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod backend;
pub mod classify;
pub mod cli;
pub mod config;
pub mod dropzone;
pub mod intake;
pub mod notify;
pub mod shared;
pub mod tracker;

pub use cli::{Cli, Output};
pub use config::YourOrbitConfig;

/// Result type alias for yourOrbit operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
