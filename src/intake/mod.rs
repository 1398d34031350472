//! File intake: uploaded file descriptors and the accumulated list
//!
//! The list is a pure reducer over drop and remove events. Classification
//! against accept patterns lives in [`crate::classify`] and notifications in
//! [`crate::notify`]; [`crate::dropzone`] ties them together.

pub mod file;
pub mod list;

pub use file::{FileIdentity, UploadedFile};
pub use list::{FileList, FilteredBatch, filter_batch};
