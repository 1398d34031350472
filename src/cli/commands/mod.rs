//! Command implementations for the yourOrbit CLI
//!
//! Each command lives in its own module with its clap `Args` struct and an
//! async `execute`.

use anyhow::Result;
use clap::ValueEnum;

use crate::cli::Output;
use crate::dropzone::DropZoneView;
use crate::intake::UploadedFile;
use crate::shared::glob::expand_file_patterns;

pub mod config;
pub mod drop;
pub mod status;
pub mod submit;
pub mod tracker;
pub mod version;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Turn paths, directories and glob patterns into one drop batch
pub(crate) fn collect_batch(patterns: &[String]) -> Result<Vec<UploadedFile>> {
    let current_dir = std::env::current_dir()?;
    let paths = expand_file_patterns(patterns, &current_dir)?;
    tracing::debug!("Expanded {} pattern(s) into {} file(s)", patterns.len(), paths.len());
    paths.iter().map(|path| UploadedFile::from_path(path)).collect()
}

/// Print the upload preview list
pub(crate) fn print_files(view: &DropZoneView, output: &Output) {
    let Some(heading) = view.heading() else {
        output.info("No files uploaded");
        return;
    };
    output.header(&heading);
    for file in &view.files {
        output.list_item(&format!("[{}] {} ({})", file.index, file.name, file.size));
    }
}
