//! Drop classification
//!
//! Runs every dropped file through the type and size filters and splits the
//! batch into accepted files and a rejection report. When only one file is
//! allowed and more than one survives the filters, all survivors are rejected
//! as too many.

use anyhow::Result;

use super::accept::AcceptFilter;
use super::filters::{Filter, FilterDecision};
use super::rejection::{FileRejection, RejectionCode, RejectionReport};
use super::size::SizeFilter;
use crate::config::DropZoneConfig;
use crate::intake::UploadedFile;

/// Accepted and rejected files of one drop event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub accepted: Vec<UploadedFile>,
    pub rejections: RejectionReport,
}

/// Classifies dropped files against a drop zone configuration
#[derive(Debug, Clone)]
pub struct DropClassifier {
    accept: AcceptFilter,
    size: SizeFilter,
    allow_multiple: bool,
}

impl DropClassifier {
    pub fn new(config: &DropZoneConfig) -> Result<Self> {
        Ok(Self {
            accept: AcceptFilter::new(&config.accept)?,
            size: SizeFilter::new(config.max_size_bytes),
            allow_multiple: config.allow_multiple,
        })
    }

    pub fn max_size_bytes(&self) -> u64 {
        self.size.max_size_bytes()
    }

    pub fn classify(&self, batch: Vec<UploadedFile>) -> Classification {
        let filters: [&dyn Filter; 2] = [&self.accept, &self.size];
        let mut accepted = Vec::with_capacity(batch.len());
        let mut entries = Vec::new();

        for file in batch {
            let errors: Vec<RejectionCode> = filters
                .iter()
                .filter_map(|filter| match filter.filter(&file) {
                    FilterDecision::Accept => None,
                    FilterDecision::Reject(code) => {
                        tracing::debug!("{} rejected {} ({})", filter.name(), file.name, code);
                        Some(code)
                    }
                })
                .collect();

            if errors.is_empty() {
                accepted.push(file);
            } else {
                entries.push(FileRejection { file, errors });
            }
        }

        if !self.allow_multiple && accepted.len() > 1 {
            tracing::debug!("Only one file allowed, rejecting {} files", accepted.len());
            entries.extend(accepted.drain(..).map(|file| FileRejection {
                file,
                errors: vec![RejectionCode::TooManyFiles],
            }));
        }

        Classification {
            accepted,
            rejections: RejectionReport { entries },
        }
    }
}
