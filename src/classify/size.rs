//! File size filtering

use super::filters::{Filter, FilterDecision};
use super::rejection::RejectionCode;
use crate::intake::UploadedFile;

/// Filter files based on size
#[derive(Debug, Clone, Copy)]
pub struct SizeFilter {
    max_size_bytes: u64,
}

impl SizeFilter {
    pub fn new(max_size_bytes: u64) -> Self {
        Self { max_size_bytes }
    }

    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }
}

impl Filter for SizeFilter {
    fn filter(&self, file: &UploadedFile) -> FilterDecision {
        if file.size > self.max_size_bytes {
            tracing::trace!("{} exceeds {} bytes", file.name, self.max_size_bytes);
            FilterDecision::Reject(RejectionCode::FileTooLarge)
        } else {
            FilterDecision::Accept
        }
    }

    fn name(&self) -> &'static str {
        "SizeFilter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_is_inclusive() {
        let filter = SizeFilter::new(5 * 1024 * 1024);
        let at_limit = UploadedFile::new("a.png", 5 * 1024 * 1024, 1, "image/png");
        let over = UploadedFile::new("b.png", 5 * 1024 * 1024 + 1, 1, "image/png");

        assert_eq!(filter.filter(&at_limit), FilterDecision::Accept);
        assert_eq!(filter.filter(&over), FilterDecision::Reject(RejectionCode::FileTooLarge));
    }
}
