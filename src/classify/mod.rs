//! Drop classification: accept patterns, size limits and single-file mode
//!
//! Filters are applied per file in a fixed order:
//! 1. **Accept Filter** - MIME pattern or extension match
//! 2. **Size Filter** - maximum size in bytes
//!
//! Files failing any filter are reported with every code that applied; the
//! rest continue to the intake list.

pub mod accept;
pub mod classifier;
pub mod filters;
pub mod rejection;
pub mod size;

pub use accept::AcceptFilter;
pub use classifier::{Classification, DropClassifier};
pub use filters::{Filter, FilterDecision};
pub use rejection::{FileRejection, RejectionCode, RejectionReport};
pub use size::SizeFilter;
