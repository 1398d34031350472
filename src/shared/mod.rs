//! Shared utilities used by the intake pipeline and the CLI

pub mod glob;
pub mod mime;

/// Bytes per megabyte as used in all size messages (binary megabytes)
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Convert a byte count to megabytes
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}
