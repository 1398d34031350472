//! Typed configuration sections
//!
//! Each section is extracted from the merged figment with serde, so every
//! field must either appear in `default-config.toml` or carry a serde default.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default maximum file size: 5MB
pub const DEFAULT_MAX_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Default toast lifetime in milliseconds
pub const DEFAULT_TOAST_DURATION_MS: u64 = 4000;

/// Drop zone configuration: accept pattern, size limit and input flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropZoneConfig {
    /// MIME pattern (e.g. `image/*`) to allowed file extensions. An empty map
    /// accepts every file.
    #[serde(default = "default_accept")]
    pub accept: BTreeMap<String, Vec<String>>,

    /// Files larger than this are rejected
    #[serde(default = "default_max_size_bytes")]
    pub max_size_bytes: u64,

    /// Whether more than one file may be dropped at once
    #[serde(default = "default_true")]
    pub allow_multiple: bool,

    /// Ignore drops entirely
    #[serde(default)]
    pub disabled: bool,
}

fn default_accept() -> BTreeMap<String, Vec<String>> {
    BTreeMap::from([("image/*".to_string(), Vec::new())])
}

fn default_max_size_bytes() -> u64 {
    DEFAULT_MAX_SIZE_BYTES
}

fn default_true() -> bool {
    true
}

impl Default for DropZoneConfig {
    fn default() -> Self {
        Self {
            accept: default_accept(),
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
            allow_multiple: true,
            disabled: false,
        }
    }
}

/// Toast display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastConfig {
    #[serde(default = "default_toast_duration")]
    pub duration_ms: u64,
}

fn default_toast_duration() -> u64 {
    DEFAULT_TOAST_DURATION_MS
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

/// Backend endpoint settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Where submissions go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitMode {
    /// Record the submission in the log only
    #[default]
    Log,
    /// Forward text to the backend tracker endpoint
    Http,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitConfig {
    #[serde(default)]
    pub mode: SubmitMode,
}

/// Session as resolved by the auth provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Signed-in user name; empty means no session
    #[serde(default)]
    pub user: String,
    /// The provider has not answered yet
    #[serde(default)]
    pub pending: bool,
}
