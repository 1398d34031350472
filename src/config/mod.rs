//! Configuration management for yourOrbit
//!
//! Configuration is layered with figment: embedded defaults, then the user
//! config under `~/.config/yourorbit/`, then `yourorbit.{toml,json,yaml}` in
//! the working directory, then an explicit `--config` file, and finally
//! `YOURORBIT_*` environment variables (`__` separates nested keys).

pub mod core;
pub mod formats;
pub mod smart_load;
pub mod types;

pub use core::YourOrbitConfig;
pub use formats::ConfigFormat;
pub use types::{
    BackendConfig, DEFAULT_MAX_SIZE_BYTES, DEFAULT_TOAST_DURATION_MS, DropZoneConfig, SessionConfig, SubmitConfig,
    SubmitMode, ToastConfig,
};
