use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Json, Toml, Yaml};
use serde::de::DeserializeOwned;

use super::smart_load;
use super::types::{BackendConfig, DropZoneConfig, SessionConfig, SubmitConfig, ToastConfig};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Prefix for environment overrides, e.g. `YOURORBIT_DROPZONE__MAX_SIZE_BYTES`
pub const ENV_PREFIX: &str = "YOURORBIT_";

pub struct YourOrbitConfig {
    figment: Figment,
}

impl YourOrbitConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        tracing::trace!("CONFIG LOAD: Starting");

        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG)); // Embedded defaults

        let user_base = Self::user_config_base_path();
        figment = figment
            // User config - support multiple formats
            .merge(Toml::file(format!("{user_base}.toml")))
            .merge(Json::file(format!("{user_base}.json")))
            .merge(Yaml::file(format!("{user_base}.yaml")))
            .merge(Yaml::file(format!("{user_base}.yml")))
            // Repository config - support multiple formats
            .merge(Toml::file("yourorbit.toml"))
            .merge(Json::file("yourorbit.json"))
            .merge(Yaml::file("yourorbit.yaml"))
            .merge(Yaml::file("yourorbit.yml"));

        if let Some(custom_path) = custom_config {
            if !std::path::Path::new(custom_path).exists() {
                anyhow::bail!("Config file not found: {custom_path}");
            }
            tracing::debug!("CONFIG LOAD: Using custom config {}", custom_path);
            figment = figment.merge(smart_load::auto(custom_path));
        }

        // Environment variables always have highest priority
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        Ok(YourOrbitConfig { figment })
    }

    /// Extract a typed section, e.g. `dropzone`
    pub fn section<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.figment
            .extract_inner(path)
            .with_context(|| format!("Invalid configuration section '{path}'"))
    }

    pub fn dropzone(&self) -> Result<DropZoneConfig> {
        self.section("dropzone")
    }

    pub fn backend(&self) -> Result<BackendConfig> {
        self.section("backend")
    }

    pub fn submit(&self) -> Result<SubmitConfig> {
        self.section("submit")
    }

    pub fn session(&self) -> Result<SessionConfig> {
        self.section("session")
    }

    pub fn toast(&self) -> Result<ToastConfig> {
        self.section("toast")
    }

    /// Get a nested object/section as JSON
    pub fn get_section(&self, path: &str) -> Result<serde_json::Value> {
        Ok(self.figment.extract_inner(path)?)
    }

    /// Get the full merged configuration as a structured value
    pub fn get_full_config(&self) -> Result<serde_json::Value> {
        Ok(self.figment.extract()?)
    }

    /// Get a boolean value from config
    pub fn get_bool(&self, path: &str) -> Result<bool> {
        Ok(self.figment.extract_inner(path)?)
    }

    /// Check every typed section so a bad value fails up front
    pub fn validate(&self) -> Result<()> {
        self.dropzone()?;
        self.backend()?;
        self.submit()?;
        self.session()?;
        self.toast()?;
        Ok(())
    }

    fn user_config_base_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{}/.config/yourorbit/config", home),
            Err(_) => "~/.config/yourorbit/config".to_string(),
        }
    }
}
