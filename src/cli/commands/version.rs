//! Version command implementation

use anyhow::Result;
use clap::Args;

use crate::cli::Output;

#[derive(Args, Default)]
pub struct VersionArgs {}

pub async fn execute(_args: VersionArgs, output: &Output) -> Result<()> {
    output.status_indicator("VERSION", &format!("{} v{}", crate::PKG_NAME, crate::VERSION), true);
    output.key_value("Description:", crate::PKG_DESCRIPTION, false);

    output.category("Build Information");
    output.key_value("Rust edition:", "2024", false);
    output.key_value("Target:", std::env::consts::ARCH, false);
    output.key_value("Profile:", if cfg!(debug_assertions) { "debug" } else { "release" }, false);

    Ok(())
}
