use anyhow::{Result, anyhow};
use clap::{Args, Subcommand};

use crate::cli::Output;
use crate::config::{ConfigFormat, YourOrbitConfig};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Display current merged configuration
    Show {
        /// Output format: json, toml, yaml
        #[arg(short, long, default_value = "toml")]
        format: String,
    },
    /// Get configuration value
    Get { key: String },
    /// Validate the merged configuration
    Validate,
}

pub async fn execute(args: ConfigArgs, config: &YourOrbitConfig, output: &Output) -> Result<()> {
    match args.command {
        ConfigCommand::Show { format } => {
            let format: ConfigFormat = format.parse()?;
            println!("{}", config.export_config_highlighted(format)?);
        }
        ConfigCommand::Get { key } => {
            let value = config
                .get_section(&key)
                .map_err(|_| anyhow!("Configuration key '{}' not found", key))?;
            print_value(value)?;
        }
        ConfigCommand::Validate => {
            config.validate()?;
            output.success("Configuration is valid");
        }
    }

    Ok(())
}

fn print_value(value: serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(_) => println!("{}", serde_json::to_string_pretty(&value)?),
        serde_json::Value::Array(items) => {
            for item in items {
                match item {
                    serde_json::Value::String(s) => println!("{}", s),
                    other => println!("{}", other),
                }
            }
        }
        serde_json::Value::String(s) => println!("{}", s),
        other => println!("{}", other),
    }
    Ok(())
}
