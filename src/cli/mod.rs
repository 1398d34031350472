//! Command-line interface for yourOrbit
//!
//! Parses arguments with clap, sets up logging, loads the layered
//! configuration once and dispatches to the command modules.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use crate::config::YourOrbitConfig;

pub mod commands;
mod output;

use commands::{config, drop, status, submit, tracker, version};
pub use output::{ConsoleToaster, Output};

#[derive(Parser)]
#[command(
    name = "yourorbit",
    version = env!("CARGO_PKG_VERSION"),
    about = "Job posting intake for the yourOrbit application tracker",
    long_about = "yourOrbit takes job postings as pasted text or uploaded screenshots, filters \
                  dropped files by type, size and duplicates, and reports the outcome as toasts."
)]
pub struct Cli {
    /// Run as if started in <DIR> instead of current working directory
    #[arg(short = 'C', long = "directory", global = true)]
    pub directory: Option<String>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Drop files on an empty drop zone and report the outcome
    Drop(drop::DropArgs),
    /// Interactive tracker page session over stdin
    Tracker(tracker::TrackerArgs),
    /// Submit a pasted job posting
    Submit(submit::SubmitArgs),
    /// Probe the backend endpoints
    Status(status::StatusArgs),
    /// Configuration management
    Config(config::ConfigArgs),
    /// Show version information
    Version(version::VersionArgs),
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        setup_logging(self.verbose, self.quiet);
        let output = Output::new(self.verbose > 0, self.quiet);

        let Some(command) = self.command else {
            Cli::command().print_help()?;
            return Ok(());
        };

        let custom_config = self.config.as_deref();
        match command {
            Commands::Drop(args) => drop::execute(args, &load_config(custom_config)?, &output).await,
            Commands::Tracker(args) => tracker::execute(args, &load_config(custom_config)?, &output).await,
            Commands::Submit(args) => submit::execute(args, &load_config(custom_config)?, &output).await,
            Commands::Status(args) => status::execute(args, &load_config(custom_config)?, &output).await,
            Commands::Config(args) => config::execute(args, &load_config(custom_config)?, &output).await,
            Commands::Version(args) => version::execute(args, &output).await,
        }
    }
}

/// Load the layered configuration and apply its terminal settings
fn load_config(custom_config: Option<&str>) -> Result<YourOrbitConfig> {
    let config = YourOrbitConfig::load_with_custom_config(custom_config)?;
    if !config.get_bool("general.color").unwrap_or(true) {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }
    Ok(config)
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => tracing_subscriber::EnvFilter::new("warn"),
        1 => tracing_subscriber::EnvFilter::new("info,globset=warn,reqwest=warn,hyper=warn"),
        2 => tracing_subscriber::EnvFilter::new("debug,globset=warn,reqwest=warn,hyper=warn"),
        _ => tracing_subscriber::EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["yourorbit", "drop", "a.png", "-vv", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config.as_deref(), Some("x.toml"));
        assert!(matches!(cli.command, Some(Commands::Drop(_))));
    }

    #[test]
    fn test_drop_requires_paths() {
        assert!(Cli::try_parse_from(["yourorbit", "drop"]).is_err());
    }
}
