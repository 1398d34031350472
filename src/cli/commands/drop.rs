use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;

use super::{OutputFormat, collect_batch, print_files};
use crate::cli::{ConsoleToaster, Output};
use crate::config::{DropZoneConfig, YourOrbitConfig};
use crate::dropzone::{DropOutcome, FileDropZone};
use crate::intake::UploadedFile;
use crate::notify::{Toast, ToastLog};

#[derive(Args)]
pub struct DropArgs {
    /// Files, directories or glob patterns to drop
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Accepted MIME pattern, e.g. image/* (repeatable, replaces dropzone.accept)
    #[arg(long, value_delimiter = ',')]
    pub accept: Vec<String>,

    /// Maximum file size in bytes
    #[arg(long)]
    pub max_size: Option<u64>,

    /// Accept a single file per drop
    #[arg(long)]
    pub single: bool,
}

#[derive(Serialize)]
struct DropReport<'a> {
    outcome: &'a DropOutcome,
    files: &'a [UploadedFile],
    toasts: &'a [Toast],
}

pub async fn execute(args: DropArgs, config: &YourOrbitConfig, output: &Output) -> Result<()> {
    let dropzone = apply_overrides(config.dropzone()?, &args);
    let duration = config.toast()?.duration_ms;
    let batch = collect_batch(&args.paths)?;
    tracing::info!("Dropping {} file(s)", batch.len());

    match args.format {
        OutputFormat::Text => {
            let mut zone = FileDropZone::new(dropzone, ConsoleToaster::new(*output))?.with_toast_duration(duration);
            let outcome = zone.handle_drop(batch);
            if outcome.ignored {
                output.warning("Drop zone is disabled; nothing was added");
                return Ok(());
            }
            print_files(&zone.view(), output);
        }
        OutputFormat::Json => {
            let mut zone = FileDropZone::new(dropzone, ToastLog::default())?.with_toast_duration(duration);
            let outcome = zone.handle_drop(batch);
            let report = DropReport {
                outcome: &outcome,
                files: zone.files().as_slice(),
                toasts: zone.sink().toasts(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn apply_overrides(mut config: DropZoneConfig, args: &DropArgs) -> DropZoneConfig {
    if !args.accept.is_empty() {
        config.accept = args
            .accept
            .iter()
            .map(|pattern| (pattern.trim().to_string(), Vec::new()))
            .collect::<BTreeMap<_, _>>();
    }
    if let Some(max_size) = args.max_size {
        config.max_size_bytes = max_size;
    }
    if args.single {
        config.allow_multiple = false;
    }
    config
}
