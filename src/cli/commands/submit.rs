use anyhow::{Result, bail};
use clap::Args;

use super::collect_batch;
use crate::cli::{ConsoleToaster, Output};
use crate::config::YourOrbitConfig;
use crate::tracker::{ConfiguredSubmitter, JobAppTracker, SessionState, SubmitOutcome};

#[derive(Args)]
pub struct SubmitArgs {
    /// Job posting text
    #[arg(short, long, conflicts_with = "files")]
    pub text: Option<String>,

    /// Screenshots of the job posting
    #[arg(short, long, num_args = 1..)]
    pub files: Vec<String>,

    /// Signed-in user (overrides session.user)
    #[arg(long)]
    pub user: Option<String>,
}

pub async fn execute(args: SubmitArgs, config: &YourOrbitConfig, output: &Output) -> Result<()> {
    if args.text.is_none() && args.files.is_empty() {
        bail!("Nothing to submit: pass --text or --files");
    }

    let mut session_config = config.session()?;
    if let Some(user) = args.user {
        session_config.user = user;
        session_config.pending = false;
    }
    let submit = config.submit()?;
    let submitter = ConfiguredSubmitter::from_config(submit.mode, &config.backend()?)?;

    let mut page = JobAppTracker::new(
        config.dropzone()?,
        SessionState::from(&session_config),
        ConsoleToaster::new(*output),
        config.toast()?.duration_ms,
    )?;

    if let Some(text) = args.text {
        page.set_text(text);
    } else {
        page.handle_drop(collect_batch(&args.files)?);
    }

    match page.submit(&submitter).await {
        SubmitOutcome::Submitted => {
            output.success("Job posting submitted");
            Ok(())
        }
        SubmitOutcome::Empty => {
            output.info("Nothing to submit");
            Ok(())
        }
        SubmitOutcome::Pending => bail!("Session is still loading"),
        SubmitOutcome::SignInRequired => bail!("Sign in required"),
        SubmitOutcome::Failed => bail!("Submission failed"),
    }
}
