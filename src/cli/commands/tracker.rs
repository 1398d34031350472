//! Interactive tracker page session
//!
//! Reads one command per line from stdin and applies it to a
//! [`JobAppTracker`], so the page can be driven from a terminal or a script.

use anyhow::{Context, Result, bail};
use clap::Args;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{collect_batch, print_files};
use crate::cli::{ConsoleToaster, Output};
use crate::config::YourOrbitConfig;
use crate::tracker::{ConfiguredSubmitter, JobAppTracker, SessionState, SubmitOutcome};

const HELP: &[(&str, &str)] = &[
    ("drop <PATH...>", "Drop files, directories or glob patterns"),
    ("remove <INDEX>", "Remove an uploaded file"),
    ("text <TEXT>", "Paste a job posting"),
    ("clear", "Clear the pasted text"),
    ("reset", "Clear text and files"),
    ("list", "Show the page state"),
    ("submit", "Submit the job posting"),
    ("help", "Show this help"),
    ("quit", "Leave the session"),
];

#[derive(Args)]
pub struct TrackerArgs {
    /// Signed-in user for this session (overrides session.user)
    #[arg(long)]
    pub user: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Drop(Vec<String>),
    Remove(usize),
    Text(String),
    Clear,
    Reset,
    List,
    Submit,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match name {
        "drop" => {
            if rest.is_empty() {
                bail!("Usage: drop <PATH...>");
            }
            Command::Drop(rest.split_whitespace().map(String::from).collect())
        }
        "remove" | "rm" => {
            let index = rest.parse().with_context(|| format!("Invalid index: '{rest}'"))?;
            Command::Remove(index)
        }
        "text" => Command::Text(rest.to_string()),
        "clear" => Command::Clear,
        "reset" => Command::Reset,
        "list" | "ls" => Command::List,
        "submit" => Command::Submit,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => bail!("Unknown command: '{other}' (try 'help')"),
    };
    Ok(command)
}

pub async fn execute(args: TrackerArgs, config: &YourOrbitConfig, output: &Output) -> Result<()> {
    let mut session_config = config.session()?;
    if let Some(user) = args.user {
        session_config.user = user;
        session_config.pending = false;
    }
    let session = SessionState::from(&session_config);
    let submitter = ConfiguredSubmitter::from_config(config.submit()?.mode, &config.backend()?)?;

    let mut page = JobAppTracker::new(
        config.dropzone()?,
        session,
        ConsoleToaster::new(*output),
        config.toast()?.duration_ms,
    )?;

    if page.auth().show_auth_prompt() {
        output.warning("Not signed in; submissions will be refused");
    }

    let interactive = atty::is(atty::Stream::Stdin);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        if interactive {
            print!("> ");
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                output.error(&e.to_string());
                continue;
            }
        };
        tracing::debug!("Tracker command: {:?}", command);

        match command {
            Command::Drop(patterns) => match collect_batch(&patterns) {
                Ok(batch) => {
                    let outcome = page.handle_drop(batch);
                    if outcome.ignored {
                        output.warning(&page.view().dropzone.placeholder);
                    } else if outcome.added > 0 {
                        output.success(&format!("Added {} file(s)", outcome.added));
                    }
                }
                Err(e) => output.error(&format!("{e:#}")),
            },
            Command::Remove(index) => match page.remove(index) {
                Ok(file) => output.success(&format!("Removed {}", file.name)),
                Err(e) => output.error(&e.to_string()),
            },
            Command::Text(text) => {
                if page.set_text(text) && page.break_all() {
                    output.verbose("Text contains long words; wrapping anywhere");
                }
            }
            Command::Clear => page.clear_text(),
            Command::Reset => page.reset(),
            Command::List => print_view(&page, output),
            Command::Submit => match page.submit(&submitter).await {
                SubmitOutcome::Submitted => output.success("Job posting submitted"),
                SubmitOutcome::Empty => output.info("Nothing to submit"),
                SubmitOutcome::Pending | SubmitOutcome::SignInRequired | SubmitOutcome::Failed => {}
            },
            Command::Help => {
                for (usage, about) in HELP {
                    output.table_row(usage, about);
                }
            }
            Command::Quit => break,
        }
    }

    Ok(())
}

fn print_view(page: &JobAppTracker<ConsoleToaster>, output: &Output) {
    let view = page.view();
    output.category("Job posting");
    if view.text.is_empty() {
        output.key_value("Text:", view.textarea_placeholder, false);
    } else {
        output.key_value("Text:", &view.text, true);
    }
    output.key_value("Drop zone:", &view.dropzone.placeholder, false);
    if !view.dropzone.description.is_empty() {
        output.key_value("", &view.dropzone.description, false);
    }
    print_files(&view.dropzone, output);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_command("drop a.png  b.png").unwrap(),
            Command::Drop(vec!["a.png".into(), "b.png".into()])
        );
        assert_eq!(parse_command("remove 2").unwrap(), Command::Remove(2));
        assert_eq!(
            parse_command("text Senior Rust Engineer").unwrap(),
            Command::Text("Senior Rust Engineer".into())
        );
        assert_eq!(parse_command("  quit ").unwrap(), Command::Quit);
        assert_eq!(parse_command("ls").unwrap(), Command::List);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("drop").is_err());
        assert!(parse_command("remove x").is_err());
        assert!(
            parse_command("upload a.png")
                .unwrap_err()
                .to_string()
                .contains("Unknown command")
        );
    }
}
