//! Terminal implementation of the installer's user interaction.

use async_trait::async_trait;
use docker_desktop_installer::UserInteraction;
use inquire::{Confirm, InquireError, Select};
use tracing::{debug, info, warn};

/// Prompts with `inquire`, reports on stderr, writes the output log to stdout.
pub struct TerminalInteraction {
    assume_yes: bool,
}

impl TerminalInteraction {
    /// With `assume_yes`, every prompt is answered with its first option.
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

#[async_trait]
impl UserInteraction for TerminalInteraction {
    fn begin_progress(&self, title: &str) {
        eprintln!("{title}");
    }

    fn end_progress(&self) {
        debug!("progress finished");
    }

    async fn confirm(&self, message: &str, options: &[&str]) -> Option<String> {
        if self.assume_yes {
            eprintln!("{message}");
            return options.first().map(|o| o.to_string());
        }

        let message = message.to_string();
        let options: Vec<String> = options.iter().map(|o| o.to_string()).collect();
        match tokio::task::spawn_blocking(move || prompt(&message, options)).await {
            Ok(answer) => answer,
            Err(e) => {
                warn!(error = %e, "prompt task failed");
                None
            }
        }
    }

    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }

    fn append_log(&self, line: &str) {
        info!(target: "docker_install::output", "{line}");
        println!("{line}");
    }

    fn open_external(&self, url: &str) {
        eprintln!("Opening {url}");
        if let Err(e) = opener::open(url) {
            warn!(url, error = %e, "could not open browser");
            eprintln!("Open {url} in your browser to continue.");
        }
    }
}

/// Ask on the terminal. A single option becomes a yes/no question; several
/// become a list. Esc, Ctrl-C and a missing TTY all dismiss.
fn prompt(message: &str, mut options: Vec<String>) -> Option<String> {
    match options.len() {
        0 => {
            eprintln!("{message}");
            None
        }
        1 => {
            let option = options.remove(0);
            let confirmed = Confirm::new(message)
                .with_default(true)
                .with_help_message(&format!("Answer yes to {option}"))
                .prompt();
            dismissed_as_none(confirmed)?.then_some(option)
        }
        _ => dismissed_as_none(Select::new(message, options).prompt()),
    }
}

fn dismissed_as_none<T>(answer: Result<T, InquireError>) -> Option<T> {
    match answer {
        Ok(value) => Some(value),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            debug!("prompt dismissed");
            None
        }
        Err(e) => {
            warn!(error = %e, "prompt unavailable; rerun with --yes to accept");
            None
        }
    }
}
