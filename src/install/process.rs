//! Running installer commands, waited-on or in the background.

use crate::InstallError;
use async_trait::async_trait;
use std::process::{ExitStatus, Stdio};
use tokio::process::{Child, Command};
use tracing::debug;

/// Handle to an installer command launched without waiting for it.
///
/// The installer never observes how the task ends. Whoever holds the handle
/// may [`wait`](BackgroundTask::wait) on it, or drop it and let the process
/// run on by itself.
#[derive(Debug)]
pub struct BackgroundTask {
    title: String,
    pid: Option<u32>,
    child: Option<Child>,
}

impl BackgroundTask {
    /// Handle for a task whose process is tracked elsewhere.
    pub fn detached(title: impl Into<String>, pid: Option<u32>) -> Self {
        Self {
            title: title.into(),
            pid,
            child: None,
        }
    }

    fn spawned(title: &str, child: Child) -> Self {
        Self {
            title: title.to_string(),
            pid: child.id(),
            child: Some(child),
        }
    }

    /// Title shown to the user for this task.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn pid(&self) -> Option<u32> {
        self.pid
    }

    /// Wait for the task to exit.
    ///
    /// Returns `None` for detached handles.
    pub async fn wait(&mut self) -> Option<std::io::Result<ExitStatus>> {
        match self.child.as_mut() {
            Some(child) => Some(child.wait().await),
            None => None,
        }
    }
}

/// Executes install commands through the platform shell.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run `command` and wait for it to finish.
    ///
    /// Spawn failures and non-zero exits are both `ProcessExecution` errors.
    async fn run(&self, command: &str) -> Result<(), InstallError>;

    /// Start `command` as a user-visible background task and return as soon as
    /// it has been spawned.
    fn launch(&self, title: &str, command: &str) -> Result<BackgroundTask, InstallError>;
}

/// [`ProcessRunner`] using `cmd /C` on Windows and `sh -c` elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    // The command carries its own quoting, so it must reach cmd.exe untouched
    cmd.arg("/C").raw_arg(command);
    cmd
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

fn spawn_failed(command: &str, err: &std::io::Error) -> InstallError {
    let fix = if err.kind() == std::io::ErrorKind::PermissionDenied {
        "Try running with appropriate permissions".to_string()
    } else {
        "Run the downloaded installer manually".to_string()
    };
    InstallError::ProcessExecution {
        command: command.to_string(),
        message: err.to_string(),
        exit_code: None,
        stderr: None,
        fix,
    }
}

#[async_trait]
impl ProcessRunner for SystemProcessRunner {
    async fn run(&self, command: &str) -> Result<(), InstallError> {
        debug!(command, "running installer command");

        let output = shell_command(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| spawn_failed(command, &e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(InstallError::ProcessExecution {
                command: command.to_string(),
                message: format!("Installer exited with code {:?}", output.status.code()),
                exit_code: output.status.code(),
                stderr: (!stderr.is_empty()).then_some(stderr),
                fix: "See the installer output for details, or run the installer manually".to_string(),
            });
        }

        Ok(())
    }

    fn launch(&self, title: &str, command: &str) -> Result<BackgroundTask, InstallError> {
        debug!(title, command, "launching background task");

        let child = shell_command(command)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|e| spawn_failed(command, &e))?;

        Ok(BackgroundTask::spawned(title, child))
    }
}
