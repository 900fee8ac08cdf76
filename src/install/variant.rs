//! Per-platform Docker Desktop installers.

use super::cleanup::remove_if_exists;
use super::process::{BackgroundTask, ProcessRunner};
use crate::{HostOs, InstallError, UserInteraction};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Title of the background task that opens the macOS disk image.
pub const MAC_TASK_TITLE: &str = "Docker Install";

/// Platforms with an automated Docker Desktop installer.
///
/// Linux is deliberately absent: it only gets a documentation link, see
/// [`InstallerVariant::for_host`].
///
/// # Example
///
/// ```rust
/// use docker_desktop_installer::{HostOs, InstallerVariant};
/// use std::path::Path;
///
/// let variant = InstallerVariant::for_host(HostOs::Windows).unwrap();
/// assert_eq!(variant.file_extension(), "exe");
/// assert_eq!(
///     variant.build_command(Path::new(r"C:\Temp\docker-1.exe")),
///     r#""C:\Temp\docker-1.exe""#
/// );
///
/// assert!(InstallerVariant::for_host(HostOs::Linux).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallerVariant {
    /// Downloads `Docker Desktop Installer.exe` and runs it to completion.
    Windows,
    /// Downloads `Docker.dmg` and opens it for a manual drag-to-install.
    Mac,
}

/// State of one install run: where the installer was downloaded and the
/// command that launches it.
///
/// Created by [`Installer::run`](crate::Installer::run) and dropped when the
/// run returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallSession {
    pub path: PathBuf,
    pub command: String,
}

/// What an install run ended with.
#[derive(Debug)]
pub enum InstallOutcome {
    /// The user dismissed the reinstall prompt; nothing was downloaded.
    Declined,
    /// The installer ran to completion and the download was removed.
    Completed,
    /// The installer was started in the background and left running.
    ///
    /// Its success or failure is only visible to the user, never to the
    /// installer flow.
    Launched(BackgroundTask),
}

impl InstallerVariant {
    /// Variant for a host, or `None` when the host has no automated installer.
    pub fn for_host(os: HostOs) -> Option<Self> {
        match os {
            HostOs::Windows => Some(Self::Windows),
            HostOs::Mac => Some(Self::Mac),
            HostOs::Linux => None,
        }
    }

    /// Where the installer is downloaded from.
    pub fn download_url(&self) -> &'static str {
        match self {
            Self::Windows => "https://aka.ms/download-docker-windows-vscode",
            Self::Mac => "https://aka.ms/download-docker-mac-vscode",
        }
    }

    /// Extension of the downloaded file, without the dot.
    pub fn file_extension(&self) -> &'static str {
        match self {
            Self::Windows => "exe",
            Self::Mac => "dmg",
        }
    }

    /// Shell command that launches the installer at `path`.
    ///
    /// Pure: the same path always yields the same command.
    pub fn build_command(&self, path: &Path) -> String {
        let path = path.display();
        match self {
            // Quoted so paths with spaces execute
            Self::Windows => format!("\"{path}\""),
            Self::Mac => format!("chmod +x '{path}' && open '{path}'"),
        }
    }

    /// Run the installer for this platform.
    pub async fn install(
        &self,
        session: &InstallSession,
        runner: &dyn ProcessRunner,
        ui: &dyn UserInteraction,
    ) -> Result<InstallOutcome, InstallError> {
        match self {
            Self::Windows => install_windows(session, runner, ui).await,
            Self::Mac => install_mac(session, runner),
        }
    }
}

/// Run the installer to completion, then remove it whatever the result.
///
/// An execution error is reported in preference to a cleanup error.
async fn install_windows(
    session: &InstallSession,
    runner: &dyn ProcessRunner,
    ui: &dyn UserInteraction,
) -> Result<InstallOutcome, InstallError> {
    ui.append_log(&format!("Executing command {}", session.command));
    info!(command = %session.command, "executing installer");

    let executed = runner.run(&session.command).await;
    let cleaned = remove_if_exists(&session.path).await;

    match (executed, cleaned) {
        (Ok(()), Ok(_)) => Ok(InstallOutcome::Completed),
        (Ok(()), Err(cleanup)) => {
            warn!(error = %cleanup, "failed to remove installer after a successful install");
            ui.append_log(&format!("Could not remove {}: {}", session.path.display(), cleanup));
            Err(cleanup)
        }
        (Err(exec), Ok(_)) => Err(exec),
        (Err(exec), Err(cleanup)) => {
            warn!(error = %cleanup, "failed to remove installer after a failed install");
            ui.append_log(&format!("Could not remove {}: {}", session.path.display(), cleanup));
            Err(exec)
        }
    }
}

/// Open the disk image in the background. The image stays on disk: the user
/// still has to drag Docker into Applications from it.
fn install_mac(session: &InstallSession, runner: &dyn ProcessRunner) -> Result<InstallOutcome, InstallError> {
    info!(command = %session.command, "launching installer task");
    let task = runner.launch(MAC_TASK_TITLE, &session.command)?;
    Ok(InstallOutcome::Launched(task))
}
