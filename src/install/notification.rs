//! Host-facing commands: "install Docker" and the "Docker is missing" prompt.

use super::orchestrator::Installer;
use super::variant::{InstallOutcome, InstallerVariant};
use crate::{HostOs, InstallError};
use tracing::info;

pub const LINUX_INSTALL_MESSAGE: &str =
    "Docker is not installed. Would you like to learn more about installing Docker?";
pub const INSTALL_MESSAGE: &str = "Docker Desktop is not installed. Would you like to install it?";
pub const LEARN_MORE_OPTION: &str = "Learn more";
pub const INSTALL_OPTION: &str = "Install";

/// Where Linux users are sent instead of an automated install.
pub const LINUX_INSTALL_DOCS_URL: &str = "https://aka.ms/download-docker-linux-vscode";

/// Commands a host dispatcher can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// Install Docker for the current platform.
    InstallDocker,
    /// Tell the user Docker is missing and offer to install it.
    ShowInstallNotification,
}

/// Result of a dispatched command.
#[derive(Debug)]
pub enum CommandOutcome {
    /// The user dismissed the notification.
    Dismissed,
    /// The Linux install documentation was opened.
    OpenedDocumentation,
    /// The install flow ran.
    Install(InstallOutcome),
}

/// Run `command` for a host running `os`.
pub async fn dispatch(
    command: HostCommand,
    os: HostOs,
    installer: &Installer<'_>,
) -> Result<CommandOutcome, InstallError> {
    match command {
        HostCommand::InstallDocker => install_docker(os, installer).await,
        HostCommand::ShowInstallNotification => show_install_notification(os, installer).await,
    }
}

/// Install Docker Desktop on `os`.
///
/// Linux has no automated installer, so the documentation link is opened
/// instead.
pub async fn install_docker(os: HostOs, installer: &Installer<'_>) -> Result<CommandOutcome, InstallError> {
    match InstallerVariant::for_host(os) {
        Some(variant) => installer.run(variant).await.map(CommandOutcome::Install),
        None => {
            installer.ui().open_external(LINUX_INSTALL_DOCS_URL);
            Ok(CommandOutcome::OpenedDocumentation)
        }
    }
}

/// Offer to install Docker.
///
/// On Linux the offer is a "Learn more" link; accepting it opens the docs and
/// never runs an installer. Elsewhere accepting starts the install flow once.
pub async fn show_install_notification(
    os: HostOs,
    installer: &Installer<'_>,
) -> Result<CommandOutcome, InstallError> {
    let (message, option) = if os.is_linux() {
        (LINUX_INSTALL_MESSAGE, LEARN_MORE_OPTION)
    } else {
        (INSTALL_MESSAGE, INSTALL_OPTION)
    };

    if installer.ui().confirm(message, &[option]).await.is_none() {
        info!(os = os.display_name(), "install notification dismissed");
        return Ok(CommandOutcome::Dismissed);
    }

    install_docker(os, installer).await
}
