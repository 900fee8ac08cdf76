//! # docker-desktop-installer
//!
//! Detects Docker Desktop and, when it is missing or the user asks for a
//! reinstall, downloads the platform installer and launches it.
//!
//! ## Features
//!
//! - `detect_docker()` probes the `docker` CLI and reports an `InstallStatus`
//! - `Installer::run()` drives check, confirm, download and install for an
//!   `InstallerVariant` (Windows or Mac)
//! - `show_install_notification()` and `dispatch()` are the entry points a
//!   host command dispatcher calls
//!
//! ## Example
//!
//! ```rust,no_run
//! use docker_desktop_installer::{
//!     dispatch, DockerStatusChecker, HostCommand, HostOs, HttpDownloader, InstallOptions,
//!     Installer, SystemProcessRunner, UserInteraction,
//! };
//!
//! async fn on_docker_missing(ui: &dyn UserInteraction) {
//!     let checker = DockerStatusChecker::default();
//!     let downloader = HttpDownloader::new();
//!     let runner = SystemProcessRunner::new();
//!     let installer = Installer::new(&checker, ui, &downloader, &runner, InstallOptions::default());
//!
//!     if let Err(e) = dispatch(HostCommand::ShowInstallNotification, HostOs::current(), &installer).await {
//!         eprintln!("{e}: {}", e.fix_suggestion());
//!     }
//! }
//! ```

mod detect;
mod detection;
mod host_os;
mod install;
mod options;
mod status;

pub use detect::{detect_docker, detect_docker_with_options, DockerStatusChecker};
pub use host_os::HostOs;
pub use install::{
    dispatch, install_docker, remove_if_exists, show_install_notification, temp_filename, BackgroundTask,
    CommandOutcome, Downloader, HostCommand, HttpDownloader, InstallError, InstallOutcome, InstallSession,
    Installer, InstallerVariant, ProcessRunner, SystemProcessRunner, UserInteraction, DOWNLOADING_MESSAGE,
    INSTALLATION_STARTED_MESSAGE, INSTALL_MESSAGE, INSTALL_OPTION, LEARN_MORE_OPTION, LINUX_INSTALL_DOCS_URL,
    LINUX_INSTALL_MESSAGE, MAC_TASK_TITLE, REINSTALL_MESSAGE, REINSTALL_OPTION,
};
pub use options::{DetectOptions, InstallOptions};
pub use status::{DetectionError, InstallStatus, InstallStatusChecker, InstalledMetadata};
