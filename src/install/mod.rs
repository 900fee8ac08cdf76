//! Downloading and launching the Docker Desktop installer.
//!
//! The flow lives in [`Installer`]. Platform behavior is the closed
//! [`InstallerVariant`] enum, and every side effect goes through a trait so
//! hosts and tests can substitute it:
//!
//! - [`Downloader`] / [`HttpDownloader`]: fetch the installer
//! - [`ProcessRunner`] / [`SystemProcessRunner`]: execute it
//! - [`UserInteraction`]: prompts, progress, notifications, output log
//!
//! # Example
//!
//! ```rust
//! use docker_desktop_installer::{HostOs, InstallerVariant};
//!
//! match InstallerVariant::for_host(HostOs::current()) {
//!     Some(variant) => println!("Installer comes from {}", variant.download_url()),
//!     None => println!("No automated installer on this platform"),
//! }
//! ```

mod cleanup;
mod download;
mod errors;
mod interaction;
mod notification;
mod orchestrator;
mod process;
mod temp;
mod variant;

pub use cleanup::remove_if_exists;
pub use download::{Downloader, HttpDownloader};
pub use errors::InstallError;
pub use interaction::UserInteraction;
pub use notification::{
    dispatch, install_docker, show_install_notification, CommandOutcome, HostCommand, INSTALL_MESSAGE,
    INSTALL_OPTION, LEARN_MORE_OPTION, LINUX_INSTALL_DOCS_URL, LINUX_INSTALL_MESSAGE,
};
pub use orchestrator::{
    Installer, DOWNLOADING_MESSAGE, INSTALLATION_STARTED_MESSAGE, REINSTALL_MESSAGE, REINSTALL_OPTION,
};
pub use process::{BackgroundTask, ProcessRunner, SystemProcessRunner};
pub use temp::temp_filename;
pub use variant::{InstallOutcome, InstallSession, InstallerVariant, MAC_TASK_TITLE};
