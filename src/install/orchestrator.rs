//! The check, download and install sequence.

use super::download::Downloader;
use super::interaction::ProgressScope;
use super::process::ProcessRunner;
use super::temp::temp_filename;
use super::variant::{InstallOutcome, InstallSession, InstallerVariant};
use crate::{InstallError, InstallOptions, InstallStatusChecker, UserInteraction};
use tracing::{debug, info};

pub const REINSTALL_MESSAGE: &str = "Docker Desktop is already installed. Would you like to reinstall?";
pub const REINSTALL_OPTION: &str = "Reinstall";
pub const DOWNLOADING_MESSAGE: &str = "Downloading Docker installer...";
pub const INSTALLATION_STARTED_MESSAGE: &str =
    "The Docker Desktop installation is started. Complete the installation and then start Docker Desktop.";

/// Downloads and launches the Docker Desktop installer.
///
/// Every collaborator is borrowed, so the same fakes can be inspected after a
/// run in tests and the host keeps ownership of its UI.
///
/// # Consent Model
///
/// When Docker is not installed, calling [`run`](Installer::run) is consent to
/// download and start the installer. When it is installed, the user is asked
/// to confirm a reinstall first.
///
/// # Example
///
/// ```rust,no_run
/// use docker_desktop_installer::{
///     DockerStatusChecker, HostOs, HttpDownloader, InstallOptions, Installer, InstallerVariant,
///     SystemProcessRunner, UserInteraction,
/// };
///
/// async fn install(ui: &dyn UserInteraction) {
///     let checker = DockerStatusChecker::default();
///     let downloader = HttpDownloader::new();
///     let runner = SystemProcessRunner::new();
///     let installer = Installer::new(&checker, ui, &downloader, &runner, InstallOptions::default());
///
///     if let Some(variant) = InstallerVariant::for_host(HostOs::current()) {
///         match installer.run(variant).await {
///             Ok(outcome) => println!("{outcome:?}"),
///             Err(e) => eprintln!("Failed: {e}. Fix: {}", e.fix_suggestion()),
///         }
///     }
/// }
/// ```
pub struct Installer<'a> {
    checker: &'a dyn InstallStatusChecker,
    ui: &'a dyn UserInteraction,
    downloader: &'a dyn Downloader,
    runner: &'a dyn ProcessRunner,
    options: InstallOptions,
}

impl<'a> Installer<'a> {
    pub fn new(
        checker: &'a dyn InstallStatusChecker,
        ui: &'a dyn UserInteraction,
        downloader: &'a dyn Downloader,
        runner: &'a dyn ProcessRunner,
        options: InstallOptions,
    ) -> Self {
        Self {
            checker,
            ui,
            downloader,
            runner,
            options,
        }
    }

    pub(crate) fn ui(&self) -> &'a dyn UserInteraction {
        self.ui
    }

    /// Whether the install should go ahead.
    ///
    /// Always true when Docker is missing. When it is present the user must
    /// pick "Reinstall"; dismissing the prompt returns false.
    pub async fn pre_install_check(&self) -> bool {
        if !self.checker.is_installed_now().await {
            return true;
        }

        debug!("docker already installed, asking to reinstall");
        self.ui
            .confirm(REINSTALL_MESSAGE, &[REINSTALL_OPTION])
            .await
            .is_some()
    }

    /// Download the installer for `variant` and start it.
    ///
    /// A failed download ends the run before anything is executed and is
    /// never retried. The file is removed afterwards only on Windows.
    pub async fn run(&self, variant: InstallerVariant) -> Result<InstallOutcome, InstallError> {
        if !self.pre_install_check().await {
            info!("reinstall declined");
            return Ok(InstallOutcome::Declined);
        }

        let path = temp_filename(
            &self.options.temp_dir,
            &self.options.temp_prefix,
            variant.file_extension(),
        );

        {
            let _progress = ProgressScope::begin(self.ui, DOWNLOADING_MESSAGE);
            let bytes = self
                .downloader
                .stream_to_file(variant.download_url(), &path)
                .await?;
            info!(?variant, path = %path.display(), bytes, "installer downloaded");
        }

        let session = InstallSession {
            command: variant.build_command(&path),
            path,
        };

        self.ui.notify(INSTALLATION_STARTED_MESSAGE);
        variant.install(&session, self.runner, self.ui).await
    }
}
