//! Error types for the download-and-install flow.
//!
//! Each error variant includes an actionable fix suggestion. A user dismissing
//! the reinstall prompt is not an error; see `InstallOutcome::Declined`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while downloading or running the Docker installer.
///
/// # Example
///
/// ```rust
/// use docker_desktop_installer::InstallError;
///
/// fn handle_error(error: InstallError) {
///     eprintln!("Installation failed: {}", error);
///     eprintln!("To fix: {}", error.fix_suggestion());
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InstallError {
    /// The installer download could not complete.
    ///
    /// Raised for connection failures, non-success HTTP status codes and
    /// broken response bodies. Always raised before any install attempt.
    #[error("Network error downloading {url}: {message}")]
    Network {
        /// URL that was being downloaded.
        url: String,
        /// Description of the network error.
        message: String,
        /// HTTP status code, when the server answered.
        status: Option<u16>,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// The install command could not be spawned or exited abnormally.
    #[error("Installer command failed: {message}")]
    ProcessExecution {
        /// The command line that was executed.
        command: String,
        /// Description of the failure.
        message: String,
        /// Exit code from the installer, if available.
        exit_code: Option<i32>,
        /// Standard error from the installer, if available.
        stderr: Option<String>,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// A file system operation on the downloaded installer failed.
    #[error("File system error at {}: {message}", .path.display())]
    FileSystem {
        /// Path of the file involved.
        path: PathBuf,
        /// Description of the failure.
        message: String,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },
}

impl InstallError {
    /// Get an actionable suggestion for fixing this error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docker_desktop_installer::InstallError;
    ///
    /// let error = InstallError::Network {
    ///     url: "https://aka.ms/download-docker-mac-vscode".to_string(),
    ///     message: "connection refused".to_string(),
    ///     status: None,
    ///     fix: "Check your internet connection and run the install again".to_string(),
    /// };
    /// assert!(error.fix_suggestion().contains("internet"));
    /// ```
    pub fn fix_suggestion(&self) -> &str {
        match self {
            Self::Network { fix, .. } => fix,
            Self::ProcessExecution { fix, .. } => fix,
            Self::FileSystem { fix, .. } => fix,
        }
    }

    pub(crate) fn network(url: &str, message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Network {
            url: url.to_string(),
            message: message.into(),
            status,
            fix: "Check your internet connection and run the install again".to_string(),
        }
    }

    pub(crate) fn file_system(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        let fix = if err.kind() == std::io::ErrorKind::PermissionDenied {
            "Check permissions on the temporary directory".to_string()
        } else {
            "Free up space in the temporary directory and try again".to_string()
        };
        Self::FileSystem {
            path: path.into(),
            message: err.to_string(),
            fix,
        }
    }
}
