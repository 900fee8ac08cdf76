//! Docker install status types and the live status-check seam.

use async_trait::async_trait;
use semver::Version;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Metadata for a detected Docker installation.
#[derive(Debug, Clone)]
pub struct InstalledMetadata {
    /// Path to the `docker` executable.
    pub path: PathBuf,

    /// Parsed version of the Docker CLI.
    ///
    /// `None` when detection ran with `skip_version`.
    pub version: Option<Version>,

    /// How Docker was installed (e.g., "docker-desktop", "brew", "snap").
    ///
    /// This is `None` if the installation method couldn't be determined.
    pub install_method: Option<String>,

    /// When detection was last verified.
    pub last_verified: SystemTime,
}

/// Typed error variants for detection failures.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error types
/// in future versions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DetectionError {
    /// Timed out while probing the Docker CLI.
    Timeout,

    /// Permission denied accessing the executable or its location.
    PermissionDenied,

    /// Failed to parse the version output.
    VersionParseFailed,

    /// I/O error during detection (e.g., failed to execute command).
    IoError,
}

impl DetectionError {
    /// Human-readable description of the error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docker_desktop_installer::DetectionError;
    ///
    /// let error = DetectionError::Timeout;
    /// assert_eq!(error.description(), "Detection timed out");
    /// ```
    pub fn description(&self) -> &'static str {
        match self {
            Self::Timeout => "Detection timed out",
            Self::PermissionDenied => "Permission denied",
            Self::VersionParseFailed => "Failed to parse version",
            Self::IoError => "I/O error during detection",
        }
    }
}

/// Result of probing for Docker.
///
/// # Example
///
/// ```rust
/// use docker_desktop_installer::InstallStatus;
///
/// fn describe(status: &InstallStatus) -> &'static str {
///     if status.is_installed() {
///         "Docker is installed"
///     } else {
///         "Docker is not installed"
///     }
/// }
///
/// assert_eq!(describe(&InstallStatus::NotInstalled), "Docker is not installed");
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum InstallStatus {
    /// Docker was found and responded to a version probe.
    Installed(InstalledMetadata),

    /// Docker is definitively not installed.
    NotInstalled,

    /// Detection failed with an error.
    Unknown {
        /// Typed error variant for programmatic handling.
        error: DetectionError,
        /// Human-readable message for display.
        message: String,
    },
}

impl InstallStatus {
    /// Whether Docker counts as installed for the reinstall prompt.
    ///
    /// `Unknown` counts as not installed, the same way a failing
    /// `docker --version` does.
    pub fn is_installed(&self) -> bool {
        matches!(self, Self::Installed(_))
    }

    /// Path to the `docker` executable if it was found.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Installed(meta) => Some(&meta.path),
            _ => None,
        }
    }

    /// Detected Docker CLI version, if known.
    pub fn version(&self) -> Option<&Version> {
        match self {
            Self::Installed(meta) => meta.version.as_ref(),
            _ => None,
        }
    }
}

/// Live probe reporting whether Docker is installed right now.
///
/// Implementations must not cache: the installer calls this at the start of
/// every run and expects the current state of the machine.
#[async_trait]
pub trait InstallStatusChecker: Send + Sync {
    async fn is_installed_now(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_installed_metadata() -> InstalledMetadata {
        InstalledMetadata {
            path: PathBuf::from("/usr/local/bin/docker"),
            version: Some(Version::parse("24.0.6").unwrap()),
            install_method: Some("docker-desktop".to_string()),
            last_verified: SystemTime::now(),
        }
    }

    #[test]
    fn test_installed_status() {
        let status = InstallStatus::Installed(make_installed_metadata());

        assert!(status.is_installed());
        assert_eq!(status.path(), Some(Path::new("/usr/local/bin/docker")));
        assert_eq!(status.version(), Some(&Version::new(24, 0, 6)));
    }

    #[test]
    fn test_installed_without_version() {
        let mut meta = make_installed_metadata();
        meta.version = None;
        let status = InstallStatus::Installed(meta);

        assert!(status.is_installed());
        assert!(status.version().is_none());
    }

    #[test]
    fn test_not_installed_status() {
        let status = InstallStatus::NotInstalled;

        assert!(!status.is_installed());
        assert!(status.path().is_none());
        assert!(status.version().is_none());
    }

    #[test]
    fn test_unknown_status_is_not_installed() {
        let status = InstallStatus::Unknown {
            error: DetectionError::IoError,
            message: "docker --version exited with 1".to_string(),
        };

        assert!(!status.is_installed());
        assert!(status.path().is_none());
    }

    #[test]
    fn test_detection_error_descriptions() {
        assert_eq!(DetectionError::Timeout.description(), "Detection timed out");
        assert_eq!(
            DetectionError::PermissionDenied.description(),
            "Permission denied"
        );
        assert_eq!(
            DetectionError::VersionParseFailed.description(),
            "Failed to parse version"
        );
        assert_eq!(
            DetectionError::IoError.description(),
            "I/O error during detection"
        );
    }
}
