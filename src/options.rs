//! Detection and installation options.
//!
//! [`DetectOptions`] tunes the `docker --version` probe. [`InstallOptions`]
//! controls where the downloaded installer is written.

use std::path::PathBuf;
use std::time::Duration;

/// Configuration options for Docker detection.
///
/// # Example
///
/// ```rust
/// use docker_desktop_installer::DetectOptions;
/// use std::time::Duration;
///
/// // Use default options (5 second timeout, version parsing enabled)
/// let opts = DetectOptions::default();
///
/// // Fast-path detection (skip the version probe)
/// let opts = DetectOptions {
///     skip_version: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct DetectOptions {
    /// Maximum time to wait for `docker --version`.
    ///
    /// Default: 5 seconds
    pub timeout: Duration,

    /// Skip the version probe; a `docker` executable on disk is enough.
    ///
    /// The resulting `InstalledMetadata` has `version: None`.
    ///
    /// Default: `false`
    pub skip_version: bool,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            skip_version: false,
        }
    }
}

/// Options for the download-and-install flow.
///
/// The download URLs are fixed per platform and deliberately not part of
/// this struct.
///
/// # Example
///
/// ```rust
/// use docker_desktop_installer::InstallOptions;
///
/// let options = InstallOptions::default();
/// assert_eq!(options.temp_prefix, "docker");
/// assert_eq!(options.temp_dir, std::env::temp_dir());
/// ```
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Directory the installer is downloaded into.
    ///
    /// Default: `std::env::temp_dir()`
    pub temp_dir: PathBuf,

    /// File name prefix of the downloaded installer.
    ///
    /// Default: `"docker"`
    pub temp_prefix: String,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            temp_dir: std::env::temp_dir(),
            temp_prefix: "docker".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_detect_options() {
        let opts = DetectOptions::default();
        assert_eq!(opts.timeout, Duration::from_secs(5));
        assert!(!opts.skip_version);
    }

    #[test]
    fn test_custom_timeout() {
        let opts = DetectOptions {
            timeout: Duration::from_millis(500),
            ..Default::default()
        };
        assert_eq!(opts.timeout, Duration::from_millis(500));
        assert!(!opts.skip_version);
    }

    #[test]
    fn test_default_install_options() {
        let opts = InstallOptions::default();
        assert_eq!(opts.temp_dir, std::env::temp_dir());
        assert_eq!(opts.temp_prefix, "docker");
    }

    #[test]
    fn test_custom_install_options() {
        let opts = InstallOptions {
            temp_dir: PathBuf::from("/var/tmp"),
            ..Default::default()
        };
        assert_eq!(opts.temp_dir, PathBuf::from("/var/tmp"));
        assert_eq!(opts.temp_prefix, "docker");
    }
}
