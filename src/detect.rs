//! Docker detection and the default live status checker.

use crate::detection::{check_version, find_executable, parse_version};
use crate::{DetectOptions, DetectionError, InstallStatus, InstallStatusChecker, InstalledMetadata};
use async_trait::async_trait;
use std::path::Path;
use std::time::SystemTime;
use tracing::debug;

const DOCKER_EXECUTABLE: &str = "docker";

/// Detect Docker with default options.
///
/// # Example
///
/// ```rust,no_run
/// use docker_desktop_installer::detect_docker;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let status = detect_docker().await;
///     if let Some(version) = status.version() {
///         println!("Docker {version} at {:?}", status.path());
///     }
/// }
/// ```
pub async fn detect_docker() -> InstallStatus {
    detect_docker_with_options(&DetectOptions::default()).await
}

/// Detect Docker with custom options.
///
/// # Detection Process
///
/// 1. Search for `docker` in PATH and fallback locations
/// 2. Run `docker --version` bounded by `options.timeout` (unless `skip_version`)
/// 3. Parse the semantic version from the output
///
/// A timed-out probe is reported as `NotInstalled`; any other probe failure
/// is `Unknown`. A successful probe whose output has no recognisable version
/// is still `Installed`, with `version: None`.
pub async fn detect_docker_with_options(options: &DetectOptions) -> InstallStatus {
    let path = match find_executable(DOCKER_EXECUTABLE) {
        Some(p) => p,
        None => {
            debug!("docker executable not found");
            return InstallStatus::NotInstalled;
        }
    };

    let version = if options.skip_version {
        None
    } else {
        let output = match check_version(&path, options.timeout).await {
            Ok(output) => output,
            Err(DetectionError::Timeout) => {
                debug!(path = %path.display(), "docker --version timed out");
                return InstallStatus::NotInstalled;
            }
            Err(e) => {
                return InstallStatus::Unknown {
                    message: format!("Failed to verify Docker at {}: {}", path.display(), e.description()),
                    error: e,
                }
            }
        };

        // A working `docker --version` means Docker is installed even when the
        // output carries no full x.y.z
        match parse_version(&output) {
            Ok(v) => Some(v),
            Err(_) => {
                debug!(output = output.trim(), "unrecognised docker version output");
                None
            }
        }
    };

    debug!(path = %path.display(), ?version, "docker detected");
    InstallStatus::Installed(InstalledMetadata {
        install_method: detect_install_method(&path),
        path,
        version,
        last_verified: SystemTime::now(),
    })
}

/// Guess how Docker was installed from the executable path.
fn detect_install_method(path: &Path) -> Option<String> {
    let path_str = path.to_string_lossy();

    if path_str.contains("Docker.app") || path_str.contains(r"Docker\Docker") || path_str.contains(".docker") {
        Some("docker-desktop".to_string())
    } else if path_str.contains("homebrew") || path_str.contains("linuxbrew") {
        Some("brew".to_string())
    } else if path_str.contains("/snap/") {
        Some("snap".to_string())
    } else {
        None
    }
}

/// Live status checker backed by [`detect_docker_with_options`].
///
/// Every call re-probes the machine; nothing is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct DockerStatusChecker {
    options: DetectOptions,
}

impl DockerStatusChecker {
    pub fn new(options: DetectOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl InstallStatusChecker for DockerStatusChecker {
    async fn is_installed_now(&self) -> bool {
        detect_docker_with_options(&self.options).await.is_installed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_detect_docker_returns_valid_status() {
        let status = detect_docker().await;
        assert!(matches!(
            status,
            InstallStatus::Installed(_) | InstallStatus::NotInstalled | InstallStatus::Unknown { .. }
        ));
    }

    #[tokio::test]
    async fn test_checker_agrees_with_detection_kind() {
        let options = DetectOptions {
            skip_version: true,
            ..Default::default()
        };
        let checker = DockerStatusChecker::new(options.clone());
        let direct = detect_docker_with_options(&options).await;
        assert_eq!(checker.is_installed_now().await, direct.is_installed());
    }

    #[tokio::test]
    async fn test_skip_version_leaves_version_empty() {
        let options = DetectOptions {
            skip_version: true,
            ..Default::default()
        };
        if let InstallStatus::Installed(meta) = detect_docker_with_options(&options).await {
            assert!(meta.version.is_none());
        }
    }

    #[test]
    fn test_detect_install_method_desktop_mac() {
        let path = PathBuf::from("/Applications/Docker.app/Contents/Resources/bin/docker");
        assert_eq!(detect_install_method(&path), Some("docker-desktop".to_string()));
    }

    #[test]
    fn test_detect_install_method_desktop_windows() {
        let path = PathBuf::from(r"C:\Program Files\Docker\Docker\resources\bin\docker.exe");
        assert_eq!(detect_install_method(&path), Some("docker-desktop".to_string()));
    }

    #[test]
    fn test_detect_install_method_brew() {
        let path = PathBuf::from("/opt/homebrew/bin/docker");
        assert_eq!(detect_install_method(&path), Some("brew".to_string()));
    }

    #[test]
    fn test_detect_install_method_snap() {
        let path = PathBuf::from("/snap/bin/docker");
        assert_eq!(detect_install_method(&path), Some("snap".to_string()));
    }

    #[test]
    fn test_detect_install_method_unknown() {
        let path = PathBuf::from("/usr/bin/docker");
        assert_eq!(detect_install_method(&path), None);
    }
}
