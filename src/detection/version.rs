//! Async version probe with timeout.

use crate::DetectionError;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Run `<path> --version` and capture its output.
///
/// The probe is bounded by `limit` so a wedged Docker daemon socket or a
/// half-uninstalled CLI cannot hang the caller.
///
/// Errors:
/// - `Timeout` if the command takes longer than `limit`
/// - `PermissionDenied` if the executable cannot be run due to permissions
/// - `IoError` for other I/O failures or non-zero exit codes
/// - `VersionParseFailed` if output is not valid UTF-8
pub(crate) async fn check_version(path: &Path, limit: Duration) -> Result<String, DetectionError> {
    let output = timeout(
        limit,
        Command::new(path).arg("--version").kill_on_drop(true).output(),
    )
    .await
    .map_err(|_| DetectionError::Timeout)?
    .map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            DetectionError::PermissionDenied
        } else {
            DetectionError::IoError
        }
    })?;

    if !output.status.success() {
        return Err(DetectionError::IoError);
    }

    // Some wrappers print the version on stderr
    let out = if !output.stdout.is_empty() {
        output.stdout
    } else {
        output.stderr
    };

    String::from_utf8(out).map_err(|_| DetectionError::VersionParseFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_check_version_nonexistent() {
        let path = PathBuf::from("/nonexistent/path/to/docker");
        let result = check_version(&path, Duration::from_secs(2)).await;
        assert!(matches!(result, Err(DetectionError::IoError)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_check_version_non_zero_exit() {
        // `false --version` exits non-zero on every coreutils flavour
        if let Ok(path) = which::which("false") {
            let result = check_version(&path, Duration::from_secs(2)).await;
            assert!(result.is_err());
        }
    }
}
