//! Best-effort removal of downloaded installers.

use crate::InstallError;
use std::path::Path;
use tracing::debug;

/// Delete `path` if it exists.
///
/// Returns `Ok(true)` when a file was removed and `Ok(false)` when there was
/// nothing to remove.
pub async fn remove_if_exists(path: &Path) -> Result<bool, InstallError> {
    let exists = tokio::fs::try_exists(path)
        .await
        .map_err(|e| InstallError::file_system(path, &e))?;
    if !exists {
        return Ok(false);
    }

    match tokio::fs::remove_file(path).await {
        Ok(()) => {
            debug!(path = %path.display(), "removed installer");
            Ok(true)
        }
        // Raced with another cleanup
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(InstallError::file_system(path, &e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_removes_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docker-1.exe");
        std::fs::write(&path, "x").unwrap();

        assert!(remove_if_exists(&path).await.unwrap());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docker-never-downloaded.exe");

        assert!(!remove_if_exists(&path).await.unwrap());
    }

    #[tokio::test]
    async fn test_directory_in_the_way_is_file_system_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docker-1.exe");
        std::fs::create_dir(&path).unwrap();

        let err = remove_if_exists(&path).await.unwrap_err();
        assert!(matches!(err, InstallError::FileSystem { .. }));
        assert!(path.exists());
    }
}
