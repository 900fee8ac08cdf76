//! PATH-based `docker` lookup with fallback install locations.

use std::path::PathBuf;

/// Directories Docker Desktop or distro packages install the CLI into when
/// the shell PATH has not been refreshed yet.
#[cfg(windows)]
const FALLBACK_PATHS: &[&str] = &[r"C:\Program Files\Docker\Docker\resources\bin"];

#[cfg(not(windows))]
const FALLBACK_PATHS: &[&str] = &[
    "/usr/local/bin",
    "/usr/bin",
    "/Applications/Docker.app/Contents/Resources/bin",
];

/// Find an executable by name.
///
/// Tries the system PATH via the `which` crate first, then the fallback
/// install locations, then `~/.docker/bin` (rootless and Desktop user installs).
pub(crate) fn find_executable(name: &str) -> Option<PathBuf> {
    if let Ok(path) = which::which(name) {
        return Some(path);
    }

    let file_name = if cfg!(windows) {
        format!("{name}.exe")
    } else {
        name.to_string()
    };

    for dir in FALLBACK_PATHS {
        let path = PathBuf::from(dir).join(&file_name);
        if path.exists() {
            return Some(path);
        }
    }

    if let Some(home) = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE")) {
        let path = PathBuf::from(home).join(".docker").join("bin").join(&file_name);
        if path.exists() {
            return Some(path);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_find_common_executable() {
        let result = find_executable("sh");
        assert!(result.is_some());
        assert!(result.unwrap().exists());
    }

    #[test]
    fn test_find_nonexistent_executable() {
        let result = find_executable("definitely_not_a_real_executable_12345");
        assert!(result.is_none());
    }
}
