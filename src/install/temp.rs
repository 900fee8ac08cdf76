//! Unique file names for downloaded installers.

use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Build a fresh path `<dir>/<prefix>-<random>.<extension>`.
///
/// The random part is a v4 UUID, so concurrent runs get distinct paths. The
/// file itself is not created.
///
/// # Example
///
/// ```rust
/// use docker_desktop_installer::temp_filename;
///
/// let path = temp_filename(&std::env::temp_dir(), "docker", "dmg");
/// let name = path.file_name().unwrap().to_str().unwrap();
/// assert!(name.starts_with("docker-"));
/// assert!(name.ends_with(".dmg"));
/// ```
pub fn temp_filename(dir: &Path, prefix: &str, extension: &str) -> PathBuf {
    dir.join(format!("{prefix}-{}.{extension}", Uuid::new_v4().simple()))
}
