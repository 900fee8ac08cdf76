//! Host operating system enum used to pick an installer flow.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// The operating system the installer is running on.
///
/// Only Windows and macOS have an automated Docker Desktop installer. Every
/// other target is treated as Linux, which only gets a documentation link.
///
/// # Example
///
/// ```rust
/// use docker_desktop_installer::HostOs;
///
/// let os: HostOs = "mac".parse().unwrap();
/// assert_eq!(os, HostOs::Mac);
/// assert!(!os.is_linux());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HostOs {
    /// Microsoft Windows
    Windows,
    /// Apple macOS
    #[strum(to_string = "mac", serialize = "macos")]
    Mac,
    /// Linux and any other Unix-like target
    Linux,
}

impl HostOs {
    /// The operating system this binary was compiled for.
    ///
    /// ```rust
    /// use docker_desktop_installer::HostOs;
    ///
    /// if cfg!(target_os = "linux") {
    ///     assert_eq!(HostOs::current(), HostOs::Linux);
    /// }
    /// ```
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::Mac
        } else {
            Self::Linux
        }
    }

    /// Human-readable name for messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::Mac => "macOS",
            Self::Linux => "Linux",
        }
    }

    pub fn is_linux(&self) -> bool {
        matches!(self, Self::Linux)
    }

    /// Iterator over all known hosts.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(HostOs::Windows.display_name(), "Windows");
        assert_eq!(HostOs::Mac.display_name(), "macOS");
        assert_eq!(HostOs::Linux.display_name(), "Linux");
    }

    #[test]
    fn test_all_iterator() {
        let all: Vec<_> = HostOs::all().collect();
        assert_eq!(all, vec![HostOs::Windows, HostOs::Mac, HostOs::Linux]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("windows".parse::<HostOs>().unwrap(), HostOs::Windows);
        assert_eq!("Mac".parse::<HostOs>().unwrap(), HostOs::Mac);
        assert_eq!("macos".parse::<HostOs>().unwrap(), HostOs::Mac);
        assert_eq!("linux".parse::<HostOs>().unwrap(), HostOs::Linux);
        assert!("beos".parse::<HostOs>().is_err());
    }

    #[test]
    fn test_current_matches_target() {
        let os = HostOs::current();
        if cfg!(target_os = "windows") {
            assert_eq!(os, HostOs::Windows);
        } else if cfg!(target_os = "macos") {
            assert_eq!(os, HostOs::Mac);
        } else {
            assert!(os.is_linux());
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&HostOs::Mac).unwrap();
        assert_eq!(json, "\"mac\"");
        let parsed: HostOs = serde_json::from_str("\"windows\"").unwrap();
        assert_eq!(parsed, HostOs::Windows);
    }
}
