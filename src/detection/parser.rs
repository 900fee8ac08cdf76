//! Version output parsing with regex extraction.

use crate::DetectionError;
use regex::Regex;
use semver::Version;

/// Parse a semantic version from `docker --version` output.
///
/// Handles the formats shipped by Docker Desktop, distro packages and the
/// moby CLI:
///
/// - `Docker version 24.0.6, build ed223bc` -> 24.0.6
/// - `Docker version 20.10.21+dfsg1, build baeda1f` -> 20.10.21
/// - `27.3.1` -> 27.3.1
///
/// Returns `Err(DetectionError::VersionParseFailed)` if no
/// `major.minor.patch` triple is present.
pub(crate) fn parse_version(output: &str) -> Result<Version, DetectionError> {
    let re = Regex::new(r"(\d+)\.(\d+)\.(\d+)").map_err(|_| DetectionError::VersionParseFailed)?;

    let caps = re
        .captures(output)
        .ok_or(DetectionError::VersionParseFailed)?;
    let version_str = caps.get(0).map_or("", |m| m.as_str());
    Version::parse(version_str).map_err(|_| DetectionError::VersionParseFailed)
}
