//! Docker CLI probing internals.
//!
//! - `find_executable`: PATH lookup with Docker-specific fallbacks
//! - `check_version`: `--version` probe with a caller-supplied timeout
//! - `parse_version`: semver extraction from the probe output

mod parser;
mod path_finder;
mod version;

pub(crate) use parser::parse_version;
pub(crate) use path_finder::find_executable;
pub(crate) use version::check_version;
