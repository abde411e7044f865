//! Pre-resolved package metadata (`PKG-INFO`) from snapshot distributions

use crate::error::{CliError, PackagerError, Result, VersionError};
use std::path::Path;

/// Prefix of the authoritative version line
pub const VERSION_PREFIX: &str = "Version: ";

/// Load the version from a metadata file (single read, handle released
/// before parsing).
pub fn load_version(path: &Path) -> Result<String> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        PackagerError::Cli(CliError::ExecutionFailed {
            command: "read_pkg_info".to_string(),
            reason: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;

    parse_version(&contents).ok_or_else(|| {
        PackagerError::Version(VersionError::MalformedMetadata {
            path: path.to_path_buf(),
        })
    })
}

/// Extract the version from metadata text.
///
/// Returns `None` when no line starts with `Version: `. Only the first such
/// line counts; surrounding whitespace is stripped from the value.
pub fn parse_version(contents: &str) -> Option<String> {
    contents
        .split('\n')
        .find(|line| line.starts_with(VERSION_PREFIX))
        .map(|line| {
            // "Version: " alone trims to "Version:", leaving an empty value
            let line = line.trim();
            line.get(VERSION_PREFIX.len()..).unwrap_or_default().to_string()
        })
}
