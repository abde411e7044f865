//! Error types for packaging operations.
//!
//! This module defines all error types with actionable error messages and recovery suggestions.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for packaging operations
pub type Result<T> = std::result::Result<T, PackagerError>;

/// Main error type for all packaging operations
#[derive(Error, Debug)]
pub enum PackagerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization errors
    #[error("TOML error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Version resolution errors
    #[error("Version error: {0}")]
    Version(#[from] VersionError),

    /// Asset staging errors
    #[error("Staging error: {0}")]
    Staging(#[from] StagingError),

    /// Incomplete or inconsistent settings
    #[error("Settings error: {0}")]
    Settings(String),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

/// Version resolution errors
#[derive(Error, Debug)]
pub enum VersionError {
    /// Metadata file exists but carries no `Version: ` line
    #[error("No 'Version: ' line in {}", path.display())]
    MalformedMetadata {
        /// Metadata file that was read
        path: PathBuf,
    },

    /// A detector produced an empty version string
    #[error("Version reported by {detector} is empty")]
    EmptyVersion {
        /// Detector that produced the value
        detector: &'static str,
    },

    /// The releng source was requested explicitly but no valid location exists
    #[error("No releng location containing {marker} found (searched: {searched:?})")]
    RelengNotFound {
        /// Marker file that identifies a releng location
        marker: &'static str,
        /// Locations that were checked
        searched: Vec<PathBuf>,
    },

    /// The external version detector failed or returned garbage
    #[error("Version detection via {} failed: {reason}", detector.display())]
    DetectionFailed {
        /// Detector script that was invoked
        detector: PathBuf,
        /// Reason for the failure
        reason: String,
    },
}

/// Asset staging errors
#[derive(Error, Debug)]
pub enum StagingError {
    /// Invalid glob pattern
    #[error("Invalid asset pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Failure while enumerating build output
    #[error("Failed to enumerate {}: {reason}", path.display())]
    Walk {
        /// Directory being enumerated
        path: PathBuf,
        /// Reason for the failure
        reason: String,
    },

    /// Copying an asset into the staging area failed
    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    AssetCopy {
        /// Source file in the build output
        from: PathBuf,
        /// Destination inside the staging area
        to: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },
}

impl PackagerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            Self::Version(VersionError::MalformedMetadata { path }) => vec![format!(
                "Regenerate {} or remove it to build from a live checkout",
                path.display()
            )],
            Self::Version(VersionError::RelengNotFound { .. }) => vec![
                "Set MESON_SOURCE_ROOT to a checkout containing releng/".to_string(),
                "Or pass --version-source auto to fall back to 0.0.0".to_string(),
            ],
            Self::Version(VersionError::DetectionFailed { .. }) => vec![
                "Check that the interpreter passed via --python can run the detector".to_string(),
                "Check that the source tree is a git checkout with tags".to_string(),
            ],
            Self::Staging(StagingError::AssetCopy { .. }) => vec![
                "Check permissions and free space in the package directory".to_string(),
                "Partially staged files are left in place; re-run after fixing".to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
