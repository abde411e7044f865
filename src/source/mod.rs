//! Source tree inspection

use crate::error::{CliError, PackagerError, Result};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Metadata file whose presence marks a snapshot distribution
pub const METADATA_FILE: &str = "PKG-INFO";

/// How the source tree was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// Pre-resolved metadata and pre-built assets are already in place.
    Snapshot,
    /// Development checkout; version and assets come from external tooling.
    Live,
}

/// Project root the package is assembled from.
#[derive(Debug, Clone)]
pub struct SourceTree {
    root: PathBuf,
    mode: SourceMode,
}

impl SourceTree {
    /// Opens a source tree, determining its mode from the metadata file.
    ///
    /// The stored root is always absolute.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let absolute = root.as_ref().absolutize()?;
        let root: &Path = &absolute;
        if !root.is_dir() {
            return Err(PackagerError::Cli(CliError::InvalidArguments {
                reason: format!("Source root is not a directory: {}", root.display()),
            }));
        }

        let mode = if root.join(METADATA_FILE).exists() {
            SourceMode::Snapshot
        } else {
            SourceMode::Live
        };
        log::info!("Source tree {} is a {:?} tree", root.display(), mode);

        Ok(Self {
            root: root.to_path_buf(),
            mode,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn mode(&self) -> SourceMode {
        self.mode
    }

    pub fn is_snapshot(&self) -> bool {
        self.mode == SourceMode::Snapshot
    }

    /// Path of the metadata file, whether or not it exists.
    pub fn metadata_path(&self) -> PathBuf {
        self.root.join(METADATA_FILE)
    }
}
