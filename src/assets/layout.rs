//! Fixed build-output and staging layouts.

use std::path::{Path, PathBuf};

/// Build output directory, relative to the source root
pub const BUILD_DIR: &str = "build";

/// Per-target agent script folders live under `build/agents/<target>/`
pub const AGENTS_DIR: &str = "agents";

/// Flat bridge module folder, both in `build/` and in the staging area
pub const BRIDGES_DIR: &str = "bridges";

/// Per-target app bundle folders live under `build/apps/<target>/`
pub const APPS_DIR: &str = "apps";

pub const AGENT_PATTERN: &str = "*_agent.js";
pub const BRIDGE_PATTERN: &str = "*.js";
pub const APP_PATTERN: &str = "*.zip";

/// Asset category, used for logging and per-category lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Agent,
    Bridge,
    App,
}

impl AssetKind {
    pub const ALL: [AssetKind; 3] = [AssetKind::Agent, AssetKind::Bridge, AssetKind::App];

    /// File name pattern for this category.
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Agent => AGENT_PATTERN,
            Self::Bridge => BRIDGE_PATTERN,
            Self::App => APP_PATTERN,
        }
    }

    /// Whether the build output groups this category in per-target subfolders.
    pub fn is_per_target(self) -> bool {
        !matches!(self, Self::Bridge)
    }

    /// Build output directory for this category.
    pub fn build_dir(self, source_root: &Path) -> PathBuf {
        let name = match self {
            Self::Agent => AGENTS_DIR,
            Self::Bridge => BRIDGES_DIR,
            Self::App => APPS_DIR,
        };
        source_root.join(BUILD_DIR).join(name)
    }

    /// Directory inside the staging area that receives this category.
    pub fn staging_dir(self, staging_root: &Path) -> PathBuf {
        match self {
            Self::Bridge => staging_root.join(BRIDGES_DIR),
            Self::Agent | Self::App => staging_root.to_path_buf(),
        }
    }

    /// Manifest path of a staged file: bare for top-level assets,
    /// `bridges/<name>` for bridge modules.
    pub fn manifest_path(self, file_name: &str) -> String {
        match self {
            Self::Bridge => format!("{}/{}", BRIDGES_DIR, file_name),
            Self::Agent | Self::App => file_name.to_string(),
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Agent => "agent scripts",
            Self::Bridge => "bridge modules",
            Self::App => "app bundles",
        })
    }
}
