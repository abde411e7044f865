//! Core Settings struct and implementations.

use std::path::{Path, PathBuf};

/// Package directory inside the source root that receives staged assets
pub const DEFAULT_PACKAGE_DIR: &str = crate::descriptor::constants::PACKAGE_NAME;

/// Interpreter used to run the releng version detector
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Where the package version comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VersionSource {
    /// Metadata file if present, else releng detector, else `0.0.0`
    #[default]
    Auto,
    /// Metadata file only
    Metadata,
    /// Releng version detector only
    Releng,
    /// Always `0.0.0`
    Fallback,
}

impl VersionSource {
    pub const NAMES: [&'static str; 4] = ["auto", "metadata", "releng", "fallback"];
}

impl std::str::FromStr for VersionSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "metadata" => Ok(Self::Metadata),
            "releng" => Ok(Self::Releng),
            "fallback" => Ok(Self::Fallback),
            other => Err(format!(
                "Invalid version source: {}. Valid sources: {}",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

/// Main settings for packaging operations.
///
/// # Examples
///
/// ```no_run
/// use ainakan_tools_bundle::settings::{SettingsBuilder, VersionSource};
///
/// # fn example() -> ainakan_tools_bundle::Result<()> {
/// let settings = SettingsBuilder::new()
///     .source_root(".")
///     .version_source(VersionSource::Auto)
///     .build()?;
/// assert_eq!(settings.package_dir_name(), "ainakan_tools");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Project root.
    source_root: PathBuf,

    /// Name of the package directory under the source root.
    package_dir: String,

    /// Alternate project root searched for releng first.
    alt_source_root: Option<PathBuf>,

    version_source: VersionSource,

    /// Interpreter for the releng detector script.
    interpreter: String,

    /// Plan staging without copying.
    dry_run: bool,
}

impl Settings {
    pub(super) fn new(
        source_root: PathBuf,
        package_dir: String,
        alt_source_root: Option<PathBuf>,
        version_source: VersionSource,
        interpreter: String,
        dry_run: bool,
    ) -> Self {
        Self {
            source_root,
            package_dir,
            alt_source_root,
            version_source,
            interpreter,
            dry_run,
        }
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn package_dir_name(&self) -> &str {
        &self.package_dir
    }

    /// Returns the staging directory (`<source_root>/<package_dir>`).
    pub fn staging_dir(&self) -> PathBuf {
        self.source_root.join(&self.package_dir)
    }

    pub fn alt_source_root(&self) -> Option<&Path> {
        self.alt_source_root.as_deref()
    }

    pub fn version_source(&self) -> VersionSource {
        self.version_source
    }

    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
