//! Builder for constructing Settings.

use super::{DEFAULT_INTERPRETER, DEFAULT_PACKAGE_DIR, Settings, VersionSource};
use crate::error::{PackagerError, Result};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use ainakan_tools_bundle::settings::SettingsBuilder;
///
/// # fn example() -> ainakan_tools_bundle::Result<()> {
/// let settings = SettingsBuilder::new()
///     .source_root("/src/ainakan-tools")
///     .alt_source_root(Some("/src/ainakan".into()))
///     .dry_run(true)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    source_root: Option<PathBuf>,
    package_dir: Option<String>,
    alt_source_root: Option<PathBuf>,
    version_source: VersionSource,
    interpreter: Option<String>,
    dry_run: bool,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the project root.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn source_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the package directory name.
    ///
    /// Default: `ainakan_tools`
    pub fn package_dir(mut self, name: impl Into<String>) -> Self {
        self.package_dir = Some(name.into());
        self
    }

    /// Sets the alternate project root searched for releng before the source root.
    ///
    /// Default: None
    pub fn alt_source_root(mut self, path: Option<PathBuf>) -> Self {
        self.alt_source_root = path;
        self
    }

    /// Default: [`VersionSource::Auto`]
    pub fn version_source(mut self, source: VersionSource) -> Self {
        self.version_source = source;
        self
    }

    /// Sets the interpreter that runs the releng detector.
    ///
    /// Default: `python3`
    pub fn interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = Some(interpreter.into());
        self
    }

    /// Default: false
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `source_root` is missing or the package directory
    /// name is not a single path component.
    ///
    /// Relative roots are resolved against the current directory, so child
    /// processes started elsewhere see the same paths.
    pub fn build(self) -> Result<Settings> {
        let source_root = self
            .source_root
            .ok_or_else(|| PackagerError::Settings("source_root is required".to_string()))?;
        let source_root = source_root.absolutize()?.into_owned();
        let alt_source_root = match self.alt_source_root {
            Some(alt) => Some(alt.absolutize()?.into_owned()),
            None => None,
        };

        let package_dir = self
            .package_dir
            .unwrap_or_else(|| DEFAULT_PACKAGE_DIR.to_string());
        if package_dir.is_empty()
            || package_dir.contains(['/', '\\'])
            || package_dir == "."
            || package_dir == ".."
        {
            return Err(PackagerError::Settings(format!(
                "package_dir must be a single directory name, got '{}'",
                package_dir
            )));
        }

        Ok(Settings::new(
            source_root,
            package_dir,
            alt_source_root,
            self.version_source,
            self.interpreter
                .unwrap_or_else(|| DEFAULT_INTERPRETER.to_string()),
            self.dry_run,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = SettingsBuilder::new().source_root("/tmp/src").build().unwrap();
        assert_eq!(settings.package_dir_name(), DEFAULT_PACKAGE_DIR);
        assert_eq!(settings.staging_dir(), Path::new("/tmp/src/ainakan_tools"));
        assert_eq!(settings.interpreter(), DEFAULT_INTERPRETER);
        assert_eq!(settings.version_source(), VersionSource::Auto);
        assert!(settings.alt_source_root().is_none());
        assert!(!settings.dry_run());
    }

    #[test]
    fn source_root_is_required() {
        assert!(matches!(
            SettingsBuilder::new().build(),
            Err(PackagerError::Settings(_))
        ));
    }

    #[test]
    fn nested_package_dir_is_rejected() {
        let result = SettingsBuilder::new()
            .source_root(".")
            .package_dir("a/b")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn current_and_parent_dir_are_rejected_as_package_dir() {
        for name in [".", ".."] {
            let result = SettingsBuilder::new()
                .source_root("/tmp/src")
                .package_dir(name)
                .build();
            assert!(
                matches!(result, Err(PackagerError::Settings(_))),
                "{name} accepted"
            );
        }
    }

    #[test]
    fn relative_roots_are_made_absolute() {
        let cwd = std::env::current_dir().unwrap();
        let settings = SettingsBuilder::new()
            .source_root("proj")
            .alt_source_root(Some(PathBuf::from("../parent")))
            .build()
            .unwrap();

        assert!(settings.source_root().is_absolute());
        assert_eq!(settings.source_root(), cwd.join("proj"));
        let alt = settings.alt_source_root().unwrap();
        assert!(alt.is_absolute());
        assert!(alt.ends_with("parent"));
    }
}
