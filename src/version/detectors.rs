//! Version detector implementations.

use super::{DETECTOR_MARKER, Version, VersionDetector};
use crate::error::{Result, VersionError};
use crate::metadata::load_version;
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Reads the version from a snapshot distribution's metadata file.
#[derive(Debug, Clone)]
pub struct MetadataDetector {
    path: PathBuf,
}

impl MetadataDetector {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl VersionDetector for MetadataDetector {
    fn name(&self) -> &'static str {
        "metadata"
    }

    fn detect(&self, _source_root: &Path) -> Result<Version> {
        Version::new(load_version(&self.path)?, self.name())
    }
}

/// Runs the releng version detector script of a live checkout.
///
/// Invoked as `<interpreter> <releng>/ainakan_version.py <source_root>` with
/// both paths absolute and the source root as working directory; the trimmed
/// stdout is the raw version name.
#[derive(Debug, Clone)]
pub struct ExternalToolDetector {
    releng: PathBuf,
    interpreter: String,
}

impl ExternalToolDetector {
    pub fn new(releng: PathBuf, interpreter: &str) -> Self {
        Self {
            releng,
            interpreter: interpreter.to_string(),
        }
    }

    pub fn script(&self) -> PathBuf {
        self.releng.join(DETECTOR_MARKER)
    }

    fn failure(&self, reason: String) -> VersionError {
        VersionError::DetectionFailed {
            detector: self.script(),
            reason,
        }
    }
}

impl VersionDetector for ExternalToolDetector {
    fn name(&self) -> &'static str {
        "releng"
    }

    fn detect(&self, source_root: &Path) -> Result<Version> {
        let interpreter = which::which(&self.interpreter).map_err(|e| {
            self.failure(format!("interpreter '{}' not found: {}", self.interpreter, e))
        })?;
        // The child runs in source_root, so relative paths would resolve twice
        let script = self.script().absolutize()?.into_owned();
        let source_root = source_root.absolutize()?;
        let source_root: &Path = &source_root;
        log::debug!(
            "Running {} {} {}",
            interpreter.display(),
            script.display(),
            source_root.display()
        );

        let output = std::process::Command::new(&interpreter)
            .arg(&script)
            .arg(source_root)
            .current_dir(source_root)
            .output()
            .map_err(|e| self.failure(format!("failed to execute: {}", e)))?;

        if !output.status.success() {
            return Err(self
                .failure(format!(
                    "exit code {:?}: {}",
                    output.status.code(),
                    String::from_utf8_lossy(&output.stderr).trim()
                ))
                .into());
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| self.failure(format!("output is not UTF-8: {}", e)))?;
        let name = stdout.trim();
        if name.is_empty() {
            return Err(self.failure("detector printed no version".to_string()).into());
        }

        Version::from_detected(name, self.name())
    }
}

/// Yields the sentinel version when no version source exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackDetector;

impl VersionDetector for FallbackDetector {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn detect(&self, _source_root: &Path) -> Result<Version> {
        Ok(Version::fallback())
    }
}
