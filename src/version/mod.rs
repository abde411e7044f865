//! Package version resolution.
//!
//! A version comes from exactly one [`VersionDetector`]:
//! - [`MetadataDetector`] reads the pre-resolved `PKG-INFO` of a snapshot distribution
//! - [`ExternalToolDetector`] runs the releng version detector of a live checkout
//! - [`FallbackDetector`] yields `0.0.0` when neither is available
//!
//! [`select_detector`] picks one from the configured [`VersionSource`].

mod detectors;
mod releng;

pub use detectors::{ExternalToolDetector, FallbackDetector, MetadataDetector};
pub use releng::{ALT_ROOT_ENV, DETECTOR_MARKER, RELENG_DIR, locate_releng, releng_candidates};

use crate::error::{Result, VersionError};
use crate::settings::{Settings, VersionSource};
use crate::source::SourceTree;
use std::fmt;
use std::path::Path;

/// Version used when no version source is available
pub const FALLBACK_VERSION: &str = "0.0.0";

/// A resolved, non-empty package version.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Version(String);

impl Version {
    /// Wraps a literal version, rejecting empty strings.
    pub fn new(value: impl Into<String>, detector: &'static str) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(VersionError::EmptyVersion { detector }.into());
        }
        Ok(Self(value))
    }

    /// Converts a detector-reported name to a PEP 440 compatible version.
    ///
    /// `1.2.3-dev.4` becomes `1.2.3.dev4`.
    pub fn from_detected(name: &str, detector: &'static str) -> Result<Self> {
        Self::new(name.replace("-dev.", ".dev"), detector)
    }

    pub fn fallback() -> Self {
        Self(FALLBACK_VERSION.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Capability that produces the package version for a source tree.
pub trait VersionDetector {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Detects the version of the tree rooted at `source_root`.
    fn detect(&self, source_root: &Path) -> Result<Version>;
}

/// Chooses the detector for `tree` according to the configured source.
///
/// `Auto` follows the priority order metadata, releng, fallback. Explicit
/// sources never fall through to another detector.
pub fn select_detector(
    settings: &Settings,
    tree: &SourceTree,
) -> Result<Box<dyn VersionDetector>> {
    let releng = || locate_releng(tree.root(), settings.alt_source_root());

    let detector: Box<dyn VersionDetector> = match settings.version_source() {
        VersionSource::Metadata => Box::new(MetadataDetector::new(tree.metadata_path())),
        VersionSource::Fallback => Box::new(FallbackDetector),
        VersionSource::Releng => match releng() {
            Some(location) => Box::new(ExternalToolDetector::new(
                location,
                settings.interpreter(),
            )),
            None => {
                return Err(VersionError::RelengNotFound {
                    marker: DETECTOR_MARKER,
                    searched: releng_candidates(tree.root(), settings.alt_source_root()),
                }
                .into());
            }
        },
        VersionSource::Auto if tree.is_snapshot() => {
            Box::new(MetadataDetector::new(tree.metadata_path()))
        }
        VersionSource::Auto => match releng() {
            Some(location) => Box::new(ExternalToolDetector::new(
                location,
                settings.interpreter(),
            )),
            None => {
                log::warn!(
                    "No releng location found, falling back to version {}",
                    FALLBACK_VERSION
                );
                Box::new(FallbackDetector)
            }
        },
    };

    log::debug!("Selected version detector: {}", detector.name());
    Ok(detector)
}

/// Resolves the package version of `tree`. Runs exactly once, without retries.
pub fn resolve(settings: &Settings, tree: &SourceTree) -> Result<Version> {
    let detector = select_detector(settings, tree)?;
    let version = detector.detect(tree.root())?;
    log::info!("Resolved version {} via {}", version, detector.name());
    Ok(version)
}
