//! Releng location search.

use std::path::{Path, PathBuf};

/// Environment variable naming an alternate project root
pub const ALT_ROOT_ENV: &str = "MESON_SOURCE_ROOT";

/// Directory holding release-engineering helpers
pub const RELENG_DIR: &str = "releng";

/// Version detector script; its presence marks a valid releng location
pub const DETECTOR_MARKER: &str = "ainakan_version.py";

/// Candidate releng locations in priority order: alternate root first.
pub fn releng_candidates(source_root: &Path, alt_root: Option<&Path>) -> Vec<PathBuf> {
    alt_root
        .into_iter()
        .chain(std::iter::once(source_root))
        .map(|root| root.join(RELENG_DIR))
        .collect()
}

/// Returns the first candidate that contains the detector marker.
pub fn locate_releng(source_root: &Path, alt_root: Option<&Path>) -> Option<PathBuf> {
    releng_candidates(source_root, alt_root)
        .into_iter()
        .find(|location| {
            let valid = location.join(DETECTOR_MARKER).exists();
            log::debug!(
                "Releng candidate {}: {}",
                location.display(),
                if valid { "valid" } else { "no detector" }
            );
            valid
        })
}
