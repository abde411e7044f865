//! Packaging core for the ainakan-tools distribution.
//!
//! This library resolves the package version, stages build artifacts into
//! the package directory and assembles the package descriptor consumed by
//! the external packaging tool:
//! - [`version`] picks a [`version::VersionDetector`] and resolves the version
//! - [`assets`] plans and applies staging of agent scripts, bridges and app bundles
//! - [`descriptor`] assembles and renders the [`descriptor::PackageSpec`]
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod assets;
pub mod builder;
pub mod cli;
pub mod descriptor;
pub mod error;
pub mod metadata;
pub mod settings;
pub mod source;
pub mod utils;
pub mod version;

// Re-export commonly used types
pub use error::{CliError, PackagerError, Result};
