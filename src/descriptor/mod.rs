//! Package descriptor assembly and rendering.
//!
//! [`assemble`] combines the resolved version and staged asset manifest with
//! the fixed package metadata into a [`PackageSpec`] for the external
//! packaging tool.

pub mod constants;

use crate::error::Result;
use crate::version::Version;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Output format of the rendered descriptor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            other => Err(format!("Invalid format: {}. Valid formats: json, toml", other)),
        }
    }
}

/// Install-time dependency with an inclusive lower and exclusive upper bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyConstraint {
    pub name: String,
    pub lower: semver::Version,
    pub upper: semver::Version,
}

impl DependencyConstraint {
    /// Whether `version` satisfies the constraint.
    pub fn allows(&self, version: &semver::Version) -> bool {
        *version >= self.lower && *version < self.upper
    }
}

impl fmt::Display for DependencyConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} >= {}, < {}", self.name, self.lower, self.upper)
    }
}

impl Serialize for DependencyConstraint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Console command bound to `module:callable`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    pub command: String,
    pub module: String,
    pub callable: String,
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}:{}", self.command, self.module, self.callable)
    }
}

impl Serialize for EntryPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryPoints {
    pub console_scripts: [EntryPoint; 16],
}

/// Complete package descriptor.
#[derive(Debug, Clone, Serialize)]
pub struct PackageSpec {
    pub name: String,
    pub version: Version,
    pub description: String,
    pub long_description: String,
    pub long_description_content_type: String,
    pub author: String,
    pub author_email: String,
    pub url: String,
    pub install_requires: Vec<DependencyConstraint>,
    pub license: String,
    pub zip_safe: bool,
    pub keywords: String,
    pub classifiers: Vec<String>,
    pub packages: Vec<String>,
    /// Package name to asset paths relative to the package directory.
    pub package_data: BTreeMap<String, Vec<String>>,
    pub entry_points: EntryPoints,
}

impl PackageSpec {
    /// Looks up the entry point for `command`.
    pub fn entry_point(&self, command: &str) -> Option<&EntryPoint> {
        self.entry_points
            .console_scripts
            .iter()
            .find(|ep| ep.command == command)
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Json => serde_json::to_string_pretty(self)? + "\n",
            OutputFormat::Toml => toml::to_string_pretty(self)?,
        })
    }
}

/// Builds the descriptor from the resolved version and asset manifest.
///
/// `package` is the directory the manifest paths are relative to; it names
/// the declared package, the manifest key and the entry point modules.
pub fn assemble(version: Version, package: &str, manifest: Vec<String>) -> PackageSpec {
    PackageSpec {
        name: constants::DISTRIBUTION_NAME.to_string(),
        version,
        description: constants::DESCRIPTION.to_string(),
        long_description: constants::LONG_DESCRIPTION.to_string(),
        long_description_content_type: constants::LONG_DESCRIPTION_CONTENT_TYPE.to_string(),
        author: constants::AUTHOR.to_string(),
        author_email: constants::AUTHOR_EMAIL.to_string(),
        url: constants::URL.to_string(),
        install_requires: constants::dependencies(),
        license: constants::LICENSE.to_string(),
        zip_safe: false,
        keywords: constants::KEYWORDS.to_string(),
        classifiers: constants::CLASSIFIERS.iter().map(|c| c.to_string()).collect(),
        packages: vec![package.to_string()],
        package_data: BTreeMap::from([(package.to_string(), manifest)]),
        entry_points: EntryPoints {
            console_scripts: constants::entry_points(package),
        },
    }
}
