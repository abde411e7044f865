//! Command line argument parsing and validation.

use crate::descriptor::OutputFormat;
use crate::error::{CliError, PackagerError, Result};
use crate::settings::{DEFAULT_INTERPRETER, DEFAULT_PACKAGE_DIR, Settings, SettingsBuilder, VersionSource};
use crate::version::ALT_ROOT_ENV;
use clap::Parser;
use std::path::PathBuf;

/// Package descriptor assembler for ainakan-tools
#[derive(Parser, Debug)]
#[command(
    name = "ainakan_tools_bundle",
    version,
    about = "Resolves the ainakan-tools version, stages built assets and emits the package descriptor",
    long_about = "Resolves the package version, stages agent scripts, bridge modules and app bundles
from build/ into the package directory, and prints the package descriptor.

Usage:
  ainakan_tools_bundle --source .
  ainakan_tools_bundle --source . --dry-run --format toml
  ainakan_tools_bundle --source . --print-version

Snapshot trees (with PKG-INFO at the root) are never modified."
)]
pub struct Args {
    /// Project root
    #[arg(short = 's', long, value_name = "DIR", default_value = ".")]
    pub source: PathBuf,

    /// Package directory under the project root that receives staged assets
    #[arg(long, value_name = "NAME", default_value = DEFAULT_PACKAGE_DIR)]
    pub package_dir: String,

    /// Alternate project root searched for releng/ first
    #[arg(long, value_name = "DIR", env = ALT_ROOT_ENV)]
    pub alt_source_root: Option<String>,

    /// Version source: auto, metadata, releng, fallback
    #[arg(long, value_name = "SOURCE", default_value = "auto")]
    pub version_source: String,

    /// Interpreter that runs releng/ainakan_version.py
    #[arg(long, value_name = "PATH", env = "PYTHON", default_value = DEFAULT_INTERPRETER)]
    pub python: String,

    /// Descriptor output format: json, toml
    #[arg(short, long, value_name = "FORMAT", default_value = "json")]
    pub format: String,

    /// Write the descriptor to this path instead of stdout
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Plan staging without copying any files
    #[arg(long)]
    pub dry_run: bool,

    /// Print only the resolved version
    #[arg(long, conflicts_with_all = ["dry_run", "output", "format"])]
    pub print_version: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.python.is_empty() {
            return Err("Interpreter cannot be empty".to_string());
        }

        self.version_source.parse::<VersionSource>()?;
        self.output_format()?;

        if let Some(output) = self.output.as_ref().filter(|o| o.is_dir()) {
            return Err(format!("Output path is a directory: {}", output.display()));
        }

        Ok(())
    }

    /// Parsed descriptor output format
    pub fn output_format(&self) -> std::result::Result<OutputFormat, String> {
        self.format.parse()
    }

    /// Build packager settings from the arguments
    pub fn to_settings(&self) -> Result<Settings> {
        let version_source = self
            .version_source
            .parse::<VersionSource>()
            .map_err(|reason| PackagerError::Cli(CliError::InvalidArguments { reason }))?;

        SettingsBuilder::new()
            .source_root(&self.source)
            .package_dir(self.package_dir.clone())
            // An empty MESON_SOURCE_ROOT counts as unset
            .alt_source_root(
                self.alt_source_root
                    .as_deref()
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from),
            )
            .version_source(version_source)
            .interpreter(self.python.clone())
            .dry_run(self.dry_run)
            .build()
    }
}
