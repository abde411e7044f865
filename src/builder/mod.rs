//! Package assembly orchestration.
//!
//! [`Packager`] runs the three stages in order:
//! 1. Resolves the version ([`crate::version`])
//! 2. Plans and applies asset staging ([`crate::assets`])
//! 3. Assembles the [`PackageSpec`](crate::descriptor::PackageSpec)
//!
//! # Example
//!
//! ```no_run
//! use ainakan_tools_bundle::builder::Packager;
//! use ainakan_tools_bundle::descriptor::OutputFormat;
//! use ainakan_tools_bundle::settings::SettingsBuilder;
//!
//! # async fn example() -> ainakan_tools_bundle::Result<()> {
//! let settings = SettingsBuilder::new().source_root(".").build()?;
//! let output = Packager::new(settings).run().await?;
//! println!("{}", output.spec.render(OutputFormat::Json)?);
//! # Ok(())
//! # }
//! ```

mod orchestrator;

pub use orchestrator::{Packager, PackagerOutput};
