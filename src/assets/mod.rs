//! Build-artifact staging.
//!
//! Agent scripts, bridge modules and app bundles produced by the external
//! build are staged into the package directory:
//!
//! | Build output                       | Staged as                 |
//! |------------------------------------|---------------------------|
//! | `build/agents/<target>/*_agent.js` | `<package>/*_agent.js`    |
//! | `build/bridges/*.js`               | `<package>/bridges/*.js`  |
//! | `build/apps/<target>/*.zip`        | `<package>/*.zip`         |
//!
//! Staging is split into [`plan_staging`], which only reads, and
//! [`apply_plan`], which copies.

mod apply;
pub mod layout;
mod plan;

pub use apply::apply_plan;
pub use layout::AssetKind;
pub use plan::{CopyInstruction, StagingPlan, plan_staging};

use crate::error::Result;
use crate::source::SourceTree;
use std::path::Path;

/// Plans and applies staging, returning the asset manifest.
pub async fn collect(tree: &SourceTree, staging_dir: &Path) -> Result<Vec<String>> {
    let plan = plan_staging(tree, staging_dir)?;
    apply_plan(&plan).await?;
    Ok(plan.manifest)
}
