//! Main packaging orchestration.

use crate::{
    assets::{StagingPlan, apply_plan, plan_staging},
    descriptor::{PackageSpec, assemble},
    error::Result,
    settings::Settings,
    source::SourceTree,
    version::{self, Version},
};

/// Result of a packaging run.
#[derive(Debug)]
pub struct PackagerOutput {
    pub spec: PackageSpec,

    /// The staging plan; already applied unless the run was a dry run.
    pub plan: StagingPlan,
}

/// Packaging orchestrator.
///
/// One-shot and sequential: every stage finishes before the next begins and
/// a failure aborts the run without rolling back staged files.
#[derive(Debug)]
pub struct Packager {
    settings: Settings,
}

impl Packager {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Resolves the package version only.
    pub fn resolve_version(&self) -> Result<Version> {
        let tree = SourceTree::open(self.settings.source_root())?;
        version::resolve(&self.settings, &tree)
    }

    /// Runs the full pipeline.
    pub async fn run(&self) -> Result<PackagerOutput> {
        let tree = SourceTree::open(self.settings.source_root())?;

        let version = version::resolve(&self.settings, &tree)?;

        let plan = plan_staging(&tree, &self.settings.staging_dir())?;
        if self.settings.dry_run() {
            for instruction in &plan.instructions {
                log::info!(
                    "[dry-run] would copy {} -> {}",
                    instruction.from.display(),
                    instruction.to.display()
                );
            }
        } else {
            apply_plan(&plan).await?;
        }

        let spec = assemble(
            version,
            self.settings.package_dir_name(),
            plan.manifest.clone(),
        );
        Ok(PackagerOutput { spec, plan })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingsBuilder;
    use std::path::Path;

    fn touch(path: &Path, contents: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    #[tokio::test]
    async fn live_tree_without_releng() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("build/agents/linux/tracer_agent.js"), "t");
        touch(&dir.path().join("build/apps/android/app.zip"), "z");

        let settings = SettingsBuilder::new().source_root(dir.path()).build().unwrap();
        let output = Packager::new(settings).run().await.unwrap();

        assert_eq!(output.spec.version.as_str(), "0.0.0");
        let mut assets = output.spec.package_data["ainakan_tools"].clone();
        assets.sort();
        assert_eq!(assets, vec!["app.zip", "tracer_agent.js"]);
        assert!(dir.path().join("ainakan_tools/tracer_agent.js").exists());
        assert!(dir.path().join("ainakan_tools/app.zip").exists());
    }

    #[tokio::test]
    async fn dry_run_copies_nothing() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("build/bridges/swift.js"), "s");

        let settings = SettingsBuilder::new()
            .source_root(dir.path())
            .dry_run(true)
            .build()
            .unwrap();
        let output = Packager::new(settings).run().await.unwrap();

        assert_eq!(output.spec.package_data["ainakan_tools"], vec!["bridges/swift.js"]);
        assert_eq!(output.plan.instructions.len(), 1);
        assert!(!dir.path().join("ainakan_tools").exists());
    }

    #[tokio::test]
    async fn snapshot_tree() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("PKG-INFO"), "Name: ainakan-tools\nVersion: 13.6.0\n");
        touch(&dir.path().join("ainakan_tools/tracer_agent.js"), "t");

        let settings = SettingsBuilder::new().source_root(dir.path()).build().unwrap();
        let packager = Packager::new(settings);
        let output = packager.run().await.unwrap();

        assert_eq!(output.spec.version.as_str(), "13.6.0");
        assert_eq!(packager.resolve_version().unwrap().as_str(), "13.6.0");
        assert_eq!(output.spec.package_data["ainakan_tools"], vec!["tracer_agent.js"]);
        assert!(output.plan.instructions.is_empty());
    }

    #[tokio::test]
    async fn custom_package_dir_names_the_staged_package() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("build/agents/linux/foo_agent.js"), "f");

        let settings = SettingsBuilder::new()
            .source_root(dir.path())
            .package_dir("custom_pkg")
            .build()
            .unwrap();
        let output = Packager::new(settings).run().await.unwrap();

        assert!(dir.path().join("custom_pkg/foo_agent.js").exists());
        assert_eq!(output.spec.packages, vec!["custom_pkg"]);
        assert_eq!(
            output.spec.package_data.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["custom_pkg"]
        );
        assert_eq!(output.spec.package_data["custom_pkg"], vec!["foo_agent.js"]);
        assert_eq!(
            output.spec.entry_point("ainakan-ps").unwrap().to_string(),
            "ainakan-ps = custom_pkg.ps:main"
        );
    }

    #[tokio::test]
    async fn malformed_metadata_aborts() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("PKG-INFO"), "Name: ainakan-tools\n");

        let settings = SettingsBuilder::new().source_root(dir.path()).build().unwrap();
        assert!(Packager::new(settings).run().await.is_err());
    }
}
