//! Staging plan execution.

use super::plan::StagingPlan;
use crate::error::{Result, StagingError};
use crate::utils::fs::{copy_file, create_dir_all};

/// Executes `plan`, one copy at a time in plan order.
///
/// A failed copy aborts immediately; files copied before it stay in place.
pub async fn apply_plan(plan: &StagingPlan) -> Result<usize> {
    for dir in &plan.directories {
        create_dir_all(dir).await?;
    }

    for instruction in &plan.instructions {
        log::debug!(
            "Staging {} {} -> {}",
            instruction.kind,
            instruction.from.display(),
            instruction.to.display()
        );
        copy_file(&instruction.from, &instruction.to)
            .await
            .map_err(|source| StagingError::AssetCopy {
                from: instruction.from.clone(),
                to: instruction.to.clone(),
                source,
            })?;
    }

    log::info!(
        "Staged {} file(s) into {}",
        plan.instructions.len(),
        plan.staging_dir.display()
    );
    Ok(plan.instructions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetKind, CopyInstruction, plan_staging};
    use crate::error::PackagerError;
    use crate::source::SourceTree;
    use std::path::Path;

    fn touch(path: &Path, contents: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    #[tokio::test]
    async fn agent_lands_at_top_level() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("build/agents/linux/foo_agent.js"), "agent");
        let pkg = dir.path().join("ainakan_tools");

        let tree = SourceTree::open(dir.path()).unwrap();
        let plan = plan_staging(&tree, &pkg).unwrap();
        let copied = apply_plan(&plan).await.unwrap();

        assert_eq!(copied, 1);
        assert_eq!(plan.manifest, vec!["foo_agent.js"]);
        assert_eq!(std::fs::read_to_string(pkg.join("foo_agent.js")).unwrap(), "agent");
    }

    #[tokio::test]
    async fn bridges_dir_created_even_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("build/bridges")).unwrap();
        let pkg = dir.path().join("ainakan_tools");

        let tree = SourceTree::open(dir.path()).unwrap();
        let plan = plan_staging(&tree, &pkg).unwrap();
        apply_plan(&plan).await.unwrap();

        assert!(pkg.join("bridges").is_dir());
        assert!(plan.manifest.is_empty());
    }

    #[tokio::test]
    async fn repeated_runs_are_idempotent_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("build/agents/linux/foo_agent.js"), "same");
        touch(&dir.path().join("build/agents/macos/foo_agent.js"), "same");
        touch(&dir.path().join("build/bridges/objc.js"), "bridge");
        let pkg = dir.path().join("ainakan_tools");
        let tree = SourceTree::open(dir.path()).unwrap();

        let first = plan_staging(&tree, &pkg).unwrap();
        apply_plan(&first).await.unwrap();
        let second = plan_staging(&tree, &pkg).unwrap();
        apply_plan(&second).await.unwrap();

        assert_eq!(std::fs::read_to_string(pkg.join("foo_agent.js")).unwrap(), "same");
        assert_eq!(std::fs::read_to_string(pkg.join("bridges/objc.js")).unwrap(), "bridge");
        assert_eq!(first.manifest.len(), 3);
        assert_eq!(second.manifest.len(), 3);
    }

    #[tokio::test]
    async fn missing_source_aborts_after_earlier_copies() {
        let dir = tempfile::tempdir().unwrap();
        let ok = dir.path().join("a_agent.js");
        touch(&ok, "a");
        let pkg = dir.path().join("ainakan_tools");
        let plan = StagingPlan {
            staging_dir: pkg.clone(),
            directories: Vec::new(),
            instructions: vec![
                CopyInstruction {
                    kind: AssetKind::Agent,
                    from: ok,
                    to: pkg.join("a_agent.js"),
                },
                CopyInstruction {
                    kind: AssetKind::Agent,
                    from: dir.path().join("gone_agent.js"),
                    to: pkg.join("gone_agent.js"),
                },
            ],
            manifest: vec!["a_agent.js".into(), "gone_agent.js".into()],
        };

        let err = apply_plan(&plan).await.unwrap_err();
        assert!(matches!(
            err,
            PackagerError::Staging(StagingError::AssetCopy { .. })
        ));
        assert!(pkg.join("a_agent.js").exists());
    }
}
