//! Staging plan computation.
//!
//! Planning only reads the file system. The resulting [`StagingPlan`] lists
//! every copy to perform and the manifest the package will declare.

use super::layout::{AssetKind, BRIDGES_DIR};
use crate::error::{Result, StagingError};
use crate::source::SourceTree;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One file to copy from the build output into the staging area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyInstruction {
    pub kind: AssetKind,
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Copies and manifest entries for one staging run.
#[derive(Debug, Clone, Default)]
pub struct StagingPlan {
    /// Staging area root (the package directory).
    pub staging_dir: PathBuf,

    /// Directories to create even when nothing is copied into them.
    pub directories: Vec<PathBuf>,

    /// Copies in execution order. Empty for snapshot trees.
    pub instructions: Vec<CopyInstruction>,

    /// Asset paths relative to the staging area. Treat as a set; duplicates
    /// from same-named files in several targets are kept.
    pub manifest: Vec<String>,
}

impl StagingPlan {
    pub fn is_noop(&self) -> bool {
        self.instructions.is_empty() && self.directories.is_empty()
    }
}

/// Plans asset staging for `tree` into `staging_dir`.
///
/// Snapshot trees already carry their assets, so the plan only enumerates
/// them. Live trees copy from `build/`; missing build categories are skipped.
pub fn plan_staging(tree: &SourceTree, staging_dir: &Path) -> Result<StagingPlan> {
    let mut plan = StagingPlan {
        staging_dir: staging_dir.to_path_buf(),
        ..Default::default()
    };

    if tree.is_snapshot() {
        for kind in AssetKind::ALL {
            for file in matching_files(&kind.staging_dir(staging_dir), kind.pattern())? {
                plan.manifest.push(kind.manifest_path(file_name(&file)?));
            }
        }
        log::info!(
            "Snapshot tree: {} pre-staged asset(s), no copies",
            plan.manifest.len()
        );
        return Ok(plan);
    }

    for kind in AssetKind::ALL {
        let build_dir = kind.build_dir(tree.root());
        if !build_dir.is_dir() {
            log::debug!("No {} built ({} missing)", kind, build_dir.display());
            continue;
        }

        let source_dirs = if kind.is_per_target() {
            target_dirs(&build_dir)?
        } else {
            plan.directories.push(staging_dir.join(BRIDGES_DIR));
            vec![build_dir]
        };

        let dest_dir = kind.staging_dir(staging_dir);
        for dir in source_dirs {
            for from in matching_files(&dir, kind.pattern())? {
                let name = file_name(&from)?.to_string();
                plan.manifest.push(kind.manifest_path(&name));
                plan.instructions.push(CopyInstruction {
                    kind,
                    to: dest_dir.join(&name),
                    from,
                });
            }
        }
    }

    log::info!(
        "Planned {} copy instruction(s) into {}",
        plan.instructions.len(),
        staging_dir.display()
    );
    Ok(plan)
}

/// Immediate subdirectories of `root`, sorted by name.
fn target_dirs(root: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| StagingError::Walk {
            path: root.to_path_buf(),
            reason: e.to_string(),
        })?;
        // is_dir() follows symlinked target folders
        if entry.path().is_dir() {
            dirs.push(entry.into_path());
        }
    }
    Ok(dirs)
}

/// Regular files directly inside `dir` matching `pattern`.
fn matching_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let full = format!(
        "{}/{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        pattern
    );
    let mut files = Vec::new();
    for entry in glob::glob(&full).map_err(StagingError::from)? {
        let path = entry.map_err(|e| StagingError::Walk {
            path: e.path().to_path_buf(),
            reason: e.error().to_string(),
        })?;
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

fn file_name(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            StagingError::Walk {
                path: path.to_path_buf(),
                reason: "file name is not valid UTF-8".to_string(),
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, path.to_string_lossy().as_bytes()).unwrap();
    }

    fn as_set(manifest: &[String]) -> BTreeSet<&str> {
        manifest.iter().map(String::as_str).collect()
    }

    #[test]
    fn snapshot_enumerates_without_copies() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("PKG-INFO"));
        let pkg = dir.path().join("ainakan_tools");
        touch(&pkg.join("evil_agent.js"));
        touch(&pkg.join("bridges/x.js"));
        touch(&pkg.join("bundle.zip"));
        touch(&pkg.join("repl.py"));
        // Build output is ignored for snapshots
        touch(&dir.path().join("build/agents/linux/other_agent.js"));

        let tree = SourceTree::open(dir.path()).unwrap();
        let plan = plan_staging(&tree, &pkg).unwrap();

        assert!(plan.is_noop());
        assert_eq!(
            as_set(&plan.manifest),
            BTreeSet::from(["evil_agent.js", "bridges/x.js", "bundle.zip"])
        );
    }

    #[test]
    fn snapshot_without_assets_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("PKG-INFO"));

        let tree = SourceTree::open(dir.path()).unwrap();
        let plan = plan_staging(&tree, &dir.path().join("ainakan_tools")).unwrap();
        assert!(plan.manifest.is_empty());
    }

    #[test]
    fn live_tree_plans_all_categories() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("build/agents/linux/foo_agent.js"));
        touch(&dir.path().join("build/agents/linux/helper.js"));
        touch(&dir.path().join("build/agents/stray_agent.js"));
        touch(&dir.path().join("build/bridges/java.js"));
        touch(&dir.path().join("build/apps/android/app.zip"));
        let pkg = dir.path().join("ainakan_tools");

        let tree = SourceTree::open(dir.path()).unwrap();
        let plan = plan_staging(&tree, &pkg).unwrap();

        assert_eq!(
            as_set(&plan.manifest),
            BTreeSet::from(["foo_agent.js", "bridges/java.js", "app.zip"])
        );
        assert_eq!(plan.directories, vec![pkg.join("bridges")]);
        assert!(plan.instructions.contains(&CopyInstruction {
            kind: AssetKind::Bridge,
            from: dir.path().join("build/bridges/java.js"),
            to: pkg.join("bridges/java.js"),
        }));
        assert!(plan.instructions.contains(&CopyInstruction {
            kind: AssetKind::Agent,
            from: dir.path().join("build/agents/linux/foo_agent.js"),
            to: pkg.join("foo_agent.js"),
        }));
    }

    #[test]
    fn live_tree_without_build_output_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let tree = SourceTree::open(dir.path()).unwrap();
        let plan = plan_staging(&tree, &dir.path().join("ainakan_tools")).unwrap();

        assert!(plan.is_noop());
        assert!(plan.manifest.is_empty());
    }

    #[test]
    fn duplicate_names_across_targets_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("build/agents/linux/foo_agent.js"));
        touch(&dir.path().join("build/agents/macos/foo_agent.js"));

        let tree = SourceTree::open(dir.path()).unwrap();
        let plan = plan_staging(&tree, &dir.path().join("ainakan_tools")).unwrap();

        assert_eq!(plan.manifest, vec!["foo_agent.js", "foo_agent.js"]);
        assert_eq!(plan.instructions.len(), 2);
        assert_eq!(plan.instructions[0].to, plan.instructions[1].to);
    }

    #[test]
    fn directories_matching_patterns_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("build/apps/ios/weird.zip")).unwrap();

        let tree = SourceTree::open(dir.path()).unwrap();
        let plan = plan_staging(&tree, &dir.path().join("ainakan_tools")).unwrap();
        assert!(plan.manifest.is_empty());
    }
}
