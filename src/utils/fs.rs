//! File system utilities for staging.

use std::{
    io::{self},
    path::Path,
};
use tokio::fs;

/// Creates all of the directories of the specified path.
///
/// Succeeds if the directory already exists.
pub async fn create_dir_all(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path).await
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Overwrites an existing destination. Fails if the source path is a
/// directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> io::Result<()> {
    let metadata = fs::metadata(from).await?;
    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{from:?} is not a file"),
        ));
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir).await?;
    }
    fs::copy(from, to).await?;
    Ok(())
}
