//! Local working-tree surgery on the destination clone.

use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

const GIT_METADATA_DIR: &str = ".git";

/// Remove every top-level entry of `dir` except the `.git` metadata
/// directory, whether file, directory or symlink.
pub fn clear_working_tree(dir: &Path) -> Result<()> {
    for entry in
        std::fs::read_dir(dir).with_context(|| format!("could not read {dir:?}", dir = dir))?
    {
        let entry = entry?;
        if entry.file_name() == GIT_METADATA_DIR {
            continue;
        }

        let path = entry.path();
        debug!("removing {path:?}", path = path);

        // file_type() does not follow symlinks, so a symlinked directory is
        // removed as a file and its target stays untouched.
        if entry.file_type()?.is_dir() {
            std::fs::remove_dir_all(&path)
                .with_context(|| format!("could not remove {path:?}", path = path))?;
        } else {
            std::fs::remove_file(&path)
                .with_context(|| format!("could not remove {path:?}", path = path))?;
        }
    }

    Ok(())
}
