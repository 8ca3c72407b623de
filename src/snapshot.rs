//! Unpacking the downloaded zipball and merging it into the clone.
//!
//! A zipball wraps the tree in a single directory named
//! `<org>-<repo>-<shortsha>`, that wrapper is discarded during the merge.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::info;

/// Unpack `zip_path` into `scratch_dir`, creating it if needed. Prior
/// contents of the scratch directory are left in place.
pub fn extract(zip_path: &Path, scratch_dir: &Path) -> Result<()> {
    let file = std::fs::File::open(zip_path)
        .with_context(|| format!("could not open snapshot {zip_path:?}", zip_path = zip_path))?;

    let mut archive = zip::ZipArchive::new(file)
        .with_context(|| format!("{zip_path:?} is not a zip archive", zip_path = zip_path))?;

    std::fs::create_dir_all(scratch_dir)?;
    archive
        .extract(scratch_dir)
        .with_context(|| format!("could not extract into {dir:?}", dir = scratch_dir))?;

    info!(
        "extracted {zip_path:?} into {dir:?}",
        zip_path = zip_path,
        dir = scratch_dir
    );

    Ok(())
}

/// Move the contents of the single wrapper directory whose name starts with
/// `org_prefix` into `dest_dir`, then drop the emptied wrapper.
///
/// Zero or multiple matching directories means the scratch directory is not
/// a freshly extracted zipball, that is an error rather than a silent skip.
pub fn merge_into(scratch_dir: &Path, org_prefix: &str, dest_dir: &Path) -> Result<()> {
    let wrapper = find_wrapper(scratch_dir, org_prefix)?;

    for child in std::fs::read_dir(&wrapper)? {
        let child = child?;
        let target = dest_dir.join(child.file_name());
        std::fs::rename(child.path(), &target).with_context(|| {
            format!(
                "could not move {from:?} to {to:?}",
                from = child.path(),
                to = target
            )
        })?;
    }

    std::fs::remove_dir(&wrapper)
        .with_context(|| format!("could not remove wrapper {wrapper:?}", wrapper = wrapper))?;

    info!(
        "merged snapshot {wrapper:?} into {dest:?}",
        wrapper = wrapper,
        dest = dest_dir
    );

    Ok(())
}

fn find_wrapper(scratch_dir: &Path, org_prefix: &str) -> Result<PathBuf> {
    let mut matches: Vec<PathBuf> = Vec::new();

    for entry in std::fs::read_dir(scratch_dir)
        .with_context(|| format!("could not read {dir:?}", dir = scratch_dir))?
    {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        if entry
            .file_name()
            .to_string_lossy()
            .starts_with(org_prefix)
        {
            matches.push(entry.path());
        }
    }

    match matches.len() {
        1 => Ok(matches.remove(0)),
        found => bail!(
            "expected exactly one extracted directory starting with {org_prefix:?} in {dir:?}, found {found}",
            org_prefix = org_prefix,
            dir = scratch_dir,
            found = found
        ),
    }
}
