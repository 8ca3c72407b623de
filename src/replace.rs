//! Literal string substitution over build and CI files.
//!
//! The table comes from a flat JSON object (`replace.json`). Entries apply
//! in file order and compound: with `{"A": "B", "B": "C"}` the content `A`
//! becomes `C`. Callers rely on that ordering, so the table is kept as an
//! ordered list rather than a map.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use walkdir::WalkDir;

/// Only these filenames are rewritten, wherever they sit in the tree.
pub const TARGET_FILES: [&str; 4] = ["Dockerfile", "Makefile", "README.md", "Jenkinsfile"];

pub type ReplaceTable = Vec<(String, String)>;

pub fn load_table(path: &Path) -> Result<ReplaceTable> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("could not read replace table {path:?}", path = path))?;

    parse_table(&raw).with_context(|| format!("invalid replace table {path:?}", path = path))
}

/// serde_json is built with `preserve_order`, so iteration follows the file.
pub fn parse_table(raw: &str) -> Result<ReplaceTable> {
    let value: serde_json::Value =
        serde_json::from_str(raw).context("replace table is not valid JSON")?;

    let object = value
        .as_object()
        .context("replace table must be a flat JSON object")?;

    object
        .iter()
        .map(|(key, value)| {
            let replacement = value
                .as_str()
                .with_context(|| format!("replacement for {key:?} must be a string", key = key))?;
            Ok((key.clone(), replacement.to_string()))
        })
        .collect()
}

pub fn apply_to_content(content: &str, table: &ReplaceTable) -> String {
    let mut result = content.to_string();
    for (needle, replacement) in table {
        result = result.replace(needle, replacement);
    }
    result
}

/// Walk `dir` (skipping `.git`) and rewrite every recognized file in place.
pub fn apply(dir: &Path, table: &ReplaceTable) -> Result<()> {
    let walker = WalkDir::new(dir)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != ".git");

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !TARGET_FILES.contains(&name.as_ref()) {
            continue;
        }

        let path = entry.path();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("could not read {path:?}", path = path))?;
        let rewritten = apply_to_content(&content, table);

        if rewritten != content {
            std::fs::write(path, rewritten)
                .with_context(|| format!("could not write {path:?}", path = path))?;
            info!("rewrote {path:?}", path = path);
        }
    }

    Ok(())
}
