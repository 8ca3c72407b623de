//! Thin wrappers around the git CLI.
//!
//! Every wrapper checks the exit status and reports stderr on failure;
//! authentication (token-embedded HTTPS URL) is the caller's concern.

use std::path::Path;

use anyhow::Context;

pub fn run_git(repo: &Path, args: &[&str]) -> anyhow::Result<String> {
    let output = std::process::Command::new("git")
        .current_dir(repo)
        .args(args)
        .output()
        .context("Failed to execute git command")?;

    if output.status.success() {
        let result = String::from_utf8_lossy(&output.stdout);
        Ok(result.as_ref().trim().to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("git {} failed: {}", args.join(" "), stderr)
    }
}

/// Clone `url` into `target_dir`. Any stale directory at `target_dir` is
/// removed first, git refuses to clone into a non-empty directory.
pub fn clone(url: &str, target_dir: &Path) -> anyhow::Result<()> {
    if target_dir.exists() {
        std::fs::remove_dir_all(target_dir)
            .with_context(|| format!("Failed to remove stale clone at {:?}", target_dir))?;
    }

    let output = std::process::Command::new("git")
        .args(["clone", url])
        .arg(target_dir)
        .output()
        .context("Failed to execute git clone")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("git clone into {:?} failed: {}", target_dir, stderr);
    }

    Ok(())
}

pub fn add_all(repo: &Path) -> anyhow::Result<()> {
    run_git(repo, &["add", "."]).context("Failed to stage changes")?;
    Ok(())
}

/// Repo-scoped committer identity; never touches `--global` state.
pub fn set_identity(repo: &Path, name: &str, email: &str) -> anyhow::Result<()> {
    run_git(repo, &["config", "user.name", name]).context("Failed to set user.name")?;
    run_git(repo, &["config", "user.email", email]).context("Failed to set user.email")?;
    Ok(())
}

pub fn commit(repo: &Path, message: &str) -> anyhow::Result<()> {
    run_git(repo, &["commit", "-m", message]).context("Failed to commit")?;
    Ok(())
}

/// Push with an explicit `local:remote` refspec, e.g. `main:develop`.
pub fn push(repo: &Path, remote: &str, refspec: &str) -> anyhow::Result<()> {
    run_git(repo, &["push", remote, refspec])
        .with_context(|| format!("Failed to push {} to {}", refspec, remote))?;
    Ok(())
}
