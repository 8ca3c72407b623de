use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

/// Seam over the hosting REST API so the pipeline can run against a mock
/// server in tests.
#[async_trait]
pub trait Provider {
    /// True iff `GET /orgs/{org}` answers 200.
    async fn org_exists(&self, org: &str) -> Result<bool>;

    /// True iff `GET /repos/{org}/{repo}` answers 200.
    async fn repo_exists(&self, org: &str, repo: &str) -> Result<bool>;

    /// True iff `GET /repos/{org}/{repo}/branches/{branch}` answers 200.
    async fn branch_exists(&self, org: &str, repo: &str, branch: &str) -> Result<bool>;

    /// Download the zipball of `branch` and write it to `dest`, overwriting
    /// any prior file.
    async fn download_zipball(
        &self,
        org: &str,
        repo: &str,
        branch: &str,
        dest: &Path,
    ) -> Result<()>;

    async fn create_organization(&self, org: &str) -> Result<()>;

    async fn create_repository(&self, org: &str, repo: &str, default_branch: &str) -> Result<()>;
}
