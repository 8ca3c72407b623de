//! Shared fixtures: wiremock builders for the hosting API and a local bare
//! repository standing in for the destination remote.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use anyhow::Result;
use repo_mover::git::run_git;
use repo_mover::github_provider::GithubProvider;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn provider_for(server: &MockServer, token: &str) -> GithubProvider {
    GithubProvider::configure("unused.invalid", token, Some(server.uri())).unwrap()
}

pub fn org_mock(org: &str, status: u16) -> Mock {
    Mock::given(method("GET"))
        .and(path(format!("/orgs/{org}", org = org)))
        .respond_with(ResponseTemplate::new(status))
}

pub fn repo_mock(org: &str, repo: &str, status: u16) -> Mock {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{org}/{repo}", org = org, repo = repo)))
        .respond_with(ResponseTemplate::new(status))
}

pub fn branch_mock(org: &str, repo: &str, branch: &str, status: u16) -> Mock {
    Mock::given(method("GET"))
        .and(path(format!(
            "/repos/{org}/{repo}/branches/{branch}",
            org = org,
            repo = repo,
            branch = branch
        )))
        .respond_with(ResponseTemplate::new(status))
}

pub fn zipball_mock(org: &str, repo: &str, branch: &str, body: &[u8]) -> Mock {
    Mock::given(method("GET"))
        .and(path(format!(
            "/repos/{org}/{repo}/zipball/{branch}",
            org = org,
            repo = repo,
            branch = branch
        )))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
}

pub fn create_org_mock(org: &str) -> Mock {
    Mock::given(method("POST"))
        .and(path(format!("/orgs/{org}", org = org)))
        .and(body_json(serde_json::json!({ "login": org })))
        .respond_with(ResponseTemplate::new(201))
}

pub fn create_repo_mock(org: &str, repo: &str, default_branch: &str) -> Mock {
    Mock::given(method("POST"))
        .and(path(format!("/orgs/{org}/repos", org = org)))
        .and(body_json(serde_json::json!({
            "name": repo,
            "private": false,
            "auto_init": true,
            "default_branch": default_branch,
        })))
        .respond_with(ResponseTemplate::new(201))
}

/// A bare repository seeded with one commit on `main`, standing in for the
/// auto-initialized destination repo.
pub struct RemoteRepo {
    bare: TempDir,
}

impl RemoteRepo {
    pub fn new() -> Result<RemoteRepo> {
        let bare = TempDir::new()?;
        run_git(bare.path(), &["init", "--bare", "-b", "main"])?;

        let seed = TempDir::new()?;
        run_git(seed.path(), &["init", "-b", "main"])?;
        run_git(seed.path(), &["config", "user.name", "Seed User"])?;
        run_git(seed.path(), &["config", "user.email", "seed@example.com"])?;
        std::fs::write(seed.path().join("README.md"), "# destination\n")?;
        std::fs::write(seed.path().join("stale.txt"), "left over\n")?;
        run_git(seed.path(), &["add", "."])?;
        run_git(seed.path(), &["commit", "-m", "Initial commit"])?;
        let bare_url = bare.path().to_string_lossy().into_owned();
        run_git(seed.path(), &["push", &bare_url, "main:main"])?;

        Ok(RemoteRepo { bare })
    }

    pub fn url(&self) -> String {
        self.bare.path().to_string_lossy().into_owned()
    }

    pub fn path(&self) -> &Path {
        self.bare.path()
    }

    /// `git show <rev>:<path>` against the bare repo.
    pub fn show(&self, rev: &str, file: &str) -> Result<String> {
        run_git(
            self.bare.path(),
            &["show", &format!("{rev}:{file}", rev = rev, file = file)],
        )
    }

    pub fn branch_exists(&self, branch: &str) -> bool {
        run_git(
            self.bare.path(),
            &["rev-parse", "--verify", &format!("refs/heads/{}", branch)],
        )
        .is_ok()
    }
}

/// Write a zipball-shaped archive: one wrapper directory full of files.
pub fn write_zipball(dest: &Path, wrapper: &str, files: &[(&str, &str)]) -> Result<PathBuf> {
    use std::io::Write;
    use zip::write::FileOptions;

    let zip_path = dest.join("snapshot.zip");
    let file = std::fs::File::create(&zip_path)?;
    let mut writer = zip::ZipWriter::new(file);

    writer.add_directory(format!("{wrapper}/", wrapper = wrapper), FileOptions::default())?;
    for (name, content) in files {
        writer.start_file(
            format!("{wrapper}/{name}", wrapper = wrapper, name = name),
            FileOptions::default(),
        )?;
        writer.write_all(content.as_bytes())?;
    }
    writer.finish()?;

    Ok(zip_path)
}
