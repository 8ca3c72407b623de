use std::path::PathBuf;

/// One side of the move: which hosting instance, org, repo and branch.
#[derive(Clone, Debug, PartialEq)]
pub struct RepoLocation {
    pub host: String,
    pub org: String,
    pub repo: String,
    pub branch: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthorIdentity {
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub source: RepoLocation,
    pub destination: RepoLocation,
    pub source_token: String,
    pub destination_token: String,
    pub author: AuthorIdentity,
    pub push_user: String,
    pub push_host: String,
    pub replace_file: PathBuf,
}
