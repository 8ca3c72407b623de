pub mod common;

pub use common::{AuthorIdentity, Config, RepoLocation};

use anyhow::{Context, Result};
use clap::Parser;

pub const SOURCE_TOKEN_VAR: &str = "SOURCE_GITHUB_TOKEN";
pub const DESTINATION_TOKEN_VAR: &str = "DESTINATION_GITHUB_TOKEN";

/// Move a repository's contents from one GitHub instance/org to another.
#[derive(Parser)]
pub struct Args {
    /// API host of the source hosting instance
    #[clap(default_value = "api.github.com")]
    pub source_github_instance: String,

    /// API host of the destination hosting instance
    #[clap(default_value = "api.github.com")]
    pub destination_github_instance: String,

    #[clap(default_value = "example")]
    pub source_org: String,

    #[clap(default_value = "example")]
    pub destination_org: String,

    #[clap(default_value = "source-repo")]
    pub source_repo: String,

    #[clap(default_value = "destination-repo")]
    pub destination_repo: String,

    #[clap(default_value = "main")]
    pub source_branch: String,

    #[clap(default_value = "main")]
    pub destination_branch: String,

    /// Committer identity recorded on the migration commit
    #[clap(long, default_value = "repo-mover")]
    pub author_name: String,

    #[clap(long, default_value = "repo-mover@localhost")]
    pub author_email: String,

    /// Username part of the credential-embedded push URL
    #[clap(long, default_value = "repo-mover")]
    pub push_user: String,

    /// Host the destination repo is cloned from and pushed to
    #[clap(long, default_value = "github.com")]
    pub push_host: String,

    /// JSON file with the literal string substitution table
    #[clap(long, default_value = "replace.json", parse(from_os_str))]
    pub replace_file: std::path::PathBuf,
}

pub fn run() -> Result<Config> {
    let args = Args::parse();

    let source_token = read_token(SOURCE_TOKEN_VAR, &args.source_github_instance)?;
    let destination_token = read_token(DESTINATION_TOKEN_VAR, &args.destination_github_instance)?;

    Ok(into_config(args, source_token, destination_token))
}

fn read_token(var: &str, instance: &str) -> Result<String> {
    std::env::var(var).with_context(|| {
        format!(
            "no token found, required environment variable: {var} for github instance {instance}",
            var = var,
            instance = instance
        )
    })
}

pub fn into_config(args: Args, source_token: String, destination_token: String) -> Config {
    Config {
        source: RepoLocation {
            host: args.source_github_instance,
            org: args.source_org,
            repo: args.source_repo,
            branch: args.source_branch,
        },
        destination: RepoLocation {
            host: args.destination_github_instance,
            org: args.destination_org,
            repo: args.destination_repo,
            branch: args.destination_branch,
        },
        source_token,
        destination_token,
        author: AuthorIdentity {
            name: args.author_name,
            email: args.author_email,
        },
        push_user: args.push_user,
        push_host: args.push_host,
        replace_file: args.replace_file,
    }
}
