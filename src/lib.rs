pub mod cli;
pub mod git;
pub mod github_provider;
pub mod pipeline;
pub mod provider;
pub mod replace;
pub mod snapshot;
pub mod workdir;
