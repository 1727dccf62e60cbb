pub mod commits;
pub mod config;
pub mod error;

pub use commits::{CommitSource, GithubCommits, StaticCommits, fetch_commit_count};
pub use config::{
    Config, GalleryConfig, GithubConfig, TerminalConfig, expand_tilde, resolve_workspace_path,
};
pub use error::{Error, Result};
