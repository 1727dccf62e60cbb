//! Public commit count shown on the about-me panel.
//!
//! The count is read once. A failed read is logged and reported as `None`,
//! leaving whatever the caller already displays untouched.

use crate::config::GithubConfig;
use crate::{Error, Result};
use serde::Deserialize;
use std::time::Duration;

pub trait CommitSource: Send {
    fn total_commits(&self, author: &str) -> Result<u64>;
}

/// GitHub commit search (`/search/commits?q=author:<id>`).
pub struct GithubCommits {
    api_base: String,
    timeout: Duration,
}

#[derive(Deserialize)]
struct SearchResponse {
    total_count: Option<u64>,
}

impl GithubCommits {
    pub fn new(api_base: impl Into<String>, timeout: Duration) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn from_config(config: &GithubConfig) -> Self {
        Self::new(config.api_base.clone(), config.timeout())
    }
}

impl CommitSource for GithubCommits {
    fn total_commits(&self, author: &str) -> Result<u64> {
        let url = format!("{}/search/commits", self.api_base);
        let response = ureq::get(&url)
            .query("q", &format!("author:{}", author))
            .set("Accept", "application/vnd.github+json")
            .set("User-Agent", concat!("folio/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout)
            .call()?;

        let body = response.into_string()?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        parsed
            .total_count
            .ok_or_else(|| Error::InvalidResponse("missing total_count".to_string()))
    }
}

/// Fixed count, for offline use.
pub struct StaticCommits(pub u64);

impl CommitSource for StaticCommits {
    fn total_commits(&self, _author: &str) -> Result<u64> {
        Ok(self.0)
    }
}

/// One-shot read. Errors stop here.
pub fn fetch_commit_count(source: &dyn CommitSource, author: &str) -> Option<u64> {
    match source.total_commits(author) {
        Ok(count) => {
            tracing::info!(author, count, "fetched commit count");
            Some(count)
        }
        Err(err) => {
            tracing::warn!(author, error = %err, "commit count unavailable");
            None
        }
    }
}
