//! GitHub-backed [`RepoHost`] implementation
//!
//! One GET against the repository-info endpoint and one HEAD against the
//! raw-content service per invocation, both with a fixed timeout. A token is
//! picked up from the environment when available; without one, requests go
//! out unauthenticated and are subject to stricter rate limits.

use std::time::Duration;

use serde::Deserialize;

use super::{RepoHost, RepoInfo};

/// Token environment variables, first one found wins
pub const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// Per-request timeout; a hung remote must not block the run
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const API_BASE: &str = "https://api.github.com";
const RAW_BASE: &str = "https://raw.githubusercontent.com";

/// Conventional logo location on the raw-content service
pub fn logo_url(owner: &str, name: &str, branch: &str) -> String {
    format!("{RAW_BASE}/{owner}/{name}/{branch}/logo.png")
}

/// Repository-info response, deserialized leniently
#[derive(Debug, Deserialize)]
struct RepoResponse {
    #[serde(default)]
    stargazers_count: u64,
    pushed_at: Option<String>,
    updated_at: Option<String>,
    default_branch: Option<String>,
}

/// Blocking GitHub client
pub struct GithubClient {
    // client construction can fail on TLS backend init; a missing client
    // just means every lookup degrades to None
    client: Option<reqwest::blocking::Client>,
    token: Option<String>,
}

impl GithubClient {
    /// Build a client, reading the API token from the environment
    pub fn from_env() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("plugreg/", env!("CARGO_PKG_VERSION")))
            .build()
            .ok();
        let token = TOKEN_ENV_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()));
        Self { client, token }
    }

    fn authorize(&self, request: reqwest::blocking::RequestBuilder) -> reqwest::blocking::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl RepoHost for GithubClient {
    fn fetch_repo_info(&self, owner: &str, name: &str) -> Option<RepoInfo> {
        let client = self.client.as_ref()?;
        let request = client
            .get(format!("{API_BASE}/repos/{owner}/{name}"))
            .header("Accept", "application/vnd.github+json");
        let response = self.authorize(request).send().ok()?;
        if !response.status().is_success() {
            return None;
        }
        let body: RepoResponse = response.json().ok()?;
        Some(RepoInfo {
            stars: body.stargazers_count,
            pushed_at: body.pushed_at,
            updated_at: body.updated_at,
            default_branch: body.default_branch,
        })
    }

    fn probe_logo(&self, owner: &str, name: &str, branch: &str) -> Option<String> {
        let client = self.client.as_ref()?;
        let url = logo_url(owner, name, branch);
        let response = self.authorize(client.head(&url)).send().ok()?;
        response.status().is_success().then_some(url)
    }
}
