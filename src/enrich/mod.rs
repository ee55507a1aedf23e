//! Live repository enrichment
//!
//! Self-reported metadata is augmented with data fetched from the
//! source-hosting platform: star count, last-push timestamp, default branch,
//! and logo presence. The outbound calls sit behind the [`RepoHost`]
//! capability so the updater can be tested with deterministic fakes, and the
//! "never errors past this boundary" contract is encoded in the trait
//! signatures: failures are `None`, not `Err`.

pub mod github;

use chrono::Utc;

/// Live repository data, as far as the host could provide it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoInfo {
    pub stars: u64,
    pub pushed_at: Option<String>,
    pub updated_at: Option<String>,
    pub default_branch: Option<String>,
}

/// Read-only access to the source-hosting platform.
///
/// Implementations must degrade to `None` on any failure (network error,
/// timeout, non-success status); they never propagate errors.
pub trait RepoHost {
    /// Fetch repository metadata, or `None` when unavailable
    fn fetch_repo_info(&self, owner: &str, name: &str) -> Option<RepoInfo>;

    /// Check for a conventional `logo.png` on the given branch, returning its
    /// raw-content URL when present
    fn probe_logo(&self, owner: &str, name: &str, branch: &str) -> Option<String>;
}

/// Host that never answers; used by `--offline` runs
#[derive(Debug, Default)]
pub struct OfflineHost;

impl RepoHost for OfflineHost {
    fn fetch_repo_info(&self, _owner: &str, _name: &str) -> Option<RepoInfo> {
        None
    }

    fn probe_logo(&self, _owner: &str, _name: &str, _branch: &str) -> Option<String> {
        None
    }
}

/// Enrichment values with defaults already applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    pub stars: u64,
    pub updated_at: String,
    pub branch: String,
    pub logo: String,
}

/// Current UTC time in the registry's timestamp format
pub fn now_utc() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Query the host for enrichment data, degrading to defaults on any failure.
///
/// An empty owner or repo name skips the calls entirely. The timestamp
/// prefers the last push, then the last update, then the current time.
pub fn enrich(host: &dyn RepoHost, owner: &str, name: &str) -> Enrichment {
    let info = if owner.is_empty() || name.is_empty() {
        None
    } else {
        host.fetch_repo_info(owner, name)
    };
    let info = info.unwrap_or_default();

    let stars = info.stars;
    let updated_at = info
        .pushed_at
        .filter(|t| !t.is_empty())
        .or(info.updated_at.filter(|t| !t.is_empty()))
        .unwrap_or_else(now_utc);
    let branch = info
        .default_branch
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| "main".to_string());

    let logo = if owner.is_empty() || name.is_empty() {
        String::new()
    } else {
        host.probe_logo(owner, name, &branch).unwrap_or_default()
    };

    Enrichment {
        stars,
        updated_at,
        branch,
        logo,
    }
}
