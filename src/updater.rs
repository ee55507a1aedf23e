//! The registry updater
//!
//! Takes (ideally already repaired) plugin metadata, derives the plugin id,
//! enriches the record with live repository data, and merges it into the
//! registry, newest first. Enrichment and storage are injected capabilities;
//! the only way this fails is registry I/O.

use crate::enrich::{self, RepoHost};
use crate::error::Result;
use crate::metadata::{Metadata, str_field, tags};
use crate::registry::record::PluginRecord;
use crate::registry::store::RegistryStore;
use crate::registry::{Registry, merge_front};

/// Fallback id when neither a repo name nor a plugin name is available
pub const UNKNOWN_PLUGIN_ID: &str = "unknown_plugin";

/// Split a repository URL into (owner, name).
///
/// Expects `https://host/owner/name`; the trailing slash is stripped and the
/// last two path segments are taken. Anything shorter yields empty strings.
pub fn split_repo_url(repo_url: &str) -> (String, String) {
    let trimmed = repo_url.trim_end_matches('/');
    let mut segments = trimmed.rsplit('/');
    let name = segments.next().unwrap_or_default();
    let owner = segments.next().unwrap_or_default();
    if owner.is_empty() || name.is_empty() {
        (String::new(), String::new())
    } else {
        (owner.to_string(), name.to_string())
    }
}

/// Derive the stable plugin id: repo name, declared name, fixed fallback.
///
/// Deterministic so re-submitting a plugin overwrites its entry instead of
/// duplicating it.
pub fn derive_plugin_id(repo_name: &str, metadata: &Metadata) -> String {
    if !repo_name.is_empty() {
        return repo_name.to_string();
    }
    let name = str_field(metadata, "name");
    if !name.is_empty() {
        return name;
    }
    UNKNOWN_PLUGIN_ID.to_string()
}

fn assemble_record(
    metadata: &Metadata,
    owner: &str,
    enrichment: &enrich::Enrichment,
) -> PluginRecord {
    let display_name = {
        let explicit = str_field(metadata, "display_name");
        if explicit.is_empty() {
            str_field(metadata, "name")
        } else {
            explicit
        }
    };
    let name = {
        let name = str_field(metadata, "name");
        (!name.is_empty()).then_some(name)
    };
    let social_link = {
        let explicit = str_field(metadata, "social_link");
        if !explicit.is_empty() {
            explicit
        } else if owner.is_empty() {
            String::new()
        } else {
            format!("https://github.com/{owner}")
        }
    };
    let version = {
        let version = str_field(metadata, "version");
        if version.is_empty() {
            "v1.0.0".to_string()
        } else {
            version
        }
    };
    let tags = metadata.get("tags").map(tags::coerce).unwrap_or_default();

    PluginRecord {
        display_name,
        name,
        desc: str_field(metadata, "desc"),
        author: str_field(metadata, "author"),
        repo: str_field(metadata, "repo"),
        tags,
        social_link,
        stars: enrichment.stars,
        version,
        updated_at: enrichment.updated_at.clone(),
        logo: enrichment.logo.clone(),
    }
}

/// Enrich the metadata and merge it into the registry.
///
/// Returns the derived plugin id and the enriched record; the merged
/// registry is written back through the store as a side effect.
pub fn update_registry(
    metadata: &Metadata,
    host: &dyn RepoHost,
    store: &dyn RegistryStore,
) -> Result<(String, PluginRecord)> {
    let (owner, repo_name) = split_repo_url(&str_field(metadata, "repo"));
    let plugin_id = derive_plugin_id(&repo_name, metadata);

    let enrichment = enrich::enrich(host, &owner, &repo_name);
    let record = assemble_record(metadata, &owner, &enrichment);

    let registry: Registry = store.read()?;
    let merged = merge_front(&registry, &plugin_id, record.clone());
    store.write(&merged)?;

    Ok((plugin_id, record))
}
