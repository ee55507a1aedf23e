//! Alias folding: canonicalizing alternate field spellings
//!
//! Plugin authors submit metadata with legacy and misspelled keys. Each
//! canonical field has a fixed list of recognized aliases; an alias value is
//! copied to the canonical key only when the canonical key is absent, and the
//! alias key is removed either way.
//!
//! The table is processed in fixed order. Note the collision between
//! `display_name`'s alias `name` and the canonical `name` field: a bare
//! `name` value is consumed as `display_name`'s source before `name` is
//! processed as its own field. This matches the marketplace's historical
//! behavior and must not be reordered.

use super::Metadata;
use super::diagnostics::Diagnostics;

/// Canonical field → recognized alternate spellings, in processing order
pub const FIELD_ALIASES: [(&str, &[&str]); 7] = [
    ("repo", &["repo_url", "repository", "github"]),
    ("display_name", &["displayname", "name"]),
    ("name", &["plugin_name"]),
    ("desc", &["description", "summary"]),
    ("author", &["authors", "author_name"]),
    ("version", &["ver", "v"]),
    ("tags", &["tag", "labels", "categories"]),
];

/// Fold alias keys into their canonical fields.
///
/// Returns true when any alias key was found (copied or discarded).
pub fn fold(metadata: &mut Metadata, diag: &mut Diagnostics) -> bool {
    let mut changed = false;
    for (canonical, alternates) in FIELD_ALIASES {
        for alias in alternates {
            if let Some(value) = metadata.shift_remove(*alias) {
                if !metadata.contains_key(canonical) {
                    metadata.insert(canonical.to_string(), value);
                    diag.note(format!(
                        "Replaced alias field '{alias}' with '{canonical}'"
                    ));
                }
                changed = true;
            }
        }
    }
    changed
}
