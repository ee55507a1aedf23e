//! Auto-generation of missing metadata fields
//!
//! Fields the author left out are derived from the repository context where
//! possible: the CI-supplied `owner/name` hint, the repo URL already present
//! in the metadata, or the version-control ref.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

use super::diagnostics::Diagnostics;
use super::{Metadata, is_blank, is_falsy, str_field, value_to_string};

/// Default description for plugins that ship without one
pub const DEFAULT_DESC: &str = "一个AstrBot插件";

/// Plugin-name prefixes stripped when deriving `name` from the repo name
pub const PLUGIN_NAME_PREFIXES: [&str; 3] = ["astrbot_plugin_", "astrbot-plugin-", "plugin-"];

fn github_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"github\.com/([^/]+)/([^/]+)").unwrap()
    })
}

/// Repository context resolved from the CI hint or the metadata itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoContext {
    pub owner: String,
    pub name: String,
}

impl RepoContext {
    /// Resolve owner and repo name.
    ///
    /// A non-empty `repo_hint` ("owner/name") wins; without a slash the whole
    /// hint is taken as the repo name. Otherwise the metadata's `repo` or
    /// `repo_url` value is searched for a `github.com/owner/name` pattern.
    pub fn resolve(metadata: &Metadata, repo_hint: &str) -> Self {
        if !repo_hint.is_empty() {
            return match repo_hint.split_once('/') {
                Some((owner, name)) => Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                },
                None => Self {
                    owner: String::new(),
                    name: repo_hint.to_string(),
                },
            };
        }

        let mut repo_url = str_field(metadata, "repo");
        if repo_url.is_empty() {
            repo_url = str_field(metadata, "repo_url");
        }
        if let Some(caps) = github_url_re().captures(&repo_url) {
            return Self {
                owner: caps[1].to_string(),
                name: caps[2].to_string(),
            };
        }
        Self::default()
    }
}

/// Strip exactly one recognized plugin prefix from a repo name
pub fn strip_plugin_prefix(name: &str) -> &str {
    for prefix in PLUGIN_NAME_PREFIXES {
        if let Some(stripped) = name.strip_prefix(prefix) {
            return stripped;
        }
    }
    name
}

fn generate(field: &str, ctx: &RepoContext, repo_hint: &str, ref_hint: &str) -> Option<Value> {
    let value = match field {
        "repo" if !repo_hint.is_empty() => {
            Value::String(format!("https://github.com/{repo_hint}"))
        }
        "repo" => Value::Null,
        "display_name" => Value::String(ctx.name.clone()),
        "name" => Value::String(strip_plugin_prefix(&ctx.name).to_string()),
        "author" => Value::String(ctx.owner.clone()),
        "version" => match ref_hint.strip_prefix("refs/tags/") {
            Some(tag) => Value::String(tag.to_string()),
            None => Value::Null,
        },
        "desc" => Value::String(DEFAULT_DESC.to_string()),
        "tags" => Value::Array(Vec::new()),
        _ => Value::Null,
    };
    // a rule yielding a falsy value leaves the field unset (this keeps the
    // empty tags sequence from materializing here; coercion handles tags)
    if is_falsy(&value) { None } else { Some(value) }
}

/// Canonical fields in auto-generation order
const GENERATED_FIELDS: [&str; 7] = [
    "repo",
    "display_name",
    "name",
    "author",
    "version",
    "desc",
    "tags",
];

/// Fill absent, null, or empty-string fields from the repository context.
///
/// Returns true when any field was generated.
pub fn fill(
    metadata: &mut Metadata,
    ctx: &RepoContext,
    repo_hint: &str,
    ref_hint: &str,
    diag: &mut Diagnostics,
) -> bool {
    let mut changed = false;
    for field in GENERATED_FIELDS {
        if !is_blank(metadata.get(field)) {
            continue;
        }
        if let Some(value) = generate(field, ctx, repo_hint, ref_hint) {
            diag.note(format!(
                "Auto-generated field '{field}': {}",
                value_to_string(&value)
            ));
            metadata.insert(field.to_string(), value);
            changed = true;
        }
    }
    changed
}
