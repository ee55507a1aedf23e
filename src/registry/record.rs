//! The canonical registry record schema

use serde::{Deserialize, Serialize};

/// One enriched plugin record as persisted in the registry.
///
/// Field order is the serialization order. Every field defaults on
/// deserialization so records written by older tooling still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginRecord {
    #[serde(default)]
    pub display_name: String,
    /// Short machine name; older registry versions did not carry it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub repo: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub social_link: String,
    #[serde(default)]
    pub stars: u64,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub logo: String,
}
