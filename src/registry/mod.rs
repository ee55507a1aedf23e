//! The persisted plugin registry
//!
//! An ordered mapping of plugin id to enriched record, read and rewritten in
//! full on each invocation. Ordering is part of the contract: the most
//! recently updated plugin sits first and untouched entries keep their
//! relative order, so the marketplace listing shows newest submissions on
//! top. Entries are never deleted here.

pub mod record;
pub mod store;

use indexmap::IndexMap;
use record::PluginRecord;

/// Ordered plugin id → record mapping
pub type Registry = IndexMap<String, PluginRecord>;

/// Merge a record into the registry, newest first.
///
/// Re-inserting an existing id is a delete-then-insert-first, not an
/// in-place update: the entry is replaced and moves to the front while every
/// other entry keeps its relative order.
pub fn merge_front(registry: &Registry, plugin_id: &str, record: PluginRecord) -> Registry {
    let mut merged = Registry::with_capacity(registry.len() + 1);
    merged.insert(plugin_id.to_string(), record);
    for (id, existing) in registry {
        if id != plugin_id {
            merged.insert(id.clone(), existing.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(desc: &str) -> PluginRecord {
        PluginRecord {
            desc: desc.to_string(),
            ..PluginRecord::default()
        }
    }

    fn registry_of(entries: &[(&str, &str)]) -> Registry {
        entries
            .iter()
            .map(|(id, desc)| (id.to_string(), record(desc)))
            .collect()
    }

    #[test]
    fn test_new_entry_goes_first() {
        let registry = registry_of(&[("b", "B"), ("c", "C")]);
        let merged = merge_front(&registry, "a", record("A"));
        let ids: Vec<&String> = merged.keys().collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(merged["a"].desc, "A");
        assert_eq!(merged["b"].desc, "B");
        assert_eq!(merged["c"].desc, "C");
    }

    #[test]
    fn test_resubmission_moves_to_front() {
        let registry = registry_of(&[("a", "A"), ("b", "B"), ("c", "C")]);
        let merged = merge_front(&registry, "b", record("B2"));
        let ids: Vec<&String> = merged.keys().collect();
        assert_eq!(ids, ["b", "a", "c"]);
        assert_eq!(merged["b"].desc, "B2");
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_merge_into_empty_registry() {
        let merged = merge_front(&Registry::new(), "a", record("A"));
        assert_eq!(merged.len(), 1);
        assert_eq!(merged["a"].desc, "A");
    }

    #[test]
    fn test_merge_front_of_front_is_stable() {
        let registry = registry_of(&[("a", "A"), ("b", "B")]);
        let merged = merge_front(&registry, "a", record("A2"));
        let ids: Vec<&String> = merged.keys().collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(merged["a"].desc, "A2");
    }
}
