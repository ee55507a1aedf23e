//! Tags coercion
//!
//! `tags` arrives as a list, a comma-separated string, a JSON array embedded
//! in a string, or a lone scalar. Whatever the shape, the field leaves this
//! module as a sequence of strings.

use serde_json::Value;

use super::diagnostics::Diagnostics;
use super::{Metadata, is_falsy, value_to_string};

/// Coerce a loose tags value into a list of strings
pub fn coerce(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(value_to_string).collect(),
        Value::String(s) => {
            if s.starts_with('[') && s.ends_with(']') {
                if let Ok(items) = serde_json::from_str::<Vec<Value>>(s) {
                    return items.iter().map(value_to_string).collect();
                }
            }
            split_csv(s)
        }
        other if is_falsy(other) => Vec::new(),
        other => vec![value_to_string(other)],
    }
}

fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize the `tags` field in place.
///
/// Returns true when the stored value changed.
pub fn normalize(metadata: &mut Metadata, diag: &mut Diagnostics) -> bool {
    let Some(value) = metadata.get("tags") else {
        return false;
    };
    let coerced = Value::Array(coerce(value).into_iter().map(Value::String).collect());
    if *value == coerced {
        return false;
    }
    metadata.insert("tags".to_string(), coerced);
    diag.note("Converted 'tags' field to a list of strings");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_comma_string() {
        assert_eq!(coerce(&json!("a, b , ,c")), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_coerce_json_array_string() {
        assert_eq!(coerce(&json!("[\"x\",\"y\"]")), vec!["x", "y"]);
    }

    #[test]
    fn test_coerce_malformed_json_array_falls_back_to_csv() {
        assert_eq!(coerce(&json!("[x, y]")), vec!["[x", "y]"]);
    }

    #[test]
    fn test_coerce_plain_string() {
        assert_eq!(coerce(&json!("utility")), vec!["utility"]);
    }

    #[test]
    fn test_coerce_empty_string() {
        assert!(coerce(&json!("")).is_empty());
    }

    #[test]
    fn test_coerce_list_passthrough() {
        assert_eq!(coerce(&json!(["a", "b"])), vec!["a", "b"]);
    }

    #[test]
    fn test_coerce_list_stringifies_elements() {
        assert_eq!(coerce(&json!(["a", 2, true])), vec!["a", "2", "true"]);
    }

    #[test]
    fn test_coerce_scalar_wrapped() {
        assert_eq!(coerce(&json!(42)), vec!["42"]);
    }

    #[test]
    fn test_coerce_falsy_scalars_yield_empty() {
        assert!(coerce(&json!(null)).is_empty());
        assert!(coerce(&json!(false)).is_empty());
        assert!(coerce(&json!(0)).is_empty());
    }

    #[test]
    fn test_normalize_replaces_non_list() {
        let mut metadata = Metadata::new();
        metadata.insert("tags".to_string(), json!("a,b"));
        let mut diag = Diagnostics::silent();
        assert!(normalize(&mut metadata, &mut diag));
        assert_eq!(metadata.get("tags"), Some(&json!(["a", "b"])));
        assert_eq!(diag.lines().len(), 1);
    }

    #[test]
    fn test_normalize_keeps_string_list() {
        let mut metadata = Metadata::new();
        metadata.insert("tags".to_string(), json!(["a", "b"]));
        let mut diag = Diagnostics::silent();
        assert!(!normalize(&mut metadata, &mut diag));
        assert!(diag.is_empty());
    }

    #[test]
    fn test_normalize_absent_tags_is_a_no_op() {
        let mut metadata = Metadata::new();
        let mut diag = Diagnostics::silent();
        assert!(!normalize(&mut metadata, &mut diag));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut metadata = Metadata::new();
        metadata.insert("tags".to_string(), json!("a, b , ,c"));
        let mut diag = Diagnostics::silent();
        normalize(&mut metadata, &mut diag);
        let first = metadata.clone();
        assert!(!normalize(&mut metadata, &mut diag));
        assert_eq!(metadata, first);
    }
}
