//! Plugin metadata model and repair pipeline
//!
//! Raw submissions are untrusted: keys may be misspelled aliases, values may
//! be null or mistyped, and the whole payload may be YAML, JSON, or garbage.
//! Metadata is therefore kept as an ordered mapping of loose JSON values
//! until the repair pipeline has run; only the registry record uses a strict
//! schema.

pub mod aliases;
pub mod autofill;
pub mod diagnostics;
pub mod tags;
pub mod validate;

use indexmap::IndexMap;
use serde_json::Value;

/// Raw or repaired plugin metadata, insertion-ordered
pub type Metadata = IndexMap<String, Value>;

/// Parse a metadata payload that may be JSON or YAML.
///
/// Input starting with `{` or `[` is treated as JSON, anything else as YAML.
/// Any parse failure (including a payload that is not a mapping) yields an
/// empty mapping; this function never fails.
pub fn parse_lenient(input: &str) -> Metadata {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Metadata::new();
    }
    let parsed = if trimmed.starts_with('{') || trimmed.starts_with('[') {
        serde_json::from_str::<Metadata>(trimmed).ok()
    } else {
        serde_yaml::from_str::<Metadata>(trimmed).ok()
    };
    parsed.unwrap_or_default()
}

/// Whether a field needs auto-generation: absent, null, or an empty string
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Falsy in the repair pipeline: null, false, zero, empty string/sequence
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Render a loose value as plain text (strings unquoted, the rest as JSON)
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Fetch a field as a string, empty when absent or not a string
pub fn str_field(metadata: &Metadata, key: &str) -> String {
    match metadata.get(key) {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_lenient_json() {
        let metadata = parse_lenient(r#"{"name": "demo", "stars": 3}"#);
        assert_eq!(metadata.get("name"), Some(&json!("demo")));
        assert_eq!(metadata.get("stars"), Some(&json!(3)));
    }

    #[test]
    fn test_parse_lenient_yaml() {
        let metadata = parse_lenient("name: demo\ntags:\n  - a\n  - b\n");
        assert_eq!(metadata.get("name"), Some(&json!("demo")));
        assert_eq!(metadata.get("tags"), Some(&json!(["a", "b"])));
    }

    #[test]
    fn test_parse_lenient_preserves_key_order() {
        let metadata = parse_lenient(r#"{"z": 1, "a": 2, "m": 3}"#);
        let keys: Vec<&String> = metadata.keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_parse_lenient_garbage_yields_empty() {
        assert!(parse_lenient("{not json").is_empty());
        assert!(parse_lenient(": [ not yaml").is_empty());
        assert!(parse_lenient("").is_empty());
    }

    #[test]
    fn test_parse_lenient_non_mapping_yields_empty() {
        assert!(parse_lenient("[1, 2, 3]").is_empty());
        assert!(parse_lenient("just a scalar").is_empty());
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some(&Value::Null)));
        assert!(is_blank(Some(&json!(""))));
        assert!(!is_blank(Some(&json!("x"))));
        assert!(!is_blank(Some(&json!(0))));
        assert!(!is_blank(Some(&json!([]))));
    }

    #[test]
    fn test_is_falsy() {
        assert!(is_falsy(&Value::Null));
        assert!(is_falsy(&json!(false)));
        assert!(is_falsy(&json!(0)));
        assert!(is_falsy(&json!("")));
        assert!(is_falsy(&json!([])));
        assert!(!is_falsy(&json!(true)));
        assert!(!is_falsy(&json!(1)));
        assert!(!is_falsy(&json!("x")));
    }

    #[test]
    fn test_value_to_string() {
        assert_eq!(value_to_string(&json!("plain")), "plain");
        assert_eq!(value_to_string(&json!(42)), "42");
        assert_eq!(value_to_string(&json!(true)), "true");
    }
}
