//! Pure "set at path" updates over nested JSON maps.
//!
//! Paths follow the dot-separated key convention used throughout the
//! workspace (`shipper.name` addresses `{"shipper": {"name": ...}}`).
//! Updates never mutate their input; they return a new top-level map where
//! only the nodes along the path are rebuilt.

use serde_json::{Map, Value};

use crate::error::FormError;

/// Split a dotted key into path segments.
///
/// An empty key yields an empty path, which update and read operations
/// treat as unaddressable.
pub fn parse_path(key: &str) -> Vec<String> {
    if key.is_empty() {
        return Vec::new();
    }
    key.split('.').map(|s| s.to_string()).collect()
}

/// Return a copy of `root` with `value` written at `path`.
///
/// Missing intermediate nodes are created as empty maps; a non-object
/// value sitting where an intermediate node is needed is replaced in the
/// copy. Sibling branches are copied by value, unchanged, and `root`
/// itself is never mutated; only the nodes along the path are rebuilt.
///
/// # Errors
///
/// Returns [`FormError::EmptyPath`] for a zero-length path; a zero-length
/// path has no leaf to address.
pub fn update_at_path<S: AsRef<str>>(
    root: &Map<String, Value>,
    path: &[S],
    value: Value,
) -> Result<Map<String, Value>, FormError> {
    let (head, rest) = path.split_first().ok_or(FormError::EmptyPath)?;
    let head = head.as_ref();
    let mut out = root.clone();
    if rest.is_empty() {
        out.insert(head.to_string(), value);
    } else {
        let empty = Map::new();
        let child = match root.get(head) {
            Some(Value::Object(map)) => map,
            _ => &empty,
        };
        let updated = update_at_path(child, rest, value)?;
        out.insert(head.to_string(), Value::Object(updated));
    }
    Ok(out)
}

/// Read the value at `path`, if present.
pub fn get_at_path<'a, S: AsRef<str>>(
    root: &'a Map<String, Value>,
    path: &[S],
) -> Option<&'a Value> {
    let (head, rest) = path.split_first()?;
    let value = root.get(head.as_ref())?;
    if rest.is_empty() {
        return Some(value);
    }
    match value {
        Value::Object(map) => get_at_path(map, rest),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(m) => m,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_parse_path() {
        assert_eq!(parse_path("shipper.name"), vec!["shipper", "name"]);
        assert_eq!(parse_path("quantity"), vec!["quantity"]);
        assert!(parse_path("").is_empty());
    }

    #[test]
    fn test_single_segment() {
        let root = map(json!({"a": 1}));
        let out = update_at_path(&root, &["b"], json!(2)).unwrap();
        assert_eq!(Value::Object(out), json!({"a": 1, "b": 2}));
    }

    #[test]
    fn test_does_not_mutate_input() {
        let root = map(json!({"shipper": {"name": "A"}}));
        let out = update_at_path(&root, &["shipper", "name"], json!("B")).unwrap();
        assert_eq!(Value::Object(out), json!({"shipper": {"name": "B"}}));
        // original untouched
        assert_eq!(root["shipper"]["name"], json!("A"));
    }

    #[test]
    fn test_creates_missing_intermediates() {
        let out = update_at_path(&Map::new(), &["a", "b"], json!(5)).unwrap();
        assert_eq!(Value::Object(out), json!({"a": {"b": 5}}));
    }

    #[test]
    fn test_replaces_non_object_intermediate() {
        let root = map(json!({"a": 7}));
        let out = update_at_path(&root, &["a", "b"], json!(5)).unwrap();
        assert_eq!(Value::Object(out), json!({"a": {"b": 5}}));
        assert_eq!(root["a"], json!(7));
    }

    #[test]
    fn test_sibling_branches_preserved() {
        let root = map(json!({
            "shipper": {"name": "A", "phone": "1"},
            "consignee": {"name": "C"}
        }));
        let out = update_at_path(&root, &["shipper", "name"], json!("B")).unwrap();
        assert_eq!(out["shipper"]["phone"], json!("1"));
        assert_eq!(out["consignee"], root["consignee"]);
    }

    #[test]
    fn test_idempotent() {
        let root = map(json!({"x": {"y": 1}}));
        let once = update_at_path(&root, &["x", "y"], json!(2)).unwrap();
        let twice = update_at_path(&once, &["x", "y"], json!(2)).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_path_is_an_error() {
        let err = update_at_path(&Map::new(), &[] as &[&str], json!(1)).unwrap_err();
        assert!(matches!(err, FormError::EmptyPath));
    }

    #[test]
    fn test_get_at_path() {
        let root = map(json!({"shipper": {"name": "A"}}));
        assert_eq!(get_at_path(&root, &["shipper", "name"]), Some(&json!("A")));
        assert_eq!(get_at_path(&root, &["shipper", "phone"]), None);
        assert_eq!(get_at_path(&root, &["shipper", "name", "deep"]), None);
        assert_eq!(get_at_path(&root, &[] as &[&str]), None);
    }
}
