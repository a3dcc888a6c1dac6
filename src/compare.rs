//! Semantic JSON comparison.
//!
//! Two documents are semantically equal when they hold the same key/value set
//! per object and the same elements in the same order per array. Key order and
//! whitespace are ignored. Numbers compare by value, so `1.5` and `1.50` match,
//! as do `2` and `2.0`.

use serde_json::{Number, Value};

use crate::error::JsonDifference;

/// Returns true if `a` and `b` are semantically equal.
pub fn json_eq(a: &Value, b: &Value) -> bool {
    first_difference(a, b).is_none()
}

/// Integers compare exactly; only when either side is a float do both sides
/// compare as `f64`.
fn numbers_eq(e: &Number, a: &Number) -> bool {
    if e.is_f64() || a.is_f64() {
        return e.as_f64() == a.as_f64();
    }
    match (e.as_i64(), a.as_i64()) {
        (Some(e), Some(a)) => e == a,
        _ => e.as_u64().is_some() && e.as_u64() == a.as_u64(),
    }
}

/// Find the first point at which `actual` diverges from `expected`.
///
/// Objects are walked in `expected`'s key order, then keys present only in
/// `actual` are reported.
pub fn first_difference(expected: &Value, actual: &Value) -> Option<JsonDifference> {
    diff_at(expected, actual, String::new())
}

fn diff_at(expected: &Value, actual: &Value, path: String) -> Option<JsonDifference> {
    match (expected, actual) {
        (Value::Object(e), Value::Object(a)) => {
            for (key, e_val) in e {
                let child = format!("{}/{}", path, escape_pointer(key));
                match a.get(key) {
                    Some(a_val) => {
                        if let Some(diff) = diff_at(e_val, a_val, child) {
                            return Some(diff);
                        }
                    }
                    None => {
                        return Some(JsonDifference {
                            path: child,
                            expected: Some(e_val.clone()),
                            actual: None,
                        })
                    }
                }
            }
            a.iter()
                .find(|(key, _)| !e.contains_key(*key))
                .map(|(key, a_val)| JsonDifference {
                    path: format!("{}/{}", path, escape_pointer(key)),
                    expected: None,
                    actual: Some(a_val.clone()),
                })
        }
        (Value::Array(e), Value::Array(a)) => {
            for (i, (e_val, a_val)) in e.iter().zip(a).enumerate() {
                if let Some(diff) = diff_at(e_val, a_val, format!("{}/{}", path, i)) {
                    return Some(diff);
                }
            }
            match e.len().cmp(&a.len()) {
                std::cmp::Ordering::Equal => None,
                std::cmp::Ordering::Greater => Some(JsonDifference {
                    path: format!("{}/{}", path, a.len()),
                    expected: Some(e[a.len()].clone()),
                    actual: None,
                }),
                std::cmp::Ordering::Less => Some(JsonDifference {
                    path: format!("{}/{}", path, e.len()),
                    expected: None,
                    actual: Some(a[e.len()].clone()),
                }),
            }
        }
        (Value::Number(e), Value::Number(a)) => {
            if numbers_eq(e, a) {
                None
            } else {
                Some(mismatch(expected, actual, path))
            }
        }
        _ if expected == actual => None,
        _ => Some(mismatch(expected, actual, path)),
    }
}

fn mismatch(expected: &Value, actual: &Value, path: String) -> JsonDifference {
    JsonDifference {
        path,
        expected: Some(expected.clone()),
        actual: Some(actual.clone()),
    }
}

/// Escape a key for use as a JSON Pointer segment (`~` -> `~0`, `/` -> `~1`).
fn escape_pointer(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_order_is_ignored() {
        let a: Value = serde_json::from_str(r#"{"a":1,"b":2}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"b":2,"a":1}"#).unwrap();
        assert!(json_eq(&a, &b));
    }

    #[test]
    fn numbers_compare_by_value() {
        let a: Value = serde_json::from_str(r#"{"price":1.50,"qty":2}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"price":1.5,"qty":2.0}"#).unwrap();
        assert!(json_eq(&a, &b));
        assert!(!json_eq(&json!(1), &json!(2)));
    }

    #[test]
    fn large_integers_compare_exactly() {
        let diff = first_difference(&json!(9007199254740993u64), &json!(9007199254740992u64));
        assert!(diff.is_some());
        assert!(json_eq(&json!(u64::MAX), &json!(u64::MAX)));
        assert!(!json_eq(&json!(-1), &json!(u64::MAX)));
        assert!(json_eq(&json!(9007199254740993i64), &json!(9007199254740993u64)));
    }

    #[test]
    fn array_order_matters() {
        let diff = first_difference(&json!([1, 2]), &json!([2, 1])).unwrap();
        assert_eq!(diff.path, "/0");
    }

    #[test]
    fn reports_missing_key() {
        let diff = first_difference(&json!({"seq": 0, "ver": "1.2"}), &json!({"ver": "1.2"}))
            .unwrap();
        assert_eq!(diff.path, "/seq");
        assert_eq!(diff.expected, Some(json!(0)));
        assert_eq!(diff.actual, None);
    }

    #[test]
    fn reports_injected_key() {
        let diff = first_difference(&json!({"assets": []}), &json!({"assets": [], "seq": 0}))
            .unwrap();
        assert_eq!(diff.path, "/seq");
        assert_eq!(diff.expected, None);
    }

    #[test]
    fn reports_array_length_change() {
        let diff = first_difference(&json!({"a": [1, 2, 3]}), &json!({"a": [1, 2]})).unwrap();
        assert_eq!(diff.path, "/a/2");
        assert_eq!(diff.expected, Some(json!(3)));
    }

    #[test]
    fn null_is_not_absent() {
        let diff = first_difference(&json!({"ext": null}), &json!({})).unwrap();
        assert_eq!(diff.path, "/ext");
    }

    #[test]
    fn pointer_segments_are_escaped() {
        let diff = first_difference(&json!({"a/b": 1}), &json!({"a/b": 2})).unwrap();
        assert_eq!(diff.path, "/a~1b");
    }
}
