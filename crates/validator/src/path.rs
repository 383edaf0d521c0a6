//! Dotted-path access into JSON form data.
//!
//! Paths look like `"address.city"` or `"items.0.name"`. Numeric segments
//! index into arrays; every other segment indexes into objects.

use serde_json::{Map, Value};

/// Looks up the value at a dotted path.
///
/// Returns `None` when any segment is missing. An empty path addresses the
/// root value itself.
///
/// ```
/// use serde_json::json;
/// use trellis_validator::path::get;
///
/// let data = json!({"items": [{"name": "bolt"}]});
/// assert_eq!(get(&data, "items.0.name"), Some(&json!("bolt")));
/// assert_eq!(get(&data, "items.1.name"), None);
/// ```
#[must_use]
pub fn get<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(data);
    }

    path.split('.').try_fold(data, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Writes `value` at a dotted path, creating intermediate objects.
///
/// Numeric segments index into existing arrays. An index past the end pads
/// the array with `null` up to it, so existing items are never dropped.
/// Scalars in the way are replaced by an object.
///
/// ```
/// use serde_json::json;
/// use trellis_validator::path::set;
///
/// let mut data = json!({"items": [{"sku": "A-1"}]});
/// set(&mut data, "items.1.sku", json!("B-2"));
/// assert_eq!(data, json!({"items": [{"sku": "A-1"}, {"sku": "B-2"}]}));
/// ```
pub fn set(data: &mut Value, path: &str, value: Value) {
    if path.is_empty() {
        *data = value;
        return;
    }

    let mut current = data;
    let mut segments = path.split('.').peekable();

    while let Some(segment) = segments.next() {
        let last = segments.peek().is_none();

        let array_index = match &*current {
            Value::Array(_) => segment.parse::<usize>().ok(),
            _ => None,
        };

        if let Some(index) = array_index {
            let Value::Array(items) = current else {
                return;
            };
            if index >= items.len() {
                items.resize(index + 1, Value::Null);
            }
            if last {
                items[index] = value;
                return;
            }
            current = &mut items[index];
            continue;
        }

        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        let Some(map) = current.as_object_mut() else {
            return;
        };

        if last {
            map.insert(segment.to_owned(), value);
            return;
        }
        current = map
            .entry(segment.to_owned())
            .or_insert_with(|| Value::Object(Map::new()));
    }
}

/// Returns a copy of `data` with every override written at its path.
#[must_use]
pub fn with_overrides(data: &Value, overrides: &Map<String, Value>) -> Value {
    let mut out = data.clone();
    for (path, value) in overrides {
        set(&mut out, path, value.clone());
    }
    out
}

/// Turns the last path segment into a readable label.
///
/// `"billing.first_name"` becomes `"first name"`.
#[must_use]
pub fn humanize(path: &str) -> String {
    path.rsplit('.').next().unwrap_or(path).replace('_', " ")
}

/// Whether a value counts as blank for presence checks.
#[must_use]
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn get_walks_objects_and_arrays() {
        let data = json!({"a": {"b": [10, {"c": true}]}});
        assert_eq!(get(&data, "a.b.0"), Some(&json!(10)));
        assert_eq!(get(&data, "a.b.1.c"), Some(&json!(true)));
        assert_eq!(get(&data, "a.b.x"), None);
        assert_eq!(get(&data, "a.missing"), None);
        assert_eq!(get(&data, ""), Some(&data));
    }

    #[test]
    fn set_creates_intermediate_objects() {
        let mut data = json!({});
        set(&mut data, "address.city", json!("Lyon"));
        assert_eq!(data, json!({"address": {"city": "Lyon"}}));
    }

    #[test]
    fn set_indexes_existing_arrays() {
        let mut data = json!({"items": [{"name": "a"}, {"name": "b"}]});
        set(&mut data, "items.1.name", json!("z"));
        assert_eq!(data, json!({"items": [{"name": "a"}, {"name": "z"}]}));
    }

    #[test]
    fn set_appends_past_the_end_of_an_array() {
        let mut data = json!({"items": [{"sku": "A-1"}]});
        set(&mut data, "items.1.sku", json!("B-2"));
        assert_eq!(data, json!({"items": [{"sku": "A-1"}, {"sku": "B-2"}]}));

        set(&mut data, "items.3", json!({"sku": "D-4"}));
        assert_eq!(data["items"][2], json!(null));
        assert_eq!(data["items"][3], json!({"sku": "D-4"}));
        assert_eq!(data["items"][0], json!({"sku": "A-1"}));
    }

    #[test]
    fn overrides_for_a_new_item_keep_existing_items() {
        let data = json!({"items": [{"sku": "A-1"}]});
        let mut overrides = Map::new();
        overrides.insert("items.1.sku".into(), json!("B-2"));

        let patched = with_overrides(&data, &overrides);
        assert_eq!(patched["items"][0]["sku"], json!("A-1"));
        assert_eq!(patched["items"][1]["sku"], json!("B-2"));
    }

    #[test]
    fn set_replaces_scalars_in_the_way() {
        let mut data = json!({"address": "unknown"});
        set(&mut data, "address.city", json!("Oslo"));
        assert_eq!(data, json!({"address": {"city": "Oslo"}}));
    }

    #[test]
    fn overrides_do_not_touch_the_input() {
        let data = json!({"password": "hunter2", "password_confirmation": "nope"});
        let mut overrides = Map::new();
        overrides.insert("password_confirmation".into(), json!("hunter2"));

        let patched = with_overrides(&data, &overrides);
        assert_eq!(patched["password_confirmation"], json!("hunter2"));
        assert_eq!(data["password_confirmation"], json!("nope"));
    }

    #[test]
    fn humanize_uses_last_segment() {
        assert_eq!(humanize("billing.first_name"), "first name");
        assert_eq!(humanize("email"), "email");
    }

    #[test]
    fn blank_values() {
        assert!(is_blank(&json!(null)));
        assert!(is_blank(&json!("   ")));
        assert!(is_blank(&json!([])));
        assert!(is_blank(&json!({})));
        assert!(!is_blank(&json!(0)));
        assert!(!is_blank(&json!(false)));
    }
}
