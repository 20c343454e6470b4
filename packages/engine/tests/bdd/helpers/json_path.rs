//! Dot-path access into JSON values, and Gherkin cell conversion
//!
//! Paths use the same notation as validation errors: `bekreftelse.fraDato`,
//! `classes.0.name`.

use serde_json::{Map, Value};

/// Convert a Gherkin cell or quoted step argument to a JSON value.
///
/// Supports:
/// - `true` / `false` -> Bool
/// - `null` -> Null
/// - Integer and float literals -> Number
/// - `[...]` / `{...}` / `"..."` -> parsed JSON
/// - Everything else -> String
pub fn convert_gherkin_value(val: &str) -> Value {
    let trimmed = val.trim();

    match trimmed {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        "null" => return Value::Null,
        _ => {}
    }

    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::from(i);
    }

    if let Ok(f) = trimmed.parse::<f64>() {
        return Value::from(f);
    }

    if trimmed.starts_with('[') || trimmed.starts_with('{') || trimmed.starts_with('"') {
        if let Ok(v) = serde_json::from_str(trimmed) {
            return v;
        }
    }

    Value::String(val.to_string())
}

/// Look up a dot path.
pub fn get_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Set a dot path, creating intermediate objects as needed.
pub fn set_path(value: &mut Value, path: &str, new_value: Value) {
    let segments: Vec<&str> = path.split('.').collect();
    let Some((last, parents)) = segments.split_last() else {
        return;
    };

    let mut current = value;
    for segment in parents {
        current = child_mut(current, segment, path);
    }

    match current {
        Value::Array(items) => {
            let index = parse_index(last, path);
            items[index] = new_value;
        }
        other => {
            if !other.is_object() {
                *other = Value::Object(Map::new());
            }
            if let Value::Object(map) = other {
                map.insert(last.to_string(), new_value);
            }
        }
    }
}

fn child_mut<'a>(current: &'a mut Value, segment: &str, path: &str) -> &'a mut Value {
    if !current.is_object() && !current.is_array() {
        *current = Value::Object(Map::new());
    }
    match current {
        Value::Array(items) => {
            let index = parse_index(segment, path);
            &mut items[index]
        }
        Value::Object(map) => map
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new())),
        _ => unreachable!("replaced by an object above"),
    }
}

fn parse_index(segment: &str, path: &str) -> usize {
    segment
        .parse()
        .unwrap_or_else(|_| panic!("'{segment}' is not an array index in '{path}'"))
}

/// Remove the key at a dot path, if present.
pub fn remove_path(value: &mut Value, path: &str) {
    let (parent, key) = match path.rsplit_once('.') {
        Some((parent, key)) => (parent, key),
        None => ("", path),
    };

    let target = if parent.is_empty() {
        Some(value)
    } else {
        parent.split('.').try_fold(value, |current, segment| match current {
            Value::Object(map) => map.get_mut(segment),
            Value::Array(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(move |i| items.get_mut(i)),
            _ => None,
        })
    };

    if let Some(Value::Object(map)) = target {
        map.remove(key);
    }
}
