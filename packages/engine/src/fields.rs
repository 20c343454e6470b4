//! Field readers for raw document content
//!
//! Generators validate raw content field by field rather than through the
//! structural validator: business rules are stricter and every failure must
//! name the offending field. [`Fields`] wraps one JSON object together with
//! its path from the content root, so errors read like
//! `Invalid content at 'bekreftelse.kontaktpersonData.0.navn': is required`.

use crate::config::MAX_ARRAY_ITEMS;
use crate::error::{DocumentError, Result};
use crate::format::{numeric_string, scalar_string};
use crate::types::{is_truthy, JsType};
use serde_json::{Map, Number, Value};

/// A JSON object in raw content, addressed by its path.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    object: &'a Map<String, Value>,
    path: String,
}

impl<'a> Fields<'a> {
    /// Wrap the content root, which must be an object.
    pub fn root(raw: &'a Value) -> Result<Self> {
        match raw {
            Value::Object(object) => Ok(Self {
                object,
                path: String::new(),
            }),
            other => Err(DocumentError::validation(
                "content",
                format!("must be an object, got {}", describe(other)),
            )),
        }
    }

    /// Path of a key below this object.
    pub fn path_of(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    /// Raw value of a key, `None` if absent.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.object.get(key)
    }

    /// Whether a key holds a truthy value.
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some_and(is_truthy)
    }

    /// Fail unless every key holds a truthy value, naming all that do not.
    pub fn require_all(&self, keys: &[&str]) -> Result<()> {
        let missing: Vec<String> = keys
            .iter()
            .filter(|key| !self.is_set(key))
            .map(|key| self.path_of(key))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DocumentError::validation(
                missing.join(", "),
                "missing required field(s)",
            ))
        }
    }

    fn missing(&self, key: &str) -> DocumentError {
        DocumentError::validation(self.path_of(key), "is required")
    }

    fn wrong_type(&self, key: &str, expected: &str, actual: &Value) -> DocumentError {
        DocumentError::validation(
            self.path_of(key),
            format!("must be {expected}, got {}", describe(actual)),
        )
    }

    /// A required, non-empty string.
    pub fn required_string(&self, key: &str) -> Result<&'a str> {
        match self.get(key) {
            Some(value) if !is_truthy(value) => Err(self.missing(key)),
            None => Err(self.missing(key)),
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(self.wrong_type(key, "a string", other)),
        }
    }

    /// An optional string. Absent, `null` and empty all read as `None`.
    pub fn optional_string(&self, key: &str) -> Result<Option<&'a str>> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) if s.is_empty() => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(self.wrong_type(key, "a string", other)),
        }
    }

    /// A required number.
    pub fn required_number(&self, key: &str) -> Result<&'a Number> {
        match self.get(key) {
            None | Some(Value::Null) => Err(self.missing(key)),
            Some(Value::Number(n)) => Ok(n),
            Some(other) => Err(self.wrong_type(key, "a number", other)),
        }
    }

    /// A required numeric value (number or numeric string) in canonical
    /// string form. Zero and the empty string count as missing.
    pub fn required_numeric_string(&self, key: &str) -> Result<String> {
        let value = match self.get(key) {
            Some(value) if is_truthy(value) => value,
            _ => return Err(self.missing(key)),
        };
        numeric_string(value)
            .ok_or_else(|| self.wrong_type(key, "a number", value))
    }

    /// A numeric value (number or numeric string) that may be zero.
    pub fn numeric_string(&self, key: &str) -> Result<String> {
        match self.get(key) {
            None | Some(Value::Null) => Err(self.missing(key)),
            Some(Value::String(s)) if s.is_empty() => Err(self.missing(key)),
            Some(value) => {
                numeric_string(value).ok_or_else(|| self.wrong_type(key, "a number", value))
            }
        }
    }

    /// A scalar coerced to its string form; `None` if absent or empty.
    pub fn coerced_string(&self, key: &str) -> Result<Option<String>> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => match scalar_string(value) {
                Some(s) if s.is_empty() => Ok(None),
                Some(s) => Ok(Some(s)),
                None => Err(self.wrong_type(key, "a string or number", value)),
            },
        }
    }

    /// A required scalar coerced to its string form.
    pub fn required_coerced_string(&self, key: &str) -> Result<String> {
        self.coerced_string(key)?.ok_or_else(|| self.missing(key))
    }

    /// An optional boolean, `false` when absent.
    pub fn optional_bool(&self, key: &str) -> Result<bool> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(other) => Err(self.wrong_type(key, "a boolean", other)),
        }
    }

    /// A required array, bounded by [`MAX_ARRAY_ITEMS`].
    pub fn array(&self, key: &str) -> Result<&'a [Value]> {
        match self.get(key) {
            None | Some(Value::Null) => Err(self.missing(key)),
            Some(Value::Array(items)) if items.len() > MAX_ARRAY_ITEMS => {
                Err(DocumentError::validation(
                    self.path_of(key),
                    format!("must not have more than {MAX_ARRAY_ITEMS} items"),
                ))
            }
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(self.wrong_type(key, "an array", other)),
        }
    }

    /// A required array with at least one item.
    pub fn non_empty_array(&self, key: &str) -> Result<&'a [Value]> {
        let items = self.array(key)?;
        if items.is_empty() {
            return Err(DocumentError::validation(
                self.path_of(key),
                "must contain at least one item",
            ));
        }
        Ok(items)
    }

    /// A required, non-empty array of strings.
    pub fn string_array(&self, key: &str) -> Result<Vec<&'a str>> {
        let items = self.non_empty_array(key)?;
        items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.as_str()),
                other => Err(DocumentError::validation(
                    self.path_of(key),
                    format!("must be an array of strings, found {}", describe(other)),
                )),
            })
            .collect()
    }

    /// A required nested object.
    pub fn object(&self, key: &str) -> Result<Fields<'a>> {
        match self.get(key) {
            None | Some(Value::Null) => Err(self.missing(key)),
            Some(Value::Object(object)) => Ok(Fields {
                object,
                path: self.path_of(key),
            }),
            Some(other) => Err(self.wrong_type(key, "an object", other)),
        }
    }

    /// The items of an array of objects, each wrapped with its indexed path.
    pub fn objects(&self, key: &str, items: &'a [Value]) -> Result<Vec<Fields<'a>>> {
        let array_path = self.path_of(key);
        items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(object) => Ok(Fields {
                    object,
                    path: format!("{array_path}.{index}"),
                }),
                other => Err(DocumentError::validation(
                    format!("{array_path}.{index}"),
                    format!("must be an object, got {}", describe(other)),
                )),
            })
            .collect()
    }
}

/// Short description of a value's type for error messages.
fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Array(_) => "array",
        other => JsType::of(other).as_str(),
    }
}
