//! Core types shared across the document engine

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// Text in the three display languages documents are rendered in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub nb: String,
    pub nn: String,
    pub en: String,
}

impl LocalizedText {
    /// The same text in every language (used for subject names, which upstream
    /// only delivers in one language).
    pub fn uniform(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            nb: text.clone(),
            nn: text.clone(),
            en: text,
        }
    }
}

/// Primitive type vocabulary of content templates.
///
/// Mirrors the `typeof` classification clients use when they build content:
/// `null`, arrays and maps are all `object`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsType {
    String,
    Number,
    Boolean,
    Object,
}

impl JsType {
    /// Classify a JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => JsType::String,
            Value::Number(_) => JsType::Number,
            Value::Bool(_) => JsType::Boolean,
            Value::Null | Value::Array(_) | Value::Object(_) => JsType::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JsType::String => "string",
            JsType::Number => "number",
            JsType::Boolean => "boolean",
            JsType::Object => "object",
        }
    }
}

impl fmt::Display for JsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a JSON number the way clients stringify numbers.
///
/// Integral floats lose their fraction (`5.0` becomes `"5"`), everything else
/// keeps serde_json's shortest representation.
pub fn number_to_string(number: &Number) -> String {
    if let Some(i) = number.as_i64() {
        return i.to_string();
    }
    if let Some(u) = number.as_u64() {
        return u.to_string();
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => number.to_string(),
    }
}

/// Truthiness of a raw content value.
///
/// Empty strings, zero, `false` and `null` count as absent when a field is
/// required; empty arrays and objects do not.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
