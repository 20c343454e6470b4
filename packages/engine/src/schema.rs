//! Structural validation of document content
//!
//! A [`Schema`] describes the shape of generated content: which keys exist,
//! which are required and what primitive type each leaf has. [`validate`]
//! compares arbitrary JSON content against a schema and reports every
//! deviation as a path-qualified [`ValidationViolation`]. It never stops at
//! the first problem.
//!
//! The validator is shape-only. Date formats, numeric ranges and catalog
//! references are checked by the document generators.
//!
//! # Leniency
//!
//! A node whose content is not an object or array (including `null`) is
//! accepted as-is. Scalar-vs-object mismatches are reported by the parent,
//! which compares the primitive type of every child against the schema.
//!
//! # Example
//!
//! ```
//! use minelev_engine::schema::{validate, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::object([("year", Schema::String), ("note", Schema::Optional)]);
//! let result = validate(&json!({ "year": "2024/2025" }), &schema);
//! assert!(result.valid);
//! ```

use crate::config::MAX_SCHEMA_DEPTH;
use crate::error::{DocumentError, Result};
use crate::types::JsType;
use serde::Serialize;
use serde_json::{Map, Value};

/// Expected shape of a content node.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// Required string
    String,
    /// Required number
    Number,
    /// Required boolean
    Boolean,
    /// String-typed key that may be absent
    Optional,
    /// Array whose every element matches the element schema.
    ///
    /// An empty array is reported as missing its first element unless the
    /// element schema is [`Schema::Optional`].
    Array(Box<Schema>),
    /// Object with the given keys, in declaration order
    Object(Vec<(String, Schema)>),
}

impl Schema {
    /// Build an object schema from `(key, schema)` pairs.
    pub fn object<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Schema)>,
    {
        Schema::Object(fields.into_iter().map(|(k, s)| (k.into(), s)).collect())
    }

    /// Build an array schema.
    pub fn array(element: Schema) -> Self {
        Schema::Array(Box::new(element))
    }

    /// Primitive type content must have at this node.
    pub fn js_type(&self) -> JsType {
        match self {
            Schema::String | Schema::Optional => JsType::String,
            Schema::Number => JsType::Number,
            Schema::Boolean => JsType::Boolean,
            Schema::Array(_) | Schema::Object(_) => JsType::Object,
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Schema::Optional)
    }

    /// Schema of an object key.
    pub fn field(&self, key: &str) -> Option<&Schema> {
        match self {
            Schema::Object(fields) => fields.iter().find(|(k, _)| k == key).map(|(_, s)| s),
            _ => None,
        }
    }

    /// Infer a schema from a sample-shaped template value.
    ///
    /// Scalar leaves declare their type by example, the string `"optional"`
    /// marks a key as not required, and arrays hold exactly one
    /// representative element.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidTemplate`] for `null` leaves, arrays
    /// that do not have exactly one element, or templates nested deeper than
    /// [`MAX_SCHEMA_DEPTH`].
    pub fn infer(template: &Value) -> Result<Self> {
        infer_node(template, "", 0)
    }

    /// Render this schema as a sample-shaped template value.
    ///
    /// `Schema::infer(&schema.sample())` yields the schema back.
    pub fn sample(&self) -> Value {
        match self {
            Schema::String => Value::String(String::new()),
            Schema::Number => Value::from(0),
            Schema::Boolean => Value::Bool(false),
            Schema::Optional => Value::String(OPTIONAL_MARKER.to_string()),
            Schema::Array(element) => Value::Array(vec![element.sample()]),
            Schema::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(k, s)| (k.clone(), s.sample()))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

/// Sentinel string flagging a template key as not required.
pub const OPTIONAL_MARKER: &str = "optional";

fn infer_node(template: &Value, path: &str, depth: usize) -> Result<Schema> {
    if depth > MAX_SCHEMA_DEPTH {
        return Err(DocumentError::InvalidTemplate {
            path: display_path(path),
            message: format!("nested deeper than {MAX_SCHEMA_DEPTH} levels"),
        });
    }

    match template {
        Value::String(s) if s == OPTIONAL_MARKER => Ok(Schema::Optional),
        Value::String(_) => Ok(Schema::String),
        Value::Number(_) => Ok(Schema::Number),
        Value::Bool(_) => Ok(Schema::Boolean),
        Value::Null => Err(DocumentError::InvalidTemplate {
            path: display_path(path),
            message: "null does not declare a type".to_string(),
        }),
        Value::Array(items) => match items.as_slice() {
            [element] => Ok(Schema::array(infer_node(
                element,
                &join_path(path, "0"),
                depth + 1,
            )?)),
            _ => Err(DocumentError::InvalidTemplate {
                path: display_path(path),
                message: format!(
                    "array templates need exactly one element, found {}",
                    items.len()
                ),
            }),
        },
        Value::Object(map) => {
            let mut fields = Vec::with_capacity(map.len());
            for (key, value) in map {
                fields.push((key.clone(), infer_node(value, &join_path(path, key), depth + 1)?));
            }
            Ok(Schema::Object(fields))
        }
    }
}

/// What is wrong at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    Missing,
    Extra,
    WrongType,
}

/// A single deviation from the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationViolation {
    /// Dot-joined path from the root; array elements use their index
    pub path: String,
    pub kind: ViolationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Outcome of [`validate`]. `valid` is true iff there are no violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub violations: Vec<ValidationViolation>,
}

impl ValidationResult {
    fn from_violations(violations: Vec<ValidationViolation>) -> Self {
        Self {
            valid: violations.is_empty(),
            violations,
        }
    }

    /// Whether a violation of `kind` was recorded at `path`.
    pub fn has_violation(&self, path: &str, kind: ViolationKind) -> bool {
        self.violations
            .iter()
            .any(|v| v.path == path && v.kind == kind)
    }
}

/// Compare `content` against `schema`, collecting every violation.
pub fn validate(content: &Value, schema: &Schema) -> ValidationResult {
    let mut violations = Vec::new();
    validate_node(content, schema, "", &mut violations);
    ValidationResult::from_violations(violations)
}

fn validate_node(
    content: &Value,
    schema: &Schema,
    path: &str,
    violations: &mut Vec<ValidationViolation>,
) {
    let content_is_array = match content {
        Value::Array(_) => true,
        Value::Object(_) => false,
        // Scalars and null are judged by the parent
        _ => return,
    };
    let schema_is_array = matches!(schema, Schema::Array(_));

    if schema.js_type() != JsType::Object || content_is_array != schema_is_array {
        violations.push(ValidationViolation {
            path: display_path(path),
            kind: ViolationKind::WrongType,
            detail: Some(format!(
                "need {}, got {}",
                shape_name(schema),
                if content_is_array { "array" } else { "object" }
            )),
        });
        return;
    }

    match (content, schema) {
        (Value::Object(map), Schema::Object(fields)) => {
            for (key, value) in map {
                let child_path = join_path(path, key);
                match schema.field(key) {
                    None => violations.push(ValidationViolation {
                        path: child_path,
                        kind: ViolationKind::Extra,
                        detail: None,
                    }),
                    Some(child_schema) => {
                        validate_child(value, child_schema, &child_path, violations)
                    }
                }
            }
            for (key, child_schema) in fields {
                if child_schema.is_required() && !map.contains_key(key) {
                    violations.push(ValidationViolation {
                        path: join_path(path, key),
                        kind: ViolationKind::Missing,
                        detail: None,
                    });
                }
            }
        }
        (Value::Array(items), Schema::Array(element)) => {
            for (index, value) in items.iter().enumerate() {
                let child_path = join_path(path, &index.to_string());
                validate_child(value, element, &child_path, violations);
            }
            if element.is_required() && items.is_empty() {
                violations.push(ValidationViolation {
                    path: join_path(path, "0"),
                    kind: ViolationKind::Missing,
                    detail: None,
                });
            }
        }
        // Shapes were checked to agree above
        _ => {}
    }
}

fn validate_child(
    value: &Value,
    schema: &Schema,
    path: &str,
    violations: &mut Vec<ValidationViolation>,
) {
    let expected = schema.js_type();
    let actual = JsType::of(value);
    if expected != actual {
        violations.push(ValidationViolation {
            path: path.to_string(),
            kind: ViolationKind::WrongType,
            detail: Some(format!("need {expected}, got {actual}")),
        });
        return;
    }
    if matches!(value, Value::Array(_) | Value::Object(_)) {
        validate_node(value, schema, path, violations);
    }
}

fn shape_name(schema: &Schema) -> &'static str {
    match schema {
        Schema::Array(_) => "array",
        Schema::Object(_) => "object",
        other => other.js_type().as_str(),
    }
}

fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "content".to_string()
    } else {
        path.to_string()
    }
}
