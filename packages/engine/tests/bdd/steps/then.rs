//! Then step definitions
//!
//! Steps that verify outcomes and assertions.

use cucumber::then;
use minelev_engine::{ErrorKind, ViolationKind};
use serde_json::Value;

use crate::helpers::json_path::{convert_gherkin_value, get_path};
use crate::world::MinElevWorld;

fn generated(world: &MinElevWorld) -> &Value {
    assert!(
        world.is_success(),
        "Expected successful generation, got error: {:?}",
        world.error_message()
    );
    world.content.as_ref().expect("content is present")
}

fn parse_kind(kind: &str) -> ErrorKind {
    match kind {
        "validation" => ErrorKind::Validation,
        "not-found" => ErrorKind::NotFound,
        "integrity" => ErrorKind::Integrity,
        "internal" => ErrorKind::Internal,
        other => panic!("Unknown error kind '{other}'"),
    }
}

fn parse_violation(kind: &str) -> ViolationKind {
    match kind {
        "missing" => ViolationKind::Missing,
        "extra" => ViolationKind::Extra,
        "wrong-type" => ViolationKind::WrongType,
        other => panic!("Unknown violation kind '{other}'"),
    }
}

// =============================================================================
// Generation outcome
// =============================================================================

#[then("the document is generated")]
fn assert_generated(world: &mut MinElevWorld) {
    generated(world);
}

#[then(expr = "the content field {string} is {string}")]
fn assert_content_field(world: &mut MinElevWorld, path: String, expected: String) {
    let content = generated(world);
    let actual = get_path(content, &path)
        .unwrap_or_else(|| panic!("Content has no field '{path}': {content}"));
    let expected_value = convert_gherkin_value(&expected);
    let matches = actual == &expected_value || actual.as_str() == Some(expected.as_str());
    assert!(
        matches,
        "Expected '{path}' to be {expected_value}, got {actual}"
    );
}

#[then(expr = "the content field {string} has {int} item(s)")]
fn assert_content_items(world: &mut MinElevWorld, path: String, count: usize) {
    let content = generated(world);
    let items = get_path(content, &path)
        .and_then(Value::as_array)
        .unwrap_or_else(|| panic!("Content field '{path}' is not an array: {content}"));
    assert_eq!(items.len(), count, "Unexpected length of '{path}'");
}

#[then(expr = "the content has no field {string}")]
fn assert_no_content_field(world: &mut MinElevWorld, path: String) {
    let content = generated(world);
    assert!(
        get_path(content, &path).is_none(),
        "Expected no field '{path}' in {content}"
    );
}

#[then(expr = "the content year is {string}")]
fn assert_year(world: &mut MinElevWorld, expected: String) {
    let content = generated(world);
    assert_eq!(content["year"], Value::String(expected));
}

#[then(expr = "generation fails with a/an {word} error")]
fn assert_error_kind(world: &mut MinElevWorld, kind: String) {
    let expected = parse_kind(&kind);
    let error = world
        .error
        .as_ref()
        .unwrap_or_else(|| panic!("Expected a {kind} error, got content: {:?}", world.content));
    assert_eq!(error.kind(), expected, "Unexpected error: {error}");
}

#[then(expr = "the error mentions {string}")]
fn assert_error_mentions(world: &mut MinElevWorld, fragment: String) {
    let message = world
        .error_message()
        .unwrap_or_else(|| panic!("Expected an error mentioning '{fragment}'"));
    assert!(
        message.contains(&fragment),
        "Expected error to mention '{fragment}', got: {message}"
    );
}

#[then(expr = "the error status is {int}")]
fn assert_error_status(world: &mut MinElevWorld, status: u16) {
    let error = world.error.as_ref().expect("an error was recorded");
    assert_eq!(error.status_code(), status);
}

// =============================================================================
// Structural validation outcome
// =============================================================================

#[then("the content is valid")]
fn assert_valid(world: &mut MinElevWorld) {
    let result = world.validation.as_ref().expect("content was validated");
    assert!(result.valid, "Unexpected violations: {:?}", result.violations);
}

#[then("the content is invalid")]
fn assert_invalid(world: &mut MinElevWorld) {
    let result = world.validation.as_ref().expect("content was validated");
    assert!(!result.valid, "Expected violations, content was valid");
}

#[then(expr = "a/an {word} violation is reported at {string}")]
fn assert_violation(world: &mut MinElevWorld, kind: String, path: String) {
    let result = world.validation.as_ref().expect("content was validated");
    assert!(
        result.has_violation(&path, parse_violation(&kind)),
        "Expected {kind} at '{path}', got {:?}",
        result.violations
    );
}

#[then(expr = "{int} violation(s) are/is reported")]
fn assert_violation_count(world: &mut MinElevWorld, count: usize) {
    let result = world.validation.as_ref().expect("content was validated");
    assert_eq!(
        result.violations.len(),
        count,
        "Unexpected violations: {:?}",
        result.violations
    );
}
