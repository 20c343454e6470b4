//! Given step definitions
//!
//! Steps that set up the initial state for scenarios.

use chrono::NaiveDate;
use cucumber::{gherkin::Step, given};
use minelev_engine::LaereplanVariant;
use serde_json::Value;

use crate::helpers::json_path::{convert_gherkin_value, remove_path, set_path};
use crate::world::MinElevWorld;

// =============================================================================
// Background steps
// =============================================================================

#[given(expr = "the reference date is {string}")]
fn set_reference_date(world: &mut MinElevWorld, date: String) {
    world.reference_date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .unwrap_or_else(|e| panic!("Invalid reference date '{date}': {e}"));
}

#[given(expr = "the student {string}")]
fn set_student(world: &mut MinElevWorld, name: String) {
    let student = world
        .students
        .get(&name)
        .unwrap_or_else(|| panic!("No student fixture named '{name}'"))
        .clone();
    world.student = Some(student);
}

#[given("no student")]
fn clear_student(world: &mut MinElevWorld) {
    world.student = None;
}

// =============================================================================
// Configuration steps
// =============================================================================

#[given("vocational placements are disabled")]
fn disable_yff(world: &mut MinElevWorld) {
    world.config = world.config.clone().with_yff(false);
}

#[given("the vocational college is disabled")]
fn disable_fagskolen(world: &mut MinElevWorld) {
    world.config = world.config.clone().with_fagskolen(false);
}

#[given(expr = "the local curriculum uses the {word} variant")]
fn set_laereplan_variant(world: &mut MinElevWorld, variant: String) {
    let variant = match variant.as_str() {
        "note" => LaereplanVariant::Note,
        "plan" => LaereplanVariant::Plan,
        other => panic!("Unknown local curriculum variant '{other}'"),
    };
    world.config = world.config.clone().with_laereplan_variant(variant);
}

// =============================================================================
// Raw content steps
// =============================================================================

#[given("the raw content:")]
fn set_raw_content(world: &mut MinElevWorld, step: &Step) {
    let docstring = step
        .docstring
        .as_ref()
        .expect("Step requires a JSON docstring");
    world.raw_content = serde_json::from_str(docstring)
        .unwrap_or_else(|e| panic!("Invalid JSON in docstring: {e}"));
}

#[given("the raw content fields:")]
fn set_raw_content_fields(world: &mut MinElevWorld, step: &Step) {
    if let Some(table) = &step.table {
        for row in &table.rows {
            if row.len() >= 2 {
                set_path(
                    &mut world.raw_content,
                    row[0].trim(),
                    convert_gherkin_value(&row[1]),
                );
            }
        }
    }
}

#[given(expr = "the raw content field {string} is {string}")]
fn set_raw_content_field(world: &mut MinElevWorld, path: String, value: String) {
    set_path(&mut world.raw_content, &path, convert_gherkin_value(&value));
}

#[given(expr = "the raw content field {string} is removed")]
fn remove_raw_content_field(world: &mut MinElevWorld, path: String) {
    remove_path(&mut world.raw_content, &path);
}

#[given(expr = "the raw content field {string} is empty")]
fn empty_raw_content_field(world: &mut MinElevWorld, path: String) {
    set_path(&mut world.raw_content, &path, Value::String(String::new()));
}
