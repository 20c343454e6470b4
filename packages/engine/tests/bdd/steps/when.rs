//! When step definitions
//!
//! Steps that execute actions (generation and validation).

use cucumber::{gherkin::Step, when};
use minelev_engine::validate;

use crate::world::MinElevWorld;

#[when(expr = "I generate a {string} document")]
fn generate_document(world: &mut MinElevWorld, document_type: String) {
    world.generate(&document_type);
}

#[when(expr = "I validate the generated content against the {string} template")]
fn validate_generated(world: &mut MinElevWorld, document_type: String) {
    let content = world
        .content
        .clone()
        .unwrap_or_else(|| panic!("No generated content, error: {:?}", world.error_message()));
    let result = world
        .registry()
        .validate(&document_type, &content)
        .unwrap_or_else(|e| panic!("Validation failed to run: {e}"));
    world.validation = Some(result);
}

#[when(expr = "I validate the following content against the {string} template:")]
fn validate_content(world: &mut MinElevWorld, document_type: String, step: &Step) {
    let docstring = step
        .docstring
        .as_ref()
        .expect("Step requires a JSON docstring");
    let content: serde_json::Value = serde_json::from_str(docstring)
        .unwrap_or_else(|e| panic!("Invalid JSON in docstring: {e}"));
    let registry = world.registry();
    let definition = registry
        .get_definition(&document_type)
        .unwrap_or_else(|e| panic!("{e}"));
    world.validation = Some(validate(&content, definition.template()));
}
