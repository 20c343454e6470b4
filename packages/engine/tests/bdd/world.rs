//! World struct for Cucumber BDD tests
//!
//! Contains the test state that persists across steps in a scenario.

use chrono::NaiveDate;
use cucumber::World;
use minelev_engine::{
    DocumentError, DocumentTypeRegistry, EngineConfig, FixedClock, Student, ValidationResult,
};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::helpers::student_loader::load_all_students;

/// Test world that holds state across steps in a Cucumber scenario.
#[derive(World)]
#[world(init = Self::new)]
pub struct MinElevWorld {
    /// Student snapshots from `features/students/`, by file stem
    pub students: HashMap<String, Student>,
    /// Registry configuration for the current scenario
    pub config: EngineConfig,
    /// Reference date for the school year
    pub reference_date: NaiveDate,
    /// Student the document is about
    pub student: Option<Student>,
    /// Raw content handed to the generator
    pub raw_content: Value,
    /// Last generated content (if successful)
    pub content: Option<Value>,
    /// Last error (if generation failed)
    pub error: Option<DocumentError>,
    /// Last structural validation result
    pub validation: Option<ValidationResult>,
}

impl fmt::Debug for MinElevWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinElevWorld")
            .field("config", &self.config)
            .field("reference_date", &self.reference_date)
            .field("raw_content", &self.raw_content)
            .field("content", &self.content)
            .field("error", &self.error.as_ref().map(|e| e.to_string()))
            .field("validation", &self.validation)
            .field(
                "students",
                &format!("<{} student fixtures loaded>", self.students.len()),
            )
            .finish()
    }
}

impl Default for MinElevWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl MinElevWorld {
    /// Create a new world with all student fixtures loaded.
    pub fn new() -> Self {
        let students = match load_all_students() {
            Ok(students) => students,
            Err(e) => panic!("Failed to load student fixtures: {}", e),
        };

        Self {
            students,
            config: EngineConfig::default(),
            reference_date: NaiveDate::from_ymd_opt(2024, 9, 1).expect("valid date"),
            student: None,
            raw_content: Value::Object(serde_json::Map::new()),
            content: None,
            error: None,
            validation: None,
        }
    }

    /// Registry for the scenario's configuration and reference date.
    pub fn registry(&self) -> DocumentTypeRegistry {
        DocumentTypeRegistry::with_clock(&self.config, Arc::new(FixedClock(self.reference_date)))
    }

    /// Generate a document and store the content or error
    pub fn generate(&mut self, document_type: &str) {
        let registry = self.registry();
        let result = registry
            .generate(document_type, self.student.as_ref(), &self.raw_content)
            .and_then(|content| content.to_json());
        match result {
            Ok(content) => {
                self.content = Some(content);
                self.error = None;
            }
            Err(e) => {
                self.content = None;
                self.error = Some(e);
            }
        }
    }

    /// Check if the last generation was successful
    pub fn is_success(&self) -> bool {
        self.content.is_some()
    }

    /// Get error message if generation failed
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::MinElevWorld;

    #[test]
    fn test_world_initialization() {
        let world = MinElevWorld::new();
        assert!(
            !world.students.is_empty(),
            "Expected at least one student fixture to be loaded"
        );
    }
}
