//! MinElev document engine
//!
//! Validates and generates the content of documents issued about students:
//! warnings, conversation records, notes and vocational placement forms.
//! This library provides:
//! - A structural validator comparing content against a document type's template
//! - Static lookup catalogs (periods, reasons, statuses, evaluation criteria)
//! - Per-type generators enforcing business rules and normalizing formats
//! - A registry of the enabled document types
//!
//! # Example
//!
//! ```
//! use minelev_engine::{DocumentTypeRegistry, EngineConfig, Student};
//! use serde_json::json;
//!
//! let student: Student = serde_json::from_value(json!({
//!     "faggrupper": [{
//!         "systemId": "CID1",
//!         "navn": "1STA/MAT1001",
//!         "fag": { "navn": "Matematikk 1P" },
//!         "skole": { "skolenummer": "70036" }
//!     }]
//! }))?;
//!
//! let registry = DocumentTypeRegistry::new(&EngineConfig::default());
//! let content = registry.generate(
//!     "varsel-fag",
//!     Some(&student),
//!     &json!({ "periodId": "02", "courseIds": ["CID1"], "reasonIds": ["01"] }),
//! )?;
//! let value = content.to_json()?;
//! assert_eq!(value["classes"][0]["nb"], "Matematikk 1P");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod catalog;
pub mod config;
pub mod content;
pub mod document_type;
pub mod error;
pub mod fields;
pub mod format;
pub mod generators;
pub mod registry;
pub mod schema;
pub mod school_year;
pub mod student;
pub mod types;

// Re-export commonly used items
pub use catalog::{catalogs, Catalog, CatalogEntry, Catalogs, Reason};
pub use config::{EngineConfig, LaereplanVariant};
pub use content::DocumentContent;
pub use document_type::{Category, DocumentType};
pub use error::{DocumentError, ErrorKind, Result};
pub use registry::{DefinitionInfo, DocumentTypeDefinition, DocumentTypeRegistry};
pub use schema::{validate, Schema, ValidationResult, ValidationViolation, ViolationKind};
pub use school_year::{school_year, Clock, FixedClock, SystemClock};
pub use student::Student;
pub use types::LocalizedText;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
