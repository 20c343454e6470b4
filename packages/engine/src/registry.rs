//! Document type registry
//!
//! Holds the document types enabled by [`EngineConfig`], in registration
//! order, and is the entry point for generating and validating content.
//!
//! # Example
//!
//! ```
//! use minelev_engine::{DocumentTypeRegistry, EngineConfig};
//!
//! let registry = DocumentTypeRegistry::new(&EngineConfig::default());
//! let definition = registry.get_definition("notat").unwrap();
//! assert!(definition.is_encrypted());
//! ```

use crate::config::EngineConfig;
use crate::content::DocumentContent;
use crate::document_type::{Category, DocumentType};
use crate::error::{DocumentError, Result};
use crate::schema::{validate, Schema, ValidationResult};
use crate::school_year::{current_school_year, Clock, SystemClock};
use crate::student::Student;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A registered document type with its template built once.
#[derive(Debug, Clone)]
pub struct DocumentTypeDefinition {
    document_type: DocumentType,
    template: Schema,
}

impl DocumentTypeDefinition {
    pub fn new(document_type: DocumentType) -> Self {
        Self {
            document_type,
            template: document_type.template(),
        }
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn id(&self) -> &'static str {
        self.document_type.id()
    }

    pub fn title(&self) -> &'static str {
        self.document_type.title()
    }

    pub fn category(&self) -> Category {
        self.document_type.category()
    }

    pub fn access_condition(&self) -> &'static str {
        self.document_type.access_condition()
    }

    pub fn is_encrypted(&self) -> bool {
        self.document_type.is_encrypted()
    }

    pub fn template(&self) -> &Schema {
        &self.template
    }

    /// Generate content stamped with `year`.
    pub fn generate(
        &self,
        student: Option<&Student>,
        raw: &Value,
        year: &str,
    ) -> Result<DocumentContent> {
        self.document_type.generate(student, raw, year)
    }

    /// Metadata as exposed to clients.
    pub fn info(&self) -> DefinitionInfo {
        DefinitionInfo {
            id: self.id(),
            title: self.title(),
            category: self.category(),
            access_condition: self.access_condition(),
            is_encrypted: self.is_encrypted(),
            template: self.template.sample(),
        }
    }
}

/// Serializable view of a definition.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub access_condition: &'static str,
    pub is_encrypted: bool,
    pub template: Value,
}

/// Ordered collection of enabled document types.
pub struct DocumentTypeRegistry {
    definitions: Vec<DocumentTypeDefinition>,
    index: HashMap<&'static str, usize>,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for DocumentTypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentTypeRegistry")
            .field("definitions", &self.ids())
            .finish_non_exhaustive()
    }
}

impl Default for DocumentTypeRegistry {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl DocumentTypeRegistry {
    /// Registry for `config` using the system clock.
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Registry for `config` with the school year taken from `clock`.
    pub fn with_clock(config: &EngineConfig, clock: Arc<dyn Clock>) -> Self {
        let mut types = vec![
            DocumentType::VarselFag,
            DocumentType::VarselOrden,
            DocumentType::VarselAtferd,
            DocumentType::Samtale,
            DocumentType::Notat,
        ];
        if config.fagskolen_enabled {
            types.push(DocumentType::FagskolenForhandsvarsel);
        }
        if config.yff_enabled {
            types.extend([
                DocumentType::YffBekreftelse,
                DocumentType::YffLaereplan(config.laereplan_variant),
                DocumentType::YffTilbakemelding,
            ]);
        }

        let mut definitions = Vec::with_capacity(types.len());
        let mut index = HashMap::with_capacity(types.len());
        for document_type in types {
            let previous = index.insert(document_type.id(), definitions.len());
            debug_assert!(previous.is_none(), "duplicate document type {document_type}");
            definitions.push(DocumentTypeDefinition::new(document_type));
        }

        tracing::debug!(
            types = definitions.len(),
            yff = config.yff_enabled,
            fagskolen = config.fagskolen_enabled,
            laereplan = ?config.laereplan_variant,
            "Document type registry built"
        );

        Self {
            definitions,
            index,
            clock,
        }
    }

    /// Definitions in registration order.
    pub fn definitions(&self) -> &[DocumentTypeDefinition] {
        &self.definitions
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.definitions.iter().map(|d| d.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Look up a definition by id.
    ///
    /// # Errors
    ///
    /// [`DocumentError::UnknownDocumentType`] if no such type is registered.
    pub fn get_definition(&self, id: &str) -> Result<&DocumentTypeDefinition> {
        self.index
            .get(id)
            .map(|&position| &self.definitions[position])
            .ok_or_else(|| DocumentError::UnknownDocumentType(id.to_string()))
    }

    /// The current school year according to the registry's clock.
    pub fn school_year(&self) -> String {
        current_school_year(self.clock.as_ref())
    }

    /// Generate normalized content for a document type.
    ///
    /// Raw content and student data are never logged.
    pub fn generate(
        &self,
        id: &str,
        student: Option<&Student>,
        raw: &Value,
    ) -> Result<DocumentContent> {
        let definition = self.get_definition(id)?;
        let year = self.school_year();
        tracing::debug!(document_type = %id, year = %year, "Generating document content");

        match definition.generate(student, raw, &year) {
            Ok(content) => {
                tracing::debug!(document_type = %id, "Generated document content");
                Ok(content)
            }
            Err(err) => {
                tracing::warn!(
                    document_type = %id,
                    kind = ?err.kind(),
                    error = %err,
                    "Document generation failed"
                );
                Err(err)
            }
        }
    }

    /// Check content against a document type's template.
    pub fn validate(&self, id: &str, content: &Value) -> Result<ValidationResult> {
        let definition = self.get_definition(id)?;
        let result = validate(content, definition.template());
        tracing::debug!(
            document_type = %id,
            valid = result.valid,
            violations = result.violations.len(),
            "Validated content"
        );
        Ok(result)
    }
}
