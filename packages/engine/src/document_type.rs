//! Document types
//!
//! Every document type the engine can issue is one [`DocumentType`] variant.
//! A variant knows its metadata (id, title, category, access condition,
//! encryption), its content template and its generator.

use crate::catalog::catalogs;
use crate::config::LaereplanVariant;
use crate::content::{
    AdvanceNotice, ConductWarning, Conversation, DocumentContent, LocalCurriculum, Note,
    PlacementConfirmation, PlacementFeedback, SubjectWarning,
};
use crate::error::Result;
use crate::generators::{fagskolen, samtale, varsel, yff};
use crate::schema::Schema;
use crate::student::Student;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Grouping shown in document lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Varsel,
    Samtale,
    Notat,
    Fagskolen,
    Yff,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Varsel => "varsel",
            Category::Samtale => "samtale",
            Category::Notat => "notat",
            Category::Fagskolen => "fagskolen",
            Category::Yff => "yff",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document type with its business rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentType {
    VarselFag,
    VarselOrden,
    VarselAtferd,
    Samtale,
    Notat,
    FagskolenForhandsvarsel,
    YffBekreftelse,
    YffLaereplan(LaereplanVariant),
    YffTilbakemelding,
}

impl DocumentType {
    /// Stable id used by callers and stored with issued documents.
    pub fn id(&self) -> &'static str {
        match self {
            DocumentType::VarselFag => "varsel-fag",
            DocumentType::VarselOrden => "varsel-orden",
            DocumentType::VarselAtferd => "varsel-atferd",
            DocumentType::Samtale => "samtale",
            DocumentType::Notat => "notat",
            DocumentType::FagskolenForhandsvarsel => "fagskolen-forhandsvarsel",
            DocumentType::YffBekreftelse => "yff-bekreftelse",
            DocumentType::YffLaereplan(_) => "yff-laereplan",
            DocumentType::YffTilbakemelding => "yff-tilbakemelding",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DocumentType::VarselFag => "Varsel fag",
            DocumentType::VarselOrden => "Varsel orden",
            DocumentType::VarselAtferd => "Varsel atferd",
            DocumentType::Samtale => "Elevsamtale",
            DocumentType::Notat => "Notat",
            DocumentType::FagskolenForhandsvarsel => "Fagskolen - Forhåndsvarsel",
            DocumentType::YffBekreftelse => "YFF - Bekreftelse på utplassering",
            DocumentType::YffLaereplan(_) => "YFF - Lokal læreplan",
            DocumentType::YffTilbakemelding => "YFF - Tilbakemelding på utplassering",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            DocumentType::VarselFag | DocumentType::VarselOrden | DocumentType::VarselAtferd => {
                Category::Varsel
            }
            DocumentType::Samtale => Category::Samtale,
            DocumentType::Notat => Category::Notat,
            DocumentType::FagskolenForhandsvarsel => Category::Fagskolen,
            DocumentType::YffBekreftelse
            | DocumentType::YffLaereplan(_)
            | DocumentType::YffTilbakemelding => Category::Yff,
        }
    }

    /// Opaque tag evaluated by the authorization layer.
    pub fn access_condition(&self) -> &'static str {
        match self {
            DocumentType::VarselFag | DocumentType::Notat => "hasUndervisningsgruppe",
            DocumentType::VarselOrden | DocumentType::VarselAtferd => "isContactTeacher",
            DocumentType::Samtale => "isContactTeacher",
            DocumentType::FagskolenForhandsvarsel => "fagskolenUndervisningsgruppe",
            DocumentType::YffBekreftelse
            | DocumentType::YffLaereplan(_)
            | DocumentType::YffTilbakemelding => "yffEnabled",
        }
    }

    /// Whether stored content must be encrypted at rest.
    pub fn is_encrypted(&self) -> bool {
        matches!(self, DocumentType::Notat)
    }

    /// The shape generated content must have.
    pub fn template(&self) -> Schema {
        match self {
            DocumentType::VarselFag => SubjectWarning::schema(),
            DocumentType::VarselOrden | DocumentType::VarselAtferd => ConductWarning::schema(),
            DocumentType::Samtale => Conversation::schema(),
            DocumentType::Notat | DocumentType::YffLaereplan(LaereplanVariant::Note) => {
                Note::schema()
            }
            DocumentType::FagskolenForhandsvarsel => AdvanceNotice::schema(),
            DocumentType::YffBekreftelse => PlacementConfirmation::schema(),
            DocumentType::YffLaereplan(LaereplanVariant::Plan) => LocalCurriculum::schema(),
            DocumentType::YffTilbakemelding => PlacementFeedback::schema(),
        }
    }

    /// Validate and normalize raw content for `student`, stamping `year`.
    pub fn generate(
        &self,
        student: Option<&Student>,
        raw: &Value,
        year: &str,
    ) -> Result<DocumentContent> {
        let content = match self {
            DocumentType::VarselFag => {
                DocumentContent::SubjectWarning(varsel::subject_warning(student, raw, year)?)
            }
            DocumentType::VarselOrden => DocumentContent::ConductWarning(varsel::conduct_warning(
                student,
                raw,
                year,
                &catalogs().order_reasons,
            )?),
            DocumentType::VarselAtferd => DocumentContent::ConductWarning(
                varsel::conduct_warning(student, raw, year, &catalogs().behaviour_reasons)?,
            ),
            DocumentType::Samtale => {
                DocumentContent::Conversation(samtale::conversation(student, raw, year)?)
            }
            DocumentType::Notat => DocumentContent::Note(samtale::note(student, raw, year)?),
            DocumentType::FagskolenForhandsvarsel => {
                DocumentContent::AdvanceNotice(fagskolen::advance_notice(student, raw, year)?)
            }
            DocumentType::YffBekreftelse => {
                DocumentContent::PlacementConfirmation(yff::confirmation(student, raw, year)?)
            }
            DocumentType::YffLaereplan(LaereplanVariant::Plan) => {
                DocumentContent::LocalCurriculum(yff::curriculum_plan(student, raw, year)?)
            }
            DocumentType::YffLaereplan(LaereplanVariant::Note) => {
                DocumentContent::Note(yff::curriculum_note(student, raw, year)?)
            }
            DocumentType::YffTilbakemelding => {
                DocumentContent::PlacementFeedback(yff::feedback(student, raw, year)?)
            }
        };
        Ok(content)
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
