//! Per-type content generators
//!
//! A generator turns raw caller content into normalized content. It checks
//! every field explicitly, resolves catalog ids and student-scoped references,
//! applies format normalization and attaches the school year. Generators are
//! pure: they read the student snapshot and raw content and build new values.

pub mod fagskolen;
pub mod samtale;
pub mod varsel;
pub mod yff;

use crate::catalog::{Catalog, CatalogEntry, Reason};
use crate::content::{ResolvedCourse, ResolvedEntry};
use crate::error::{DocumentError, Result};
use crate::student::Student;
use crate::types::LocalizedText;

/// Collection name used when a course group cannot be resolved.
pub const COURSE_GROUP: &str = "course group";

/// Every generator needs a student.
pub fn require_student(student: Option<&Student>) -> Result<&Student> {
    student.ok_or_else(|| DocumentError::validation("student", "is required"))
}

/// Resolve a course group id against the student's course groups.
///
/// The subject name becomes the localized text in all three languages.
///
/// # Errors
///
/// `NotFound` if the student has no such group, `Integrity` if the group lacks
/// its name, subject name or school number.
pub fn resolve_course(student: &Student, course_id: &str) -> Result<ResolvedCourse> {
    let gruppe = student
        .find_faggruppe(course_id)
        .ok_or_else(|| DocumentError::not_found(COURSE_GROUP, course_id))?;

    let integrity = |missing: &str| {
        tracing::warn!(course_id = %course_id, missing = %missing, "Course group is incomplete");
        DocumentError::integrity(COURSE_GROUP, course_id, missing)
    };

    // Empty strings from upstream count as missing
    let name = gruppe
        .navn
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| integrity("navn"))?;
    let subject = gruppe
        .fag
        .as_ref()
        .and_then(|fag| fag.navn.as_deref())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| integrity("fag.navn"))?;
    let school_id = gruppe
        .skole
        .as_ref()
        .and_then(|skole| skole.skolenummer.as_deref())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| integrity("skole.skolenummer"))?;

    Ok(ResolvedCourse {
        id: course_id.to_string(),
        name: name.to_string(),
        school_id: school_id.to_string(),
        text: LocalizedText::uniform(subject),
    })
}

pub fn resolve_period(periods: &Catalog<CatalogEntry>, id: &str) -> Result<ResolvedEntry> {
    periods.require(id).map(ResolvedEntry::from)
}

/// Resolve reason ids in the order given.
pub fn resolve_reasons(reasons: &Catalog<Reason>, ids: &[&str]) -> Result<Vec<ResolvedEntry>> {
    ids.iter()
        .map(|id| reasons.require(id).map(ResolvedEntry::from))
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::student::Student;
    use serde_json::json;

    pub const YEAR: &str = "2024/2025";

    pub fn student() -> Student {
        serde_json::from_value(json!({
            "faggrupper": [
                {
                    "systemId": "CID1",
                    "navn": "1STA/MAT1001",
                    "fag": { "navn": "Matematikk 1P" },
                    "skole": { "skolenummer": "70036" }
                },
                {
                    "systemId": "CID2",
                    "navn": "1STA/NOR1211",
                    "skole": { "skolenummer": "70036" }
                }
            ],
            "yffSchools": [
                {
                    "skolenummer": "70036",
                    "utdanningsprogrammer": [
                        {
                            "uri": "http://psi.udir.no/kl06/BA",
                            "kode": "BA",
                            "tittel": {
                                "default": "Bygg- og anleggsteknikk",
                                "nb": "Bygg- og anleggsteknikk",
                                "nn": "Bygg- og anleggsteknikk",
                                "en": "Building and Construction",
                                "sm": "Huksen- ja ráhkadusteknihkka"
                            },
                            "type": {
                                "beskrivelse": {
                                    "default": "Yrkesfaglig utdanningsprogram",
                                    "nb": "Yrkesfaglig utdanningsprogram",
                                    "nn": "Yrkesfagleg utdanningsprogram",
                                    "en": "Vocational education programme",
                                    "sm": "Fidnofágalaš oahppoprográmma"
                                }
                            },
                            "programomrade": []
                        }
                    ]
                }
            ]
        }))
        .unwrap()
    }
}
