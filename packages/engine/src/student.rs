//! Student snapshot
//!
//! The enrollment service delivers a read-only snapshot of a student's group
//! memberships and, when vocational placements are enabled, the schools where
//! the student follows a vocational program. Generators only read it.
//!
//! Fields are optional where upstream data is known to be incomplete; the
//! generators report missing sub-fields of a referenced record as integrity
//! errors rather than failing deserialization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Snapshot of a student as delivered by the enrollment service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student: Option<StudentInfo>,
    #[serde(default)]
    pub basisgrupper: Vec<Basisgruppe>,
    #[serde(default)]
    pub faggrupper: Vec<Faggruppe>,
    #[serde(default)]
    pub probable_faggrupper: Vec<Faggruppe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_yff: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yff_schools: Option<Vec<YffSchool>>,
}

/// Identity fields of the student.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInfo {
    #[serde(default)]
    pub upn: Option<String>,
    #[serde(default)]
    pub feidenavn: Option<String>,
    #[serde(default)]
    pub elevnummer: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub birthdate: Option<String>,
}

/// School reference attached to group memberships.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniSchool {
    #[serde(default)]
    pub skolenummer: Option<String>,
    #[serde(default)]
    pub navn: Option<String>,
    #[serde(default)]
    pub kortkortnavn: Option<String>,
}

/// Subject of a course group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fag {
    #[serde(default)]
    pub system_id: Option<String>,
    #[serde(default)]
    pub navn: Option<String>,
    #[serde(default)]
    pub grepreferanse: Vec<String>,
}

/// Course group membership.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faggruppe {
    #[serde(default)]
    pub system_id: Option<String>,
    #[serde(default)]
    pub navn: Option<String>,
    #[serde(default)]
    pub fag: Option<Fag>,
    #[serde(default)]
    pub skole: Option<MiniSchool>,
}

/// Base class membership.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Basisgruppe {
    #[serde(default)]
    pub system_id: Option<String>,
    #[serde(default)]
    pub navn: Option<String>,
    #[serde(default)]
    pub trinn: Option<String>,
    #[serde(default)]
    pub skole: Option<MiniSchool>,
}

/// A school where the student follows a vocational program.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YffSchool {
    #[serde(default)]
    pub skolenummer: Option<String>,
    #[serde(default)]
    pub navn: Option<String>,
    #[serde(default)]
    pub utdanningsprogrammer: Vec<Utdanningsprogram>,
}

/// Vocational education program, identified by its curriculum URI.
///
/// Only `uri` is interpreted; every other field from the curriculum
/// vocabulary is carried through untouched into generated documents.
/// Programs without a uri can never be matched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Utdanningsprogram {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Utdanningsprogram {
    /// The program as a JSON object, `uri` included.
    pub fn to_value(&self) -> Value {
        let mut object = Map::with_capacity(self.fields.len() + 1);
        if let Some(uri) = &self.uri {
            object.insert("uri".to_string(), Value::String(uri.clone()));
        }
        for (key, value) in &self.fields {
            object.insert(key.clone(), value.clone());
        }
        Value::Object(object)
    }
}

impl Student {
    /// Find a course group by its system id (first match wins).
    pub fn find_faggruppe(&self, system_id: &str) -> Option<&Faggruppe> {
        self.faggrupper
            .iter()
            .find(|gruppe| gruppe.system_id.as_deref() == Some(system_id))
    }

    /// Find a vocational program by uri across the student's YFF schools.
    ///
    /// Returns the first school offering a program with this uri, together
    /// with that program.
    pub fn find_utdanningsprogram(&self, uri: &str) -> Option<(&YffSchool, &Utdanningsprogram)> {
        self.yff_schools.as_deref()?.iter().find_map(|school| {
            school
                .utdanningsprogrammer
                .iter()
                .find(|program| program.uri.as_deref() == Some(uri))
                .map(|program| (school, program))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot() -> Student {
        serde_json::from_value(json!({
            "student": { "name": "Ola Nordmann", "firstName": "Ola", "elevnummer": "123" },
            "faggrupper": [
                {
                    "systemId": "CID1",
                    "navn": "1STA/MAT1001",
                    "fag": { "navn": "Matematikk 1P" },
                    "skole": { "skolenummer": "70036" }
                },
                { "systemId": "CID2", "navn": "1STA/NOR1211" }
            ],
            "hasYff": true,
            "yffSchools": [
                { "skolenummer": "1", "utdanningsprogrammer": [] },
                {
                    "skolenummer": "2",
                    "utdanningsprogrammer": [
                        { "uri": "http://psi.udir.no/kl06/BA", "kode": "BA", "tittel": { "nb": "Bygg" } }
                    ]
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_deserializes_camel_case() {
        let student = snapshot();
        assert_eq!(
            student.student.as_ref().unwrap().first_name.as_deref(),
            Some("Ola")
        );
        assert_eq!(student.faggrupper.len(), 2);
        assert_eq!(student.has_yff, Some(true));
        assert!(student.basisgrupper.is_empty());
    }

    #[test]
    fn test_find_faggruppe() {
        let student = snapshot();
        let gruppe = student.find_faggruppe("CID1").unwrap();
        assert_eq!(gruppe.navn.as_deref(), Some("1STA/MAT1001"));
        assert!(student.find_faggruppe("CID9").is_none());
    }

    #[test]
    fn test_find_utdanningsprogram_across_schools() {
        let student = snapshot();
        let (school, program) = student
            .find_utdanningsprogram("http://psi.udir.no/kl06/BA")
            .unwrap();
        assert_eq!(school.skolenummer.as_deref(), Some("2"));
        assert_eq!(program.fields["kode"], json!("BA"));
        assert!(student.find_utdanningsprogram("http://psi.udir.no/kl06/EL").is_none());
        assert!(Student::default().find_utdanningsprogram("x").is_none());
    }

    #[test]
    fn test_program_without_uri_loads_but_never_matches() {
        let student: Student = serde_json::from_value(json!({
            "faggrupper": [{ "systemId": "CID1", "navn": "1STA/MAT1001" }],
            "yffSchools": [{
                "skolenummer": "1",
                "utdanningsprogrammer": [{ "kode": "BA", "tittel": { "nb": "Bygg" } }]
            }]
        }))
        .unwrap();
        let program = &student.yff_schools.as_ref().unwrap()[0].utdanningsprogrammer[0];
        assert_eq!(program.uri, None);
        assert_eq!(program.to_value(), json!({ "kode": "BA", "tittel": { "nb": "Bygg" } }));
        assert!(student.find_utdanningsprogram("").is_none());
        assert!(student.find_faggruppe("CID1").is_some());
    }

    #[test]
    fn test_program_keeps_all_fields() {
        let student = snapshot();
        let (_, program) = student
            .find_utdanningsprogram("http://psi.udir.no/kl06/BA")
            .unwrap();
        assert_eq!(
            program.to_value(),
            json!({ "uri": "http://psi.udir.no/kl06/BA", "kode": "BA", "tittel": { "nb": "Bygg" } })
        );
    }
}
