//! Normalized document content
//!
//! One struct per document type, serialized with the camelCase keys stored
//! in issued documents. Each struct also declares its content template as a
//! [`Schema`]; the template and the struct must describe the same shape.

use crate::catalog::{CatalogEntry, CriterionTitle, Reason};
use crate::error::Result;
use crate::schema::Schema;
use crate::types::LocalizedText;
use serde::Serialize;
use serde_json::{Number, Value};

/// A catalog entry with its localized text spliced in next to the id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedEntry {
    pub id: String,
    #[serde(flatten)]
    pub text: LocalizedText,
}

impl ResolvedEntry {
    fn schema() -> Schema {
        Schema::object([
            ("id", Schema::String),
            ("nb", Schema::String),
            ("nn", Schema::String),
            ("en", Schema::String),
        ])
    }
}

impl From<&CatalogEntry> for ResolvedEntry {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id.clone(),
            text: entry.value.clone(),
        }
    }
}

impl From<&Reason> for ResolvedEntry {
    fn from(reason: &Reason) -> Self {
        Self {
            id: reason.id.clone(),
            text: reason.value.clone(),
        }
    }
}

/// A course group resolved from the student snapshot. The localized text is
/// the subject name, which has no translations upstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCourse {
    pub id: String,
    pub name: String,
    pub school_id: String,
    #[serde(flatten)]
    pub text: LocalizedText,
}

impl ResolvedCourse {
    fn schema() -> Schema {
        Schema::object([
            ("id", Schema::String),
            ("name", Schema::String),
            ("schoolId", Schema::String),
            ("nb", Schema::String),
            ("nn", Schema::String),
            ("en", Schema::String),
        ])
    }
}

/// `varsel-fag`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectWarning {
    pub year: String,
    pub period: ResolvedEntry,
    pub classes: Vec<ResolvedCourse>,
    pub reasons: Vec<ResolvedEntry>,
}

impl SubjectWarning {
    pub fn schema() -> Schema {
        Schema::object([
            ("year", Schema::String),
            ("period", ResolvedEntry::schema()),
            ("classes", Schema::array(ResolvedCourse::schema())),
            ("reasons", Schema::array(ResolvedEntry::schema())),
        ])
    }
}

/// `varsel-orden` and `varsel-atferd`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConductWarning {
    pub year: String,
    pub period: ResolvedEntry,
    pub reasons: Vec<ResolvedEntry>,
}

impl ConductWarning {
    pub fn schema() -> Schema {
        Schema::object([
            ("year", Schema::String),
            ("period", ResolvedEntry::schema()),
            ("reasons", Schema::array(ResolvedEntry::schema())),
        ])
    }
}

/// `samtale`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversation {
    pub year: String,
}

impl Conversation {
    pub fn schema() -> Schema {
        Schema::object([("year", Schema::String)])
    }
}

/// `notat`, and `yff-laereplan` in its note variant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    pub year: String,
    pub note: String,
}

impl Note {
    pub fn schema() -> Schema {
        Schema::object([("year", Schema::String), ("note", Schema::String)])
    }
}

/// `fagskolen-forhandsvarsel`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceNotice {
    pub year: String,
    pub course: ResolvedCourse,
    pub assignment: String,
    pub contact_within_days: Number,
}

impl AdvanceNotice {
    pub fn schema() -> Schema {
        Schema::object([
            ("year", Schema::String),
            ("course", ResolvedCourse::schema()),
            ("assignment", Schema::String),
            ("contactWithinDays", Schema::Number),
        ])
    }
}

/// Contact person at the placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kontaktperson {
    pub navn: String,
    pub telefon: String,
    pub epost: String,
    pub avdeling: String,
}

/// Next of kin, notified about the placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parorende {
    pub navn: String,
    pub telefon: String,
}

/// The employer hosting the placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bedriftsdata {
    pub organisasjons_nummer: String,
    pub navn: String,
    pub adresse: String,
    pub postnummer: String,
    pub poststed: String,
    pub avdeling: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Placement details of a `yff-bekreftelse`. Dates are in `dd.mm.yyyy`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bekreftelse {
    pub oppmotested: String,
    pub kopi_pr_epost: Vec<String>,
    pub fra_dato: String,
    pub til_dato: String,
    pub days_per_week: String,
    pub start_tid: String,
    pub slutt_tid: String,
    pub kontaktperson_data: Vec<Kontaktperson>,
    pub parorende_data: Vec<Parorende>,
    pub bedrifts_navn: String,
    pub bedrifts_data: Bedriftsdata,
}

/// `yff-bekreftelse`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementConfirmation {
    pub bekreftelse: Bekreftelse,
    pub utdanningsprogram_id: String,
    /// The matched program, carried through as delivered upstream.
    pub utdanningsprogram: Value,
    pub level: String,
    pub year: String,
}

/// Title or description in every curriculum language.
fn curriculum_text() -> Schema {
    Schema::object([
        ("default", Schema::String),
        ("nb", Schema::String),
        ("nn", Schema::String),
        ("en", Schema::String),
        ("sm", Schema::String),
    ])
}

impl PlacementConfirmation {
    pub fn schema() -> Schema {
        let kontaktperson = Schema::object([
            ("navn", Schema::String),
            ("telefon", Schema::String),
            ("epost", Schema::String),
            ("avdeling", Schema::String),
        ]);
        let parorende = Schema::object([("navn", Schema::String), ("telefon", Schema::String)]);
        let bedriftsdata = Schema::object([
            ("organisasjonsNummer", Schema::String),
            ("navn", Schema::String),
            ("adresse", Schema::String),
            ("postnummer", Schema::String),
            ("poststed", Schema::String),
            ("avdeling", Schema::String),
            ("type", Schema::String),
        ]);
        let bekreftelse = Schema::object([
            ("oppmotested", Schema::String),
            ("kopiPrEpost", Schema::array(Schema::Optional)),
            ("fraDato", Schema::String),
            ("tilDato", Schema::String),
            ("daysPerWeek", Schema::String),
            ("startTid", Schema::String),
            ("sluttTid", Schema::String),
            ("kontaktpersonData", Schema::array(kontaktperson)),
            ("parorendeData", Schema::array(parorende)),
            ("bedriftsNavn", Schema::String),
            ("bedriftsData", bedriftsdata),
        ]);
        let utdanningsprogram = Schema::object([
            ("kode", Schema::String),
            ("uri", Schema::Optional),
            ("url-data", Schema::Optional),
            ("tittel", curriculum_text()),
            (
                "type",
                Schema::object([("url-data", Schema::Optional), ("beskrivelse", curriculum_text())]),
            ),
            ("programomrade", Schema::array(Schema::Optional)),
        ]);
        Schema::object([
            ("bekreftelse", bekreftelse),
            ("utdanningsprogramId", Schema::String),
            ("utdanningsprogram", utdanningsprogram),
            ("level", Schema::String),
            ("year", Schema::String),
        ])
    }
}

/// Where the student is placed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Utplassering {
    pub id: String,
    pub navn: String,
}

impl Utplassering {
    fn schema() -> Schema {
        Schema::object([("id", Schema::String), ("navn", Schema::String)])
    }
}

/// A competence goal with the work tasks that cover it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Laereplanmaal {
    pub kode: String,
    pub tittel: String,
    pub arbeidsoppgaver: String,
}

/// `yff-laereplan` in its plan variant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalCurriculum {
    pub year: String,
    pub utplassering: Utplassering,
    pub maal: Vec<Laereplanmaal>,
}

impl LocalCurriculum {
    pub fn schema() -> Schema {
        Schema::object([
            ("year", Schema::String),
            ("utplassering", Utplassering::schema()),
            (
                "maal",
                Schema::array(Schema::object([
                    ("kode", Schema::String),
                    ("tittel", Schema::String),
                    ("arbeidsoppgaver", Schema::String),
                ])),
            ),
        ])
    }
}

/// How the student met a competence goal during the placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kompetansemal {
    pub kode: String,
    pub tittel: String,
    pub vurdering: String,
}

/// A scored evaluation criterion, title spliced in from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluering {
    pub id: String,
    #[serde(flatten)]
    pub title: CriterionTitle,
    pub score: String,
}

/// Absence during the placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fravar {
    pub dager: String,
    pub timer: String,
    pub varslet: bool,
}

/// `yff-tilbakemelding`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementFeedback {
    pub year: String,
    pub utplassering: Utplassering,
    pub kompetansemal: Vec<Kompetansemal>,
    pub evaluering: Vec<Evaluering>,
    pub fravar: Fravar,
}

impl PlacementFeedback {
    pub fn schema() -> Schema {
        Schema::object([
            ("year", Schema::String),
            ("utplassering", Utplassering::schema()),
            (
                "kompetansemal",
                Schema::array(Schema::object([
                    ("kode", Schema::String),
                    ("tittel", Schema::String),
                    ("vurdering", Schema::String),
                ])),
            ),
            (
                "evaluering",
                Schema::array(Schema::object([
                    ("id", Schema::String),
                    ("nb", Schema::String),
                    ("nn", Schema::String),
                    ("score", Schema::String),
                ])),
            ),
            (
                "fravar",
                Schema::object([
                    ("dager", Schema::String),
                    ("timer", Schema::String),
                    ("varslet", Schema::Boolean),
                ]),
            ),
        ])
    }
}

/// Generated content of any document type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DocumentContent {
    SubjectWarning(SubjectWarning),
    ConductWarning(ConductWarning),
    Conversation(Conversation),
    Note(Note),
    AdvanceNotice(AdvanceNotice),
    PlacementConfirmation(PlacementConfirmation),
    LocalCurriculum(LocalCurriculum),
    PlacementFeedback(PlacementFeedback),
}

impl DocumentContent {
    /// The school year the document was issued in.
    pub fn year(&self) -> &str {
        match self {
            DocumentContent::SubjectWarning(c) => &c.year,
            DocumentContent::ConductWarning(c) => &c.year,
            DocumentContent::Conversation(c) => &c.year,
            DocumentContent::Note(c) => &c.year,
            DocumentContent::AdvanceNotice(c) => &c.year,
            DocumentContent::PlacementConfirmation(c) => &c.year,
            DocumentContent::LocalCurriculum(c) => &c.year,
            DocumentContent::PlacementFeedback(c) => &c.year,
        }
    }

    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
