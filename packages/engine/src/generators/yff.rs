//! Vocational placements: `yff-bekreftelse`, `yff-laereplan`,
//! `yff-tilbakemelding`

use super::require_student;
use crate::catalog::catalogs;
use crate::content::{
    Bedriftsdata, Bekreftelse, Evaluering, Fravar, Kompetansemal, Kontaktperson, Laereplanmaal,
    LocalCurriculum, Note, Parorende, PlacementConfirmation, PlacementFeedback, Utplassering,
};
use crate::error::{DocumentError, Result};
use crate::fields::Fields;
use crate::format::{
    is_valid_email, is_valid_mobile, is_valid_organization_number, parse_iso_date, to_local_date,
};
use crate::student::Student;
use chrono::NaiveDate;
use serde_json::Value;

/// Collection name used when a program uri cannot be resolved.
pub const UTDANNINGSPROGRAM: &str = "utdanningsprogram";

/// Placement confirmation.
///
/// Dates arrive as `yyyy-mm-dd` and are stored as `dd.mm.yyyy`. Phone numbers
/// may arrive as numbers and are stored as strings. The program is looked up
/// by uri across the student's vocational schools and copied into the result.
pub fn confirmation(
    student: Option<&Student>,
    raw: &Value,
    year: &str,
) -> Result<PlacementConfirmation> {
    let student = require_student(student)?;
    let fields = Fields::root(raw)?;
    let bekreftelse = read_bekreftelse(&fields.object("bekreftelse")?)?;

    let program_id = fields.required_string("utdanningsprogramId")?;
    let (_, program) = student
        .find_utdanningsprogram(program_id)
        .ok_or_else(|| DocumentError::not_found(UTDANNINGSPROGRAM, program_id))?;
    let level = fields.required_string("level")?;

    Ok(PlacementConfirmation {
        bekreftelse,
        utdanningsprogram_id: program_id.to_string(),
        utdanningsprogram: program.to_value(),
        level: level.to_string(),
        year: year.to_string(),
    })
}

fn read_bekreftelse(fields: &Fields<'_>) -> Result<Bekreftelse> {
    let oppmotested = fields.required_string("oppmotested")?;

    let kopi_pr_epost = fields
        .array("kopiPrEpost")?
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(email) if is_valid_email(email) => Ok(email.clone()),
            _ => Err(DocumentError::validation(
                format!("{}.{index}", fields.path_of("kopiPrEpost")),
                "must be a valid e-mail address",
            )),
        })
        .collect::<Result<Vec<_>>>()?;

    let fra = read_date(fields, "fraDato")?;
    let til = read_date(fields, "tilDato")?;
    if fra > til {
        return Err(DocumentError::validation(
            fields.path_of("fraDato"),
            format!("must not be after {}", fields.path_of("tilDato")),
        ));
    }

    let days_per_week = fields.required_numeric_string("daysPerWeek")?;
    let start_tid = fields.required_string("startTid")?;
    let slutt_tid = fields.required_string("sluttTid")?;

    let kontaktpersoner = fields.non_empty_array("kontaktpersonData")?;
    let kontaktperson_data = fields
        .objects("kontaktpersonData", kontaktpersoner)?
        .iter()
        .map(read_kontaktperson)
        .collect::<Result<Vec<_>>>()?;

    let parorende = fields.non_empty_array("parorendeData")?;
    let parorende_data = fields
        .objects("parorendeData", parorende)?
        .iter()
        .map(read_parorende)
        .collect::<Result<Vec<_>>>()?;

    let bedrifts_data = read_bedriftsdata(&fields.object("bedriftsData")?)?;

    Ok(Bekreftelse {
        oppmotested: oppmotested.to_string(),
        kopi_pr_epost,
        fra_dato: to_local_date(fra),
        til_dato: to_local_date(til),
        days_per_week,
        start_tid: start_tid.to_string(),
        slutt_tid: slutt_tid.to_string(),
        kontaktperson_data,
        parorende_data,
        bedrifts_navn: bedrifts_data.navn.clone(),
        bedrifts_data,
    })
}

fn read_date(fields: &Fields<'_>, key: &str) -> Result<NaiveDate> {
    let date = fields.required_string(key)?;
    parse_iso_date(date).ok_or_else(|| {
        DocumentError::validation(fields.path_of(key), "must be a date in yyyy-mm-dd format")
    })
}

fn read_mobile(fields: &Fields<'_>, key: &str, telefon: String) -> Result<String> {
    if is_valid_mobile(&telefon) {
        Ok(telefon)
    } else {
        Err(DocumentError::validation(
            fields.path_of(key),
            "must be a valid mobile number",
        ))
    }
}

fn read_kontaktperson(fields: &Fields<'_>) -> Result<Kontaktperson> {
    let navn = fields.required_string("navn")?;
    let telefon = match fields.coerced_string("telefon")? {
        Some(telefon) => read_mobile(fields, "telefon", telefon)?,
        None => String::new(),
    };
    let epost = match fields.optional_string("epost")? {
        Some(epost) if !is_valid_email(epost) => {
            return Err(DocumentError::validation(
                fields.path_of("epost"),
                "must be a valid e-mail address",
            ))
        }
        epost => epost.unwrap_or_default(),
    };
    let avdeling = fields.optional_string("avdeling")?.unwrap_or_default();

    Ok(Kontaktperson {
        navn: navn.to_string(),
        telefon,
        epost: epost.to_string(),
        avdeling: avdeling.to_string(),
    })
}

fn read_parorende(fields: &Fields<'_>) -> Result<Parorende> {
    let navn = fields.required_string("navn")?;
    let telefon = fields.required_coerced_string("telefon")?;
    Ok(Parorende {
        navn: navn.to_string(),
        telefon: read_mobile(fields, "telefon", telefon)?,
    })
}

fn read_bedriftsdata(fields: &Fields<'_>) -> Result<Bedriftsdata> {
    let organisasjons_nummer = fields.required_coerced_string("organisasjonsNummer")?;
    if !is_valid_organization_number(&organisasjons_nummer) {
        return Err(DocumentError::validation(
            fields.path_of("organisasjonsNummer"),
            "must be exactly 9 digits",
        ));
    }

    Ok(Bedriftsdata {
        organisasjons_nummer,
        navn: fields.required_string("navn")?.to_string(),
        adresse: fields.required_string("adresse")?.to_string(),
        postnummer: fields.required_coerced_string("postnummer")?,
        poststed: fields.required_string("poststed")?.to_string(),
        avdeling: fields
            .optional_string("avdeling")?
            .unwrap_or_default()
            .to_string(),
        kind: fields.optional_string("type")?.unwrap_or_default().to_string(),
    })
}

/// Local curriculum plan: the placement and the goals it covers.
pub fn curriculum_plan(
    student: Option<&Student>,
    raw: &Value,
    year: &str,
) -> Result<LocalCurriculum> {
    require_student(student)?;
    let fields = Fields::root(raw)?;
    let utplassering = read_utplassering(&fields.object("utplassering")?)?;

    let items = fields.non_empty_array("maal")?;
    let maal = fields
        .objects("maal", items)?
        .iter()
        .map(|goal| -> Result<Laereplanmaal> {
            Ok(Laereplanmaal {
                kode: goal.required_string("kode")?.to_string(),
                tittel: goal.required_string("tittel")?.to_string(),
                arbeidsoppgaver: goal.required_string("arbeidsoppgaver")?.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(LocalCurriculum {
        year: year.to_string(),
        utplassering,
        maal,
    })
}

/// Local curriculum as a single free-text note.
pub fn curriculum_note(student: Option<&Student>, raw: &Value, year: &str) -> Result<Note> {
    super::samtale::note(student, raw, year)
}

/// Placement feedback from the workplace.
pub fn feedback(student: Option<&Student>, raw: &Value, year: &str) -> Result<PlacementFeedback> {
    require_student(student)?;
    let fields = Fields::root(raw)?;
    let utplassering = read_utplassering(&fields.object("utplassering")?)?;

    let items = fields.non_empty_array("kompetansemal")?;
    let kompetansemal = fields
        .objects("kompetansemal", items)?
        .iter()
        .map(|goal| -> Result<Kompetansemal> {
            Ok(Kompetansemal {
                kode: goal.required_string("kode")?.to_string(),
                tittel: goal.required_string("tittel")?.to_string(),
                vurdering: goal.required_string("vurdering")?.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let items = fields.non_empty_array("evaluering")?;
    let evaluering = fields
        .objects("evaluering", items)?
        .iter()
        .map(|entry| -> Result<Evaluering> {
            let id = entry.required_string("id")?;
            let criterion = catalogs().evaluation_criteria.require(id)?;
            Ok(Evaluering {
                id: criterion.id.clone(),
                title: criterion.title.clone(),
                score: entry.required_coerced_string("score")?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let fravar = fields.object("fravar")?;
    let fravar = Fravar {
        dager: fravar.numeric_string("dager")?,
        timer: fravar.numeric_string("timer")?,
        varslet: fravar.optional_bool("varslet")?,
    };

    Ok(PlacementFeedback {
        year: year.to_string(),
        utplassering,
        kompetansemal,
        evaluering,
        fravar,
    })
}

fn read_utplassering(fields: &Fields<'_>) -> Result<Utplassering> {
    Ok(Utplassering {
        id: fields.required_string("id")?.to_string(),
        navn: fields.required_string("navn")?.to_string(),
    })
}
