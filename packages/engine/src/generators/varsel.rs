//! Warnings: `varsel-fag`, `varsel-orden`, `varsel-atferd`

use super::{require_student, resolve_course, resolve_period, resolve_reasons};
use crate::catalog::{catalogs, Catalog, Reason};
use crate::content::{ConductWarning, SubjectWarning};
use crate::error::Result;
use crate::fields::Fields;
use crate::student::Student;
use serde_json::Value;

/// Subject warning: period, the student's course groups and course reasons.
pub fn subject_warning(
    student: Option<&Student>,
    raw: &Value,
    year: &str,
) -> Result<SubjectWarning> {
    let student = require_student(student)?;
    let fields = Fields::root(raw)?;
    fields.require_all(&["periodId", "courseIds", "reasonIds"])?;

    let period_id = fields.required_string("periodId")?;
    let course_ids = fields.string_array("courseIds")?;
    let reason_ids = fields.string_array("reasonIds")?;

    let period = resolve_period(&catalogs().periods, period_id)?;
    let classes = course_ids
        .iter()
        .map(|id| resolve_course(student, id))
        .collect::<Result<Vec<_>>>()?;
    let reasons = resolve_reasons(&catalogs().course_reasons, &reason_ids)?;

    Ok(SubjectWarning {
        year: year.to_string(),
        period,
        classes,
        reasons,
    })
}

/// Order or behaviour warning; `reasons` is the catalog the ids refer to.
pub fn conduct_warning(
    student: Option<&Student>,
    raw: &Value,
    year: &str,
    reasons: &Catalog<Reason>,
) -> Result<ConductWarning> {
    require_student(student)?;
    let fields = Fields::root(raw)?;
    fields.require_all(&["periodId", "reasonIds"])?;

    let period_id = fields.required_string("periodId")?;
    let reason_ids = fields.string_array("reasonIds")?;

    Ok(ConductWarning {
        year: year.to_string(),
        period: resolve_period(&catalogs().periods, period_id)?,
        reasons: resolve_reasons(reasons, &reason_ids)?,
    })
}
