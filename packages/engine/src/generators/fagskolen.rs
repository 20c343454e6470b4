//! Vocational college advance notice: `fagskolen-forhandsvarsel`

use super::{require_student, resolve_course};
use crate::config::MAX_ASSIGNMENT_LENGTH;
use crate::content::AdvanceNotice;
use crate::error::{DocumentError, Result};
use crate::fields::Fields;
use crate::student::Student;
use serde_json::Value;

/// Advance notice about an assignment in one of the student's courses.
///
/// The assignment text is trimmed before its length is checked and stored.
pub fn advance_notice(student: Option<&Student>, raw: &Value, year: &str) -> Result<AdvanceNotice> {
    let student = require_student(student)?;
    let fields = Fields::root(raw)?;

    let course_id = fields.required_string("courseId")?;
    let assignment = fields.required_string("assignment")?.trim();
    if assignment.is_empty() {
        return Err(DocumentError::validation("assignment", "is required"));
    }
    if assignment.chars().count() > MAX_ASSIGNMENT_LENGTH {
        return Err(DocumentError::validation(
            "assignment",
            format!("must not be longer than {MAX_ASSIGNMENT_LENGTH} characters"),
        ));
    }
    let contact_within_days = fields.required_number("contactWithinDays")?.clone();

    Ok(AdvanceNotice {
        year: year.to_string(),
        course: resolve_course(student, course_id)?,
        assignment: assignment.to_string(),
        contact_within_days,
    })
}
