//! Conversations and notes: `samtale`, `notat`

use super::require_student;
use crate::content::{Conversation, Note};
use crate::error::Result;
use crate::fields::Fields;
use crate::student::Student;
use serde_json::Value;

/// A conversation record carries nothing but the school year.
pub fn conversation(student: Option<&Student>, _raw: &Value, year: &str) -> Result<Conversation> {
    require_student(student)?;
    Ok(Conversation {
        year: year.to_string(),
    })
}

/// A free-text note. The text is kept exactly as written.
pub fn note(student: Option<&Student>, raw: &Value, year: &str) -> Result<Note> {
    require_student(student)?;
    let fields = Fields::root(raw)?;
    let note = fields.required_string("note")?;
    Ok(Note {
        year: year.to_string(),
        note: note.to_string(),
    })
}
