//! Shared helpers for BDD step definitions

pub mod json_path;
pub mod student_loader;
