//! Student fixture loader for BDD tests
//!
//! Loads every `.json` student snapshot from the `features/students/`
//! directory, keyed by file stem.

use minelev_engine::{DocumentError, Student};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory holding student snapshots, relative to the workspace root.
fn students_dir() -> Option<PathBuf> {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest_dir)
        .parent() // packages/
        .and_then(|p| p.parent()) // project root
        .map(|p| p.join("features").join("students"))
}

/// Load all student fixtures.
pub fn load_all_students() -> Result<HashMap<String, Student>, DocumentError> {
    let dir = students_dir().ok_or_else(|| {
        DocumentError::Config("Could not find students fixture directory".to_string())
    })?;

    if !dir.exists() {
        return Err(DocumentError::Config(format!(
            "Students fixture directory not found: {}",
            dir.display()
        )));
    }

    let mut students = HashMap::new();

    for entry in WalkDir::new(&dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let content = std::fs::read_to_string(path).map_err(|e| {
                DocumentError::Config(format!("Failed to read {}: {}", path.display(), e))
            })?;
            let student: Student = serde_json::from_str(&content)?;
            tracing::debug!(student = %name, path = %path.display(), "Loaded student fixture");
            students.insert(name.to_string(), student);
        }
    }

    tracing::debug!(count = students.len(), "Loaded student fixtures");
    Ok(students)
}
