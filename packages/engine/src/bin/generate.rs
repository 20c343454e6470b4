//! CLI binary for generating document content via stdin.
//!
//! Usage:
//!   echo '{"documentTypeId": "notat", "student": {...}, "content": {"note": "..."}}' \
//!     | cargo run --features cli --bin generate
//!
//! Input (JSON on stdin):
//!   - documentTypeId: String — the document type to generate (e.g. "varsel-fag")
//!   - student: Optional<Object> — the student snapshot
//!   - content: Object — raw content for the document type
//!   - date: Optional<String> — reference date (YYYY-MM-DD) for the school year
//!
//! Output (JSON on stdout):
//!   - content: Optional<Object> — normalized content
//!   - error: Optional<String> — error message if generation failed
//!   - kind: Optional<String> — error kind (validation, not-found, integrity, internal)
//!
//! Registry configuration is read from the environment (`YFF_ENABLED`,
//! `FAGSKOLEN_ENABLED`, `YFF_LAEREPLAN_VARIANT`). Logs go to stderr.

use chrono::NaiveDate;
use minelev_engine::{
    Clock, DocumentError, DocumentTypeRegistry, EngineConfig, ErrorKind, FixedClock, Student,
    SystemClock,
};
use std::io::Read;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    document_type_id: String,
    #[serde(default)]
    student: Option<Student>,
    #[serde(default)]
    content: serde_json::Value,
    #[serde(default)]
    date: Option<String>,
}

#[derive(serde::Serialize)]
struct GenerateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
}

fn kind_name(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Validation => "validation",
        ErrorKind::NotFound => "not-found",
        ErrorKind::Integrity => "integrity",
        ErrorKind::Internal => "internal",
    }
}

fn error_response(msg: String, kind: ErrorKind) -> GenerateResponse {
    GenerateResponse {
        content: None,
        error: Some(msg),
        kind: Some(kind_name(kind)),
    }
}

fn fail(resp: GenerateResponse) -> ! {
    println!("{}", serde_json::to_string(&resp).unwrap_or_default());
    std::process::exit(1);
}

fn fail_with(err: DocumentError) -> ! {
    fail(error_response(err.to_string(), err.kind()))
}

fn parse_date(date: &str) -> NaiveDate {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => fail(error_response(
            format!("Invalid date format '{date}': expected YYYY-MM-DD"),
            ErrorKind::Validation,
        )),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        fail(error_response(
            format!("Failed to read stdin: {e}"),
            ErrorKind::Internal,
        ));
    }

    let request: GenerateRequest = match serde_json::from_str(&input) {
        Ok(r) => r,
        Err(e) => fail(error_response(
            format!("Failed to parse request JSON: {e}"),
            ErrorKind::Validation,
        )),
    };

    let clock: Arc<dyn Clock> = match request.date.as_deref() {
        Some(date) => Arc::new(FixedClock(parse_date(date))),
        None => Arc::new(SystemClock),
    };

    let config = match EngineConfig::from_env() {
        Ok(config) => config,
        Err(e) => fail_with(e),
    };
    let registry = DocumentTypeRegistry::with_clock(&config, clock);

    let content = match registry.generate(
        &request.document_type_id,
        request.student.as_ref(),
        &request.content,
    ) {
        Ok(content) => content,
        Err(e) => fail_with(e),
    };

    match content.to_json() {
        Ok(value) => {
            let resp = GenerateResponse {
                content: Some(value),
                error: None,
                kind: None,
            };
            println!("{}", serde_json::to_string(&resp).unwrap_or_default());
        }
        Err(e) => fail_with(e),
    }
}
