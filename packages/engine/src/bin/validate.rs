use std::path::Path;
use std::process;

use minelev_engine::{DocumentTypeRegistry, EngineConfig};
use tracing_subscriber::EnvFilter;

fn usage() -> ! {
    eprintln!("Usage: validate <document-type-id> <file1.json> [file2.json ...]");
    eprintln!("       validate --list");
    process::exit(1);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match EngineConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("FATAL: {e}");
            process::exit(2);
        }
    };
    let registry = DocumentTypeRegistry::new(&config);

    if args.first().map(String::as_str) == Some("--list") {
        let infos: Vec<_> = registry.definitions().iter().map(|d| d.info()).collect();
        match serde_json::to_string_pretty(&infos) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("FATAL: {e}");
                process::exit(2);
            }
        }
        return;
    }

    let (document_type, files) = match args.split_first() {
        Some((document_type, files)) if !files.is_empty() => (document_type, files),
        _ => usage(),
    };

    if let Err(e) = registry.get_definition(document_type) {
        eprintln!("FATAL: {e}");
        process::exit(2);
    }

    let mut failed = false;

    for arg in files {
        let path = Path::new(arg);

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("FAIL: {}: read: {e}", path.display());
                failed = true;
                continue;
            }
        };

        let value: serde_json::Value = match serde_json::from_str(&content) {
            Ok(v) => v,
            Err(e) => {
                eprintln!("FAIL: {}: json parse: {e}", path.display());
                failed = true;
                continue;
            }
        };

        match registry.validate(document_type, &value) {
            Ok(result) if result.valid => {
                eprintln!("OK: {} ({document_type})", path.display());
            }
            Ok(result) => {
                eprintln!("FAIL: {}: template ({document_type})", path.display());
                for violation in &result.violations {
                    match &violation.detail {
                        Some(detail) => {
                            eprintln!("  - {}: {:?} ({detail})", violation.path, violation.kind)
                        }
                        None => eprintln!("  - {}: {:?}", violation.path, violation.kind),
                    }
                }
                failed = true;
            }
            Err(e) => {
                eprintln!("FAIL: {}: {e}", path.display());
                failed = true;
            }
        }
    }

    if failed {
        process::exit(1);
    }
}
