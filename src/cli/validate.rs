use std::path::{Path, PathBuf};

use publishable::{Diagnostic, ValidationReport};
use serde_json::Value;

type Outcome = publishable::Result<Vec<Diagnostic>>;

fn check_path(path: &Path) -> Outcome {
    let manifest = publishable::resolve_manifest(path)?;
    let value = publishable::read_manifest(&manifest)?;
    let record = publishable::as_record(&value)?;
    Ok(publishable::validate_diagnostics(record))
}

fn has_errors(outcome: &Outcome) -> bool {
    match outcome {
        Ok(diags) => diags.iter().any(|d| d.is_error()),
        Err(_) => true,
    }
}

pub(crate) fn run(paths: Vec<PathBuf>, format: super::Format) {
    let results: Vec<(PathBuf, Outcome)> = paths
        .into_iter()
        .map(|path| {
            tracing::info!(path = %path.display(), "validating manifest");
            let outcome = check_path(&path);
            (path, outcome)
        })
        .collect();

    match format {
        super::Format::Text => print_text(&results),
        super::Format::Json => {
            let entries: Vec<Value> = results
                .iter()
                .map(|(path, outcome)| match outcome {
                    Ok(diags) => {
                        let report = ValidationReport::from_diagnostics(diags);
                        serde_json::json!({
                            "path": path.display().to_string(),
                            "valid": report.valid(),
                            "errors": report.errors(),
                            "warnings": report.warnings(),
                        })
                    }
                    Err(e) => serde_json::json!({
                        "path": path.display().to_string(),
                        "valid": false,
                        "errors": [e.to_string()],
                        "warnings": [],
                    }),
                })
                .collect();
            match serde_json::to_string_pretty(&entries) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("error: cannot serialize results: {e}");
                    std::process::exit(1);
                }
            }
        }
    }

    if results.iter().any(|(_, outcome)| has_errors(outcome)) {
        std::process::exit(1);
    }
}

fn print_text(results: &[(PathBuf, Outcome)]) {
    let multi = results.len() > 1;
    let indent = if multi { "  " } else { "" };
    for (path, outcome) in results {
        match outcome {
            Ok(diags) => {
                if multi && !diags.is_empty() {
                    eprintln!("{}:", path.display());
                }
                for d in diags {
                    eprintln!("{indent}{d}");
                }
            }
            Err(e) => eprintln!("error: {}: {e}", path.display()),
        }
    }

    if multi {
        let total = results.len();
        let errors = results.iter().filter(|(_, o)| has_errors(o)).count();
        let warnings = results
            .iter()
            .filter(|(_, o)| !has_errors(o) && o.as_ref().is_ok_and(|d| !d.is_empty()))
            .count();
        let ok = total - errors - warnings;
        eprintln!("\n{total} manifests: {ok} ok, {errors} errors, {warnings} warnings only");
    } else if let Some((_, Ok(diags))) = results.first() {
        if diags.is_empty() {
            eprintln!("ok");
        }
    }
}
