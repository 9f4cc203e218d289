use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use syntaxgen::{generate_with, Action, GenerationRequest, RustBackend, RustConfig, TargetLanguage};
use syntaxgen_schema::{parse_schema_file, Category};

use super::UsageError;
use crate::ui;

pub struct GenerateArgs<'a> {
    pub schema: &'a Path,
    pub category: &'a str,
    pub action: Option<&'a str>,
    pub language: &'a str,
    pub output: Option<&'a Path>,
    pub rust: RustConfig,
}

/// Check the selectors before touching the schema.
pub fn parse_request(
    category: &str,
    action: Option<&str>,
    language: &str,
) -> Result<GenerationRequest, UsageError> {
    let category: Category = category
        .parse()
        .map_err(|e: syntaxgen_schema::SchemaError| UsageError::new("generate", e.to_string()))?;
    if !category.is_requestable() {
        return Err(UsageError::new(
            "generate",
            syntaxgen::GenError::UnsupportedCategory(category).to_string(),
        ));
    }

    let Some(action) = action else {
        return Err(UsageError::new("generate", "action required"));
    };
    let action: Action = action
        .parse()
        .map_err(|e: syntaxgen::GenError| UsageError::new("generate", e.to_string()))?;
    let language: TargetLanguage = language
        .parse()
        .map_err(|e: syntaxgen::GenError| UsageError::new("generate", e.to_string()))?;

    Ok(GenerationRequest::new(category, action).with_language(language))
}

pub fn run(args: GenerateArgs<'_>) -> Result<()> {
    let request = parse_request(args.category, args.action, args.language)?;

    let schema = parse_schema_file(args.schema)?;
    let backend = RustBackend::new(args.rust);
    let document = generate_with(&schema, &request, &backend)
        .with_context(|| format!("Failed to generate {} {}s", request.category, request.action))?;

    match args.output {
        Some(path) => {
            write_document(path, &document)?;
            ui::print_success(&format!(
                "Wrote {} {}s to {}",
                request.category,
                request.action,
                path.display()
            ));
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

pub(crate) fn write_document(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, document).with_context(|| format!("Failed to write {}", path.display()))
}
