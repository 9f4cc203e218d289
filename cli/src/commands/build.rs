use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use syntaxgen::{generate_with, GenerationRequest, RustBackend};
use syntaxgen_schema::parse_schema_file;

use super::generate::write_document;
use crate::config::SyntaxgenConfig;
use crate::ui;

/// Generate every configured target. Nothing is written unless all of them
/// generate successfully.
pub fn build(config_path: &Path) -> Result<()> {
    let Some(config) = SyntaxgenConfig::load_optional(config_path)? else {
        anyhow::bail!(
            "No config file found at {}\nCreate one with at least `schema = \"path/to/schema.json\"`.",
            config_path.display()
        );
    };
    let written = build_config(&config)?;
    ui::print_success(&format!(
        "Generated {} document(s) in {}",
        written.len(),
        config.output_dir().display()
    ));
    Ok(())
}

pub fn build_config(config: &SyntaxgenConfig) -> Result<Vec<PathBuf>> {
    let schema_path = config.schema_path();
    ui::print_step(&format!("Loading schema {}", schema_path.display()));
    let schema = parse_schema_file(&schema_path)?;
    let backend = RustBackend::new(config.rust.clone());
    let output_dir = config.output_dir();

    let mut documents = Vec::new();
    for target in config.targets() {
        let request = GenerationRequest::new(target.category, target.action)
            .with_language(config.language);
        let document = generate_with(&schema, &request, &backend).with_context(|| {
            format!("Failed to generate {} {}s", target.category, target.action)
        })?;
        documents.push((output_dir.join(target.file_name()), document));
    }

    let mut written = Vec::with_capacity(documents.len());
    for (path, document) in documents {
        write_document(&path, &document)?;
        ui::print_item(&format!("{}", path.display().to_string().cyan()));
        written.push(path);
    }
    Ok(written)
}
