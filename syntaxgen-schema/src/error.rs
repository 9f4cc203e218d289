//! Error types for schema loading and lookup

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Failed to read schema file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse schema JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate definition name: {0}")]
    DuplicateDefinition(String),

    #[error("{name} is an unknown category!{}", format_suggestion(.suggestion))]
    UnknownCategory {
        name: String,
        suggestion: Option<String>,
    },
}

fn format_suggestion(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(candidate) => format!(" Did you mean: {}?", candidate),
        None => String::new(),
    }
}
