//! Schema snapshot loading

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::SchemaError;
use crate::types::SchemaModel;

pub fn parse_schema_file<P: AsRef<Path>>(path: P) -> Result<SchemaModel, SchemaError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let schema = parse_schema_content(&content)?;
    tracing::debug!(
        path = %path.display(),
        nodes = schema.nodes.len(),
        tokens = schema.tokens.len(),
        classes = schema.classes.len(),
        "loaded schema snapshot"
    );
    Ok(schema)
}

pub fn parse_schema_content(content: &str) -> Result<SchemaModel, SchemaError> {
    let schema: SchemaModel = serde_json::from_str(content)?;
    check_unique_names(&schema)?;
    Ok(schema)
}

fn check_unique_names(schema: &SchemaModel) -> Result<(), SchemaError> {
    let mut names = HashSet::new();
    let all = schema
        .classes
        .iter()
        .map(|c| &c.name)
        .chain(schema.tokens.iter().map(|t| &t.name))
        .chain(schema.nodes.iter().map(|n| &n.name));
    for name in all {
        if !names.insert(name.as_str()) {
            return Err(SchemaError::DuplicateDefinition(name.clone()));
        }
    }
    Ok(())
}
