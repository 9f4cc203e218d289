//! Generation entry point.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use syntaxgen_schema::{Category, SchemaModel};

use crate::backend::{Backend, TargetLanguage};
use crate::error::GenError;
use crate::registry::CategoryRegistry;
use crate::slots::layouts_for;

/// Which half of a node family to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Cursor enums, handle and wrapper types, accessor/updater signatures.
    #[serde(alias = "interface")]
    Declaration,
    /// Wrapper constructors, `make_blank`, accessor and updater bodies.
    #[serde(alias = "implementation")]
    Definition,
}

impl Action {
    pub const ALL: [Action; 2] = [Action::Declaration, Action::Definition];

    pub fn name(self) -> &'static str {
        match self {
            Action::Declaration => "declaration",
            Action::Definition => "definition",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "declaration" | "interface" => Ok(Action::Declaration),
            "definition" | "implementation" => Ok(Action::Definition),
            _ => Err(GenError::UnknownAction(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Typed node families for a tree category.
    Tree(Category),
    /// Accepted but not implemented; emits a placeholder document.
    Reserved(Category),
}

impl GenerationMode {
    pub fn for_category(category: Category) -> Result<Self, GenError> {
        match category {
            Category::Decl
            | Category::Expr
            | Category::Stmt
            | Category::Type
            | Category::Pattern => Ok(GenerationMode::Tree(category)),
            Category::SyntaxFactory | Category::SyntaxRewriter => {
                Ok(GenerationMode::Reserved(category))
            }
            Category::SyntaxCollection | Category::Token => {
                Err(GenError::UnsupportedCategory(category))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub category: Category,
    pub action: Action,
    pub language: TargetLanguage,
}

impl GenerationRequest {
    pub fn new(category: Category, action: Action) -> Self {
        Self {
            category,
            action,
            language: TargetLanguage::default(),
        }
    }

    pub fn with_language(mut self, language: TargetLanguage) -> Self {
        self.language = language;
        self
    }
}

/// Generate one document with the request language's default backend.
pub fn generate(schema: &SchemaModel, request: &GenerationRequest) -> Result<String, GenError> {
    let backend = request.language.backend();
    generate_with(schema, request, backend.as_ref())
}

/// Generate one document with an explicitly configured backend.
///
/// Output depends only on `schema` and `request`; nothing is written anywhere.
pub fn generate_with(
    schema: &SchemaModel,
    request: &GenerationRequest,
    backend: &dyn Backend,
) -> Result<String, GenError> {
    let mode = GenerationMode::for_category(request.category)?;
    if backend.language() != request.language {
        return Err(GenError::UnknownLanguage(request.language.to_string()));
    }

    let document = match mode {
        GenerationMode::Reserved(category) => backend.emit_reserved(category, request.action),
        GenerationMode::Tree(category) => {
            let registry = CategoryRegistry::new(schema)?;
            let layouts = layouts_for(schema, &registry, category)?;
            backend.emit_tree(category, request.action, &layouts)?
        }
    };

    tracing::info!(
        category = %request.category,
        action = %request.action,
        language = %request.language,
        bytes = document.len(),
        "generated document"
    );
    Ok(document)
}
