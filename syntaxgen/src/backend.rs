//! Target-language backends.

use std::fmt;
use std::str::FromStr;

use proc_macro2::TokenStream;
use serde::{Deserialize, Serialize};
use syntaxgen_schema::Category;

use crate::codegen::NodeEmitter;
use crate::error::GenError;
use crate::generate::Action;
use crate::slots::NodeLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    #[default]
    Rust,
}

impl TargetLanguage {
    pub fn name(self) -> &'static str {
        match self {
            TargetLanguage::Rust => "rust",
        }
    }

    /// The backend for this language with its default configuration.
    pub fn backend(self) -> Box<dyn Backend> {
        match self {
            TargetLanguage::Rust => Box::new(RustBackend::default()),
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetLanguage {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rust" | "rs" => Ok(TargetLanguage::Rust),
            _ => Err(GenError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Renders resolved node layouts as one source document.
pub trait Backend {
    fn language(&self) -> TargetLanguage;

    fn emit_tree(
        &self,
        category: Category,
        action: Action,
        layouts: &[NodeLayout],
    ) -> Result<String, GenError>;

    /// Placeholder document for a category whose generation is not implemented.
    fn emit_reserved(&self, category: Category, action: Action) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RustConfig {
    /// Path at which generated code reaches the runtime crate.
    pub runtime_path: String,
    pub emit_docs: bool,
}

impl Default for RustConfig {
    fn default() -> Self {
        Self {
            runtime_path: "::syntaxgen_runtime".to_string(),
            emit_docs: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RustBackend {
    config: RustConfig,
}

impl RustBackend {
    pub fn new(config: RustConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RustConfig {
        &self.config
    }

    fn runtime_path(&self) -> Result<syn::Path, GenError> {
        syn::parse_str(&self.config.runtime_path)
            .map_err(|_| GenError::InvalidIdentifier(self.config.runtime_path.clone()))
    }

    fn render(&self, category: Category, action: Action, tokens: TokenStream) -> Result<String, GenError> {
        let file = syn::parse2::<syn::File>(tokens)
            .map_err(|source| GenError::Render { category, source })?;
        let mut out = header(category, action);
        out.push('\n');
        out.push_str(&prettyplease::unparse(&file));
        Ok(out)
    }
}

impl Backend for RustBackend {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::Rust
    }

    fn emit_tree(
        &self,
        category: Category,
        action: Action,
        layouts: &[NodeLayout],
    ) -> Result<String, GenError> {
        let rt = self.runtime_path()?;
        let mut tokens = TokenStream::new();
        for layout in layouts {
            let node = NodeEmitter::new(layout, &rt, self.config.emit_docs);
            tokens.extend(match action {
                Action::Declaration => node.declaration()?,
                Action::Definition => node.definition()?,
            });
        }
        self.render(category, action, tokens)
    }

    fn emit_reserved(&self, category: Category, action: Action) -> String {
        let mut out = header(category, action);
        out.push_str(&format!("// {} generation is not implemented.\n", category));
        out
    }
}

fn header(category: Category, action: Action) -> String {
    format!(
        "// @generated by syntaxgen: {} {}s. Do not edit.\n",
        category,
        action.name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse() {
        assert_eq!("rust".parse::<TargetLanguage>().unwrap(), TargetLanguage::Rust);
        assert_eq!("Rust".parse::<TargetLanguage>().unwrap(), TargetLanguage::Rust);
        assert!(matches!(
            "swift".parse::<TargetLanguage>(),
            Err(GenError::UnknownLanguage(name)) if name == "swift"
        ));
    }

    #[test]
    fn test_reserved_document() {
        let out = RustBackend::default().emit_reserved(Category::SyntaxFactory, Action::Definition);
        assert!(out.starts_with("// @generated"));
        assert!(out.contains("SyntaxFactory generation is not implemented."));
    }

    #[test]
    fn test_empty_tree_document_is_just_header() {
        let out = RustBackend::default()
            .emit_tree(Category::Type, Action::Declaration, &[])
            .unwrap();
        assert!(out.starts_with("// @generated by syntaxgen: Type declarations. Do not edit.\n"));
        assert!(!out.contains("pub "));
    }

    #[test]
    fn test_bad_runtime_path() {
        let backend = RustBackend::new(RustConfig {
            runtime_path: "not a path".to_string(),
            emit_docs: false,
        });
        let err = backend
            .emit_tree(Category::Expr, Action::Definition, &[])
            .unwrap_err();
        assert!(matches!(err, GenError::InvalidIdentifier(_)));
    }
}
