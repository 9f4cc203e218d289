use thiserror::Error;

use syntaxgen_schema::{Category, SchemaError};

/// Generation-time configuration and schema errors.
///
/// None of these leave partial output behind: a document is only returned
/// once it has been generated in full.
#[derive(Error, Debug)]
pub enum GenError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("{0} cannot be generated; expected one of Decl, Expr, Stmt, Type, Pattern, SyntaxFactory, SyntaxRewriter")]
    UnsupportedCategory(Category),

    #[error("unknown action '{0}'; expected 'declaration' or 'definition'")]
    UnknownAction(String),

    #[error("unknown target language '{0}'; expected 'rust'")]
    UnknownLanguage(String),

    #[error("cannot resolve a syntax category for '{definition}' (ancestry: {ancestry})")]
    UnresolvedCategory { definition: String, ancestry: String },

    #[error("{0} has no missing placeholder kind")]
    NoMissingKind(Category),

    #[error("slot {node}.{slot} references unknown definition '{target}'{}", did_you_mean(.suggestion))]
    UnknownLayoutTarget {
        node: String,
        slot: String,
        target: String,
        suggestion: Option<String>,
    },

    #[error("token '{0}' belongs to a closed token set but declares no spelling")]
    MissingSpelling(String),

    #[error("'{0}' is not a valid identifier in generated code")]
    InvalidIdentifier(String),

    #[error("generated code for {category} failed to parse: {source}")]
    Render {
        category: Category,
        #[source]
        source: syn::Error,
    },
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(candidate) => format!(" (did you mean '{}'?)", candidate),
        None => String::new(),
    }
}
