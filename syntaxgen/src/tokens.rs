//! Token slot constraints.

use syntaxgen_schema::{SchemaModel, TokenDef};

use crate::error::GenError;

/// Token classes whose members have no fixed spelling.
pub const OPEN_TOKEN_CLASSES: &[&str] = &["Identifier", "Literal"];

/// What a token-typed slot accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenConstraint {
    /// Token definition the slot references.
    pub token: String,
    pub kind: String,
    /// Exact spelling, present only for closed token sets.
    pub spelling: Option<String>,
    /// Spelling recorded on missing placeholders for this slot.
    pub placeholder_text: String,
}

impl TokenConstraint {
    /// Identifier-like tokens are checked by kind only.
    pub fn is_identifier_like(&self) -> bool {
        self.spelling.is_none()
    }
}

pub fn extract_token_constraint(
    schema: &SchemaModel,
    token: &TokenDef,
) -> Result<TokenConstraint, GenError> {
    let open = schema
        .ancestors(&token.name)
        .any(|ancestor| OPEN_TOKEN_CLASSES.contains(&ancestor));

    let spelling = if open {
        None
    } else {
        match &token.spelling {
            Some(spelling) => Some(spelling.clone()),
            None => return Err(GenError::MissingSpelling(token.name.clone())),
        }
    };

    Ok(TokenConstraint {
        token: token.name.clone(),
        kind: token.kind.clone(),
        placeholder_text: token.spelling.clone().unwrap_or_default(),
        spelling,
    })
}
