//! Syntax categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SchemaError;
use crate::search::closest_name;

/// Classification used for type-checking children and for picking
/// missing-placeholder kinds.
///
/// `SyntaxFactory` and `SyntaxRewriter` are not tree categories; they only
/// select a generation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Category {
    Decl,
    Expr,
    Stmt,
    Type,
    Pattern,
    SyntaxCollection,
    Token,
    SyntaxFactory,
    SyntaxRewriter,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Decl,
        Category::Expr,
        Category::Stmt,
        Category::Type,
        Category::Pattern,
        Category::SyntaxCollection,
        Category::Token,
        Category::SyntaxFactory,
        Category::SyntaxRewriter,
    ];

    /// Categories a caller may ask the generator for.
    pub const REQUESTABLE: [Category; 7] = [
        Category::Decl,
        Category::Expr,
        Category::Stmt,
        Category::Type,
        Category::Pattern,
        Category::SyntaxFactory,
        Category::SyntaxRewriter,
    ];

    /// Categories whose nodes get generated tree types.
    pub const TREE: [Category; 5] = [
        Category::Decl,
        Category::Expr,
        Category::Stmt,
        Category::Type,
        Category::Pattern,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Decl => "Decl",
            Category::Expr => "Expr",
            Category::Stmt => "Stmt",
            Category::Type => "Type",
            Category::Pattern => "Pattern",
            Category::SyntaxCollection => "SyntaxCollection",
            Category::Token => "Token",
            Category::SyntaxFactory => "SyntaxFactory",
            Category::SyntaxRewriter => "SyntaxRewriter",
        }
    }

    /// Whether definitions can resolve to this category through their
    /// ancestry.
    pub fn is_registered(self) -> bool {
        !matches!(self, Category::SyntaxFactory | Category::SyntaxRewriter)
    }

    pub fn is_requestable(self) -> bool {
        Self::REQUESTABLE.contains(&self)
    }

    /// Look up a registered category by its root class name.
    pub fn registered(name: &str) -> Option<Category> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.is_registered() && c.name() == name)
    }

    /// Lower-case stem used for generated file names, e.g. `syntax_collection`.
    pub fn file_stem(self) -> String {
        let mut stem = String::new();
        for (i, c) in self.name().chars().enumerate() {
            if c.is_uppercase() && i > 0 {
                stem.push('_');
            }
            stem.extend(c.to_lowercase());
        }
        stem
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(category) = Self::ALL.iter().copied().find(|c| c.name() == s) {
            return Ok(category);
        }
        let candidates: Vec<&str> = Self::REQUESTABLE.iter().map(|c| c.name()).collect();
        Err(SchemaError::UnknownCategory {
            name: s.to_string(),
            suggestion: closest_name(s, &candidates, 3),
        })
    }
}
