use std::fmt;

/// Runtime tag for a node's category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxCategory {
    Decl,
    Expr,
    Stmt,
    Type,
    Pattern,
    SyntaxCollection,
    Token,
}

impl fmt::Display for SyntaxCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SyntaxCategory::Decl => "Decl",
            SyntaxCategory::Expr => "Expr",
            SyntaxCategory::Stmt => "Stmt",
            SyntaxCategory::Type => "Type",
            SyntaxCategory::Pattern => "Pattern",
            SyntaxCategory::SyntaxCollection => "SyntaxCollection",
            SyntaxCategory::Token => "Token",
        };
        f.write_str(name)
    }
}

/// Runtime kind of a raw node: its definition name plus resolved category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SyntaxKind {
    name: &'static str,
    category: SyntaxCategory,
}

impl SyntaxKind {
    pub const TOKEN: SyntaxKind = SyntaxKind::new("Token", SyntaxCategory::Token);
    pub const MISSING_DECL: SyntaxKind = SyntaxKind::new("MissingDecl", SyntaxCategory::Decl);
    pub const MISSING_EXPR: SyntaxKind = SyntaxKind::new("MissingExpr", SyntaxCategory::Expr);
    pub const MISSING_STMT: SyntaxKind = SyntaxKind::new("MissingStmt", SyntaxCategory::Stmt);
    pub const MISSING_TYPE: SyntaxKind = SyntaxKind::new("MissingType", SyntaxCategory::Type);
    pub const MISSING_PATTERN: SyntaxKind =
        SyntaxKind::new("MissingPattern", SyntaxCategory::Pattern);
    pub const MISSING_SYNTAX_COLLECTION: SyntaxKind =
        SyntaxKind::new("MissingSyntaxCollection", SyntaxCategory::SyntaxCollection);

    pub const fn new(name: &'static str, category: SyntaxCategory) -> Self {
        Self { name, category }
    }

    pub const fn name(self) -> &'static str {
        self.name
    }

    pub const fn category(self) -> SyntaxCategory {
        self.category
    }

    /// Placeholder kind for a missing child of `category`. Tokens have none;
    /// a missing token carries its own kind and spelling instead.
    pub const fn missing(category: SyntaxCategory) -> Option<SyntaxKind> {
        match category {
            SyntaxCategory::Decl => Some(Self::MISSING_DECL),
            SyntaxCategory::Expr => Some(Self::MISSING_EXPR),
            SyntaxCategory::Stmt => Some(Self::MISSING_STMT),
            SyntaxCategory::Type => Some(Self::MISSING_TYPE),
            SyntaxCategory::Pattern => Some(Self::MISSING_PATTERN),
            SyntaxCategory::SyntaxCollection => Some(Self::MISSING_SYNTAX_COLLECTION),
            SyntaxCategory::Token => None,
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}

/// Lexical kind of a token, e.g. `kw_if` or `identifier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenKind(&'static str);

impl TokenKind {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_table() {
        assert_eq!(
            SyntaxKind::missing(SyntaxCategory::Expr),
            Some(SyntaxKind::MISSING_EXPR)
        );
        assert_eq!(
            SyntaxKind::missing(SyntaxCategory::SyntaxCollection).map(SyntaxKind::name),
            Some("MissingSyntaxCollection")
        );
        assert_eq!(SyntaxKind::missing(SyntaxCategory::Token), None);
    }

    #[test]
    fn test_kind_equality_uses_name_and_category() {
        let a = SyntaxKind::new("IfStmt", SyntaxCategory::Stmt);
        assert_eq!(a, SyntaxKind::new("IfStmt", SyntaxCategory::Stmt));
        assert_ne!(a, SyntaxKind::new("IfStmt", SyntaxCategory::Expr));
        assert_eq!(a.to_string(), "IfStmt (Stmt)");
    }
}
