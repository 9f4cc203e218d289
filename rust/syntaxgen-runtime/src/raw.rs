//! Immutable, structurally shared raw trees.

use std::sync::Arc;

use crate::kind::{SyntaxCategory, SyntaxKind, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourcePresence {
    Present,
    Missing,
}

/// The untyped underlying representation of a node or token.
///
/// Children are held by `Arc`, so replacing one child produces a new node that
/// shares every other subtree with the original. Equality is structural.
#[derive(Debug, PartialEq, Eq)]
pub struct RawSyntax {
    kind: SyntaxKind,
    presence: SourcePresence,
    body: RawBody,
}

#[derive(Debug, PartialEq, Eq)]
enum RawBody {
    Layout(Vec<Arc<RawSyntax>>),
    Token { kind: TokenKind, text: Box<str> },
}

impl RawSyntax {
    pub fn make(
        kind: SyntaxKind,
        layout: Vec<Arc<RawSyntax>>,
        presence: SourcePresence,
    ) -> Arc<RawSyntax> {
        Arc::new(RawSyntax {
            kind,
            presence,
            body: RawBody::Layout(layout),
        })
    }

    /// A childless placeholder of `kind`, e.g. `MissingExpr`.
    pub fn missing(kind: SyntaxKind) -> Arc<RawSyntax> {
        Self::make(kind, Vec::new(), SourcePresence::Missing)
    }

    pub fn token(
        kind: TokenKind,
        text: impl Into<Box<str>>,
        presence: SourcePresence,
    ) -> Arc<RawSyntax> {
        Arc::new(RawSyntax {
            kind: SyntaxKind::TOKEN,
            presence,
            body: RawBody::Token {
                kind,
                text: text.into(),
            },
        })
    }

    /// A missing token that still records the kind and spelling its slot expects.
    pub fn missing_token(kind: TokenKind, text: impl Into<Box<str>>) -> Arc<RawSyntax> {
        Self::token(kind, text, SourcePresence::Missing)
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub fn category(&self) -> SyntaxCategory {
        self.kind.category()
    }

    pub fn presence(&self) -> SourcePresence {
        self.presence
    }

    pub fn is_missing(&self) -> bool {
        self.presence == SourcePresence::Missing
    }

    pub fn is_token(&self) -> bool {
        matches!(self.body, RawBody::Token { .. })
    }

    pub fn token_kind(&self) -> Option<TokenKind> {
        self.token_parts().map(|(kind, _)| kind)
    }

    pub fn token_text(&self) -> Option<&str> {
        self.token_parts().map(|(_, text)| text)
    }

    pub fn token_parts(&self) -> Option<(TokenKind, &str)> {
        match &self.body {
            RawBody::Token { kind, text } => Some((*kind, &**text)),
            RawBody::Layout(_) => None,
        }
    }

    /// Children in cursor order. Tokens have none.
    pub fn layout(&self) -> &[Arc<RawSyntax>] {
        match &self.body {
            RawBody::Layout(children) => children,
            RawBody::Token { .. } => &[],
        }
    }

    pub fn num_children(&self) -> usize {
        self.layout().len()
    }

    #[track_caller]
    pub fn child(&self, index: usize) -> &Arc<RawSyntax> {
        let layout = self.layout();
        match layout.get(index) {
            Some(child) => child,
            None => panic!(
                "child index {} out of range for {} with {} children",
                index,
                self.kind,
                layout.len()
            ),
        }
    }

    /// A copy of this node with `new_child` at `index`. Every other child is
    /// shared with `self`, which is left untouched.
    #[track_caller]
    pub fn replace_child(&self, index: usize, new_child: Arc<RawSyntax>) -> Arc<RawSyntax> {
        let mut layout = self.layout().to_vec();
        match layout.get_mut(index) {
            Some(slot) => *slot = new_child,
            None => panic!(
                "cannot replace child {} of {} with {} children",
                index,
                self.kind,
                self.num_children()
            ),
        }
        Self::make(self.kind, layout, self.presence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IF_STMT: SyntaxKind = SyntaxKind::new("IfStmt", SyntaxCategory::Stmt);

    fn if_stmt() -> Arc<RawSyntax> {
        RawSyntax::make(
            IF_STMT,
            vec![
                RawSyntax::missing_token(TokenKind::new("kw_if"), "if"),
                RawSyntax::missing(SyntaxKind::MISSING_EXPR),
                RawSyntax::missing(SyntaxKind::MISSING_STMT),
            ],
            SourcePresence::Present,
        )
    }

    #[test]
    fn test_missing_token_keeps_kind_and_spelling() {
        let token = RawSyntax::missing_token(TokenKind::new("kw_if"), "if");
        assert!(token.is_missing());
        assert!(token.is_token());
        assert_eq!(token.kind(), SyntaxKind::TOKEN);
        assert_eq!(token.token_parts(), Some((TokenKind::new("kw_if"), "if")));
        assert_eq!(token.num_children(), 0);
    }

    #[test]
    fn test_replace_child_shares_untouched_children() {
        let original = if_stmt();
        let cond = RawSyntax::make(
            SyntaxKind::new("IdentifierExpr", SyntaxCategory::Expr),
            vec![RawSyntax::token(
                TokenKind::new("identifier"),
                "ready",
                SourcePresence::Present,
            )],
            SourcePresence::Present,
        );
        let replaced = original.replace_child(1, Arc::clone(&cond));

        assert!(original.child(1).is_missing());
        assert!(Arc::ptr_eq(replaced.child(1), &cond));
        assert!(Arc::ptr_eq(replaced.child(0), original.child(0)));
        assert!(Arc::ptr_eq(replaced.child(2), original.child(2)));
        assert_ne!(*replaced, *original);
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(*if_stmt(), *if_stmt());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_child_out_of_range_panics() {
        if_stmt().child(3);
    }
}
