//! Lightweight user-facing handles.

use std::fmt;
use std::sync::Arc;

use crate::data::{CursorIndex, SyntaxData};
use crate::kind::{SyntaxCategory, SyntaxKind, TokenKind};
use crate::raw::{RawSyntax, SourcePresence};

/// Untyped handle: a node's wrapper plus the root that keeps its tree alive.
#[derive(Clone)]
pub struct Syntax {
    root: Arc<SyntaxData>,
    data: Arc<SyntaxData>,
}

impl Syntax {
    pub fn new(root: Arc<SyntaxData>, data: Arc<SyntaxData>) -> Self {
        Self { root, data }
    }

    /// Wrap `raw` as the root of a fresh tree.
    pub fn make_root(raw: Arc<RawSyntax>) -> Self {
        let data = SyntaxData::make(raw, None, 0);
        Self {
            root: Arc::clone(&data),
            data,
        }
    }

    pub fn into_parts(self) -> (Arc<SyntaxData>, Arc<SyntaxData>) {
        (self.root, self.data)
    }

    pub fn root(&self) -> &Arc<SyntaxData> {
        &self.root
    }

    pub fn data(&self) -> &Arc<SyntaxData> {
        &self.data
    }

    pub fn raw(&self) -> &Arc<RawSyntax> {
        self.data.raw()
    }

    pub fn kind(&self) -> SyntaxKind {
        self.data.kind()
    }

    pub fn category(&self) -> SyntaxCategory {
        self.kind().category()
    }

    pub fn is_missing(&self) -> bool {
        self.raw().is_missing()
    }

    pub fn is_root(&self) -> bool {
        Arc::ptr_eq(&self.root, &self.data)
    }

    pub fn parent(&self) -> Option<Syntax> {
        self.data
            .parent()
            .map(|parent| Syntax::new(Arc::clone(&self.root), parent))
    }

    pub fn index_in_parent(&self) -> CursorIndex {
        self.data.index_in_parent()
    }

    pub fn num_children(&self) -> usize {
        self.raw().num_children()
    }

    /// Child at `index`, realized and cached on first access.
    #[track_caller]
    pub fn child(&self, index: CursorIndex) -> Syntax {
        Syntax::new(Arc::clone(&self.root), self.data.realize_child(index))
    }
}

impl fmt::Debug for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Syntax")
            .field("kind", &self.kind())
            .field("raw", self.raw())
            .finish()
    }
}

macro_rules! category_handle {
    ($(#[$meta:meta])* $name:ident => $category:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            syntax: Syntax,
        }

        impl $name {
            pub const CATEGORY: SyntaxCategory = SyntaxCategory::$category;

            pub fn cast(syntax: Syntax) -> Option<Self> {
                (syntax.category() == Self::CATEGORY).then(|| Self { syntax })
            }

            #[track_caller]
            pub fn from_syntax(syntax: Syntax) -> Self {
                $crate::invariant::assert_category(syntax.raw(), Self::CATEGORY);
                Self { syntax }
            }

            #[track_caller]
            pub fn from_parts(root: Arc<SyntaxData>, data: Arc<SyntaxData>) -> Self {
                Self::from_syntax(Syntax::new(root, data))
            }

            /// A fresh root holding this category's missing placeholder.
            pub fn make_missing() -> Self {
                match SyntaxKind::missing(Self::CATEGORY) {
                    Some(kind) => Self {
                        syntax: Syntax::make_root(RawSyntax::missing(kind)),
                    },
                    None => unreachable!("{} has no missing placeholder", Self::CATEGORY),
                }
            }

            pub fn syntax(&self) -> &Syntax {
                &self.syntax
            }

            pub fn into_syntax(self) -> Syntax {
                self.syntax
            }

            pub fn raw(&self) -> &Arc<RawSyntax> {
                self.syntax.raw()
            }

            pub fn kind(&self) -> SyntaxKind {
                self.syntax.kind()
            }

            pub fn is_missing(&self) -> bool {
                self.syntax.is_missing()
            }
        }

        impl From<$name> for Syntax {
            fn from(handle: $name) -> Syntax {
                handle.syntax
            }
        }
    };
}

category_handle!(
    /// Handle to any declaration node.
    DeclSyntax => Decl
);
category_handle!(
    /// Handle to any expression node.
    ExprSyntax => Expr
);
category_handle!(
    /// Handle to any statement node.
    StmtSyntax => Stmt
);
category_handle!(
    /// Handle to any type node.
    TypeSyntax => Type
);
category_handle!(
    /// Handle to any pattern node.
    PatternSyntax => Pattern
);
category_handle!(
    /// Handle to any collection node.
    SyntaxCollectionSyntax => SyntaxCollection
);

/// Handle to a token.
#[derive(Debug, Clone)]
pub struct TokenSyntax {
    syntax: Syntax,
}

impl TokenSyntax {
    /// A present token as the root of a fresh tree.
    pub fn make(kind: TokenKind, text: impl Into<Box<str>>) -> Self {
        Self {
            syntax: Syntax::make_root(RawSyntax::token(kind, text, SourcePresence::Present)),
        }
    }

    pub fn missing_token(kind: TokenKind, text: impl Into<Box<str>>) -> Self {
        Self {
            syntax: Syntax::make_root(RawSyntax::missing_token(kind, text)),
        }
    }

    pub fn cast(syntax: Syntax) -> Option<Self> {
        syntax.raw().is_token().then(|| Self { syntax })
    }

    #[track_caller]
    pub fn from_parts(root: Arc<SyntaxData>, data: Arc<SyntaxData>) -> Self {
        let syntax = Syntax::new(root, data);
        assert!(
            syntax.raw().is_token(),
            "expected a token, found {}",
            syntax.kind()
        );
        Self { syntax }
    }

    pub fn token_kind(&self) -> TokenKind {
        match self.raw().token_kind() {
            Some(kind) => kind,
            None => unreachable!("TokenSyntax always wraps a token"),
        }
    }

    pub fn text(&self) -> &str {
        self.raw().token_text().unwrap_or_default()
    }

    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    pub fn into_syntax(self) -> Syntax {
        self.syntax
    }

    pub fn raw(&self) -> &Arc<RawSyntax> {
        self.syntax.raw()
    }

    pub fn is_missing(&self) -> bool {
        self.syntax.is_missing()
    }
}

impl From<TokenSyntax> for Syntax {
    fn from(token: TokenSyntax) -> Syntax {
        token.syntax
    }
}
