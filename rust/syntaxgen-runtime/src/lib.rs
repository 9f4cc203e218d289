//! # syntaxgen-runtime
//!
//! Support library for node types generated by `syntaxgen`.
//!
//! Three layers cooperate:
//!
//! - [`RawSyntax`] - the immutable, structurally shared tree
//! - [`SyntaxData`] - a parent-linked wrapper with a lazily realized,
//!   thread-safe cache of child wrappers
//! - handles ([`Syntax`], [`TokenSyntax`], [`ExprSyntax`], ...) - cheap values
//!   that pair a wrapper with the root keeping its tree alive
//!
//! Generated node types build on these and call into [`invariant`] to check
//! that a raw tree matches its declared shape.
//!
//! ## Example
//!
//! ```rust
//! use syntaxgen_runtime::{ExprSyntax, TokenKind, TokenSyntax};
//!
//! let ident = TokenSyntax::make(TokenKind::new("identifier"), "count");
//! assert_eq!(ident.text(), "count");
//! assert!(ExprSyntax::make_missing().is_missing());
//! ```

mod data;
mod handle;
pub mod invariant;
mod kind;
mod raw;

pub use data::{CursorIndex, SyntaxData};
pub use handle::{
    DeclSyntax, ExprSyntax, PatternSyntax, StmtSyntax, Syntax, SyntaxCollectionSyntax,
    TokenSyntax, TypeSyntax,
};
pub use kind::{SyntaxCategory, SyntaxKind, TokenKind};
pub use raw::{RawSyntax, SourcePresence};
