//! Typed syntax nodes for a small statement language.
//!
//! Everything in this crate is generated by `build.rs` from
//! `schema/nodes.json`. Each node `N` gets an `NCursor` slot enum, an
//! `NSyntaxData` wrapper, an `NSyntax` handle and an `NSyntaxApi` trait with
//! its accessors and updaters.
//!
//! ```
//! use syntaxgen_nodes::runtime::{TokenKind, TokenSyntax};
//! use syntaxgen_nodes::{ReturnStmtSyntax, ReturnStmtSyntaxApi};
//!
//! let blank = ReturnStmtSyntax::make_blank();
//! assert!(blank.get_return_keyword().is_none());
//!
//! let stmt = blank.with_return_keyword(TokenSyntax::make(TokenKind::new("kw_return"), "return"));
//! assert_eq!(stmt.get_return_keyword().unwrap().text(), "return");
//! assert!(blank.get_return_keyword().is_none());
//! ```

mod generated {
    include!(concat!(env!("OUT_DIR"), "/decl_declaration.rs"));
    include!(concat!(env!("OUT_DIR"), "/decl_definition.rs"));
    include!(concat!(env!("OUT_DIR"), "/expr_declaration.rs"));
    include!(concat!(env!("OUT_DIR"), "/expr_definition.rs"));
    include!(concat!(env!("OUT_DIR"), "/stmt_declaration.rs"));
    include!(concat!(env!("OUT_DIR"), "/stmt_definition.rs"));
    include!(concat!(env!("OUT_DIR"), "/type_declaration.rs"));
    include!(concat!(env!("OUT_DIR"), "/type_definition.rs"));
    include!(concat!(env!("OUT_DIR"), "/pattern_declaration.rs"));
    include!(concat!(env!("OUT_DIR"), "/pattern_definition.rs"));
}

pub use generated::*;
pub use syntaxgen_runtime as runtime;
