//! Schema snapshot model for syntaxgen
//!
//! This crate provides the read-only description of syntax node definitions,
//! token definitions and abstract classes that the generator consumes, plus
//! loading from a JSON snapshot.

pub mod category;
pub mod error;
pub mod parse;
pub mod search;
pub mod types;

pub use category::*;
pub use error::*;
pub use parse::*;
pub use search::*;
pub use types::*;
