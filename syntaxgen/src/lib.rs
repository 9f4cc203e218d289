//! Generator for typed syntax node families.
//!
//! Given a [`SchemaModel`](syntaxgen_schema::SchemaModel) and a requested
//! category, `syntaxgen` emits the source for each node of that category: a
//! cursor enum naming its child slots, a cached wrapper whose constructor
//! checks the node's shape, and a handle with lazy accessors and
//! copy-on-write updaters. Generated code links against `syntaxgen-runtime`.
//!
//! ```rust,ignore
//! use syntaxgen::{generate, Action, GenerationRequest};
//! use syntaxgen_schema::{parse_schema_file, Category};
//!
//! let schema = parse_schema_file("nodes.json")?;
//! let source = generate(&schema, &GenerationRequest::new(Category::Stmt, Action::Definition))?;
//! ```

pub mod backend;
mod codegen;
pub mod error;
pub mod generate;
pub mod registry;
pub mod slots;
pub mod tokens;
pub mod utils;

pub use backend::{Backend, RustBackend, RustConfig, TargetLanguage};
pub use error::GenError;
pub use generate::{generate, generate_with, Action, GenerationMode, GenerationRequest};
pub use registry::{CategoryRegistry, MissingKind};
pub use slots::{layouts_for, slots_of, umbrella_name, ChildSlot, NodeLayout, SlotTarget};
pub use tokens::{extract_token_constraint, TokenConstraint, OPEN_TOKEN_CLASSES};
