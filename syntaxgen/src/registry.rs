//! Category resolution for schema definitions.

use std::collections::HashMap;
use std::fmt;

use syntaxgen_schema::{Category, SchemaModel};

use crate::error::GenError;

/// Placeholder kind synthesized for a missing child of a node-typed slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissingKind {
    MissingDecl,
    MissingExpr,
    MissingStmt,
    MissingType,
    MissingPattern,
    MissingSyntaxCollection,
}

impl MissingKind {
    pub fn name(self) -> &'static str {
        match self {
            MissingKind::MissingDecl => "MissingDecl",
            MissingKind::MissingExpr => "MissingExpr",
            MissingKind::MissingStmt => "MissingStmt",
            MissingKind::MissingType => "MissingType",
            MissingKind::MissingPattern => "MissingPattern",
            MissingKind::MissingSyntaxCollection => "MissingSyntaxCollection",
        }
    }
}

impl fmt::Display for MissingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Precomputed `definition → category` table.
///
/// Built once per schema: every node and token definition is resolved to the
/// nearest registered category in its ancestry. Construction fails on the
/// first definition with no such ancestor.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    by_definition: HashMap<String, Category>,
}

impl CategoryRegistry {
    pub fn new(schema: &SchemaModel) -> Result<Self, GenError> {
        let mut by_definition = HashMap::new();
        for name in schema.definition_names() {
            let category = resolve_ancestry(schema, name)?;
            by_definition.insert(name.to_string(), category);
        }
        tracing::debug!(definitions = by_definition.len(), "built category registry");
        Ok(Self { by_definition })
    }

    pub fn resolve(&self, definition: &str) -> Result<Category, GenError> {
        self.by_definition
            .get(definition)
            .copied()
            .ok_or_else(|| GenError::UnresolvedCategory {
                definition: definition.to_string(),
                ancestry: "not a node or token definition".to_string(),
            })
    }

    pub fn missing_kind_for(category: Category) -> Result<MissingKind, GenError> {
        match category {
            Category::Decl => Ok(MissingKind::MissingDecl),
            Category::Expr => Ok(MissingKind::MissingExpr),
            Category::Stmt => Ok(MissingKind::MissingStmt),
            Category::Type => Ok(MissingKind::MissingType),
            Category::Pattern => Ok(MissingKind::MissingPattern),
            Category::SyntaxCollection => Ok(MissingKind::MissingSyntaxCollection),
            Category::Token | Category::SyntaxFactory | Category::SyntaxRewriter => {
                Err(GenError::NoMissingKind(category))
            }
        }
    }
}

fn resolve_ancestry(schema: &SchemaModel, name: &str) -> Result<Category, GenError> {
    let mut walked = Vec::new();
    for ancestor in schema.ancestors(name) {
        if let Some(category) = Category::registered(ancestor) {
            return Ok(category);
        }
        walked.push(ancestor);
    }
    Err(GenError::UnresolvedCategory {
        definition: name.to_string(),
        ancestry: if walked.is_empty() {
            "no parent".to_string()
        } else {
            walked.join(" -> ")
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syntaxgen_schema::parse_schema_content;

    fn schema() -> SchemaModel {
        parse_schema_content(
            r#"{
                "classes": [
                    { "name": "Keyword", "parent": "Token" },
                    { "name": "ControlFlowStmt", "parent": "Stmt" },
                    { "name": "LoopStmt", "parent": "ControlFlowStmt" }
                ],
                "tokens": [
                    { "name": "WhileKeyword", "parent": "Keyword", "kind": "kw_while", "spelling": "while" }
                ],
                "nodes": [
                    { "name": "AnyExpr", "parent": "Expr" },
                    { "name": "WhileStmt", "parent": "LoopStmt" },
                    { "name": "StmtList", "parent": "SyntaxCollection" }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_resolves_nearest_registered_ancestor() {
        let registry = CategoryRegistry::new(&schema()).unwrap();
        assert_eq!(registry.resolve("WhileStmt").unwrap(), Category::Stmt);
        assert_eq!(registry.resolve("AnyExpr").unwrap(), Category::Expr);
        assert_eq!(registry.resolve("WhileKeyword").unwrap(), Category::Token);
        assert_eq!(
            registry.resolve("StmtList").unwrap(),
            Category::SyntaxCollection
        );
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let schema = schema();
        let a = CategoryRegistry::new(&schema).unwrap();
        let b = CategoryRegistry::new(&schema).unwrap();
        for name in schema.definition_names() {
            assert_eq!(a.resolve(name).unwrap(), a.resolve(name).unwrap());
            assert_eq!(a.resolve(name).unwrap(), b.resolve(name).unwrap());
        }
    }

    #[test]
    fn test_unresolvable_definition_fails_construction() {
        let mut schema = schema();
        schema.nodes.push(syntaxgen_schema::NodeDef {
            name: "Orphan".to_string(),
            parent: "Floating".to_string(),
            fields: vec![],
        });
        let err = CategoryRegistry::new(&schema).unwrap_err();
        match err {
            GenError::UnresolvedCategory {
                definition,
                ancestry,
            } => {
                assert_eq!(definition, "Orphan");
                assert_eq!(ancestry, "Floating");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_kind_table() {
        let expected = [
            (Category::Decl, "MissingDecl"),
            (Category::Expr, "MissingExpr"),
            (Category::Stmt, "MissingStmt"),
            (Category::Type, "MissingType"),
            (Category::Pattern, "MissingPattern"),
            (Category::SyntaxCollection, "MissingSyntaxCollection"),
        ];
        for (category, name) in expected {
            assert_eq!(
                CategoryRegistry::missing_kind_for(category).unwrap().name(),
                name
            );
        }
        assert!(matches!(
            CategoryRegistry::missing_kind_for(Category::Token),
            Err(GenError::NoMissingKind(Category::Token))
        ));
    }

    #[test]
    fn test_no_missing_kind_message_names_category() {
        let err = CategoryRegistry::missing_kind_for(Category::SyntaxRewriter).unwrap_err();
        assert_eq!(err.to_string(), "SyntaxRewriter has no missing placeholder kind");
    }
}
