//! Core type definitions for schema snapshots

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A validated, read-only snapshot of every class, token and node definition.
///
/// Produced once by a schema front end and never mutated while generating.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SchemaModel {
    #[serde(default)]
    pub classes: Vec<ClassDef>,
    #[serde(default)]
    pub tokens: Vec<TokenDef>,
    pub nodes: Vec<NodeDef>,
}

/// Abstract intermediate class, e.g. `Keyword` deriving from `Token`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenDef {
    pub name: String,
    pub parent: String,
    /// Token kind literal, e.g. `kw_if`.
    pub kind: String,
    /// Exact spelling for closed token sets (keywords, punctuation).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spelling: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NodeDef {
    pub name: String,
    pub parent: String,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

/// A field declared on a node definition.
///
/// Only `Layout` fields are tree children; the others are generation metadata
/// such as `IsRequired`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldDef {
    Layout {
        name: String,
        node: String,
    },
    Bit {
        name: String,
        value: bool,
    },
    #[serde(rename = "string")]
    Text {
        name: String,
        value: String,
    },
    Int {
        name: String,
        value: i64,
    },
}

impl FieldDef {
    pub fn name(&self) -> &str {
        match self {
            FieldDef::Layout { name, .. }
            | FieldDef::Bit { name, .. }
            | FieldDef::Text { name, .. }
            | FieldDef::Int { name, .. } => name,
        }
    }

    /// The referenced definition name when this field is a child slot.
    pub fn layout_target(&self) -> Option<&str> {
        match self {
            FieldDef::Layout { node, .. } => Some(node),
            _ => None,
        }
    }
}

/// Reference to any named definition in the schema.
#[derive(Debug, Clone, Copy)]
pub enum Definition<'a> {
    Class(&'a ClassDef),
    Token(&'a TokenDef),
    Node(&'a NodeDef),
}

impl<'a> Definition<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Definition::Class(class) => &class.name,
            Definition::Token(token) => &token.name,
            Definition::Node(node) => &node.name,
        }
    }

    pub fn parent(&self) -> Option<&'a str> {
        match self {
            Definition::Class(class) => class.parent.as_deref(),
            Definition::Token(token) => Some(&token.parent),
            Definition::Node(node) => Some(&node.parent),
        }
    }
}

impl SchemaModel {
    pub fn node(&self, name: &str) -> Option<&NodeDef> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn token(&self, name: &str) -> Option<&TokenDef> {
        self.tokens.iter().find(|t| t.name == name)
    }

    pub fn class(&self, name: &str) -> Option<&ClassDef> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn definition(&self, name: &str) -> Option<Definition<'_>> {
        self.node(name)
            .map(Definition::Node)
            .or_else(|| self.token(name).map(Definition::Token))
            .or_else(|| self.class(name).map(Definition::Class))
    }

    /// Names of every node and token definition, in declaration order.
    pub fn definition_names(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .map(|n| n.name.as_str())
            .chain(self.tokens.iter().map(|t| t.name.as_str()))
            .collect()
    }

    /// Walk the declared parent chain of `name`, nearest ancestor first.
    ///
    /// The walk yields each parent name and continues only through declared
    /// classes, so it ends at the first name that is not a class (for example a
    /// category root). A cyclic class chain is cut at the first repeat.
    pub fn ancestors<'a>(&'a self, name: &str) -> Ancestors<'a> {
        Ancestors {
            schema: self,
            next: self.definition(name).and_then(|d| d.parent()),
            seen: HashSet::new(),
        }
    }
}

pub struct Ancestors<'a> {
    schema: &'a SchemaModel,
    next: Option<&'a str>,
    seen: HashSet<&'a str>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if !self.seen.insert(current) {
            return None;
        }
        self.next = self.schema.class(current).and_then(|c| c.parent.as_deref());
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> SchemaModel {
        serde_json::from_str(
            r#"{
                "classes": [
                    { "name": "Keyword", "parent": "Token" },
                    { "name": "ControlFlowStmt", "parent": "Stmt" },
                    { "name": "LoopA", "parent": "LoopB" },
                    { "name": "LoopB", "parent": "LoopA" }
                ],
                "tokens": [
                    { "name": "IfKeyword", "parent": "Keyword", "kind": "kw_if", "spelling": "if" }
                ],
                "nodes": [
                    {
                        "name": "IfStmt",
                        "parent": "ControlFlowStmt",
                        "fields": [
                            { "type": "layout", "name": "IfKeyword", "node": "IfKeyword" },
                            { "type": "bit", "name": "IsRequired", "value": true },
                            { "type": "string", "name": "Comment", "value": "if statement" }
                        ]
                    },
                    { "name": "Spinning", "parent": "LoopA" }
                ]
            }"#,
        )
        .expect("fixture should parse")
    }

    #[test]
    fn test_ancestors_walks_through_classes() {
        let schema = schema();
        let chain: Vec<_> = schema.ancestors("IfStmt").collect();
        assert_eq!(chain, vec!["ControlFlowStmt", "Stmt"]);

        let chain: Vec<_> = schema.ancestors("IfKeyword").collect();
        assert_eq!(chain, vec!["Keyword", "Token"]);
    }

    #[test]
    fn test_ancestors_terminates_on_cycle() {
        let schema = schema();
        let chain: Vec<_> = schema.ancestors("Spinning").collect();
        assert_eq!(chain, vec!["LoopA", "LoopB"]);
    }

    #[test]
    fn test_ancestors_of_unknown_is_empty() {
        let schema = schema();
        assert_eq!(schema.ancestors("Nope").count(), 0);
    }

    #[test]
    fn test_field_kinds() {
        let schema = schema();
        let node = schema.node("IfStmt").unwrap();
        let layout: Vec<_> = node.fields.iter().filter_map(|f| f.layout_target()).collect();
        assert_eq!(layout, vec!["IfKeyword"]);
        assert_eq!(node.fields[1].name(), "IsRequired");
        assert!(matches!(node.fields[2], FieldDef::Text { .. }));
    }
}
