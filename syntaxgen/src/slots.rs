//! Child slot resolution.
//!
//! A slot's ordinal is its position among the node's layout fields. Generated
//! accessors embed it verbatim as the cursor index, so the order returned here
//! is part of the generated tree's layout.

use syntaxgen_schema::{closest_name, Category, Definition, NodeDef, SchemaModel};

use crate::error::GenError;
use crate::registry::{CategoryRegistry, MissingKind};
use crate::tokens::{extract_token_constraint, TokenConstraint};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotTarget {
    Token(TokenConstraint),
    Node { name: String, category: Category },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildSlot {
    pub name: String,
    pub ordinal: usize,
    pub target: SlotTarget,
}

impl ChildSlot {
    pub fn token(&self) -> Option<&TokenConstraint> {
        match &self.target {
            SlotTarget::Token(constraint) => Some(constraint),
            SlotTarget::Node { .. } => None,
        }
    }

    /// Category of whatever may occupy this slot.
    pub fn category(&self) -> Category {
        match &self.target {
            SlotTarget::Token(_) => Category::Token,
            SlotTarget::Node { category, .. } => *category,
        }
    }

    /// Placeholder kind for node-typed slots.
    pub fn missing_kind(&self) -> Result<MissingKind, GenError> {
        CategoryRegistry::missing_kind_for(self.category())
    }
}

/// A node definition with its category and slots resolved.
#[derive(Debug, Clone)]
pub struct NodeLayout {
    pub name: String,
    pub category: Category,
    pub slots: Vec<ChildSlot>,
}

impl NodeLayout {
    pub fn arity(&self) -> usize {
        self.slots.len()
    }
}

pub fn slots_of(
    schema: &SchemaModel,
    registry: &CategoryRegistry,
    node: &NodeDef,
) -> Result<Vec<ChildSlot>, GenError> {
    node.fields
        .iter()
        .filter_map(|field| field.layout_target().map(|target| (field.name(), target)))
        .enumerate()
        .map(|(ordinal, (name, target))| {
            if !is_plain_ident(name) {
                return Err(GenError::InvalidIdentifier(format!("{}.{}", node.name, name)));
            }
            let target = match schema.definition(target) {
                Some(Definition::Token(token)) => {
                    SlotTarget::Token(extract_token_constraint(schema, token)?)
                }
                Some(Definition::Node(child)) => SlotTarget::Node {
                    name: child.name.clone(),
                    category: registry.resolve(&child.name)?,
                },
                Some(Definition::Class(_)) | None => {
                    return Err(unknown_target(schema, node, name, target))
                }
            };
            Ok(ChildSlot {
                name: name.to_string(),
                ordinal,
                target,
            })
        })
        .collect()
}

fn unknown_target(schema: &SchemaModel, node: &NodeDef, slot: &str, target: &str) -> GenError {
    let candidates = schema.definition_names();
    GenError::UnknownLayoutTarget {
        node: node.name.clone(),
        slot: slot.to_string(),
        target: target.to_string(),
        suggestion: closest_name(target, &candidates, 3),
    }
}

/// Whether `name` can be spliced into generated identifiers such as
/// `get_{name}` or `{name}Syntax`. Raw identifiers (`r#type`) parse as idents
/// but cannot be prefixed or suffixed.
fn is_plain_ident(name: &str) -> bool {
    !name.starts_with("r#") && syn::parse_str::<syn::Ident>(name).is_ok()
}

/// Name of a category's umbrella "any node of this category" definition.
pub fn umbrella_name(category: Category) -> String {
    format!("Any{}", category)
}

/// Layouts of every node in `category`, in schema order, skipping the
/// category's umbrella node.
pub fn layouts_for(
    schema: &SchemaModel,
    registry: &CategoryRegistry,
    category: Category,
) -> Result<Vec<NodeLayout>, GenError> {
    let umbrella = umbrella_name(category);
    let mut layouts = Vec::new();
    for node in &schema.nodes {
        if node.name == umbrella || registry.resolve(&node.name)? != category {
            continue;
        }
        if !is_plain_ident(&node.name) {
            return Err(GenError::InvalidIdentifier(node.name.clone()));
        }
        let slots = slots_of(schema, registry, node)?;
        layouts.push(NodeLayout {
            name: node.name.clone(),
            category,
            slots,
        });
    }
    Ok(layouts)
}
