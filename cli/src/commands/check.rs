use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use syntaxgen::{layouts_for, CategoryRegistry};
use syntaxgen_schema::{parse_schema_file, Category, SchemaModel};

use crate::ui;

/// Node and slot totals for one tree category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: Category,
    pub nodes: usize,
    pub slots: usize,
}

pub fn check(schema_path: &Path) -> Result<()> {
    let schema = parse_schema_file(schema_path)?;
    let summaries = summarize(&schema)?;

    ui::print_section(&format!("Schema {}", schema_path.display()));
    for summary in &summaries {
        ui::print_item(&format!(
            "{:<10} {} node(s), {} slot(s)",
            summary.category.to_string().bold(),
            summary.nodes,
            summary.slots
        ));
    }
    let empty: Vec<_> = summaries
        .iter()
        .filter(|s| s.nodes == 0)
        .map(|s| s.category.to_string())
        .collect();
    if !empty.is_empty() {
        ui::print_warning(&format!("No nodes for: {}", empty.join(", ")));
    }
    ui::print_success("Every definition resolves to a category and every slot to a target");
    Ok(())
}

/// Resolve every node of every tree category, failing on the first defect.
pub fn summarize(schema: &SchemaModel) -> Result<Vec<CategorySummary>> {
    let registry = CategoryRegistry::new(schema)?;
    Category::TREE
        .iter()
        .map(|&category| {
            let layouts = layouts_for(schema, &registry, category)?;
            Ok(CategorySummary {
                category,
                nodes: layouts.len(),
                slots: layouts.iter().map(|l| l.arity()).sum(),
            })
        })
        .collect()
}
