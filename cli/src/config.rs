use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use syntaxgen::{Action, RustConfig, TargetLanguage};
use syntaxgen_schema::Category;

pub const DEFAULT_CONFIG_FILE: &str = "syntaxgen.toml";

/// Main configuration structure for syntaxgen.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntaxgenConfig {
    /// Path to the JSON schema snapshot
    pub schema: String,

    /// Directory generated documents are written to
    #[serde(default = "default_output_dir")]
    pub output: String,

    #[serde(default)]
    pub language: TargetLanguage,

    #[serde(default)]
    pub rust: RustConfig,

    /// Documents to generate; every tree category in both halves when empty
    #[serde(default)]
    pub targets: Vec<TargetConfig>,

    /// Directory relative paths resolve against
    #[serde(skip)]
    base_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetConfig {
    pub category: Category,
    pub action: Action,

    /// Output file name (default: `<category>_<action>.rs`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl TargetConfig {
    pub fn new(category: Category, action: Action) -> Self {
        Self {
            category,
            action,
            file: None,
        }
    }

    pub fn file_name(&self) -> String {
        match &self.file {
            Some(file) => file.clone(),
            None => format!("{}_{}.rs", self.category.file_stem(), self.action.name()),
        }
    }
}

fn default_output_dir() -> String {
    "./generated".to_string()
}

impl SyntaxgenConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: SyntaxgenConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        config.validate()?;
        tracing::debug!(path = %path.display(), targets = config.targets().len(), "loaded config");
        Ok(config)
    }

    /// Try to load config, returning None if file doesn't exist
    pub fn load_optional<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.schema.trim().is_empty() {
            anyhow::bail!("Schema path cannot be empty");
        }

        let mut files = HashSet::new();
        for target in &self.targets {
            if !target.category.is_requestable() {
                anyhow::bail!(
                    "Target category {} cannot be generated; expected one of Decl, Expr, Stmt, Type, Pattern, SyntaxFactory, SyntaxRewriter",
                    target.category
                );
            }
            let file = target.file_name();
            if !files.insert(file.clone()) {
                anyhow::bail!("Duplicate output file: {}", file);
            }
        }

        Ok(())
    }

    pub fn schema_path(&self) -> PathBuf {
        self.base_dir.join(&self.schema)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.base_dir.join(&self.output)
    }

    /// Configured targets, or both halves of every tree category.
    pub fn targets(&self) -> Vec<TargetConfig> {
        if !self.targets.is_empty() {
            return self.targets.clone();
        }
        Category::TREE
            .iter()
            .flat_map(|&category| {
                Action::ALL
                    .iter()
                    .map(move |&action| TargetConfig::new(category, action))
            })
            .collect()
    }
}
