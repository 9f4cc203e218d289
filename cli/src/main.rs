//! # syntaxgen-cli
//!
//! Command-line front end for the `syntaxgen` node generator.
//!
//! ## Commands
//!
//! - `syntaxgen generate` - Generate one document for a category and action
//! - `syntaxgen build` - Generate every target listed in `syntaxgen.toml`
//! - `syntaxgen check` - Resolve every node in a schema and report counts
//!
//! See `syntaxgen --help` for the full command reference.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use std::process;

use syntaxgen::RustConfig;

mod commands;
mod config;
mod telemetry;
mod ui;

use commands::UsageError;

#[derive(Parser)]
#[command(name = "syntaxgen")]
#[command(about = "Generate typed syntax node sources from a syntax schema", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose (debug-level) logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate declarations or definitions for one category
    Generate {
        /// Path to the JSON schema snapshot
        #[arg(short, long)]
        schema: PathBuf,

        /// Decl, Expr, Stmt, Type, Pattern, SyntaxFactory or SyntaxRewriter
        #[arg(short, long)]
        category: String,

        /// declaration (interface) or definition (implementation)
        #[arg(short, long)]
        action: Option<String>,

        /// Target language backend
        #[arg(short, long, default_value = "rust")]
        language: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path generated code uses to reach the runtime crate
        #[arg(long, default_value = "::syntaxgen_runtime")]
        runtime_path: String,

        /// Omit doc comments from generated code
        #[arg(long)]
        no_docs: bool,
    },

    /// Generate every target listed in a config file
    Build {
        /// Path to syntaxgen.toml configuration file
        #[arg(short, long, default_value = config::DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },

    /// Check that every node in a schema resolves
    Check {
        /// Path to the JSON schema snapshot
        #[arg(short, long)]
        schema: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "syntaxgen", &mut io::stdout());
        return;
    }

    if let Err(e) = telemetry::init(telemetry::TelemetryConfig::default().with_verbose(cli.verbose)) {
        eprintln!("{} {}", "Warning:".yellow().bold(), e);
    }

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(usage) = e.downcast_ref::<UsageError>() {
            print_usage(usage.command);
        } else {
            for cause in e.chain().skip(1) {
                eprintln!("  {} {}", "caused by:".dimmed(), cause);
            }
        }
        process::exit(1);
    }
}

fn print_usage(command: &str) {
    let mut cmd = Cli::command();
    match cmd.find_subcommand_mut(command) {
        Some(sub) => eprintln!("\n{}", sub.render_help()),
        None => eprintln!("\n{}", cmd.render_help()),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Generate {
            schema,
            category,
            action,
            language,
            output,
            runtime_path,
            no_docs,
        } => commands::generate::run(commands::generate::GenerateArgs {
            schema: &schema,
            category: &category,
            action: action.as_deref(),
            language: &language,
            output: output.as_deref(),
            rust: RustConfig {
                runtime_path,
                emit_docs: !no_docs,
            },
        }),
        Commands::Build { config } => commands::build::build(&config),
        Commands::Check { schema } => commands::check::check(&schema),
    }
}
