//! Command line front end for the pattern catalogue.
//!
//! ```bash
//! patterns list --category creational
//! patterns list --json
//! patterns run faceted-builder visitor
//! patterns all --category structural
//! ```

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use design_patterns::catalogue::{self, by_category};
use design_patterns::{CatalogueConfig, CatalogueError, Category, Pattern, CATALOGUE};

#[derive(Parser)]
#[command(name = "patterns")]
#[command(version)]
#[command(about = "Browse and run design pattern demonstrations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ./patterns.toml when present)
    #[arg(long, global = true, env = "PATTERNS_CONFIG")]
    config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalogue
    List {
        #[arg(long, short)]
        category: Option<Category>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Run one or more demonstrations by name
    Run {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Run every demonstration, minus the configured skips
    All {
        #[arg(long, short)]
        category: Option<Category>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e.to_string().red());
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<(), CatalogueError> {
    let config = CatalogueConfig::load(cli.config.as_deref())?;
    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::List { category, json } => cmd_list(category, json),
        Commands::Run { names } => cmd_run(&names, &config),
        Commands::All { category } => cmd_all(category, &config),
    }
}

fn selection(category: Option<Category>) -> Vec<&'static Pattern> {
    match category {
        Some(category) => by_category(category).collect(),
        None => CATALOGUE.iter().collect(),
    }
}

fn cmd_list(category: Option<Category>, json: bool) -> Result<(), CatalogueError> {
    let patterns = selection(category);
    info!(count = patterns.len(), "listing patterns");

    if json {
        println!("{}", serde_json::to_string_pretty(&patterns)?);
        return Ok(());
    }

    for category in Category::ALL {
        let group: Vec<_> = patterns
            .iter()
            .filter(|pattern| pattern.category == category)
            .collect();
        if group.is_empty() {
            continue;
        }
        println!("{}", category.as_str().to_uppercase().bold());
        for pattern in group {
            println!("  {:<26}{}", pattern.name.cyan(), pattern.summary.dimmed());
        }
    }
    Ok(())
}

fn cmd_run(names: &[String], config: &CatalogueConfig) -> Result<(), CatalogueError> {
    // Resolve everything first so a typo fails before any output.
    let patterns = names
        .iter()
        .map(|name| catalogue::find(name))
        .collect::<Result<Vec<_>, _>>()?;

    for pattern in patterns {
        print_run(pattern, config);
    }
    Ok(())
}

fn cmd_all(category: Option<Category>, config: &CatalogueConfig) -> Result<(), CatalogueError> {
    for pattern in selection(category) {
        if config.is_skipped(pattern) {
            info!(name = pattern.name, "skipped by config");
            continue;
        }
        print_run(pattern, config);
    }
    Ok(())
}

fn print_run(pattern: &Pattern, config: &CatalogueConfig) {
    info!(name = pattern.name, "running pattern");
    println!(
        "{} {}",
        "==".green().bold(),
        pattern.name.green().bold()
    );
    if config.show_summary {
        println!("{}", pattern.summary.dimmed());
    }
    print!("{}", pattern.run());
    println!();
}
