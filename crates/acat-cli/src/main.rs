//! acat - Color asset catalog inspection CLI
//!
//! Decodes color-set `Contents.json` documents and prints or validates
//! the result.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "acat")]
#[command(author, version, about = "Color asset catalog inspection CLI")]
#[command(long_about = "
Decodes color-set Contents.json documents from asset catalogs.

Examples:
  acat list Accent.colorset/Contents.json       # Show decoded entries
  acat list Contents.json --json                # Machine-readable output
  acat list Contents.json --tier 0              # Legacy-mode resolution
  acat check Colors.xcassets/**/Contents.json   # Validate catalogs
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Capability tier for color-space resolution (0, 1 or 2)
    #[arg(short, long, global = true, default_value = "2")]
    tier: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List the decoded entries of a catalog
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Validate one or more catalogs
    #[command(visible_alias = "ck")]
    Check(CheckArgs),
}

/// Arguments for the `list` command.
#[derive(Args)]
struct ListArgs {
    /// Catalog file (Contents.json)
    input: PathBuf,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

/// Arguments for the `check` command.
#[derive(Args)]
struct CheckArgs {
    /// Catalog file(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "acat=debug".into()),
            )
            .init();
    }

    let tier = commands::parse_tier(cli.tier)?;

    match cli.command {
        Commands::List(args) => commands::list::run(args, tier),
        Commands::Check(args) => commands::check::run(args, tier, cli.verbose),
    }
}
