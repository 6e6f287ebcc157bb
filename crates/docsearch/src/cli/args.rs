//! Clap argument definitions for the `docsearch` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "docsearch")]
#[command(about = "Build a flat search index from markdown documentation")]
pub struct Cli {
    /// Log verbosity (-v for debug, -vv for trace). RUST_LOG overrides it.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for `docsearch build`.
#[derive(Args, Debug, Clone, Default)]
pub struct BuildCommand {
    /// Documentation root [default: from config, or ./docs]
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Base URL for record permalinks [default: https://nuxt.com/docs]
    #[arg(long)]
    pub base_url: Option<String>,

    /// Deepest heading level to index (1-6) [default: 3]
    #[arg(long)]
    pub max_depth: Option<u8>,

    /// Write the index to a file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed JSON
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for `docsearch inspect`.
#[derive(Args, Debug, Clone)]
pub struct InspectCommand {
    /// Markdown file to inspect
    pub file: PathBuf,

    /// Section name to index the file under [default: inferred from the docs root]
    #[arg(long)]
    pub section: Option<String>,
}

/// Arguments for `docsearch init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `docsearch` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Build the search index and write it as JSON
    #[command(after_help = "\
EXAMPLES:
  docsearch build > search-index.json
  docsearch build --root content --base-url https://example.com/docs
  docsearch build --max-depth 2 --compact -o public/search.json")]
    Build(BuildCommand),

    /// Show the headings and records derived from one file
    Inspect(InspectCommand),

    /// Initialize docsearch configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,

    /// Validate configuration and diagnose issues
    Check,
}
