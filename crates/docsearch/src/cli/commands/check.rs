//! Implementation of `docsearch check`.

use std::process::ExitCode;

use docsearch_config::{ConfigWarning, discover_config_files};

use crate::cli::context::CommandContext;

/// Exit codes for `docsearch check`.
mod exit_codes {
    use std::process::ExitCode;

    /// Configuration is valid with no warnings.
    pub const OK: ExitCode = ExitCode::SUCCESS;
    /// Configuration has warnings; building may fail or produce an empty index.
    pub const WARNINGS: ExitCode = ExitCode::FAILURE;
}

/// Validates configuration and reports problems with the docs tree.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);

    println!("Checking configuration...");
    println!();

    if config_files.is_empty() {
        println!("No configuration files found, using defaults.");
    } else {
        println!("Config files:");
        for path in &config_files {
            println!("  {}", path.display());
        }
    }
    println!();

    let config = &ctx.config;
    let status = if config.docs.path.is_dir() { "ok" } else { "missing" };
    println!("Docs root: {} [{status}]", config.docs.path.display());
    println!("Base URL: {}", config.docs.base_url);
    println!(
        "Headings: up to depth {}, skipped in [{}]",
        config.headings.max_depth,
        config.headings.skip_sections.join(", ")
    );
    println!();

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return exit_codes::OK;
    }

    println!("Warnings ({}):", warnings.len());
    for warning in &warnings {
        println!("  - {warning}");
    }
    println!();

    print_hints(&warnings);

    exit_codes::WARNINGS
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints: Vec<&str> = warnings
        .iter()
        .map(|warning| match warning {
            ConfigWarning::DocsPathMissing { .. } => {
                "Create the docs directory, set [docs] path, or pass --root to build."
            }
            ConfigWarning::DocsPathNotDirectory { .. } => {
                "The docs path must point to a directory, not a file."
            }
            ConfigWarning::NoSectionsFound { .. } => {
                "Pages are only indexed inside section directories under the docs root."
            }
            ConfigWarning::SectionMissing { .. } => {
                "Entries in [docs] sections must match directory names, including numeric prefixes."
            }
            ConfigWarning::InvalidExcludePattern { .. } => {
                "Fix the glob syntax of the listed exclude pattern."
            }
        })
        .collect();

    hints.sort_unstable();
    hints.dedup();

    if !hints.is_empty() {
        println!("Hints:");
        for hint in hints {
            println!("  - {hint}");
        }
    }
}
