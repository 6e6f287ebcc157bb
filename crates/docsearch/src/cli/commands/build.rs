//! Implementation of `docsearch build`.

use std::{
    fs,
    io::{self, Write},
    process::ExitCode,
};

use docsearch_config::{Config, ConfigError};
use docsearch_index::to_json;

use crate::cli::{
    args::BuildCommand,
    context::{CommandContext, builder_or_failure},
};

/// Builds the index and writes it as JSON.
pub fn run(ctx: &CommandContext, cmd: &BuildCommand) -> ExitCode {
    let config = match apply_overrides(ctx, cmd) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let builder = match builder_or_failure(&config) {
        Ok(builder) => builder,
        Err(code) => return code,
    };

    let (records, stats) = match builder.generate_index_with_stats() {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let json = match to_json(&records, !cmd.compact) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("error: failed to serialize index: {e}");
            return ExitCode::FAILURE;
        }
    };

    match &cmd.output {
        Some(path) => {
            let path = ctx.resolve(path);
            if let Err(e) = fs::write(&path, format!("{json}\n")) {
                eprintln!("error: failed to write {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
            println!(
                "Indexed {} documents in {} sections: {} records written to {}",
                stats.documents,
                stats.sections,
                stats.records,
                path.display()
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{json}") {
                eprintln!("error: failed to write index: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

/// Applies command-line overrides on top of the loaded configuration.
fn apply_overrides(ctx: &CommandContext, cmd: &BuildCommand) -> Result<Config, ConfigError> {
    let mut config = ctx.config.clone();

    if let Some(root) = &cmd.root {
        config.docs.path = ctx.resolve(root);
    }
    if let Some(url) = &cmd.base_url {
        config.docs.set_base_url(url)?;
    }
    if let Some(depth) = cmd.max_depth {
        config.headings.set_max_depth(depth)?;
    }

    Ok(config)
}
