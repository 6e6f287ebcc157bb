//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, DocsSettings, HeadingSettings,
    base_url::normalize_base_url,
    parse::{RawConfig, RawDocs, RawHeadings},
    resolve::resolve_docs_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config). For every field the first defined value wins.
/// A `docs.path` is resolved relative to the file that defines it.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let mut docs = DocsSettings::default();
    let mut headings = HeadingSettings::default();

    // Lowest precedence first so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref raw) = parsed.config.docs {
            apply_raw_docs(&mut docs, raw, config_dir(&parsed.path))?;
        }
        if let Some(ref raw) = parsed.config.headings {
            apply_raw_headings(&mut headings, raw)?;
        }
    }

    let config_root = configs
        .first()
        .map(|c| config_dir(&c.path).to_path_buf());

    Ok(Config {
        docs,
        headings,
        config_root,
    })
}

/// Directory containing a config file.
fn config_dir(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new("."))
}

/// Applies a raw `[docs]` section, overwriting any present values.
fn apply_raw_docs(result: &mut DocsSettings, raw: &RawDocs, dir: &Path) -> Result<(), ConfigError> {
    if let Some(ref path) = raw.path {
        result.path = resolve_docs_path(path, dir)?;
    }
    if let Some(ref url) = raw.base_url {
        result.base_url = normalize_base_url(url)?;
    }
    if let Some(ref sections) = raw.sections {
        result.sections.clone_from(sections);
    }
    if let Some(ref exclude) = raw.exclude {
        result.exclude.clone_from(exclude);
    }
    if let Some(ref extensions) = raw.extensions {
        result.extensions = extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();
    }
    Ok(())
}

/// Applies a raw `[headings]` section, overwriting any present values.
fn apply_raw_headings(result: &mut HeadingSettings, raw: &RawHeadings) -> Result<(), ConfigError> {
    if let Some(depth) = raw.max_depth {
        result.set_max_depth(depth)?;
    }
    if let Some(ref skip) = raw.skip_sections {
        result.skip_sections.clone_from(skip);
    }
    Ok(())
}
