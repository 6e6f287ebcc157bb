//! Configuration system for docsearch.
//!
//! docsearch uses TOML configuration files named `.docsearch.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.docsearch.toml` files found, then loading `~/.docsearch.toml` as the global config with
//! lowest precedence. Every setting has a default, so no file is required.

#![warn(missing_docs)]

mod base_url;
mod discovery;
mod error;
mod merge;
mod parse;
mod patterns;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use base_url::{DEFAULT_BASE_URL, normalize_base_url};
pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{RawConfig, RawDocs, RawHeadings, parse_config_file, parse_config_str};
pub use patterns::ExcludePatterns;
pub use resolve::resolve_docs_path;
use serde::{Deserialize, Serialize};
pub use templates::config_template;
use toml::ser;
use tracing::debug;
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default documentation root, relative to the working directory.
pub const DEFAULT_DOCS_PATH: &str = "docs";

/// Default exclude globs: navigation metadata and section index pages.
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &["**/*.yml", "**/*index.md"];

/// Default document file extensions.
pub const DEFAULT_EXTENSIONS: &[&str] = &["md"];

/// Default deepest heading level that is indexed.
pub const DEFAULT_MAX_HEADING_DEPTH: u8 = 3;

/// Sections whose headings are not indexed by default.
pub const DEFAULT_SKIP_SECTIONS: &[&str] = &["api"];

/// Deepest heading level markdown supports.
const MAX_HEADING_LEVEL: u8 = 6;

/// Top-level merged configuration for docsearch.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.docsearch.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Documentation tree settings.
    pub docs: DocsSettings,
    /// Heading indexing settings.
    pub headings: HeadingSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.docsearch.toml` files.
    ///
    /// This is the main entry point for loading configuration. It:
    /// 1. Discovers all `.docsearch.toml` files from `cwd` up to the filesystem root
    /// 2. Appends `~/.docsearch.toml` if it exists
    /// 3. Parses each file
    /// 4. Merges them according to precedence rules (closest to `cwd` wins)
    ///
    /// A docs path that no file set is resolved against `cwd`.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        debug!(files = config_files.len(), "discovered config files");

        let mut config = Self::load_from_files(&config_files)?;
        if config.docs.path.is_relative() {
            config.docs.path = cwd.join(&config.docs.path);
        }
        Ok(config)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    ///
    /// Returns `Ok(Config::default())` if the list is empty.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Compiles the exclude globs for this configuration.
    pub fn compile_excludes(&self) -> Result<ExcludePatterns, ConfigError> {
        ExcludePatterns::compile(&self.docs.exclude)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - A docs root that doesn't exist or isn't a directory
    /// - A docs root without section directories
    /// - Configured sections that don't exist
    /// - Exclude patterns that don't compile
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output uses the same layout as a `.docsearch.toml` file.
    pub fn settings_to_toml(&self) -> Result<String, ser::Error> {
        let serializable = SerializableSettings {
            docs: &self.docs,
            headings: &self.headings,
        };
        toml::to_string_pretty(&serializable)
    }
}

/// Settings for the documentation tree.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DocsSettings {
    /// Documentation root directory.
    pub path: PathBuf,
    /// Base URL that record URLs start with, without a trailing slash.
    pub base_url: String,
    /// Section directories to index. Empty means every directory under the root.
    pub sections: Vec<String>,
    /// Globs, relative to the docs root, for files that are never indexed.
    pub exclude: Vec<String>,
    /// File extensions, without a leading dot, of indexed documents.
    pub extensions: Vec<String>,
}

impl Default for DocsSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DOCS_PATH),
            base_url: DEFAULT_BASE_URL.to_string(),
            sections: Vec::new(),
            exclude: to_strings(DEFAULT_EXCLUDE_PATTERNS),
            extensions: to_strings(DEFAULT_EXTENSIONS),
        }
    }
}

impl DocsSettings {
    /// Replaces the base URL after validating it.
    pub fn set_base_url(&mut self, url: &str) -> Result<(), ConfigError> {
        self.base_url = normalize_base_url(url)?;
        Ok(())
    }

    /// Checks whether a section directory is selected for indexing.
    pub fn includes_section(&self, dir_name: &str) -> bool {
        self.sections.is_empty() || self.sections.iter().any(|s| s == dir_name)
    }

    /// Checks whether a file extension marks an indexable document.
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e == ext)
    }
}

/// Settings for heading extraction.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HeadingSettings {
    /// Deepest heading level that is indexed (1-6).
    pub max_depth: u8,
    /// Section segments whose headings are not indexed.
    pub skip_sections: Vec<String>,
}

impl Default for HeadingSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_HEADING_DEPTH,
            skip_sections: to_strings(DEFAULT_SKIP_SECTIONS),
        }
    }
}

impl HeadingSettings {
    /// Replaces the depth limit after checking it is a markdown heading level.
    pub fn set_max_depth(&mut self, depth: u8) -> Result<(), ConfigError> {
        if !(1..=MAX_HEADING_LEVEL).contains(&depth) {
            return Err(ConfigError::InvalidMaxDepth { depth });
        }
        self.max_depth = depth;
        Ok(())
    }
}

/// Borrowed settings in `.docsearch.toml` layout.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Documentation tree settings.
    docs: &'a DocsSettings,
    /// Heading indexing settings.
    headings: &'a HeadingSettings,
}

/// Converts a static string list into owned strings.
fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
