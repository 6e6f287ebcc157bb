//! Configuration file parsing.
//!
//! Parses individual `.docsearch.toml` files into intermediate `RawConfig`
//! structures that keep every field optional until merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Documentation tree settings.
    pub docs: Option<RawDocs>,
    /// Heading indexing settings.
    pub headings: Option<RawHeadings>,
}

/// Raw `[docs]` section.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDocs {
    /// Documentation root, relative to the config file.
    pub path: Option<String>,
    /// Base URL that record URLs start with.
    pub base_url: Option<String>,
    /// Section directory allow-list; a single string is accepted.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub sections: Option<Vec<String>>,
    /// Exclude globs; a single string is accepted.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub exclude: Option<Vec<String>>,
    /// Document file extensions.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub extensions: Option<Vec<String>>,
}

/// Raw `[headings]` section.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawHeadings {
    /// Deepest heading level that is indexed.
    pub max_depth: Option<u8>,
    /// Sections whose headings are not indexed; a single string is accepted.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub skip_sections: Option<Vec<String>>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
