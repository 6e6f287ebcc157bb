//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::{fmt, fs};

use crate::{Config, patterns::compile_glob};

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The documentation root does not exist.
    DocsPathMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The documentation root exists but is not a directory.
    DocsPathNotDirectory {
        /// Path that is not a directory.
        path: String,
    },
    /// The documentation root contains no section directories.
    NoSectionsFound {
        /// The documentation root.
        path: String,
    },
    /// A section named in `docs.sections` has no matching directory.
    SectionMissing {
        /// The configured section directory name.
        section: String,
    },
    /// An exclude pattern does not compile.
    InvalidExcludePattern {
        /// The rejected pattern.
        pattern: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DocsPathMissing { path } => {
                write!(f, "docs path does not exist: {path}")
            }
            Self::DocsPathNotDirectory { path } => {
                write!(f, "docs path is not a directory: {path}")
            }
            Self::NoSectionsFound { path } => {
                write!(f, "no section directories found under {path}")
            }
            Self::SectionMissing { section } => {
                write!(f, "configured section '{section}' has no directory")
            }
            Self::InvalidExcludePattern { pattern } => {
                write!(f, "exclude pattern '{pattern}' is not a valid glob")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
///
/// This checks for:
/// - A docs root that doesn't exist or isn't a directory
/// - A docs root without section directories
/// - Configured sections that don't exist
/// - Exclude patterns that don't compile
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings: Vec<ConfigWarning> = config
        .docs
        .exclude
        .iter()
        .filter(|pattern| compile_glob(pattern).is_err())
        .map(|pattern| ConfigWarning::InvalidExcludePattern {
            pattern: pattern.clone(),
        })
        .collect();

    let root = &config.docs.path;
    if !root.exists() {
        warnings.push(ConfigWarning::DocsPathMissing {
            path: root.display().to_string(),
        });
        return warnings;
    }

    if !root.is_dir() {
        warnings.push(ConfigWarning::DocsPathNotDirectory {
            path: root.display().to_string(),
        });
        return warnings;
    }

    let section_dirs: Vec<String> = fs::read_dir(root)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    if section_dirs.is_empty() {
        warnings.push(ConfigWarning::NoSectionsFound {
            path: root.display().to_string(),
        });
    }

    for section in &config.docs.sections {
        if !section_dirs.contains(section) {
            warnings.push(ConfigWarning::SectionMissing {
                section: section.clone(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDir;

    fn config_for(root: &TestDir) -> Config {
        let mut config = Config::default();
        config.docs.path = root.path().to_path_buf();
        config
    }

    #[test]
    fn test_valid_config_has_no_warnings() {
        let dir = TestDir::new();
        dir.create_file("1.getting-started/1.intro.md");

        assert!(validate_config(&config_for(&dir)).is_empty());
    }

    #[test]
    fn test_missing_docs_path() {
        let dir = TestDir::new();
        let mut config = config_for(&dir);
        config.docs.path = dir.path().join("missing");

        let warnings = validate_config(&config);
        assert!(matches!(
            warnings.as_slice(),
            [ConfigWarning::DocsPathMissing { .. }]
        ));
    }

    #[test]
    fn test_docs_path_is_file() {
        let dir = TestDir::new();
        let file = dir.create_file("docs.md");
        let mut config = config_for(&dir);
        config.docs.path = file;

        let warnings = validate_config(&config);
        assert!(matches!(
            warnings.as_slice(),
            [ConfigWarning::DocsPathNotDirectory { .. }]
        ));
    }

    #[test]
    fn test_no_sections() {
        let dir = TestDir::new();
        dir.create_file("stray.md");

        let warnings = validate_config(&config_for(&dir));
        assert!(matches!(
            warnings.as_slice(),
            [ConfigWarning::NoSectionsFound { .. }]
        ));
    }

    #[test]
    fn test_configured_section_missing() {
        let dir = TestDir::new();
        dir.create_dir("2.guide");
        let mut config = config_for(&dir);
        config.docs.sections = vec!["2.guide".into(), "9.extra".into()];

        let warnings = validate_config(&config);
        assert_eq!(
            warnings,
            vec![ConfigWarning::SectionMissing {
                section: "9.extra".into()
            }]
        );
        assert!(warnings[0].to_string().contains("9.extra"));
    }

    #[test]
    fn test_invalid_exclude_pattern() {
        let dir = TestDir::new();
        dir.create_dir("2.guide");
        let mut config = config_for(&dir);
        config.docs.exclude.push("[bad".into());

        let warnings = validate_config(&config);
        assert_eq!(
            warnings,
            vec![ConfigWarning::InvalidExcludePattern {
                pattern: "[bad".into()
            }]
        );
    }
}
