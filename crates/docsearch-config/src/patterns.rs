//! Exclude pattern compilation and matching.

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::ConfigError;

/// Compiled exclude globs, matched against paths relative to the docs root.
#[derive(Debug, Clone)]
pub struct ExcludePatterns {
    /// All exclude globs combined.
    set: GlobSet,
}

impl ExcludePatterns {
    /// Compiles exclude patterns into a single matcher.
    pub fn compile(patterns: &[String]) -> Result<Self, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(compile_glob(pattern)?);
        }
        let set = builder.build().map_err(|e| ConfigError::InvalidPattern {
            pattern: "<combined exclude patterns>".to_string(),
            source: e,
        })?;
        Ok(Self { set })
    }

    /// Checks if a path relative to the docs root is excluded.
    pub fn is_excluded(&self, rel_path: &Path) -> bool {
        self.set.is_match(rel_path)
    }

    /// Number of compiled patterns.
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// True if no patterns were compiled.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

/// Compiles a single glob pattern.
pub fn compile_glob(pattern: &str) -> Result<Glob, ConfigError> {
    Glob::new(pattern).map_err(|e| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_EXCLUDE_PATTERNS;

    fn defaults() -> ExcludePatterns {
        let patterns: Vec<String> = DEFAULT_EXCLUDE_PATTERNS
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        ExcludePatterns::compile(&patterns).unwrap()
    }

    #[test]
    fn test_default_excludes() {
        let excludes = defaults();

        assert!(excludes.is_excluded(Path::new("2.guide/.navigation.yml")));
        assert!(excludes.is_excluded(Path::new("2.guide/1.concepts/_dir.yml")));
        assert!(excludes.is_excluded(Path::new("3.api/index.md")));
        assert!(excludes.is_excluded(Path::new("3.api/0.index.md")));
        assert!(excludes.is_excluded(Path::new("index.md")));

        assert!(!excludes.is_excluded(Path::new("2.guide/1.concepts/2.rendering.md")));
        assert!(!excludes.is_excluded(Path::new("2.guide/indexing.md")));
    }

    #[test]
    fn test_custom_directory_exclude() {
        let excludes = ExcludePatterns::compile(&["**/drafts/**".to_string()]).unwrap();
        assert!(excludes.is_excluded(Path::new("2.guide/drafts/wip.md")));
        assert!(!excludes.is_excluded(Path::new("2.guide/final.md")));
    }

    #[test]
    fn test_empty_patterns_match_nothing() {
        let excludes = ExcludePatterns::compile(&[]).unwrap();
        assert!(excludes.is_empty());
        assert!(!excludes.is_excluded(Path::new("anything.md")));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = ExcludePatterns::compile(&["[unclosed".to_string()]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
        assert!(err.to_string().contains("[unclosed"));
    }
}
