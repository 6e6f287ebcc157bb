//! Path resolution for the documentation root.
//!
//! Resolves relative and tilde-prefixed paths to absolute paths.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a documentation root to an absolute path.
///
/// Handles three cases:
/// - Tilde paths (`~/docs`) - expanded to home directory
/// - Relative paths (`./docs`, `../shared`) - resolved relative to `base_dir`
/// - Absolute paths (`/home/user/docs`) - returned as-is
///
/// Existing paths are canonicalized. A missing path is returned unresolved so
/// that validation can report it; the index builder rejects it later.
pub fn resolve_docs_path(path: &str, base_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        base_dir.join(&expanded)
    };

    if !absolute.exists() {
        return Ok(absolute);
    }

    absolute
        .canonicalize()
        .map_err(|source| ConfigError::PathResolution {
            path: absolute.clone(),
            source,
        })
}

/// Expands a tilde prefix to the home directory.
///
/// - `~` alone becomes the home directory
/// - `~/foo` becomes home directory joined with `foo`
/// - Paths not starting with `~` are returned unchanged
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDir;

    #[test]
    fn test_resolve_relative_path() {
        let test_dir = TestDir::new();
        let docs = test_dir.create_dir("docs");

        let resolved = resolve_docs_path("./docs", test_dir.path()).unwrap();
        assert_eq!(resolved, docs.canonicalize().unwrap());

        let resolved = resolve_docs_path("docs", test_dir.path()).unwrap();
        assert_eq!(resolved, docs.canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_parent_relative_path() {
        let test_dir = TestDir::new();
        let shared = test_dir.create_dir("shared");
        let project = test_dir.create_dir("project");

        let resolved = resolve_docs_path("../shared", &project).unwrap();
        assert_eq!(resolved, shared.canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_absolute_path() {
        let test_dir = TestDir::new();
        let docs = test_dir.create_dir("docs");
        let abs = docs.canonicalize().unwrap();

        let resolved = resolve_docs_path(abs.to_str().unwrap(), Path::new("/elsewhere")).unwrap();
        assert_eq!(resolved, abs);
    }

    #[test]
    fn test_missing_path_is_kept() {
        let test_dir = TestDir::new();
        let resolved = resolve_docs_path("./nope", test_dir.path()).unwrap();
        assert_eq!(resolved, test_dir.path().join("./nope"));
    }

    #[test]
    fn test_expand_tilde() {
        let home = home_dir().unwrap();
        assert_eq!(expand_tilde("~").unwrap(), home);
        assert_eq!(expand_tilde("~/docs").unwrap(), home.join("docs"));
        assert_eq!(expand_tilde("docs").unwrap(), PathBuf::from("docs"));
    }
}
