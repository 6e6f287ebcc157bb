//! Reading documentation pages from disk.

use std::{fs, path::Path};

use tracing::trace;

use crate::{Document, DocumentError, parse_frontmatter};

/// Reads a documentation page from disk.
///
/// The page must carry front matter with a non-empty `title`; any failure is
/// reported with the offending path attached.
pub fn read_document(path: &Path) -> Result<Document, DocumentError> {
    let content = fs::read_to_string(path).map_err(|source| DocumentError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    trace!(path = %path.display(), bytes = content.len(), "read document");
    parse_document(&content, path)
}

/// Parses page content into a document. `path` is used for error reporting only.
pub fn parse_document(content: &str, path: &Path) -> Result<Document, DocumentError> {
    let (frontmatter, body) = parse_frontmatter(content)
        .map_err(|source| DocumentError::InvalidFrontmatter {
            path: path.to_path_buf(),
            source,
        })?
        .ok_or_else(|| DocumentError::MissingFrontmatter {
            path: path.to_path_buf(),
        })?;

    let title = frontmatter
        .title()
        .ok_or_else(|| DocumentError::MissingTitle {
            path: path.to_path_buf(),
        })?
        .to_string();

    Ok(Document {
        path: path.to_path_buf(),
        title,
        frontmatter,
        body: body.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_parse_document() {
        let content = "---\ntitle: Routing\n---\n\n## Pages\n\nText.";
        let doc = parse_document(content, Path::new("3.routing.md")).unwrap();

        assert_eq!(doc.title, "Routing");
        assert_eq!(doc.path, PathBuf::from("3.routing.md"));
        assert!(doc.body.contains("## Pages"));
        assert!(!doc.body.contains("title:"));
    }

    #[test]
    fn test_title_is_trimmed() {
        let content = "---\ntitle: '  Spaced  '\n---\n";
        let doc = parse_document(content, Path::new("a.md")).unwrap();
        assert_eq!(doc.title, "Spaced");
    }

    #[test]
    fn test_missing_title() {
        let content = "---\ndescription: No title here\n---\n\n## Heading";
        let err = parse_document(content, Path::new("guide/untitled.md")).unwrap_err();

        assert!(matches!(err, DocumentError::MissingTitle { .. }));
        assert_eq!(err.path(), &PathBuf::from("guide/untitled.md"));
        assert!(err.to_string().contains("guide/untitled.md"));
    }

    #[test]
    fn test_missing_frontmatter() {
        let err = parse_document("# Title\n\nBody", Path::new("bare.md")).unwrap_err();
        assert!(matches!(err, DocumentError::MissingFrontmatter { .. }));
    }

    #[test]
    fn test_invalid_frontmatter() {
        let content = "---\ntitle: [oops\n---\n";
        let err = parse_document(content, Path::new("broken.md")).unwrap_err();
        assert!(matches!(err, DocumentError::InvalidFrontmatter { .. }));
        assert!(err.to_string().contains("broken.md"));
    }

    #[test]
    fn test_read_document_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1.intro.md");
        fs::write(&path, "---\ntitle: Introduction\n---\n\n## Why\n").unwrap();

        let doc = read_document(&path).unwrap();
        assert_eq!(doc.title, "Introduction");
        assert_eq!(doc.path, path);
    }

    #[test]
    fn test_read_document_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.md");

        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, DocumentError::ReadFile { .. }));
        assert_eq!(err.path(), &path);
    }
}
