//! YAML front matter parsing for documentation pages.
//!
//! Front matter is the metadata block at the start of a page, delimited by `---`:
//!
//! ```markdown
//! ---
//! title: Installation
//! description: Get started with Nuxt quickly.
//! ---
//!
//! ## Prerequisites
//! ```

use serde::Deserialize;
use serde_yaml::Value;

/// Parsed front matter from a documentation page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Frontmatter {
    /// Page title. Required for indexing, optional at the parsing layer.
    pub title: Option<String>,
    /// Short page description.
    pub description: Option<String>,
    /// Navigation override, either a boolean or a mapping.
    pub navigation: Option<Value>,
}

impl Frontmatter {
    /// Returns the title if it is present and not blank.
    pub fn title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
    }
}

/// Splits content into its raw front matter block and the body that follows.
///
/// Returns `None` when the content does not open with a `---` line or the
/// block is never closed. A leading byte order mark is ignored.
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let content = content.trim_start_matches('\u{feff}');
    let after_opening = content.strip_prefix("---")?;
    let after_opening = after_opening
        .strip_prefix("\r\n")
        .or_else(|| after_opening.strip_prefix('\n'))?;

    let mut pos = 0;
    for line in after_opening.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let yaml = &after_opening[..pos];
            let body = &after_opening[pos + line.len()..];
            return Some((yaml, body));
        }
        pos += line.len();
    }
    None
}

/// Parses YAML front matter from markdown content.
///
/// Returns `Ok(None)` when there is no front matter block, and the parsed
/// front matter plus the remaining body otherwise. Malformed YAML is an error.
pub fn parse_frontmatter(content: &str) -> Result<Option<(Frontmatter, &str)>, serde_yaml::Error> {
    let Some((yaml, body)) = split_frontmatter(content) else {
        return Ok(None);
    };

    if yaml.trim().is_empty() {
        return Ok(Some((Frontmatter::default(), body)));
    }

    let frontmatter = serde_yaml::from_str::<Frontmatter>(yaml)?;
    Ok(Some((frontmatter, body)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_frontmatter() {
        let content = r#"---
title: Installation
description: Get started with Nuxt quickly.
---

## Prerequisites"#;

        let (fm, body) = parse_frontmatter(content).unwrap().unwrap();
        assert_eq!(fm.title(), Some("Installation"));
        assert_eq!(fm.description.as_deref(), Some("Get started with Nuxt quickly."));
        assert!(body.trim_start().starts_with("## Prerequisites"));
    }

    #[test]
    fn test_navigation_forms() {
        let content = "---\ntitle: A\nnavigation: false\n---\n";
        let (fm, _) = parse_frontmatter(content).unwrap().unwrap();
        assert_eq!(fm.navigation, Some(Value::Bool(false)));

        let content = "---\ntitle: A\nnavigation:\n  icon: i-ph-book\n---\n";
        let (fm, _) = parse_frontmatter(content).unwrap().unwrap();
        assert!(fm.navigation.is_some_and(|nav| nav.is_mapping()));
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just a heading\n\nSome content";
        assert!(parse_frontmatter(content).unwrap().is_none());
    }

    #[test]
    fn test_empty_frontmatter() {
        let content = "---\n---\n\nContent after empty front matter";
        let (fm, body) = parse_frontmatter(content).unwrap().unwrap();
        assert_eq!(fm.title(), None);
        assert!(body.contains("Content after"));
    }

    #[test]
    fn test_blank_title_is_absent() {
        let content = "---\ntitle: \"   \"\n---\n";
        let (fm, _) = parse_frontmatter(content).unwrap().unwrap();
        assert_eq!(fm.title(), None);
    }

    #[test]
    fn test_malformed_yaml_is_error() {
        let content = "---\ntitle: [unclosed bracket\n---\n\nContent";
        assert!(parse_frontmatter(content).is_err());
    }

    #[test]
    fn test_missing_closing_delimiter() {
        let content = "---\ntitle: Never closed\n\n## Heading";
        assert!(split_frontmatter(content).is_none());
    }

    #[test]
    fn test_delimiter_not_at_start() {
        let content = "Some text before\n---\ntitle: Not front matter\n---";
        assert!(split_frontmatter(content).is_none());
    }

    #[test]
    fn test_extra_fields_ignored() {
        let content = "---\ntitle: My Doc\nlinks:\n  - label: Source\n    to: https://example.com\n---\nBody";
        let (fm, body) = parse_frontmatter(content).unwrap().unwrap();
        assert_eq!(fm.title(), Some("My Doc"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_bom_and_crlf() {
        let content = "\u{feff}---\r\ntitle: Windows\r\n---\r\n\r\nContent";
        let (yaml, body) = split_frontmatter(content).unwrap();
        assert_eq!(yaml, "title: Windows\r\n");
        assert_eq!(body, "\r\nContent");

        let (fm, _) = parse_frontmatter(content).unwrap().unwrap();
        assert_eq!(fm.title(), Some("Windows"));
    }
}
