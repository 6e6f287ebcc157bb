//! Section and document discovery.
//!
//! Sections are the directories directly under the docs root. Documents are
//! found by walking each section in file-name order, pruning excluded entries
//! and keeping files with an indexable extension.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use docsearch_config::{DocsSettings, ExcludePatterns};
use docsearch_document::{file_segment, strip_numeric_prefix};
use walkdir::{DirEntry, WalkDir};

use crate::IndexError;

/// A section directory under the docs root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Directory name as found on disk (`2.guide`).
    pub dir_name: String,
    /// Normalized name attached to records (`guide`).
    pub name: String,
    /// Absolute path of the directory.
    pub path: PathBuf,
}

/// A document discovered inside a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredDocument {
    /// Path to the file.
    pub path: PathBuf,
    /// Path relative to the docs root.
    pub rel_path: PathBuf,
    /// Normalized URL path segments below the section.
    pub segments: Vec<String>,
}

/// Lists section directories directly under `root`, in file-name order.
///
/// Only directories named in `docs.sections` are kept when that list is non-empty.
pub fn discover_sections(root: &Path, docs: &DocsSettings) -> Result<Vec<Section>, IndexError> {
    let mut sections = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| IndexError::Walk {
            path: root.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let Some(dir_name) = entry.file_name().to_str() else {
            continue;
        };
        if !docs.includes_section(dir_name) {
            continue;
        }

        sections.push(Section {
            dir_name: dir_name.to_string(),
            name: strip_numeric_prefix(dir_name).to_string(),
            path: entry.into_path(),
        });
    }

    Ok(sections)
}

/// Walks one section and returns its documents in pre-order, sorted by file name.
///
/// Excluded directories are pruned together with everything below them.
/// Paths are matched against `excludes` relative to `root`.
pub fn discover_documents(
    root: &Path,
    section: &Section,
    excludes: &ExcludePatterns,
    docs: &DocsSettings,
) -> Result<Vec<DiscoveredDocument>, IndexError> {
    let mut documents = Vec::new();

    let walker = WalkDir::new(&section.path)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_excluded(root, e, excludes));

    for entry in walker {
        let entry = entry.map_err(|source| IndexError::Walk {
            path: section.path.clone(),
            source,
        })?;

        if !entry.file_type().is_file() || !has_extension(entry.path(), docs) {
            continue;
        }

        let path = entry.into_path();
        let (Ok(rel_path), Ok(in_section)) =
            (path.strip_prefix(root), path.strip_prefix(&section.path))
        else {
            continue;
        };
        let segments = path_segments(in_section);
        let rel_path = rel_path.to_path_buf();

        documents.push(DiscoveredDocument {
            path,
            rel_path,
            segments,
        });
    }

    Ok(documents)
}

/// Converts a path relative to its section into URL path segments.
///
/// Directory names lose their numeric prefix; the file name also loses its
/// extension.
pub fn path_segments(in_section: &Path) -> Vec<String> {
    let names: Vec<&str> = in_section
        .iter()
        .filter_map(OsStr::to_str)
        .collect();

    match names.split_last() {
        Some((file, dirs)) => dirs
            .iter()
            .map(|dir| strip_numeric_prefix(dir).to_string())
            .chain([file_segment(file)])
            .collect(),
        None => Vec::new(),
    }
}

/// Checks an entry against the exclude globs, relative to the docs root.
fn is_excluded(root: &Path, entry: &DirEntry, excludes: &ExcludePatterns) -> bool {
    entry
        .path()
        .strip_prefix(root)
        .is_ok_and(|rel| excludes.is_excluded(rel))
}

/// Checks whether a file has one of the configured document extensions.
fn has_extension(path: &Path, docs: &DocsSettings) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| docs.accepts_extension(ext))
}
