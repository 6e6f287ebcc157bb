//! Document reading and heading analysis for docsearch.
//!
//! This crate turns a single documentation page into the pieces the index
//! needs:
//! - YAML front matter extraction (the required `title`)
//! - Lazy extraction of qualifying headings
//! - Breadcrumb reconstruction from heading depths
//! - Strict slugs for URL fragments
//! - Numeric-prefix normalization of file and directory names

#![warn(missing_docs)]

mod error;
mod frontmatter;
mod heading;
mod hierarchy;
mod name;
mod read;
mod slug;

use std::path::PathBuf;

pub use error::DocumentError;
pub use frontmatter::{Frontmatter, parse_frontmatter, split_frontmatter};
pub use heading::{
    DEFAULT_MAX_DEPTH, DEFAULT_SKIP_SECTIONS, Heading, HeadingRules, Headings, extract_headings,
};
pub use hierarchy::{Breadcrumb, SUBTITLE_SEPARATOR, build_hierarchies, document_breadcrumbs};
pub use name::{file_segment, strip_numeric_prefix};
pub use read::{parse_document, read_document};
pub use slug::slugify;

/// A documentation page read from disk.
#[derive(Debug, Clone)]
pub struct Document {
    /// Path the document was read from.
    pub path: PathBuf,
    /// Non-empty title from front matter.
    pub title: String,
    /// Full parsed front matter.
    pub frontmatter: Frontmatter,
    /// Markdown body following the front matter.
    pub body: String,
}

impl Document {
    /// Extracts the qualifying headings and builds every breadcrumb for this page,
    /// starting with the page's own.
    pub fn breadcrumbs(&self, section: &str, rules: &HeadingRules) -> Vec<Breadcrumb> {
        let headings: Vec<Heading> = extract_headings(self, section, rules).collect();
        document_breadcrumbs(&headings, &self.title)
    }
}
