//! Breadcrumb reconstruction from a flat heading sequence.
//!
//! Headings arrive as `(depth, text)` pairs in document order. A stack of
//! open breadcrumb paths is kept, seeded with the document title. Each heading
//! pops the stack back to `depth - 1` entries (never below the title), extends
//! the path on top, and pushes the result.
//!
//! ```text
//! # Setup          -> Title > Setup
//! ### Node         -> Title > Setup > Node      (depth 2 skipped, no placeholder)
//! ## Config        -> Title > Config
//! ## Deploy        -> Title > Deploy            (sibling of Config)
//! ```

use crate::Heading;

/// Separator placed between breadcrumb entries in a subtitle.
pub const SUBTITLE_SEPARATOR: &str = " > ";

/// A path of titles from the document root down to one heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb(Vec<String>);

impl Breadcrumb {
    /// Creates the breadcrumb for the document itself.
    pub fn root(title: impl Into<String>) -> Self {
        Self(vec![title.into()])
    }

    /// Returns a new breadcrumb with `title` appended.
    pub fn child(&self, title: impl Into<String>) -> Self {
        let mut parts = self.0.clone();
        parts.push(title.into());
        Self(parts)
    }

    /// The entries from root to leaf.
    pub fn parts(&self) -> &[String] {
        &self.0
    }

    /// Number of entries, including the root.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a breadcrumb holds at least the root title.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if this breadcrumb is the document itself.
    pub fn is_root(&self) -> bool {
        self.0.len() == 1
    }

    /// The last entry.
    pub fn title(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or_default()
    }

    /// Every entry except the last, joined by [`SUBTITLE_SEPARATOR`].
    pub fn subtitle(&self) -> String {
        match self.0.split_last() {
            Some((_, ancestors)) => ancestors.join(SUBTITLE_SEPARATOR),
            None => String::new(),
        }
    }
}

impl From<Vec<String>> for Breadcrumb {
    fn from(parts: Vec<String>) -> Self {
        Self(parts)
    }
}

/// Builds one breadcrumb per heading, in input order.
///
/// A heading at depth `D` attaches under the most recent open path of length
/// `D - 1`. When intermediate depths are missing, it attaches under the nearest
/// enclosing path instead. Depth 1 and depth 2 headings both attach directly
/// under `root_title`.
pub fn build_hierarchies(headings: &[Heading], root_title: &str) -> Vec<Breadcrumb> {
    let mut result = Vec::with_capacity(headings.len());
    let mut stack = vec![Breadcrumb::root(root_title)];

    for heading in headings {
        let keep = usize::from(heading.depth.saturating_sub(1)).max(1);
        stack.truncate(keep);

        let current = match stack.last() {
            Some(parent) => parent.child(heading.text.as_str()),
            None => Breadcrumb::root(root_title).child(heading.text.as_str()),
        };
        result.push(current.clone());
        stack.push(current);
    }

    result
}

/// Builds the document's own breadcrumb followed by one per heading.
pub fn document_breadcrumbs(headings: &[Heading], root_title: &str) -> Vec<Breadcrumb> {
    let mut breadcrumbs = Vec::with_capacity(headings.len() + 1);
    breadcrumbs.push(Breadcrumb::root(root_title));
    breadcrumbs.extend(build_hierarchies(headings, root_title));
    breadcrumbs
}
