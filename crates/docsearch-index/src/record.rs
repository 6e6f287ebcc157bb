//! Index record type.

use serde::{Deserialize, Serialize};

/// One entry of the search index.
///
/// Every document yields a root record, whose `subtitle` is empty and whose
/// `url` has no fragment, followed by one record per qualifying heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRecord {
    /// Last breadcrumb entry: the page title or heading text.
    pub title: String,
    /// Ancestor breadcrumb entries joined by `" > "`.
    pub subtitle: String,
    /// Absolute permalink.
    pub url: String,
    /// Normalized section name.
    pub section: String,
}

impl IndexRecord {
    /// True for the record describing the page itself.
    pub fn is_page(&self) -> bool {
        self.subtitle.is_empty()
    }
}
