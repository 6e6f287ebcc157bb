//! Permalink generation for index records.

use docsearch_document::slugify;

/// Builds absolute record URLs below a fixed base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlGenerator {
    /// Base URL without a trailing slash.
    base_url: String,
}

impl UrlGenerator {
    /// Creates a generator rooted at `base_url`. Trailing slashes are trimmed.
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
        }
    }

    /// The base every generated URL starts with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generates `{base}/{section}/{segments...}`, with a `#slug` fragment for
    /// heading records.
    ///
    /// The fragment is omitted when `heading_text` is `None`, empty, or
    /// slugifies to nothing.
    pub fn generate(&self, section: &str, segments: &[String], heading_text: Option<&str>) -> String {
        let mut url = format!("{}/{}", self.base_url, section);
        for segment in segments {
            url.push('/');
            url.push_str(segment);
        }

        if let Some(text) = heading_text
            && !text.is_empty()
        {
            let slug = slugify(text);
            if !slug.is_empty() {
                url.push('#');
                url.push_str(&slug);
            }
        }

        url
    }
}
