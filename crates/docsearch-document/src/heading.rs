//! Heading extraction from markdown bodies.
//!
//! Headings are pulled lazily from the `pulldown_cmark` event stream, so a
//! section that is exempt from heading indexing never parses its pages at all.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

use crate::Document;

/// Default maximum heading depth that is indexed.
pub const DEFAULT_MAX_DEPTH: u8 = 3;

/// Default sections whose headings are never indexed.
pub const DEFAULT_SKIP_SECTIONS: &[&str] = &["api"];

/// A heading found in a document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Nesting depth, 1 for `#` through 6 for `######`.
    pub depth: u8,
    /// Concatenated inline text of the heading.
    pub text: String,
}

impl Heading {
    /// Creates a heading.
    pub fn new(depth: u8, text: impl Into<String>) -> Self {
        Self {
            depth,
            text: text.into(),
        }
    }
}

/// Rules deciding which headings qualify for indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingRules {
    /// Headings deeper than this are ignored.
    pub max_depth: u8,
    /// Sections whose pages contribute no heading records.
    pub skip_sections: Vec<String>,
}

impl Default for HeadingRules {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            skip_sections: DEFAULT_SKIP_SECTIONS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

impl HeadingRules {
    /// Returns true if headings in `section` are indexed at all.
    pub fn indexes_section(&self, section: &str) -> bool {
        !self.skip_sections.iter().any(|s| s == section)
    }

    /// Returns true if a heading at `depth` qualifies.
    pub fn accepts_depth(&self, depth: u8) -> bool {
        depth <= self.max_depth
    }
}

/// Lazy iterator over every heading in a markdown body, in document order.
pub struct Headings<'a> {
    /// Underlying markdown event stream.
    parser: Parser<'a>,
}

impl<'a> Headings<'a> {
    /// Starts iterating the headings of `body`.
    pub fn new(body: &'a str) -> Self {
        Self {
            parser: Parser::new(body),
        }
    }
}

impl Iterator for Headings<'_> {
    type Item = Heading;

    fn next(&mut self) -> Option<Heading> {
        let mut current: Option<(u8, String)> = None;

        for event in self.parser.by_ref() {
            match event {
                Event::Start(Tag::Heading { level, .. }) => {
                    current = Some((heading_level_to_u8(level), String::new()));
                }
                Event::Text(text) | Event::Code(text) => {
                    if let Some((_, ref mut heading_text)) = current {
                        heading_text.push_str(&text);
                    }
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some((depth, text)) = current.take() {
                        return Some(Heading { depth, text });
                    }
                }
                _ => {}
            }
        }

        None
    }
}

/// Converts a pulldown_cmark HeadingLevel to a u8 (1-6).
fn heading_level_to_u8(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Extracts the headings of `document` that qualify for indexing in `section`.
///
/// Yields nothing for sections listed in [`HeadingRules::skip_sections`]; in
/// every other section, yields headings no deeper than `max_depth`.
pub fn extract_headings<'a>(
    document: &'a Document,
    section: &str,
    rules: &'a HeadingRules,
) -> impl Iterator<Item = Heading> + use<'a> {
    rules
        .indexes_section(section)
        .then(|| Headings::new(&document.body))
        .into_iter()
        .flatten()
        .filter(|heading| rules.accepts_depth(heading.depth))
}
