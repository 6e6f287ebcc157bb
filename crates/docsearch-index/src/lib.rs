//! Flat search index generation for docsearch.
//!
//! This crate walks a documentation tree and produces one [`IndexRecord`] per
//! page plus one per qualifying heading. It handles:
//! - Section listing and document discovery with exclude globs
//! - Permalink generation with heading fragments
//! - Orchestration of document reading and breadcrumb reconstruction
//!
//! # Example
//!
//! ```no_run
//! use docsearch_config::Config;
//! use docsearch_index::IndexBuilder;
//!
//! let config = Config::load(".".as_ref()).unwrap();
//! let records = IndexBuilder::new(&config).unwrap().generate_index().unwrap();
//! println!("{}", docsearch_index::to_json(&records, true).unwrap());
//! ```

#![warn(missing_docs)]

mod builder;
mod discovery;
mod error;
mod record;
mod url;

pub use builder::{IndexBuilder, IndexStats};
pub use discovery::{
    DiscoveredDocument, Section, discover_documents, discover_sections, path_segments,
};
pub use error::IndexError;
pub use record::IndexRecord;
pub use url::UrlGenerator;

/// Serializes records as a JSON array, pretty-printed when `pretty` is set.
pub fn to_json(records: &[IndexRecord], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    }
}
