//! docsearch: documentation search index builder
//!
//! docsearch walks a tree of markdown documentation, reads each page's front
//! matter title and headings, and emits a flat JSON index with one record per
//! page and one per qualifying heading. Each record carries a breadcrumb
//! subtitle and an absolute permalink, ready for a typeahead search widget.

#![warn(missing_docs)]

pub mod cli;
