//! Full index generation.
//!
//! The [`IndexBuilder`] orchestrates the complete flow:
//! 1. List section directories under the docs root
//! 2. Walk each section for documents
//! 3. Read each document and rebuild its heading breadcrumbs
//! 4. Convert every breadcrumb into an [`IndexRecord`]

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use docsearch_config::{Config, ExcludePatterns};
use docsearch_document::{HeadingRules, read_document};
use tracing::{debug, info, instrument};

use crate::{IndexError, IndexRecord, UrlGenerator, discover_documents, discover_sections};

/// Statistics from an index run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of sections walked.
    pub sections: usize,
    /// Number of documents indexed.
    pub documents: usize,
    /// Number of records produced.
    pub records: usize,
}

/// Builds the flat search index for one documentation tree.
pub struct IndexBuilder<'a> {
    /// The loaded configuration.
    config: &'a Config,
    /// Compiled exclude globs.
    excludes: ExcludePatterns,
    /// Heading qualification rules.
    rules: HeadingRules,
    /// Record URL generator.
    urls: UrlGenerator,
}

impl<'a> IndexBuilder<'a> {
    /// Creates a builder for the given configuration.
    ///
    /// Returns an error if the exclude patterns fail to compile.
    pub fn new(config: &'a Config) -> Result<Self, IndexError> {
        let excludes = config.compile_excludes()?;
        let rules = HeadingRules {
            max_depth: config.headings.max_depth,
            skip_sections: config.headings.skip_sections.clone(),
        };

        Ok(Self {
            config,
            excludes,
            rules,
            urls: UrlGenerator::new(&config.docs.base_url),
        })
    }

    /// The documentation root this builder indexes.
    pub fn docs_root(&self) -> &Path {
        &self.config.docs.path
    }

    /// Heading rules derived from the configuration.
    pub fn rules(&self) -> &HeadingRules {
        &self.rules
    }

    /// Generates the complete index.
    ///
    /// Records are ordered by section, then document, then heading. The first
    /// error aborts the run.
    pub fn generate_index(&self) -> Result<Vec<IndexRecord>, IndexError> {
        self.generate_index_with_stats().map(|(records, _)| records)
    }

    /// Generates the complete index along with run statistics.
    #[instrument(skip(self), fields(root = %self.docs_root().display()))]
    pub fn generate_index_with_stats(&self) -> Result<(Vec<IndexRecord>, IndexStats), IndexError> {
        let root = self.checked_root()?;
        let sections = discover_sections(&root, &self.config.docs)?;

        let mut records = Vec::new();
        let mut stats = IndexStats {
            sections: sections.len(),
            ..IndexStats::default()
        };

        for section in &sections {
            let documents = discover_documents(&root, section, &self.excludes, &self.config.docs)?;
            debug!(section = %section.name, documents = documents.len(), "walked section");

            for document in documents {
                let produced = self.index_document(&section.name, &document.segments, &document.path)?;
                debug!(
                    path = %document.rel_path.display(),
                    records = produced.len(),
                    "indexed document"
                );
                stats.documents += 1;
                records.extend(produced);
            }
        }

        stats.records = records.len();
        info!(
            sections = stats.sections,
            documents = stats.documents,
            records = stats.records,
            "index generated"
        );

        Ok((records, stats))
    }

    /// Produces the records for a single document.
    ///
    /// The first record describes the page itself; each qualifying heading
    /// adds one more.
    pub fn index_document(
        &self,
        section: &str,
        segments: &[String],
        path: &Path,
    ) -> Result<Vec<IndexRecord>, IndexError> {
        let document = read_document(path)?;

        let records = document
            .breadcrumbs(section, &self.rules)
            .iter()
            .map(|crumb| {
                let fragment = (!crumb.is_root()).then(|| crumb.title());
                IndexRecord {
                    title: crumb.title().to_string(),
                    subtitle: crumb.subtitle(),
                    url: self.urls.generate(section, segments, fragment),
                    section: section.to_string(),
                }
            })
            .collect();

        Ok(records)
    }

    /// Confirms the docs root is an existing directory.
    fn checked_root(&self) -> Result<PathBuf, IndexError> {
        let root = self.docs_root();
        let not_found = || IndexError::DocsRootNotFound {
            path: root.to_path_buf(),
        };

        match fs::metadata(root) {
            Ok(meta) if meta.is_dir() => Ok(root.to_path_buf()),
            Ok(_) => Err(not_found()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(not_found()),
            Err(source) => Err(IndexError::Io {
                path: root.to_path_buf(),
                source,
            }),
        }
    }
}
