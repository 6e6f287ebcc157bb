//! Implementation of `docsearch inspect`.

use std::{path::Path, process::ExitCode};

use docsearch_document::{extract_headings, file_segment, read_document, strip_numeric_prefix};
use docsearch_index::path_segments;

use crate::cli::{
    args::InspectCommand,
    context::{CommandContext, builder_or_failure},
};

/// Shows how a single file is turned into index records.
pub fn run(ctx: &CommandContext, cmd: &InspectCommand) -> ExitCode {
    let path = ctx.resolve(&cmd.file);
    if !path.is_file() {
        eprintln!("error: file not found: {}", cmd.file.display());
        return ExitCode::FAILURE;
    }

    let builder = match builder_or_failure(&ctx.config) {
        Ok(builder) => builder,
        Err(code) => return code,
    };

    let located = locate(&path, builder.docs_root());
    let Some(section) = cmd
        .section
        .clone()
        .or_else(|| located.as_ref().map(|(section, _)| section.clone()))
    else {
        eprintln!(
            "error: {} is not inside a section of {}",
            cmd.file.display(),
            builder.docs_root().display()
        );
        eprintln!("use --section to name the section explicitly");
        return ExitCode::FAILURE;
    };
    let segments = match located {
        Some((_, segments)) => segments,
        None => fallback_segments(&path),
    };

    let document = match read_document(&path) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let records = match builder.index_document(&section, &segments, &path) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("--- {} ---", path.display());
    println!("title: {}", document.title);
    println!("section: {section}");
    println!();

    if builder.rules().indexes_section(&section) {
        let headings: Vec<_> = extract_headings(&document, &section, builder.rules()).collect();
        println!("Headings ({}):", headings.len());
        for heading in &headings {
            println!("  {} {}", "#".repeat(usize::from(heading.depth)), heading.text);
        }
    } else {
        println!("Headings: not indexed in section '{section}'");
    }
    println!();

    println!("Records ({}):", records.len());
    for record in &records {
        println!("  {}", record.title);
        if !record.subtitle.is_empty() {
            println!("    subtitle: {}", record.subtitle);
        }
        println!("    url: {}", record.url);
    }

    ExitCode::SUCCESS
}

/// Finds the section and URL segments of a file below the docs root.
fn locate(path: &Path, root: &Path) -> Option<(String, Vec<String>)> {
    let path = path.canonicalize().ok()?;
    let root = root.canonicalize().ok()?;
    let rel = path.strip_prefix(&root).ok()?;

    let mut components = rel.components();
    let section_dir = components.next()?.as_os_str().to_str()?;
    let in_section = components.as_path();
    if in_section.as_os_str().is_empty() {
        return None;
    }

    Some((
        strip_numeric_prefix(section_dir).to_string(),
        path_segments(in_section),
    ))
}

/// Uses the bare file name as the only segment for files outside the docs root.
fn fallback_segments(path: &Path) -> Vec<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(file_segment)
        .into_iter()
        .collect()
}
