//! Module scanner: source files → component records.
//!
//! Every file is parsed as a JavaScript module. Only `export default { apis:
//! [ ... ] }` shapes contribute components; anything else in the file is
//! ignored. Directory scans return components in file-name order, also when
//! files are parsed in parallel.

use std::path::{Path, PathBuf};

use ast_grep_core::matcher::KindMatcher;
use ast_grep_language::SupportLang;
use rayon::prelude::*;
use wt_core::ComponentRecord;

use crate::component::extract_component;
use crate::error::ParserError;
use crate::literal::array_elements;
use crate::parser::{first_syntax_error, is_source_file, parse_module};
use crate::properties::{as_array, as_object, named_properties};

/// Settings for a directory scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// File name suffix of source files (e.g. `.js`).
    pub suffix: String,
    /// Locale tag selecting the `desc` entry used as description.
    pub locale: String,
    /// Parse files on the rayon thread pool.
    pub parallel: bool,
    /// Abort on the first broken file instead of skipping it.
    pub fail_fast: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            suffix: ".js".to_string(),
            locale: "zh-CN".to_string(),
            parallel: false,
            fail_fast: true,
        }
    }
}

/// A file left out of a lenient scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of scanning a directory.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Components in directory-listing order, then source order.
    pub components: Vec<ComponentRecord>,
    /// Files that parsed and were walked successfully.
    pub files_scanned: usize,
    pub skipped: Vec<SkippedFile>,
}

/// Extract every component declared by one module.
///
/// # Errors
/// Returns `ParserError::ParseFailed` if `text` is not a valid module, or
/// `ParserError::Malformed` if a member list holds a non-object element.
pub fn scan_module(
    path: &Path,
    text: &str,
    locale: &str,
) -> Result<Vec<ComponentRecord>, ParserError> {
    let tree = parse_module(text);
    let root = tree.root();
    if let Some(line) = first_syntax_error(&root) {
        return Err(ParserError::ParseFailed {
            path: path.to_path_buf(),
            line,
        });
    }

    let mut components = Vec::new();
    let matcher = KindMatcher::new("export_statement", SupportLang::JavaScript);
    for export in root.find_all(matcher) {
        if !export.children().any(|c| c.kind().as_ref() == "default") {
            continue;
        }
        let Some(object) = export.field("value").as_ref().and_then(as_object) else {
            continue;
        };
        let Some(apis) = named_properties(&object).get("apis").and_then(as_array) else {
            continue;
        };
        for element in array_elements(&apis).into_iter().flatten() {
            let Some(component) = as_object(&element) else {
                continue;
            };
            let record = extract_component(&component, locale).map_err(|source| {
                ParserError::Malformed {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            components.push(record);
        }
    }

    tracing::debug!(
        path = %path.display(),
        components = components.len(),
        "scanned module"
    );
    Ok(components)
}

/// Read and scan one file.
///
/// # Errors
/// Returns `ParserError::Io` if the file cannot be read, otherwise see
/// [`scan_module`].
pub fn scan_file(path: &Path, locale: &str) -> Result<Vec<ComponentRecord>, ParserError> {
    let text = std::fs::read_to_string(path).map_err(|source| ParserError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    scan_module(path, &text, locale)
}

/// Immediate files of `dir` whose name ends with `suffix`, sorted by name.
///
/// Subdirectories are never descended into.
///
/// # Errors
/// Returns `ParserError::Io` if the directory cannot be listed.
pub fn list_source_files(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>, ParserError> {
    let io_err = |source| ParserError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();
        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| is_source_file(name, suffix));
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Scan every source file in `dir`.
///
/// # Errors
/// Returns the first `ParserError` in listing order. With
/// `fail_fast = false`, parse and structure errors are recorded in
/// [`ScanReport::skipped`] instead; I/O errors always abort.
pub fn scan_dir(dir: &Path, options: &ScanOptions) -> Result<ScanReport, ParserError> {
    let files = list_source_files(dir, &options.suffix)?;
    tracing::debug!(
        dir = %dir.display(),
        files = files.len(),
        parallel = options.parallel,
        "scanning source directory"
    );

    let mut report = ScanReport::default();
    if options.parallel {
        // `collect` on an indexed parallel iterator keeps input order.
        let results: Vec<_> = files
            .par_iter()
            .map(|path| scan_file(path, &options.locale))
            .collect();
        for result in results {
            absorb(&mut report, result, options.fail_fast)?;
        }
    } else {
        for path in &files {
            absorb(&mut report, scan_file(path, &options.locale), options.fail_fast)?;
        }
    }
    Ok(report)
}

/// Scan every source file in `dir` and return the concatenated components.
///
/// # Errors
/// See [`scan_dir`].
pub fn scan_all(dir: &Path, options: &ScanOptions) -> Result<Vec<ComponentRecord>, ParserError> {
    scan_dir(dir, options).map(|report| report.components)
}

fn absorb(
    report: &mut ScanReport,
    result: Result<Vec<ComponentRecord>, ParserError>,
    fail_fast: bool,
) -> Result<(), ParserError> {
    match result {
        Ok(components) => {
            report.files_scanned += 1;
            report.components.extend(components);
            Ok(())
        }
        Err(error) if !fail_fast && error.is_file_local() => {
            tracing::warn!(path = %error.path().display(), %error, "skipping source file");
            report.skipped.push(SkippedFile {
                path: error.path().to_path_buf(),
                reason: error.to_string(),
            });
            Ok(())
        }
        Err(error) => Err(error),
    }
}

#[cfg(test)]
#[path = "tests/scanner.rs"]
mod tests;
