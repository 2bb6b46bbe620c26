//! Markdown documentation validation
//!
//! Scans a docs tree for broken relative links, missing images, unclosed code
//! fences, malformed frontmatter and skipped heading levels. Files are checked
//! in parallel; the report lists issues in file order.
//!
//! # Examples
//!
//! ```
//! use qdoc_kit::validate::DocsValidator;
//! use std::fs;
//!
//! let docs = tempfile::tempdir()?;
//! fs::write(docs.path().join("index.md"), "# Home\n\nSee [setup](setup.md).\n")?;
//!
//! let report = DocsValidator::new(docs.path()).validate()?;
//! assert_eq!(report.files_checked, 1);
//! assert_eq!(report.errors().len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod checks;
pub mod report;

pub use report::{print_report, render_report};

use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::infra::{find_files_with_extension, FileSystem, RealFileSystem};

/// Errors that stop validation as a whole
#[derive(Error, Debug)]
pub enum ValidateError {
    /// The docs directory does not exist
    #[error("docs directory not found: {0}")]
    DocsDirMissing(PathBuf),

    /// Listing the docs tree failed
    #[error("failed to scan {path}: {source}")]
    Scan {
        /// Directory being scanned
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Issue severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Should be addressed; fails only in strict mode
    Warning,
    /// Must be fixed
    Error,
}

impl Severity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

/// Which check produced an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    /// Relative link target
    Link,
    /// Image reference
    Image,
    /// Code fence balance
    CodeBlock,
    /// YAML frontmatter
    Frontmatter,
    /// Heading hierarchy
    Heading,
    /// File could not be read
    Unreadable,
}

impl CheckKind {
    /// Short name used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::Link => "link",
            CheckKind::Image => "image",
            CheckKind::CodeBlock => "code-block",
            CheckKind::Frontmatter => "frontmatter",
            CheckKind::Heading => "heading",
            CheckKind::Unreadable => "unreadable",
        }
    }
}

/// A single problem found in a markdown file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Severity level
    pub severity: Severity,
    /// Check that found it
    pub check: CheckKind,
    /// File the issue is in
    pub file: PathBuf,
    /// 1-based line number, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Description of the issue
    pub message: String,
}

impl ValidationIssue {
    /// Create an error issue
    pub fn error(
        check: CheckKind,
        file: &Path,
        line: Option<usize>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Error,
            check,
            file: file.to_path_buf(),
            line,
            message: message.into(),
        }
    }

    /// Create a warning issue
    pub fn warning(
        check: CheckKind,
        file: &Path,
        line: Option<usize>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(check, file, line, message)
        }
    }

    /// `path:line` location string
    pub fn location(&self) -> String {
        match self.line {
            Some(line) => format!("{}:{}", self.file.display(), line),
            None => self.file.display().to_string(),
        }
    }
}

/// Outcome of validating a docs tree
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Number of markdown files checked
    pub files_checked: usize,
    /// All issues, grouped by file in path order
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Only errors
    pub fn errors(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .collect()
    }

    /// Only warnings
    pub fn warnings(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .collect()
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Whether the report should fail a run; warnings count in strict mode
    pub fn fails(&self, strict: bool) -> bool {
        if strict {
            !self.issues.is_empty()
        } else {
            self.has_errors()
        }
    }

    /// Number of distinct files with at least one issue
    pub fn files_with_issues(&self) -> usize {
        let mut files: Vec<&Path> = self.issues.iter().map(|i| i.file.as_path()).collect();
        files.dedup();
        files.len()
    }
}

/// Validates every markdown file under a docs directory
pub struct DocsValidator<FS: FileSystem = RealFileSystem> {
    docs_dir: PathBuf,
    fs: FS,
}

impl DocsValidator<RealFileSystem> {
    /// Create a validator for `docs_dir`
    pub fn new(docs_dir: impl Into<PathBuf>) -> Self {
        Self::with_fs(docs_dir, RealFileSystem)
    }
}

impl<FS: FileSystem + Sync> DocsValidator<FS> {
    /// Create a validator with a custom filesystem implementation
    pub fn with_fs(docs_dir: impl Into<PathBuf>, fs: FS) -> Self {
        Self {
            docs_dir: docs_dir.into(),
            fs,
        }
    }

    /// Validate all markdown files
    #[must_use = "Validation report lists problems that need fixing"]
    pub fn validate(&self) -> Result<ValidationReport, ValidateError> {
        if !self.docs_dir.exists() {
            return Err(ValidateError::DocsDirMissing(self.docs_dir.clone()));
        }

        let files = find_files_with_extension(&self.fs, &self.docs_dir, "md").map_err(|source| {
            ValidateError::Scan {
                path: self.docs_dir.clone(),
                source,
            }
        })?;
        log::debug!(
            "validating {} markdown files in {}",
            files.len(),
            self.docs_dir.display()
        );

        let issues: Vec<ValidationIssue> = files
            .par_iter()
            .flat_map(|file| self.validate_file(file))
            .collect();

        let report = ValidationReport {
            files_checked: files.len(),
            issues,
        };
        log::info!(
            "checked {} files: {} errors, {} warnings",
            report.files_checked,
            report.errors().len(),
            report.warnings().len()
        );
        Ok(report)
    }

    /// Run every check against one file
    pub fn validate_file(&self, file: &Path) -> Vec<ValidationIssue> {
        let content = match self.fs.read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("could not read {}: {}", file.display(), e);
                return vec![ValidationIssue::error(
                    CheckKind::Unreadable,
                    file,
                    None,
                    format!("Could not read file: {}", e),
                )];
            }
        };

        let mut issues = Vec::new();
        issues.extend(checks::check_links(file, &content));
        issues.extend(checks::check_images(file, &content));
        issues.extend(checks::check_code_blocks(file, &content));
        issues.extend(checks::check_frontmatter(file, &content));
        issues.extend(checks::check_headings(file, &content));
        issues
    }
}
