//! Validate command implementation
//!
//! Handles the `qdoc validate` command which checks a markdown docs tree for
//! broken links, missing images and structural problems

use anyhow::{Context, Result};
use console::style;
use std::path::Path;

use crate::config::ConfigLoader;
use crate::error::QdocError;
use crate::fmt::MICROSCOPE;
use crate::validate::{print_report, DocsValidator, ValidationReport};

/// Validate the docs tree and fail if problems are found
///
/// The directory comes from the argument, falling back to `docs-dir` in
/// `.qdoc.toml`. With `strict`, warnings fail the run as well.
///
/// # Examples
///
/// ```no_run
/// use qdoc_kit::cmd::validate::cmd_validate;
///
/// cmd_validate(Some("docs"), false, false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_validate(docs_dir: Option<&str>, strict: bool, json: bool) -> Result<()> {
    let docs_dir = match docs_dir {
        Some(dir) => dir.to_string(),
        None => ConfigLoader::load(Path::new("."))?.docs_dir,
    };

    if !json {
        println!(
            "{} {} {}",
            MICROSCOPE,
            style("Validating documentation in").bold(),
            style(&docs_dir).cyan()
        );
        println!();
    }

    let report = DocsValidator::new(&docs_dir)
        .validate()
        .map_err(QdocError::from)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
    } else {
        print_report(&report);
    }

    check_outcome(&report, strict)
}

fn check_outcome(report: &ValidationReport, strict: bool) -> Result<()> {
    if report.fails(strict) {
        return Err(QdocError::ValidationFailed {
            errors: report.errors().len(),
            warnings: report.warnings().len(),
            strict,
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{CheckKind, ValidationIssue};
    use std::fs;
    use tempfile::TempDir;

    fn warning_only_report() -> ValidationReport {
        ValidationReport {
            files_checked: 1,
            issues: vec![ValidationIssue::warning(
                CheckKind::Heading,
                Path::new("a.md"),
                Some(2),
                "skip",
            )],
        }
    }

    #[test]
    fn test_warnings_pass_unless_strict() {
        let report = warning_only_report();
        assert!(check_outcome(&report, false).is_ok());

        let err = check_outcome(&report, true).unwrap_err();
        let qdoc = err.downcast_ref::<QdocError>().unwrap();
        assert!(matches!(
            qdoc,
            QdocError::ValidationFailed {
                errors: 0,
                warnings: 1,
                strict: true
            }
        ));
    }

    #[test]
    fn test_cmd_validate_on_broken_tree() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("index.md"), "[x](missing.md)\n").unwrap();

        let err = cmd_validate(temp.path().to_str(), false, false).unwrap_err();
        assert_eq!(err.downcast_ref::<QdocError>().unwrap().exit_code(), 1);
    }

    #[test]
    fn test_cmd_validate_missing_dir() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("docs");
        let err = cmd_validate(missing.to_str(), false, true).unwrap_err();
        assert_eq!(err.downcast_ref::<QdocError>().unwrap().exit_code(), 66);
    }
}
