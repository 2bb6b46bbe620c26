//! Results command implementation
//!
//! Handles the `qdoc results` command which ranks measurement counts and
//! prints them as a table or JSON

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use crate::error::QdocError;
use crate::results::{format_results, FormattedOutcome, ResultsTable};

/// Format measurement counts read from a file, stdin or an inline string
///
/// `file` of `None` or `"-"` reads stdin. `inline` takes precedence over
/// `file` when both are given.
///
/// # Examples
///
/// ```no_run
/// use qdoc_kit::cmd::results::cmd_results;
///
/// // Counts saved from a job run
/// cmd_results(Some("bell_counts.json"), None, false)?;
///
/// // Inline counts, JSON out
/// cmd_results(None, Some(r#"{"00": 512, "11": 512}"#), true)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_results(file: Option<&str>, inline: Option<&str>, json: bool) -> Result<()> {
    let text = read_counts_text(file, inline, std::io::stdin().lock())?;
    let outcomes = format_counts_text(text)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcomes).context("Failed to serialize results")?
        );
    } else {
        ResultsTable::print(&outcomes);
    }
    Ok(())
}

fn format_counts_text(text: String) -> Result<Vec<FormattedOutcome>> {
    Ok(format_results(text).map_err(QdocError::from)?)
}

fn read_counts_text(file: Option<&str>, inline: Option<&str>, mut stdin: impl Read) -> Result<String> {
    if let Some(inline) = inline {
        return Ok(inline.to_string());
    }

    match file {
        None | Some("-") => {
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .map_err(|source| QdocError::Io {
                    context: "reading counts from stdin".to_string(),
                    source,
                })?;
            Ok(text)
        }
        Some(path) => {
            let path = Path::new(path);
            if !path.exists() {
                return Err(QdocError::FileNotFound {
                    path: path.to_path_buf(),
                    operation: "qdoc results".to_string(),
                }
                .into());
            }
            let text = std::fs::read_to_string(path).map_err(|source| QdocError::Io {
                context: format!("reading {}", path.display()),
                source,
            })?;
            Ok(text)
        }
    }
}
