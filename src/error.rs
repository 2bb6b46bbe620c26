//! Error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes
//! - Proper exit codes for CI/CD
//!
//! # Examples
//!
//! ```
//! use qdoc_kit::error::QdocError;
//! use qdoc_kit::results::format_results;
//!
//! match format_results("{not json").map_err(QdocError::from) {
//!     Ok(outcomes) => println!("{} outcomes", outcomes.len()),
//!     Err(e) => {
//!         assert_eq!(e.exit_code(), 65);
//!         assert!(e.suggestion().is_some());
//!     }
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::cost::CostError;
use crate::results::ResultsError;
use crate::validate::ValidateError;

/// qdoc errors with contextual suggestions
#[derive(Error, Debug)]
pub enum QdocError {
    /// Outcome counts could not be decoded
    #[error(transparent)]
    Results(#[from] ResultsError),

    /// Cost estimator input was rejected
    #[error(transparent)]
    Cost(#[from] CostError),

    /// Docs tree could not be validated
    #[error(transparent)]
    Validate(#[from] ValidateError),

    /// An argument value was rejected
    #[error("Invalid {name}: {reason}")]
    InvalidArgument {
        /// Argument name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// Input file not found
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path to missing file
        path: PathBuf,
        /// Operation that required the file
        operation: String,
    },

    /// Documentation validation found problems
    #[error("Documentation validation failed: {errors} error(s), {warnings} warning(s)")]
    ValidationFailed {
        /// Number of errors
        errors: usize,
        /// Number of warnings
        warnings: usize,
        /// Whether warnings were treated as failures
        strict: bool,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl QdocError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use qdoc_kit::error::QdocError;
    /// use std::path::PathBuf;
    ///
    /// let error = QdocError::FileNotFound {
    ///     path: PathBuf::from("counts.json"),
    ///     operation: "results".to_string(),
    /// };
    /// assert!(error.suggestion().unwrap().contains("counts.json"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Results(_) => Some(
                "Provide a JSON object mapping outcome labels to counts, e.g. {\"00\": 512, \"11\": 512}"
                    .to_string(),
            ),
            Self::Cost(CostError::InvalidArgument { name, .. }) => {
                Some(format!("Pass a {} value of 0 or more", name))
            }
            Self::Validate(ValidateError::DocsDirMissing(path)) => Some(format!(
                "Pass the docs directory explicitly or set docs-dir in .qdoc.toml (looked in {})",
                path.display()
            )),
            Self::Validate(ValidateError::Scan { .. }) => {
                Some("Check that the docs directory is readable".to_string())
            }
            Self::InvalidArgument { name, .. } => {
                Some(format!("Check the value passed for {}", name))
            }
            Self::FileNotFound { path, operation } => Some(format!(
                "Ensure {} exists before running {}",
                path.display(),
                operation
            )),
            Self::ValidationFailed { strict, .. } => {
                if *strict {
                    Some("Fix the errors and warnings listed above, or drop --strict to allow warnings".to_string())
                } else {
                    Some("Fix the errors listed above and re-run 'qdoc validate'".to_string())
                }
            }
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get documentation URL for this error.
    pub fn docs_url(&self) -> Option<&str> {
        match self {
            Self::Results(_) => Some("https://www.json.org/json-en.html"),
            Self::ValidationFailed { .. } => {
                Some("https://www.markdownguide.org/basic-syntax/")
            }
            _ => None,
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Returns Unix-style exit codes following sysexits.h conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use qdoc_kit::error::QdocError;
    ///
    /// let failed = QdocError::ValidationFailed { errors: 2, warnings: 0, strict: false };
    /// assert_eq!(failed.exit_code(), 1);
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Results(_) => 65, // EX_DATAERR
            Self::Cost(_) => 64,    // EX_USAGE
            Self::Validate(ValidateError::DocsDirMissing(_)) => 66, // EX_NOINPUT
            Self::Validate(ValidateError::Scan { .. }) => 74, // EX_IOERR
            Self::InvalidArgument { .. } => 64, // EX_USAGE
            Self::FileNotFound { .. } => 66, // EX_NOINPUT
            Self::ValidationFailed { .. } => 1, // Generic error (CI should fail)
            Self::Io { .. } => 74,  // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with suggestions and documentation links
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(qdoc_error) = Self::find(error) {
            if let Some(suggestion) = qdoc_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }

            if let Some(docs) = qdoc_error.docs_url() {
                output.push_str(&format!("{} {}\n", style("docs:").blue(), docs));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        Self::find(error).map(QdocError::exit_code).unwrap_or(1)
    }

    /// First `QdocError` in the chain, looking through added context
    fn find(error: &anyhow::Error) -> Option<&QdocError> {
        error.chain().find_map(|e| e.downcast_ref::<QdocError>())
    }
}
