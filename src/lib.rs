#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! qdoc-kit library
//!
//! This library provides the helpers behind the qdoc documentation-site
//! tooling: ranking measurement results, estimating job cost, and keeping a
//! docs tree and its built site tidy. It can be used programmatically in
//! addition to the CLI interface.
//!
//! # Basic Example
//!
//! Ranking measurement counts from a job:
//!
//! ```
//! use qdoc_kit::results::format_results;
//!
//! let outcomes = format_results(r#"{"00": 480, "11": 520}"#)?;
//!
//! assert_eq!(outcomes[0].label, "11");
//! assert_eq!(outcomes[0].probability, "52.00");
//! assert_eq!(outcomes[1].probability, "48.00");
//! # Ok::<(), qdoc_kit::results::ResultsError>(())
//! ```
//!
//! # Estimating Cost
//!
//! Simulator runs are free; hardware is billed per second of estimated run
//! time:
//!
//! ```
//! use qdoc_kit::cost::estimate_cost;
//!
//! assert_eq!(estimate_cost(1000, 5, "simulator")?, "0.00");
//! assert_eq!(estimate_cost(1000, 5, "ibm_hardware")?, "0.13");
//! # Ok::<(), qdoc_kit::cost::CostError>(())
//! ```
//!
//! # Advanced Example: Site Maintenance
//!
//! Marking external links in built HTML and validating the markdown sources:
//!
//! ```
//! use qdoc_kit::links::annotate_external_links;
//! use qdoc_kit::validate::DocsValidator;
//! use std::fs;
//!
//! let html = r#"<a href="https://qiskit.org">Qiskit</a>"#;
//! let annotated = annotate_external_links(html, "docs.example.org");
//! assert_eq!(annotated.rewritten, 1);
//! assert!(annotated.html.contains(r#"target="_blank""#));
//!
//! let docs = tempfile::tempdir()?;
//! fs::write(docs.path().join("index.md"), "# Home\n")?;
//! let report = DocsValidator::new(docs.path()).validate()?;
//! assert!(!report.fails(true));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file loading
pub mod config;
/// Job cost estimation
pub mod cost;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Kubectl command snippets
pub mod kubectl;
/// External link annotation for built HTML
pub mod links;
/// Measurement result formatting
pub mod results;
/// Preferred color scheme persistence
pub mod theme;
/// Markdown documentation validation
pub mod validate;
