//! Measurement result formatting
//!
//! Turns a mapping of outcome labels to occurrence counts into a ranked list
//! annotated with two-decimal percentages. Input arrives either as JSON text
//! or as an already-built [`OutcomeCounts`]; both go through
//! [`CountsInput::decode`] before any arithmetic happens.
//!
//! # Examples
//!
//! ```
//! use qdoc_kit::results::{format_results, OutcomeCounts};
//!
//! let from_text = format_results(r#"{"00": 50, "11": 50}"#)?;
//! assert_eq!(from_text.len(), 2);
//! assert_eq!(from_text[0].label, "00");
//! assert_eq!(from_text[0].probability, "50.00");
//!
//! let structured: OutcomeCounts = [("00", 50), ("11", 50)].into_iter().collect();
//! assert_eq!(format_results(structured)?, from_text);
//! # Ok::<(), qdoc_kit::results::ResultsError>(())
//! ```

pub mod counts;
pub mod formatter;
pub mod table;

pub use counts::{CountsInput, OutcomeCounts};
pub use formatter::{format_counts, format_results, FormattedOutcome};
pub use table::ResultsTable;

use thiserror::Error;

/// Errors produced while decoding outcome counts
#[derive(Error, Debug)]
pub enum ResultsError {
    /// Serialized text was not a JSON object of label -> non-negative integer
    #[error("malformed outcome counts: {0}")]
    MalformedInput(#[source] serde_json::Error),
}
