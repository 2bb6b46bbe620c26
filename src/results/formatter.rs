//! Ranking and percentage annotation of outcome counts

use serde::{Deserialize, Serialize};

use super::{CountsInput, OutcomeCounts, ResultsError};
use crate::fmt::to_fixed;

/// One ranked outcome with its share of the total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedOutcome {
    /// Outcome label (e.g. a measured bitstring)
    pub label: String,
    /// Number of occurrences
    pub count: u64,
    /// Percentage of the total with exactly two decimals (e.g. `"50.00"`)
    pub probability: String,
}

impl FormattedOutcome {
    /// Numeric value of [`Self::probability`]
    pub fn percent(&self) -> f64 {
        self.probability.parse().unwrap_or(0.0)
    }
}

/// Decode `input` and rank it.
///
/// See [`format_counts`] for ordering and zero-total behavior.
///
/// # Errors
///
/// Returns [`ResultsError::MalformedInput`] when serialized input is not a
/// JSON object of label -> non-negative integer.
pub fn format_results(
    input: impl Into<CountsInput>,
) -> Result<Vec<FormattedOutcome>, ResultsError> {
    let counts = input.into().decode()?;
    Ok(format_counts(&counts))
}

/// Rank already-decoded counts.
///
/// Entries are sorted by count, highest first; equal counts keep insertion
/// order. Each probability is `count / total * 100` rounded to two decimals.
/// When the total is zero every entry reports `"0.00"`, and an empty mapping
/// yields an empty list.
///
/// # Examples
///
/// ```
/// use qdoc_kit::results::{format_counts, OutcomeCounts};
///
/// let counts: OutcomeCounts = [("0", 1), ("1", 3)].into_iter().collect();
/// let ranked = format_counts(&counts);
/// assert_eq!(ranked[0].label, "1");
/// assert_eq!(ranked[0].probability, "75.00");
/// assert_eq!(ranked[1].probability, "25.00");
///
/// let zeros: OutcomeCounts = [("0", 0)].into_iter().collect();
/// assert_eq!(format_counts(&zeros)[0].probability, "0.00");
/// ```
pub fn format_counts(counts: &OutcomeCounts) -> Vec<FormattedOutcome> {
    let total = counts.total();
    if total == 0 && !counts.is_empty() {
        log::debug!("outcome total is zero; reporting 0.00 for every label");
    }

    let mut formatted: Vec<FormattedOutcome> = counts
        .iter()
        .map(|(label, count)| FormattedOutcome {
            label: label.to_string(),
            count,
            probability: probability(count, total),
        })
        .collect();

    // sort_by is stable: ties stay in insertion order
    formatted.sort_by(|a, b| b.count.cmp(&a.count));
    formatted
}

fn probability(count: u64, total: u128) -> String {
    if total == 0 {
        return to_fixed(0.0, 2);
    }
    to_fixed(count as f64 / total as f64 * 100.0, 2)
}
