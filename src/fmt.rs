//! Shared formatting utilities for numeric display and console output

use console::Emoji;

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Crossmark emoji for failure
pub const CROSSMARK: Emoji = Emoji("❌", "[FAIL]");

/// Sparkles emoji for completion/success
pub const SPARKLES: Emoji = Emoji("✨", "*");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Chart emoji for metrics/statistics
pub const CHART: Emoji = Emoji("📊", "~");

/// Microscope emoji for analysis/inspection
pub const MICROSCOPE: Emoji = Emoji("🔍", ">>");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Money emoji for cost estimates
pub const MONEY: Emoji = Emoji("💰", "$");

/// Link emoji for link rewriting
pub const LINK: Emoji = Emoji("🔗", "->");

/// Format a value with a fixed number of decimal places.
///
/// The value is rounded half away from zero at the requested precision, so
/// `12.345` becomes `"12.35"` rather than depending on the binary tie-breaking
/// of `{:.2}`. Negative zero is printed as plain zero.
///
/// # Examples
///
/// ```
/// use qdoc_kit::fmt::to_fixed;
///
/// assert_eq!(to_fixed(50.0, 2), "50.00");
/// assert_eq!(to_fixed(100.0 / 3.0, 2), "33.33");
/// assert_eq!(to_fixed(0.125, 2), "0.13");
/// assert_eq!(to_fixed(-0.001, 2), "0.00");
/// ```
pub fn to_fixed(value: f64, digits: u32) -> String {
    let factor = 10f64.powi(digits as i32);
    // `+ 0.0` folds -0.0 into 0.0 before formatting
    let rounded = (value * factor).round() / factor + 0.0;
    format!("{:.*}", digits as usize, rounded)
}

/// Render a horizontal bar of `width` cells filled proportionally to `percent`.
pub fn percent_bar(percent: f64, width: usize) -> String {
    let clamped = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width - filled));
    bar
}
