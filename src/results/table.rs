//! Terminal rendering of ranked outcomes

use console::style;

use super::FormattedOutcome;
use crate::fmt::{percent_bar, CHART};

const BAR_WIDTH: usize = 30;

/// Formats ranked outcomes as a terminal table
pub struct ResultsTable;

impl ResultsTable {
    /// Render outcomes as table rows: label, count, percentage and a bar
    pub fn render(outcomes: &[FormattedOutcome]) -> String {
        if outcomes.is_empty() {
            return format!("   {} No outcomes recorded\n", style("→").dim());
        }

        let label_width = outcomes
            .iter()
            .map(|o| o.label.chars().count())
            .max()
            .unwrap_or(0)
            .max("Outcome".len());
        let count_width = outcomes
            .iter()
            .map(|o| o.count.to_string().len())
            .max()
            .unwrap_or(0)
            .max("Count".len());

        let mut out = String::new();
        out.push_str(&format!(
            "   {:<lw$}  {:>cw$}  {:>7}\n",
            style("Outcome").bold(),
            style("Count").bold(),
            style("Prob %").bold(),
            lw = label_width,
            cw = count_width,
        ));

        for outcome in outcomes {
            out.push_str(&format!(
                "   {:<lw$}  {:>cw$}  {:>7}  {}\n",
                style(&outcome.label).cyan(),
                outcome.count,
                outcome.probability,
                style(percent_bar(outcome.percent(), BAR_WIDTH)).green(),
                lw = label_width,
                cw = count_width,
            ));
        }
        out
    }

    /// Print a titled table of outcomes to stdout
    pub fn print(outcomes: &[FormattedOutcome]) {
        let total: u128 = outcomes.iter().map(|o| u128::from(o.count)).sum();
        println!(
            "\n{} {} ({} outcomes, {} shots)\n",
            CHART,
            style("Measurement Results").bold(),
            outcomes.len(),
            total
        );
        print!("{}", Self::render(outcomes));
    }
}
