//! Validation report display

use console::style;

use super::{Severity, ValidationReport};
use crate::fmt::{CHECKMARK, CROSSMARK, WARNING};

/// Render a validation report with issues grouped by file
pub fn render_report(report: &ValidationReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Checked {} markdown file{}\n\n",
        report.files_checked,
        if report.files_checked == 1 { "" } else { "s" }
    ));

    if report.issues.is_empty() {
        out.push_str(&format!(
            "{} {}\n",
            CHECKMARK,
            style("All documentation files are valid!").green().bold()
        ));
        return out;
    }

    let mut current_file = None;
    for issue in &report.issues {
        if current_file != Some(&issue.file) {
            out.push_str(&format!("{}\n", style(issue.file.display()).bold()));
            current_file = Some(&issue.file);
        }

        let label = match issue.severity {
            Severity::Error => style(issue.severity.as_str()).red().bold(),
            Severity::Warning => style(issue.severity.as_str()).yellow().bold(),
        };
        let line = issue
            .line
            .map(|l| format!("{:>4}", l))
            .unwrap_or_else(|| "   -".to_string());
        out.push_str(&format!(
            "  {} {} [{}] {}\n",
            style(line).dim(),
            label,
            issue.check.as_str(),
            issue.message
        ));
    }

    let errors = report.errors().len();
    let warnings = report.warnings().len();
    out.push('\n');
    if errors > 0 {
        out.push_str(&format!(
            "{} Found {} error(s) and {} warning(s) in {} file(s)\n",
            CROSSMARK,
            style(errors).red().bold(),
            style(warnings).yellow(),
            report.files_with_issues()
        ));
    } else {
        out.push_str(&format!(
            "{} Found {} warning(s) in {} file(s)\n",
            WARNING,
            style(warnings).yellow().bold(),
            report.files_with_issues()
        ));
    }
    out
}

/// Print a validation report to stdout
pub fn print_report(report: &ValidationReport) {
    print!("{}", render_report(report));
}
