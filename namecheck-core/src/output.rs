use crate::report::ComplianceReport;
use crate::rules::Severity;
use serde_json::json;
use std::fmt::Write;

/// Output format for report consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Trait for formatting results in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for ComplianceReport {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "check",
            "summary": self.summary,
            "violations": self.violations,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        for violation in &self.violations {
            let severity = match violation.rule.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            writeln!(
                output,
                "{}: `{}` ({}, {}): {}",
                severity,
                violation.record.text,
                violation.record.construct_kind,
                violation.record.language_tag,
                violation.reason_code,
            )
            .unwrap();
            if let Some(detail) = &violation.detail {
                writeln!(output, "  {detail}").unwrap();
            }
            if let Some(name) = &violation.rule.name {
                writeln!(output, "  rule: {} ({})", name, violation.rule.source).unwrap();
            }
            if !violation.suggestions.is_empty() {
                writeln!(output, "  try: {}", violation.suggestions.join(", ")).unwrap();
            }
        }

        if !self.violations.is_empty() {
            writeln!(output).unwrap();
        }

        writeln!(
            output,
            "Checked {} identifiers: {} passed, {} violations",
            self.summary.total_checked,
            self.summary.passed(),
            self.summary.total_violations,
        )
        .unwrap();

        if self.summary.skipped > 0 {
            writeln!(output, "Skipped {} malformed records", self.summary.skipped).unwrap();
        }

        for (reason, count) in &self.summary.by_reason_code {
            writeln!(output, "  {reason}: {count}").unwrap();
        }

        output
    }
}
