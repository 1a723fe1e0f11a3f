use crate::error::ConfigError;
use crate::matcher::{check, ReasonCode};
use crate::record::IdentifierRecord;
use crate::report::{ComplianceReport, ReportSummary, RuleRef, Violation};
use crate::resolver::resolve;
use crate::rules::RuleSet;
use crate::suggest::suggest;
use rayon::prelude::*;

/// The compliance engine: a loaded rule set applied to identifier streams.
///
/// The rule set is read-only for the lifetime of the engine, and each
/// identifier is checked independently, so records are processed in
/// parallel and reassembled in input order afterwards. Nothing is retained
/// between runs.
#[derive(Debug, Clone)]
pub struct Engine {
    rules: RuleSet,
}

enum Outcome {
    Pass,
    Skipped,
    Violation(Box<Violation>),
}

impl Engine {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Check every record and build the report.
    ///
    /// A failing identifier only yields a violation; the rest of the stream
    /// is still processed. An ambiguous rule resolution is a fatal
    /// configuration error and aborts the whole run with no report.
    pub fn run(&self, records: Vec<IdentifierRecord>) -> Result<ComplianceReport, ConfigError> {
        let outcomes: Vec<Outcome> = records
            .into_par_iter()
            .map(|record| self.check_record(record))
            .collect::<Result<_, _>>()?;

        let mut report = ComplianceReport::default();
        for outcome in outcomes {
            match outcome {
                Outcome::Pass => report.summary.total_checked += 1,
                Outcome::Skipped => report.summary.skipped += 1,
                Outcome::Violation(violation) => {
                    report.summary.total_checked += 1;
                    report.summary.total_violations += 1;
                    *report
                        .summary
                        .by_reason_code
                        .entry(violation.reason_code)
                        .or_insert(0) += 1;
                    report.violations.push(*violation);
                },
            }
        }
        Ok(report)
    }

    fn check_record(&self, record: IdentifierRecord) -> Result<Outcome, ConfigError> {
        // Malformed upstream records are the producer's problem; skip, don't
        // fail the run
        if record.text.is_empty() {
            return Ok(Outcome::Skipped);
        }

        let rule = resolve(&self.rules, &record)?;
        let result = check(&record.text, rule);
        if result.pass {
            return Ok(Outcome::Pass);
        }

        let reason_code = result.reason.unwrap_or(ReasonCode::WrongCasing);
        let suggestions = match reason_code {
            ReasonCode::WrongCasing | ReasonCode::MissingAffix => suggest(&record.text, rule),
            // No safe auto-fix for reserved words or forbidden patterns
            ReasonCode::ForbiddenPattern | ReasonCode::ReservedWord => Vec::new(),
        };

        Ok(Outcome::Violation(Box::new(Violation {
            rule: RuleRef::from(&rule.rule),
            record,
            reason_code,
            detail: result.detail,
            suggestions,
        })))
    }
}

impl ReportSummary {
    /// Convenience for consumers that only need a pass/fail split.
    pub fn passed(&self) -> usize {
        self.total_checked - self.total_violations
    }
}
