use crate::matcher::ReasonCode;
use crate::record::IdentifierRecord;
use crate::rules::{NamingRule, RuleSource, Severity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The rule a violation was raised against, trimmed down to what a report
/// consumer needs to explain the finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleRef {
    pub name: Option<String>,
    pub severity: Severity,
    pub source: RuleSource,
}

impl From<&NamingRule> for RuleRef {
    fn from(rule: &NamingRule) -> Self {
        Self {
            name: rule.name.clone(),
            severity: rule.severity,
            source: rule.source,
        }
    }
}

/// One failing identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub record: IdentifierRecord,
    pub rule: RuleRef,
    pub reason_code: ReasonCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Candidate replacements, best first; empty for forbidden-pattern and
    /// reserved-word failures
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_checked: usize,
    pub total_violations: usize,
    pub skipped: usize,
    #[serde(rename = "byReasonCode")]
    pub by_reason_code: BTreeMap<ReasonCode, usize>,
}

/// The engine's output: violations in input order plus aggregate counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    pub violations: Vec<Violation>,
    pub summary: ReportSummary,
}

impl ComplianceReport {
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// True when any violation carries error severity (as opposed to a
    /// report made up purely of warnings).
    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.rule.severity == Severity::Error)
    }
}
