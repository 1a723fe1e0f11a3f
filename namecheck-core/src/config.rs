use crate::error::ConfigError;
use crate::record::IdentifierRecord;
use crate::rules::{NamingRule, RuleSet, RuleSource};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One rule document: a layer tag plus the rules it contributes.
///
/// Documents are TOML on disk; the same shape round-trips through JSON for
/// adapters that translate foreign configs (ESLint, stylelint, clang-tidy)
/// into this canonical form outside the core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleDocument {
    pub layer: RuleSource,
    #[serde(rename = "rule")]
    pub rules: Vec<NamingRule>,
}

impl RuleDocument {
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: Box::new(e),
        })
    }
}

/// Load and merge rule documents into a validated rule set.
///
/// Document order does not matter: precedence is decided entirely by the
/// resolver's specificity and layer scoring, never by load order.
pub fn load_rule_set<P: AsRef<Path>>(paths: &[P]) -> Result<RuleSet, ConfigError> {
    let mut rules = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let document = RuleDocument::from_toml_str(&content, path)?;
        for mut rule in document.rules {
            rule.source = document.layer;
            rules.push(rule);
        }
    }
    RuleSet::build(rules)
}

/// Identifier records parsed from JSON, plus the count of well-formed JSON
/// values that were not valid records and were skipped.
#[derive(Debug, Clone, Default)]
pub struct RecordBatch {
    pub records: Vec<IdentifierRecord>,
    pub skipped: usize,
}

impl RecordBatch {
    // A well-formed JSON value that is not a valid record is the upstream
    // extractor's bug: skip it and count it instead of failing the run
    fn push_value(&mut self, value: serde_json::Value) {
        match serde_json::from_value(value) {
            Ok(record) => self.records.push(record),
            Err(_) => self.skipped += 1,
        }
    }
}

/// Parse identifier records from JSON: either a single JSON array or one
/// JSON object per line. Unparseable JSON is fatal; valid JSON that is not
/// a valid record is skipped and counted.
pub fn parse_records(content: &str) -> Result<RecordBatch, ConfigError> {
    let mut batch = RecordBatch::default();

    if content.trim_start().starts_with('[') {
        let values: Vec<serde_json::Value> =
            serde_json::from_str(content).map_err(|e| ConfigError::Records(e.to_string()))?;
        for value in values {
            batch.push_value(value);
        }
        return Ok(batch);
    }

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let value: serde_json::Value = serde_json::from_str(line)
            .map_err(|e| ConfigError::Records(format!("line {}: {e}", index + 1)))?;
        batch.push_value(value);
    }
    Ok(batch)
}

/// Read identifier records from a file.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<RecordBatch, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_records(&content)
}
