use crate::rules::RuleSource;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal, run-level configuration errors.
///
/// These abort a run before (or instead of) producing a report. Naming
/// violations are never errors; they are report data.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read rule document {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rule document {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error("invalid pattern `{pattern}` in rule `{rule}`: {source}")]
    BadPattern {
        rule: String,
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    #[error(
        "rule `{rule}` can never fail: it allows any casing and has no affix, \
         pattern or vocabulary constraints"
    )]
    NeverFails { rule: String },

    #[error(
        "ambiguous rules for identifier `{identifier}`: `{first}` and `{second}` \
         both apply with specificity {score} at layer {layer}"
    )]
    AmbiguousRules {
        identifier: String,
        first: String,
        second: String,
        score: u32,
        layer: RuleSource,
    },

    #[error("failed to read identifier records: {0}")]
    Records(String),
}
