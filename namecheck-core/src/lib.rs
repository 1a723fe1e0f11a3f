#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod acronym;
pub mod case_model;
pub mod config;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod output;
pub mod record;
pub mod report;
pub mod resolver;
pub mod rules;
pub mod suggest;

pub use acronym::{default_acronym_set, AcronymSet};
pub use case_model::{classify, parse_to_tokens, to_style, transform, Style, Token, TokenModel};
pub use config::{load_records, load_rule_set, parse_records, RecordBatch, RuleDocument};
pub use engine::Engine;
pub use error::ConfigError;
pub use matcher::{check, MatchResult, ReasonCode};
pub use output::{OutputFormat, OutputFormatter};
pub use record::{ConstructKind, IdentifierRecord, LanguageTag, Scope, Visibility};
pub use report::{ComplianceReport, ReportSummary, RuleRef, Violation};
pub use resolver::resolve;
pub use rules::{
    AppliesTo, CompiledRule, NamingRule, RequiredAffixes, RuleSet, RuleSource, Severity,
};
pub use suggest::suggest;
