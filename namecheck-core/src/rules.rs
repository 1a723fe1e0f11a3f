use crate::case_model::Style;
use crate::error::ConfigError;
use crate::record::{ConstructKind, IdentifierRecord, LanguageTag, Visibility};
use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which configuration layer contributed a rule. Later layers win ties.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RuleSource {
    #[default]
    Default,
    Preset,
    Project,
    Inline,
}

impl fmt::Display for RuleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Default => "default",
            Self::Preset => "preset",
            Self::Project => "project",
            Self::Inline => "inline",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

/// Predicate selecting which identifiers a rule governs. Empty lists and
/// `None` dimensions match anything; constrained dimensions must match
/// exactly and contribute to the rule's specificity score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppliesTo {
    pub kinds: Vec<ConstructKind>,
    pub languages: Vec<LanguageTag>,
    pub visibility: Option<Visibility>,
    pub is_static: Option<bool>,
    pub container: Option<String>,
    pub bem_block: Option<String>,
}

impl AppliesTo {
    /// Specificity score for a record, or `None` if the predicate does not
    /// match. Language and kind constraints score 2 each; every matched
    /// scope dimension scores 1.
    pub fn specificity(&self, record: &IdentifierRecord) -> Option<u32> {
        let mut score = 0;

        if !self.kinds.is_empty() {
            if !self.kinds.contains(&record.construct_kind) {
                return None;
            }
            score += 2;
        }
        if !self.languages.is_empty() {
            if !self.languages.contains(&record.language_tag) {
                return None;
            }
            score += 2;
        }
        if let Some(visibility) = self.visibility {
            if record.scope.visibility != Some(visibility) {
                return None;
            }
            score += 1;
        }
        if let Some(is_static) = self.is_static {
            if record.scope.is_static != Some(is_static) {
                return None;
            }
            score += 1;
        }
        if let Some(container) = &self.container {
            if record.scope.container.as_deref() != Some(container.as_str()) {
                return None;
            }
            score += 1;
        }
        if let Some(bem_block) = &self.bem_block {
            if record.scope.bem_block.as_deref() != Some(bem_block.as_str()) {
                return None;
            }
            score += 1;
        }

        Some(score)
    }
}

/// Required prefix/suffix constraints, checked independently of casing.
/// Literal lists are any-of alternatives; patterns are anchored regexes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequiredAffixes {
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
    pub prefix_pattern: Option<String>,
    pub suffix_pattern: Option<String>,
}

impl RequiredAffixes {
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
            && self.suffixes.is_empty()
            && self.prefix_pattern.is_none()
            && self.suffix_pattern.is_none()
    }
}

/// One declarative policy statement, as authored in a rule document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingRule {
    pub name: Option<String>,
    pub applies_to: AppliesTo,
    /// Any one of these satisfies the casing check; empty means any casing.
    /// List order is the suggestion priority.
    pub allowed_casings: Vec<Style>,
    pub affixes: RequiredAffixes,
    /// Regexes that fail the identifier regardless of casing
    pub forbidden_patterns: Vec<String>,
    /// Exact-match vocabulary that always fails (reserved words)
    pub reserved_words: Vec<String>,
    pub severity: Severity,
    #[serde(skip)]
    pub source: RuleSource,
}

impl NamingRule {
    /// Human-readable label for diagnostics.
    pub fn label(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("<unnamed {} rule>", self.source))
    }

    fn constrains_nothing(&self) -> bool {
        self.allowed_casings.is_empty()
            && self.affixes.is_empty()
            && self.forbidden_patterns.is_empty()
            && self.reserved_words.is_empty()
    }
}

/// A rule with its regexes and vocabulary matcher compiled up front.
/// Compilation happens once at load; matching is allocation-free on the
/// regex side after that.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub rule: NamingRule,
    pub(crate) forbidden: Vec<Regex>,
    pub(crate) reserved: Option<AhoCorasick>,
    pub(crate) prefix_pattern: Option<Regex>,
    pub(crate) suffix_pattern: Option<Regex>,
}

impl CompiledRule {
    fn compile(rule: NamingRule) -> Result<Self, ConfigError> {
        let bad_pattern = |pattern: &str, source: regex::Error| ConfigError::BadPattern {
            rule: rule.label(),
            pattern: pattern.to_string(),
            source: Box::new(source),
        };

        let mut forbidden = Vec::with_capacity(rule.forbidden_patterns.len());
        for pattern in &rule.forbidden_patterns {
            forbidden.push(Regex::new(pattern).map_err(|e| bad_pattern(pattern, e))?);
        }

        let prefix_pattern = match &rule.affixes.prefix_pattern {
            Some(pattern) => Some(
                Regex::new(&format!("^(?:{pattern})")).map_err(|e| bad_pattern(pattern, e))?,
            ),
            None => None,
        };
        let suffix_pattern = match &rule.affixes.suffix_pattern {
            Some(pattern) => Some(
                Regex::new(&format!("(?:{pattern})$")).map_err(|e| bad_pattern(pattern, e))?,
            ),
            None => None,
        };

        let reserved = if rule.reserved_words.is_empty() {
            None
        } else {
            // LeftmostLongest + a whole-string span check gives exact,
            // case-insensitive vocabulary matching
            Some(
                AhoCorasickBuilder::new()
                    .match_kind(MatchKind::LeftmostLongest)
                    .ascii_case_insensitive(true)
                    .build(&rule.reserved_words)
                    .expect("reserved word list is a valid automaton"),
            )
        };

        Ok(Self {
            rule,
            forbidden,
            reserved,
            prefix_pattern,
            suffix_pattern,
        })
    }

    /// The reserved word the text exactly matches, if any.
    pub(crate) fn reserved_match(&self, text: &str) -> Option<&str> {
        let ac = self.reserved.as_ref()?;
        let m = ac.find(text)?;
        if m.start() == 0 && m.end() == text.len() {
            Some(&self.rule.reserved_words[m.pattern().as_usize()])
        } else {
            None
        }
    }
}

/// The full layered rule set, validated and compiled, read-only for the
/// duration of a run.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub(crate) rules: Vec<CompiledRule>,
    pub(crate) fallback: CompiledRule,
}

impl RuleSet {
    /// Compile and validate a list of loaded rules.
    ///
    /// Rejects rules that can never fail (no casing, affix, pattern or
    /// vocabulary constraint) as a configuration smell, and rejects any
    /// rule with an uncompilable regex.
    pub fn build(rules: Vec<NamingRule>) -> Result<Self, ConfigError> {
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            if rule.constrains_nothing() {
                return Err(ConfigError::NeverFails { rule: rule.label() });
            }
            compiled.push(CompiledRule::compile(rule)?);
        }

        // Universal fallback: unconfigured constructs are never rejected
        let fallback = CompiledRule::compile(NamingRule {
            name: Some("any-identifier".to_string()),
            severity: Severity::Warning,
            ..NamingRule::default()
        })?;

        Ok(Self {
            rules: compiled,
            fallback,
        })
    }

    /// Build an empty rule set (everything falls back to the universal rule).
    pub fn empty() -> Self {
        Self::build(Vec::new()).expect("empty rule set always builds")
    }

    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
