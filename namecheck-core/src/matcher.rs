use crate::case_model::classify;
use crate::rules::CompiledRule;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which sub-check a failing identifier tripped.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ReasonCode {
    WrongCasing,
    MissingAffix,
    ForbiddenPattern,
    ReservedWord,
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::WrongCasing => "wrong casing",
            Self::MissingAffix => "missing required affix",
            Self::ForbiddenPattern => "forbidden pattern",
            Self::ReservedWord => "reserved word",
        };
        f.write_str(name)
    }
}

/// Verdict for one identifier against one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub pass: bool,
    pub reason: Option<ReasonCode>,
    pub detail: Option<String>,
}

impl MatchResult {
    fn passed() -> Self {
        Self {
            pass: true,
            reason: None,
            detail: None,
        }
    }

    fn failed(reason: ReasonCode, detail: String) -> Self {
        Self {
            pass: false,
            reason: Some(reason),
            detail: Some(detail),
        }
    }
}

/// Evaluate an identifier against a rule. First failure wins:
/// vocabulary/forbidden patterns, then required affixes, then casing on the
/// affix-stripped remainder. A reserved word never passes no matter how
/// well-cased it is.
pub fn check(text: &str, rule: &CompiledRule) -> MatchResult {
    if let Some(word) = rule.reserved_match(text) {
        return MatchResult::failed(
            ReasonCode::ReservedWord,
            format!("`{text}` is the reserved word `{word}`"),
        );
    }

    for (regex, pattern) in rule.forbidden.iter().zip(&rule.rule.forbidden_patterns) {
        if regex.is_match(text) {
            return MatchResult::failed(
                ReasonCode::ForbiddenPattern,
                format!("matches forbidden pattern `{pattern}`"),
            );
        }
    }

    let (remainder, stripped_prefix) = match strip_required_affixes(text, rule) {
        Ok(stripped) => stripped,
        Err(detail) => return MatchResult::failed(ReasonCode::MissingAffix, detail),
    };

    let allowed = &rule.rule.allowed_casings;
    if allowed.is_empty() {
        return MatchResult::passed();
    }

    let styles = classify(&remainder);
    if styles.iter().any(|s| allowed.contains(s)) {
        return MatchResult::passed();
    }

    // After a literal prefix the remainder's leading capital is part of the
    // camel joint: `isActive` strips to `Active` but should be checked as
    // `active`
    if stripped_prefix {
        let decapped = decapitalize(&remainder);
        if decapped != remainder && classify(&decapped).iter().any(|s| allowed.contains(s)) {
            return MatchResult::passed();
        }
    }

    let allowed_names = allowed
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    MatchResult::failed(
        ReasonCode::WrongCasing,
        format!("`{remainder}` is not {allowed_names}"),
    )
}

/// Strip every required affix from `text`, failing with a `MissingAffix`
/// detail if one is absent. Returns the remainder and whether a prefix was
/// actually removed.
fn strip_required_affixes<'a>(
    text: &'a str,
    rule: &CompiledRule,
) -> Result<(&'a str, bool), String> {
    let affixes = &rule.rule.affixes;
    let mut rest = text;
    let mut stripped_prefix = false;

    if !affixes.prefixes.is_empty() {
        // Longest alternative first so overlapping prefixes strip fully
        let hit = affixes
            .prefixes
            .iter()
            .filter(|p| rest.starts_with(p.as_str()))
            .max_by_key(|p| p.len());
        match hit {
            Some(prefix) => {
                rest = &rest[prefix.len()..];
                stripped_prefix = true;
            },
            None => {
                return Err(format!(
                    "missing required prefix (one of: {})",
                    affixes.prefixes.join(", ")
                ));
            },
        }
    }

    if let Some(regex) = &rule.prefix_pattern {
        match regex.find(rest) {
            Some(m) => {
                stripped_prefix |= m.end() > 0;
                rest = &rest[m.end()..];
            },
            None => {
                return Err(format!(
                    "missing required prefix matching `{}`",
                    affixes.prefix_pattern.as_deref().unwrap_or_default()
                ));
            },
        }
    }

    if !affixes.suffixes.is_empty() {
        let hit = affixes
            .suffixes
            .iter()
            .filter(|s| rest.ends_with(s.as_str()))
            .max_by_key(|s| s.len());
        match hit {
            Some(suffix) => rest = &rest[..rest.len() - suffix.len()],
            None => {
                return Err(format!(
                    "missing required suffix (one of: {})",
                    affixes.suffixes.join(", ")
                ));
            },
        }
    }

    if let Some(regex) = &rule.suffix_pattern {
        match regex.find(rest) {
            Some(m) => rest = &rest[..m.start()],
            None => {
                return Err(format!(
                    "missing required suffix matching `{}`",
                    affixes.suffix_pattern.as_deref().unwrap_or_default()
                ));
            },
        }
    }

    Ok((rest, stripped_prefix))
}

fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}
