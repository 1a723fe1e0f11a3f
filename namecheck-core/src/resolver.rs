use crate::error::ConfigError;
use crate::record::IdentifierRecord;
use crate::rules::{CompiledRule, RuleSet};

/// Resolve the single effective rule for an identifier.
///
/// Candidates are ranked by specificity score, then by layer priority
/// (inline > project > preset > default). A surviving tie between rules
/// with different content is a fatal configuration error rather than a
/// guess. A record no rule matches gets the universal fallback, so
/// unconfigured constructs are never rejected.
pub fn resolve<'a>(
    rules: &'a RuleSet,
    record: &IdentifierRecord,
) -> Result<&'a CompiledRule, ConfigError> {
    let mut best: Option<(&'a CompiledRule, u32)> = None;
    let mut contender: Option<&'a CompiledRule> = None;

    for candidate in rules.rules() {
        let Some(score) = candidate.rule.applies_to.specificity(record) else {
            continue;
        };

        match best {
            None => best = Some((candidate, score)),
            Some((current, current_score)) => {
                let candidate_key = (score, candidate.rule.source);
                let current_key = (current_score, current.rule.source);
                if candidate_key > current_key {
                    best = Some((candidate, score));
                    contender = None;
                } else if candidate_key == current_key
                    && contender.is_none()
                    && candidate.rule != current.rule
                {
                    contender = Some(candidate);
                }
            },
        }
    }

    match best {
        None => Ok(&rules.fallback),
        Some((winner, score)) => {
            if let Some(other) = contender {
                return Err(ConfigError::AmbiguousRules {
                    identifier: record.text.clone(),
                    first: winner.rule.label(),
                    second: other.rule.label(),
                    score,
                    layer: winner.rule.source,
                });
            }
            Ok(winner)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case_model::Style;
    use crate::record::{ConstructKind, LanguageTag, Scope, Visibility};
    use crate::rules::{AppliesTo, NamingRule, RuleSource};

    fn record(kind: ConstructKind, language: LanguageTag) -> IdentifierRecord {
        IdentifierRecord {
            text: "sample".to_string(),
            construct_kind: kind,
            scope: Scope::default(),
            language_tag: language,
        }
    }

    fn rule(name: &str, applies_to: AppliesTo, styles: Vec<Style>, source: RuleSource) -> NamingRule {
        NamingRule {
            name: Some(name.to_string()),
            applies_to,
            allowed_casings: styles,
            source,
            ..NamingRule::default()
        }
    }

    #[test]
    fn test_more_specific_rule_wins() {
        let general = rule(
            "any-variable",
            AppliesTo {
                kinds: vec![ConstructKind::Variable],
                ..AppliesTo::default()
            },
            vec![Style::Camel],
            RuleSource::Preset,
        );
        let specific = rule(
            "php-variables",
            AppliesTo {
                kinds: vec![ConstructKind::Variable],
                languages: vec![LanguageTag::Php],
                ..AppliesTo::default()
            },
            vec![Style::Snake],
            RuleSource::Preset,
        );
        let set = RuleSet::build(vec![general, specific]).unwrap();

        let r = record(ConstructKind::Variable, LanguageTag::Php);
        let resolved = resolve(&set, &r).unwrap();
        assert_eq!(resolved.rule.name.as_deref(), Some("php-variables"));

        let r = record(ConstructKind::Variable, LanguageTag::Javascript);
        let resolved = resolve(&set, &r).unwrap();
        assert_eq!(resolved.rule.name.as_deref(), Some("any-variable"));
    }

    #[test]
    fn test_equal_specificity_resolved_by_layer() {
        let applies = AppliesTo {
            kinds: vec![ConstructKind::PrivateField],
            languages: vec![LanguageTag::Cpp],
            ..AppliesTo::default()
        };
        let preset = rule(
            "preset-private-fields",
            applies.clone(),
            vec![Style::Snake],
            RuleSource::Preset,
        );
        let project = rule(
            "project-private-fields",
            applies,
            vec![Style::Camel],
            RuleSource::Project,
        );
        let set = RuleSet::build(vec![preset, project]).unwrap();

        let r = record(ConstructKind::PrivateField, LanguageTag::Cpp);
        let resolved = resolve(&set, &r).unwrap();
        assert_eq!(
            resolved.rule.name.as_deref(),
            Some("project-private-fields")
        );
    }

    #[test]
    fn test_exhausted_tie_break_is_fatal() {
        let applies = AppliesTo {
            kinds: vec![ConstructKind::Column],
            ..AppliesTo::default()
        };
        let first = rule(
            "columns-a",
            applies.clone(),
            vec![Style::Snake],
            RuleSource::Project,
        );
        let second = rule(
            "columns-b",
            applies,
            vec![Style::Camel],
            RuleSource::Project,
        );
        let set = RuleSet::build(vec![first, second]).unwrap();

        let r = record(ConstructKind::Column, LanguageTag::Sql);
        let err = resolve(&set, &r).unwrap_err();
        assert!(matches!(err, ConfigError::AmbiguousRules { .. }));
    }

    #[test]
    fn test_identical_duplicate_rules_are_not_ambiguous() {
        let applies = AppliesTo {
            kinds: vec![ConstructKind::Column],
            ..AppliesTo::default()
        };
        let first = rule("columns", applies.clone(), vec![Style::Snake], RuleSource::Project);
        let second = rule("columns", applies, vec![Style::Snake], RuleSource::Project);
        let set = RuleSet::build(vec![first, second]).unwrap();

        let r = record(ConstructKind::Column, LanguageTag::Sql);
        assert!(resolve(&set, &r).is_ok());
    }

    #[test]
    fn test_unmatched_record_falls_back_to_universal_rule() {
        let set = RuleSet::empty();
        let r = record(ConstructKind::CssCustomProperty, LanguageTag::Css);
        let resolved = resolve(&set, &r).unwrap();
        assert_eq!(resolved.rule.name.as_deref(), Some("any-identifier"));
        assert!(resolved.rule.allowed_casings.is_empty());
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let scoped = rule(
            "static-members",
            AppliesTo {
                kinds: vec![ConstructKind::StaticField],
                is_static: Some(true),
                visibility: Some(Visibility::Private),
                ..AppliesTo::default()
            },
            vec![Style::ScreamingSnake],
            RuleSource::Project,
        );
        let set = RuleSet::build(vec![scoped]).unwrap();

        let mut r = record(ConstructKind::StaticField, LanguageTag::Cpp);
        r.scope.is_static = Some(true);
        r.scope.visibility = Some(Visibility::Private);

        let first = resolve(&set, &r).unwrap();
        let second = resolve(&set, &r).unwrap();
        assert_eq!(first.rule, second.rule);
        assert_eq!(first.rule.source, second.rule.source);
    }
}
