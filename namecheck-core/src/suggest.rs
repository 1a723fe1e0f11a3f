use crate::case_model::{parse_to_tokens, to_style, Style};
use crate::matcher::check;
use crate::rules::CompiledRule;

/// Propose conforming rewrites of `text` for a rule it failed.
///
/// One candidate per allowed casing style, primary (first-listed) style
/// first. Each candidate is re-run through the matcher before being
/// returned; anything that still fails is dropped, so a returned suggestion
/// is guaranteed to pass. Callers should not ask for suggestions on
/// forbidden-pattern or reserved-word failures — there is no safe automatic
/// rename for those.
pub fn suggest(text: &str, rule: &CompiledRule) -> Vec<String> {
    let (core, found) = strip_present_affixes(text, rule);
    let tokens = parse_to_tokens(core);
    if tokens.tokens.is_empty() {
        return Vec::new();
    }

    let affixes = &rule.rule.affixes;
    let prefix = found
        .prefix
        .or_else(|| affixes.prefixes.first().map(String::as_str))
        .unwrap_or("");
    let suffix = found
        .suffix
        .or_else(|| affixes.suffixes.first().map(String::as_str))
        .unwrap_or("");

    let mut suggestions = Vec::new();
    let targets: &[Style] = if rule.rule.allowed_casings.is_empty() {
        // Casing unconstrained: keep the body as written, fix affixes only
        &[]
    } else {
        &rule.rule.allowed_casings
    };

    if targets.is_empty() {
        for candidate in candidate_forms(prefix, core, suffix, None) {
            push_if_passing(&mut suggestions, candidate, rule);
        }
        return suggestions;
    }

    for &style in targets {
        let rendered = to_style(&tokens, style);
        // If the re-rendered body already carries the affix, do not double
        // it. A body that IS the affix still needs one prepended.
        let prefix = if !prefix.is_empty()
            && rendered.starts_with(prefix)
            && rendered.len() > prefix.len()
        {
            ""
        } else {
            prefix
        };
        let suffix = if !suffix.is_empty()
            && rendered.ends_with(suffix)
            && rendered.len() > suffix.len()
        {
            ""
        } else {
            suffix
        };
        for candidate in candidate_forms(prefix, &rendered, suffix, Some(style)) {
            if push_if_passing(&mut suggestions, candidate, rule) {
                // One suggestion per allowed style
                break;
            }
        }
    }

    suggestions
}

fn push_if_passing(suggestions: &mut Vec<String>, candidate: String, rule: &CompiledRule) -> bool {
    if suggestions.contains(&candidate) {
        return false;
    }
    if !check(&candidate, rule).pass {
        return false;
    }
    suggestions.push(candidate);
    true
}

/// Affix text actually present on the failing identifier, preferred over
/// the rule's first alternative when rebuilding candidates.
struct FoundAffixes<'a> {
    prefix: Option<&'a str>,
    suffix: Option<&'a str>,
}

/// Remove whatever required affixes are already present so the casing body
/// can be re-rendered without doubling them. Unlike the matcher this never
/// fails; absent affixes simply are not stripped.
fn strip_present_affixes<'a>(
    text: &'a str,
    rule: &CompiledRule,
) -> (&'a str, FoundAffixes<'a>) {
    let affixes = &rule.rule.affixes;
    let mut rest = text;
    let mut found = FoundAffixes {
        prefix: None,
        suffix: None,
    };

    if let Some(prefix) = affixes
        .prefixes
        .iter()
        .filter(|p| rest.starts_with(p.as_str()))
        .max_by_key(|p| p.len())
    {
        found.prefix = Some(&rest[..prefix.len()]);
        rest = &rest[prefix.len()..];
    } else if let Some(m) = rule.prefix_pattern.as_ref().and_then(|re| re.find(rest)) {
        if m.end() > 0 {
            found.prefix = Some(&rest[..m.end()]);
            rest = &rest[m.end()..];
        }
    }

    if let Some(suffix) = affixes
        .suffixes
        .iter()
        .filter(|s| rest.ends_with(s.as_str()))
        .max_by_key(|s| s.len())
    {
        found.suffix = Some(&rest[rest.len() - suffix.len()..]);
        rest = &rest[..rest.len() - suffix.len()];
    } else if let Some(m) = rule.suffix_pattern.as_ref().and_then(|re| re.find(rest)) {
        if m.start() < rest.len() {
            found.suffix = Some(&rest[m.start()..]);
            rest = &rest[..m.start()];
        }
    }

    // A separator left dangling after a stripped affix belongs to the affix
    let rest = rest.trim_matches(|c| c == '_' || c == '-');
    (rest, found)
}

/// Candidate spellings of prefix + body + suffix for a target style, most
/// idiomatic join first. The matcher re-check filters out any form the rule
/// does not actually accept.
fn candidate_forms(
    prefix: &str,
    body: &str,
    suffix: &str,
    style: Option<Style>,
) -> Vec<String> {
    if prefix.is_empty() && suffix.is_empty() {
        return vec![body.to_string()];
    }

    let mut forms = Vec::new();
    match style {
        Some(Style::Camel | Style::Pascal) => {
            // `is` + `active` joins as `isActive`
            let capitalized = if prefix.ends_with(|c: char| c.is_ascii_alphanumeric()) {
                capitalize_first(body)
            } else {
                body.to_string()
            };
            forms.push(format!("{prefix}{capitalized}{suffix}"));
        },
        Some(Style::Snake | Style::ScreamingSnake) => {
            forms.push(join_with(prefix, body, suffix, '_'));
        },
        Some(Style::Kebab) => {
            forms.push(join_with(prefix, body, suffix, '-'));
        },
        Some(Style::LowerFlat) | None => {},
    }

    let plain = format!("{prefix}{body}{suffix}");
    if !forms.contains(&plain) {
        forms.push(plain);
    }
    forms
}

fn join_with(prefix: &str, body: &str, suffix: &str, sep: char) -> String {
    let mut out = String::new();
    if !prefix.is_empty() {
        out.push_str(prefix);
        if !prefix.ends_with(sep) {
            out.push(sep);
        }
    }
    out.push_str(body);
    if !suffix.is_empty() {
        if !suffix.starts_with(sep) {
            out.push(sep);
        }
        out.push_str(suffix);
    }
    out
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{NamingRule, RequiredAffixes, RuleSet};

    fn compiled(rule: NamingRule) -> RuleSet {
        RuleSet::build(vec![rule]).unwrap()
    }

    #[test]
    fn test_wrong_casing_suggestion() {
        let rule = NamingRule {
            name: Some("ts-variables".to_string()),
            allowed_casings: vec![Style::Camel],
            ..NamingRule::default()
        };
        let set = compiled(rule);
        assert_eq!(suggest("first_name", &set.rules()[0]), vec!["firstName"]);
    }

    #[test]
    fn test_one_suggestion_per_allowed_style_primary_first() {
        let rule = NamingRule {
            name: Some("cpp-functions".to_string()),
            allowed_casings: vec![Style::Snake, Style::Pascal],
            ..NamingRule::default()
        };
        let set = compiled(rule);
        assert_eq!(
            suggest("parseInput", &set.rules()[0]),
            vec!["parse_input", "ParseInput"]
        );
    }

    #[test]
    fn test_boolean_prefix_suggestion() {
        let rule = NamingRule {
            name: Some("booleans".to_string()),
            allowed_casings: vec![Style::Camel],
            affixes: RequiredAffixes {
                prefixes: vec!["is".to_string(), "has".to_string(), "can".to_string()],
                ..RequiredAffixes::default()
            },
            ..NamingRule::default()
        };
        let set = compiled(rule);
        // Present prefix is reused, dangling underscore folded into the join
        assert_eq!(suggest("is_active", &set.rules()[0]), vec!["isActive"]);
        // Absent prefix: first alternative applied
        assert_eq!(suggest("active", &set.rules()[0]), vec!["isActive"]);
        // A body that happens to spell the prefix still gets one prepended
        assert_eq!(suggest("Is", &set.rules()[0]), vec!["isIs"]);
    }

    #[test]
    fn test_consecutive_single_letter_words_get_suggestions() {
        let rule = NamingRule {
            name: Some("booleans".to_string()),
            allowed_casings: vec![Style::Camel],
            affixes: RequiredAffixes {
                prefixes: vec!["is".to_string()],
                ..RequiredAffixes::default()
            },
            ..NamingRule::default()
        };
        let set = compiled(rule);
        let compiled_rule = &set.rules()[0];

        let suggestions = suggest("a_a_aa", compiled_rule);
        assert!(!suggestions.is_empty());
        for suggestion in &suggestions {
            assert!(
                check(suggestion, compiled_rule).pass,
                "suggestion {suggestion} failed its own rule"
            );
        }
    }

    #[test]
    fn test_missing_suffix_suggestion() {
        let rule = NamingRule {
            name: Some("exceptions".to_string()),
            allowed_casings: vec![Style::Pascal],
            affixes: RequiredAffixes {
                suffixes: vec!["Exception".to_string()],
                ..RequiredAffixes::default()
            },
            ..NamingRule::default()
        };
        let set = compiled(rule);
        assert_eq!(
            suggest("userNotFound", &set.rules()[0]),
            vec!["UserNotFoundException"]
        );
        // An already-present suffix is not doubled
        assert_eq!(
            suggest("user_not_found_exception", &set.rules()[0]),
            vec!["UserNotFoundException"]
        );
    }

    #[test]
    fn test_all_suggestions_repass_matcher() {
        let rule = NamingRule {
            name: Some("css-classes".to_string()),
            allowed_casings: vec![Style::Kebab, Style::Snake, Style::Camel],
            ..NamingRule::default()
        };
        let set = compiled(rule);
        let compiled_rule = &set.rules()[0];
        for sample in ["SomeBlockName", "WEIRD_NAME", "alreadyCamel"] {
            for suggestion in suggest(sample, compiled_rule) {
                assert!(
                    check(&suggestion, compiled_rule).pass,
                    "suggestion {suggestion} for {sample} failed its own rule"
                );
            }
        }
    }

    #[test]
    fn test_no_suggestion_for_unsalvageable_input() {
        let rule = NamingRule {
            name: Some("vars".to_string()),
            allowed_casings: vec![Style::Camel],
            ..NamingRule::default()
        };
        let set = compiled(rule);
        assert!(suggest("", &set.rules()[0]).is_empty());
    }
}
