use anyhow::{Context, Result};
use namecheck_core::{load_rule_set, Severity};
use std::path::PathBuf;

/// Load and validate rule documents, then print the effective rule table.
pub fn handle_rules(paths: &[PathBuf]) -> Result<()> {
    let set = load_rule_set(paths).context("Failed to load rule documents")?;

    println!(
        "Loaded {} rule{} from {} document{}",
        set.len(),
        if set.len() == 1 { "" } else { "s" },
        paths.len(),
        if paths.len() == 1 { "" } else { "s" },
    );

    for compiled in set.rules() {
        let rule = &compiled.rule;
        let severity = match rule.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        let casings = if rule.allowed_casings.is_empty() {
            "any casing".to_string()
        } else {
            rule.allowed_casings
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        println!("{} ({}, {severity}): {casings}", rule.label(), rule.source);

        if !rule.applies_to.kinds.is_empty() {
            let kinds = rule
                .applies_to
                .kinds
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            println!("  kinds: {kinds}");
        }
        if !rule.applies_to.languages.is_empty() {
            let languages = rule
                .applies_to
                .languages
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            println!("  languages: {languages}");
        }
        if !rule.affixes.prefixes.is_empty() {
            println!("  prefixes: {}", rule.affixes.prefixes.join(", "));
        }
        if !rule.affixes.suffixes.is_empty() {
            println!("  suffixes: {}", rule.affixes.suffixes.join(", "));
        }
        if !rule.forbidden_patterns.is_empty() {
            println!("  forbidden: {}", rule.forbidden_patterns.join(", "));
        }
        if !rule.reserved_words.is_empty() {
            println!("  reserved: {}", rule.reserved_words.join(", "));
        }
    }

    Ok(())
}
