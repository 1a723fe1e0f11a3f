use anyhow::{Context, Result};
use namecheck_core::{load_rule_set, parse_records, Engine, OutputFormat, OutputFormatter};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

pub fn handle_check(
    rules: &[PathBuf],
    records: &str,
    output: OutputFormat,
    quiet: bool,
) -> Result<i32> {
    let rule_set = load_rule_set(rules).context("Failed to load rule documents")?;

    let content = if records == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read records from stdin")?;
        buffer
    } else {
        fs::read_to_string(records)
            .with_context(|| format!("Failed to read records from: {records}"))?
    };
    let batch = parse_records(&content).context("Failed to parse identifier records")?;

    let engine = Engine::new(rule_set);
    let mut report = engine.run(batch.records).context("Compliance check failed")?;
    report.summary.skipped += batch.skipped;

    if !quiet {
        match output {
            OutputFormat::Json => println!("{}", report.format_json()),
            OutputFormat::Summary => print!("{}", report.format_summary()),
        }
    }

    Ok(i32::from(report.has_violations()))
}
