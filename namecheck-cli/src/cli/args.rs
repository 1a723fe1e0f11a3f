use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormatArg;

/// Cross-language naming-convention compliance checker
#[derive(Parser, Debug)]
#[command(name = "namecheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a stream of identifier records against rule documents
    Check {
        /// Rule document(s), lowest layer first is not required; layer tags
        /// inside each document decide precedence
        #[arg(long = "rules", value_name = "FILE", required = true, num_args = 1..)]
        rules: Vec<PathBuf>,

        /// Identifier records as a JSON array or JSON lines ('-' for stdin)
        #[arg(long = "records", value_name = "FILE", default_value = "-")]
        records: String,

        /// Output format
        #[arg(long, short = 'o', value_enum, default_value = "summary")]
        output: OutputFormatArg,

        /// Suppress report output (exit code only)
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Load rule documents and print the effective rule table
    Rules {
        /// Rule document(s) to load and validate
        #[arg(long = "rules", value_name = "FILE", required = true, num_args = 1..)]
        rules: Vec<PathBuf>,
    },
}
