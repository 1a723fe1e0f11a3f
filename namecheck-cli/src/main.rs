use clap::Parser;
use std::process;

mod check;
mod cli;
mod rules;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            rules,
            records,
            output,
            quiet,
        } => check::handle_check(&rules, &records, output.into(), quiet),
        Commands::Rules { rules } => rules::handle_rules(&rules).map(|()| 0),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(2);
        },
    }
}
