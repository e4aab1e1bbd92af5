use std::process::ExitCode;

use colored::Colorize;
use pit_score::cli::cli_parser::parse_cli;

fn main() -> ExitCode {
    match parse_cli().and_then(|runner| runner.run()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", error.to_string().red());
            ExitCode::FAILURE
        }
    }
}
