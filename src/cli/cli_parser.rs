use std::{ffi::OsString, path::PathBuf};

use clap::{Parser, Subcommand};

use crate::{
    errors::ScoreError,
    gate::DEFAULT_TOLERANCE,
    runner::{Runner, RunnerConfig, RunnerMode},
    utils::logging::init_logging,
};

use super::settings::{Settings, load_settings};

#[derive(Parser)]
#[command(
    version,
    about = "Extract and gate PIT mutation coverage scores",
    long_about = None
)]
struct Cli {
    #[arg(help = "PIT report folder, e.g. core/target/pit-reports")]
    report_root: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        value_parser = ["summary", "loose"],
        help = "How the mutation coverage is located in index.html"
    )]
    strategy: Option<String>,

    #[arg(
        long,
        short,
        global = true,
        default_value_t = false,
        help = "Log report resolution to stderr"
    )]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the mutation coverage of a PIT report
    Extract { report_root: PathBuf },
    /// Fail if the current score is lower than the previous one
    #[command(allow_negative_numbers = true)]
    Compare {
        previous: String,
        current: String,

        #[arg(long, help = "Allowed drop before failing [default: 0.000001]")]
        tolerance: Option<f64>,
    },
    /// Check the extractor against the report's top level index.html
    Verify { report_root: PathBuf },
}

fn runner_config(cli: Cli, settings: Settings) -> Result<RunnerConfig, ScoreError> {
    let strategy = match cli.strategy {
        Some(strategy) => strategy.parse()?,
        None => settings.strategy.unwrap_or_default(),
    };
    let mut tolerance = settings.tolerance.unwrap_or(DEFAULT_TOLERANCE);

    let mode = match cli.command {
        Some(Commands::Extract { report_root }) => RunnerMode::Extract { report_root },
        Some(Commands::Compare {
            previous,
            current,
            tolerance: cli_tolerance,
        }) => {
            if let Some(cli_tolerance) = cli_tolerance {
                tolerance = cli_tolerance;
            }
            RunnerMode::Compare { previous, current }
        }
        Some(Commands::Verify { report_root }) => RunnerMode::Verify { report_root },
        None => match cli.report_root {
            Some(report_root) => RunnerMode::Extract { report_root },
            None => {
                return Err(ScoreError::InvalidArgument(String::from(
                    "Usage: pit-score <REPORT_ROOT>",
                )));
            }
        },
    };

    Ok(RunnerConfig::new(cli.verbose, strategy, tolerance, mode))
}

fn parse_args<I, T>(args: I) -> Result<Cli, ScoreError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(cli),
        // --help and --version
        Err(error) if !error.use_stderr() => error.exit(),
        Err(error) => Err(ScoreError::InvalidArgument(
            error.to_string().trim_end().to_string(),
        )),
    }
}

pub fn parse_cli() -> Result<Box<dyn Runner>, ScoreError> {
    let cli = parse_args(std::env::args_os())?;
    init_logging(cli.verbose);

    let settings = load_settings()?;
    runner_config(cli, settings)?.into_runner()
}
