//! Fixture verification runner.
//!
//! Loads the two shipped feed fixtures, checks the built-in statistics
//! suites against them, prints a report per suite, and exits non-zero when
//! any expectation fails.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use photostat::formatters::{FormatterConfig, HumanFormatter, JsonFormatter, ResultFormatter};
use photostat::harness::run_fixture_verification;
use photostat::logging::{init_logging, LoggingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "photostat",
    about = "Verifies photo feed statistics against the shipped fixtures",
    version
)]
struct Args {
    /// Path to the dogs feed fixture.
    #[arg(long, default_value = "fixtures/dogs.json")]
    dogs: PathBuf,

    /// Path to the landscapes feed fixture.
    #[arg(long, default_value = "fixtures/landscapes.json")]
    landscapes: PathBuf,

    /// Emit the reports as JSON instead of human-readable text.
    #[arg(long)]
    json: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = init_logging(LoggingConfig::default()) {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    let reports = match run_fixture_verification(&args.dogs, &args.landscapes).await {
        Ok(reports) => reports,
        Err(err) => {
            error!(error = %err, "Fixture verification aborted");
            eprintln!("photostat: {err}");
            return ExitCode::FAILURE;
        }
    };

    let formatter: Box<dyn ResultFormatter> = if args.json {
        Box::new(JsonFormatter::new())
    } else {
        Box::new(HumanFormatter::with_config(
            FormatterConfig::default().with_colors(!args.no_color),
        ))
    };

    let mut all_passed = true;
    for report in &reports {
        all_passed &= report.is_success();
        match formatter.format(report) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => {
                eprintln!("photostat: failed to render report: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    if all_passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
