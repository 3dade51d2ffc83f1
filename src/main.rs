//! Control chart CLI.
//!
//! Reads one numeric value per line from stdin and writes a diagnostic
//! line to stderr for every rule that fires:
//!
//! ```text
//! cat data | runchart -m 25.0 -s 1.5
//! ```
//!
//! Malformed input lines are reported to stderr and skipped; the run only
//! fails before processing starts, on missing or invalid parameters.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use runchart::{ChartEngine, StreamError, ValueLines};

#[derive(Parser)]
#[command(name = "runchart")]
#[command(about = "Streaming control chart over stdin values", long_about = None)]
struct Cli {
    /// Control chart centerline (process mean)
    #[arg(short = 'm', long = "center")]
    center: f64,

    /// Process standard deviation
    #[arg(short = 's', long = "stdev")]
    stdev: f64,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    if io::stdin().is_terminal() {
        // Nothing piped in.
        eprintln!("usage: cat data | runchart -m <center> -s <stdev>");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = ChartEngine::new(cli.center, cli.stdev)?;
    info!(
        "control chart started: centerline={} stdev={}",
        cli.center, cli.stdev
    );

    let stdin = io::stdin();
    for item in ValueLines::new(stdin.lock()) {
        match item {
            Ok(value) => {
                for diagnostic in engine.process(value) {
                    eprintln!("{diagnostic}");
                }
            }
            Err(err) => {
                if matches!(err, StreamError::Io(_)) {
                    return Err(err.into());
                }
                // Malformed line: report and keep pulling.
                eprintln!("{err}");
                debug!("skipped malformed input line");
            }
        }
    }

    info!("input exhausted");
    Ok(())
}
