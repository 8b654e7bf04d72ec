//! Branch predictor trace-replay CLI.
//!
//! This binary replays a branch trace through one predictor and reports the
//! misprediction rate. It performs:
//! 1. **Configuration:** `--scheme` (compact string) or `--config` (JSON file); static by default.
//! 2. **Replay:** Reads `<hex address> <0|1>` lines from a file or stdin, predicting then
//!    training each branch in order.
//! 3. **Reporting:** Prints branch, misprediction and rate totals.

mod trace;

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process;

use bpred_core::Config;
use bpred_core::common::{ConfigError, PredictorError};
use bpred_core::sim::TraceReplayer;
use clap::Parser;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::trace::TraceError;

#[derive(Parser, Debug)]
#[command(
    name = "bpred",
    author,
    version,
    about = "Replay a branch trace through a direction predictor",
    long_about = "Replay a branch trace through a direction predictor and report mispredictions.\n\nSchemes:\n  static                   always taken\n  gshare:<g>               gshare with a 2^g entry table\n  tournament:<g>:<l>:<p>   tournament with global, local and PC index widths\n  custom                   perceptron\n\nExamples:\n  bpred --scheme gshare:13 traces/fp_1.txt\n  bpred --config tournament.json < traces/int_1.txt"
)]
struct Cli {
    /// Prediction scheme, e.g. `gshare:13` or `tournament:9:10:10`.
    #[arg(short, long, conflicts_with = "config")]
    scheme: Option<String>,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every resolved branch.
    #[arg(short, long)]
    verbose: bool,

    /// Trace file; reads stdin when omitted.
    trace: Option<PathBuf>,
}

/// Errors that end the run.
#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Predictor(#[from] PredictorError),

    #[error("{0}")]
    Trace(#[from] TraceError),

    #[error("cannot read {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Installs the fmt subscriber on stderr. `RUST_LOG` overrides the default level.
fn init_tracing(verbose: bool) {
    let default = if verbose { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Resolves the configuration from `--config`, `--scheme`, or the default.
fn load_config(cli: &Cli) -> Result<Config, CliError> {
    let mut config = if let Some(path) = &cli.config {
        let json = fs::read_to_string(path).map_err(|source| CliError::Open {
            path: path.clone(),
            source,
        })?;
        Config::from_json(&json)?
    } else if let Some(scheme) = &cli.scheme {
        scheme.parse()?
    } else {
        Config::default()
    };
    config.verbose |= cli.verbose;
    Ok(config)
}

fn open_trace(path: Option<&PathBuf>) -> Result<Box<dyn BufRead>, CliError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::Open {
                path: path.clone(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = load_config(cli)?;
    let mut replayer = TraceReplayer::new(&config)?;
    info!(%config, "replaying trace");

    for record in trace::records(open_trace(cli.trace.as_ref())?) {
        let _ = replayer.step(record?)?;
    }

    let stats = replayer.finish();
    debug!(branches = stats.branches, mispredictions = stats.mispredictions, "replay finished");

    println!("Predictor: {config}");
    stats.print();
    Ok(())
}
