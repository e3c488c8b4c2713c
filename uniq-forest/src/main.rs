//! CLI binary for uniq-forest.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::{Level, error};
use tracing_subscriber::FmtSubscriber;
use uniq_forest::{DriverConfig, StreamDriver, UniqForestResult};

/// uniq-forest - Keeps the highest-scoring record per key within each forest.
#[derive(Parser, Debug)]
#[command(name = "uniq-forest")]
#[command(about = "Keeps the highest-scoring record per key within each forest")]
struct Args {
    /// Input file (defaults to standard input)
    input: Option<PathBuf>,

    /// Flush a trailing forest that has no blank-line terminator instead of
    /// dropping it
    #[arg(long)]
    flush_trailing: bool,
}

fn main() {
    // Logs go to stderr; stdout carries the filter's data.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    if let Err(e) = run() {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> UniqForestResult<()> {
    let args = Args::parse();

    let config = DriverConfig::new().with_flush_trailing_forest(args.flush_trailing);
    let driver = StreamDriver::new(config);

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    match &args.input {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            driver.run(reader, &mut writer)?;
        }
        None => {
            let stdin = io::stdin();
            driver.run(stdin.lock(), &mut writer)?;
        }
    }

    writer.flush()?;

    Ok(())
}
