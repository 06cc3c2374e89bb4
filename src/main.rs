use std::io;
use std::process::ExitCode;

use rdtsc::{read_counter, write_sample};
use tracing::level_filters::LevelFilter;

/// Fixed so that no environment variable is consulted.
const LOG_LEVEL: LevelFilter = LevelFilter::WARN;

fn init_logging() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(LOG_LEVEL)
        .with_writer(io::stderr)
        .with_target(true)
        .finish();
    // Only fails when a global subscriber is already set.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> ExitCode {
    init_logging();

    let sample = read_counter();
    match write_sample(&mut io::stdout().lock(), sample) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
