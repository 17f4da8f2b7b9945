use clap::Parser;
use expense_tracker::args::Args;
use expense_tracker::clock::SystemClock;
use expense_tracker::commands;
use expense_tracker::store::JsonFile;
use tracing::{debug, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());
    trace!("{args:?}");

    let store = JsonFile::new(args.common().file().path());

    // Failed operations are reported on stdout like any other outcome and do not change the exit
    // status. Only argument parsing errors from clap exit non-zero.
    match commands::run(&store, &SystemClock, args.command()) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            debug!("Command failed: {e:?}");
            println!("{e}");
        }
    }
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            // The library and the binary share this crate name.
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
