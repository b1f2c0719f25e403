//! Hotelboard driver.
//!
//! Reads board commands from stdin and writes responses to stdout, one
//! session per process. Logging goes to stderr.
//!
//! Usage:
//!   hotelboard [--config FILE]

use std::env;
use std::io::{self, BufWriter};
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use hotelboard::config::BoardConfig;
use hotelboard::session::Session;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                match args.get(i) {
                    Some(path) => config_path = Some(path.clone()),
                    None => {
                        eprintln!("--config needs a file path");
                        print_usage();
                        return ExitCode::FAILURE;
                    }
                }
            }
            "--help" | "-h" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                return ExitCode::FAILURE;
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => match BoardConfig::load(&path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => BoardConfig::default(),
    };

    init_logging(&config.log_filter);
    info!(last_row = %config.last_row, topology = ?config.topology, "session starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut session = Session::new(config);

    match session.run(stdin.lock(), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "session aborted");
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr subscriber; `RUST_LOG` wins over the configured filter.
fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_usage() {
    eprintln!("Usage: hotelboard [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE   JSON configuration (default: built-in 9x12 board)");
    eprintln!("  --help          Show this help");
}
