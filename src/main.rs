use std::process::ExitCode;

use clap::Parser;
use constructible_plot::cli::{self, Cli};
use log::{LevelFilter, error};

fn main() -> ExitCode {
    // help and usage errors print and exit here
    let args = Cli::try_parse().unwrap_or_else(|e| e.exit());

    env_logger::Builder::new()
        .filter_level(if args.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .format_timestamp(None)
        .init();

    match cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
