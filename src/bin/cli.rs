// src/bin/cli.rs
use std::process::ExitCode;

use clap::Parser;
use trivia_export::{cli, log, loge};

fn main() -> ExitCode {
    if let Err(e) = color_eyre::install() {
        eprintln!("Error: {e}");
    }

    let args = cli::CliArgs::parse();
    let _guard = log::init(&args.log_options());

    match cli::run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(report) => {
            loge!("{:#}", report);
            if cli::is_usage(&report) {
                eprintln!("Run `trivia --help` for usage.");
            }
            ExitCode::from(cli::exit_code(&report))
        }
    }
}
