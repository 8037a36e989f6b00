// src/cli.rs
use std::{io, num::NonZeroU32, path::PathBuf, time::Duration};

use clap::Parser;
use color_eyre::eyre::{Report, WrapErr};

use crate::{
    config::{
        consts::API_URL,
        options::{AppOptions, ExportFormat, ExportOptions, FetchOptions},
    },
    error::TriviaError,
    fetch::OpenTdb,
    log::LogOptions,
    progress::LogProgress,
    runner::{self, RunSummary},
};

/// Fetch trivia questions and save them as JSON/CSV or print them.
#[derive(Debug, Parser)]
#[command(name = "trivia", version)]
pub struct CliArgs {
    /// Number of questions to fetch (positive whole number)
    #[arg(short = 'n', default_value = "1", allow_hyphen_values = true)]
    pub count: String,

    /// Output format: json, csv or console
    #[arg(short = 'f', default_value = "console")]
    pub format: String,

    #[arg(long, env = "TRIVIA_API_URL", default_value = API_URL)]
    pub api_url: String,

    /// Give up on the request after this many seconds (default: wait forever)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Also append logs to .store/debug.log
    #[arg(long)]
    pub log_file: bool,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    pub fn log_options(&self) -> LogOptions {
        LogOptions {
            default_filter: s!(if self.verbose { "debug" } else { "info" }),
            to_file: self.log_file,
            ..LogOptions::default()
        }
    }

    /// Validate raw flags. Nothing is fetched when this fails.
    pub fn to_options(&self) -> Result<AppOptions, TriviaError> {
        let count = parse_count(&self.count)?;
        let format: ExportFormat = self.format.parse()?;

        Ok(AppOptions {
            fetch: FetchOptions {
                api_url: self.api_url.clone(),
                count,
                timeout: self.timeout_secs.map(Duration::from_secs),
            },
            export: ExportOptions { format, out_dir: PathBuf::from(".") },
            ..AppOptions::default()
        })
    }
}

pub fn parse_count(raw: &str) -> Result<NonZeroU32, TriviaError> {
    raw.trim()
        .parse::<NonZeroU32>()
        .map_err(|_| TriviaError::InvalidInput(s!(raw)))
}

pub fn run(args: &CliArgs) -> color_eyre::Result<RunSummary> {
    let opts = args.to_options()?;
    if let Some(path) = opts.export.out_path() {
        logd!("Export: target {}", path.display());
    }

    let source = OpenTdb::new(&opts.fetch).map_err(TriviaError::from)?;

    let stdout = io::stdout();
    let summary = runner::run(&source, &opts, &mut stdout.lock(), &mut LogProgress)
        .wrap_err_with(|| format!("exporting {} question(s) as {}", opts.fetch.count, opts.export.format))?;

    Ok(summary)
}

/// Exit code for a failed run; falls back to 1 for errors we didn't type.
pub fn exit_code(report: &Report) -> u8 {
    report
        .downcast_ref::<TriviaError>()
        .map(TriviaError::exit_code)
        .unwrap_or(1)
}

pub fn is_usage(report: &Report) -> bool {
    report.downcast_ref::<TriviaError>().is_some_and(TriviaError::is_usage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_must_be_positive_integer() {
        assert_eq!(parse_count("5").unwrap().get(), 5);
        assert_eq!(parse_count(" 12 ").unwrap().get(), 12);
        for bad in ["0", "-3", "abc", "", "2.5", "5abc"] {
            assert!(matches!(parse_count(bad), Err(TriviaError::InvalidInput(_))), "{bad:?}");
        }
    }

    #[test]
    fn defaults_are_one_question_to_console() {
        let args = CliArgs::parse_from(["trivia"]);
        let opts = args.to_options().unwrap();
        assert_eq!(opts.fetch.count.get(), 1);
        assert_eq!(opts.export.format, ExportFormat::Console);
        assert_eq!(opts.fetch.timeout, None);
    }

    #[test]
    fn negative_count_reaches_validation() {
        let args = CliArgs::parse_from(["trivia", "-n", "-3", "-f", "csv"]);
        assert_eq!(args.count, "-3");
        assert!(matches!(args.to_options(), Err(TriviaError::InvalidInput(_))));
    }

    #[test]
    fn unknown_format_is_usage_error() {
        let args = CliArgs::parse_from(["trivia", "-n", "2", "-f", "xml"]);
        let err = args.to_options().unwrap_err();
        assert!(matches!(err, TriviaError::InvalidFormat(ref f) if f == "xml"));
        let report = Report::new(err);
        assert_eq!(exit_code(&report), 2);
        assert!(is_usage(&report));
    }

    #[test]
    fn exit_code_sees_through_context() {
        let report = Report::new(TriviaError::Fetch(crate::FetchError::NoResults))
            .wrap_err("exporting 1 question(s) as json");
        assert_eq!(exit_code(&report), 1);
        assert!(!is_usage(&report));
    }
}
