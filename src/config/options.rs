// src/config/options.rs
use std::fmt;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::TriviaError;
use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub export: ExportOptions,
    pub view: ViewOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub api_url: String,
    pub count: NonZeroU32,
    /// None = wait as long as the server takes.
    pub timeout: Option<Duration>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            api_url: s!(API_URL),
            count: NonZeroU32::new(DEFAULT_COUNT).unwrap_or(NonZeroU32::MIN),
            timeout: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Console,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Json, ExportFormat::Csv, ExportFormat::Console];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Console => "console",
        }
    }

    /// Sink file name for file formats; console has none.
    pub fn file_name(&self) -> Option<&'static str> {
        match self {
            ExportFormat::Json => Some(JSON_FILE),
            ExportFormat::Csv => Some(CSV_FILE),
            ExportFormat::Console => None,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = TriviaError;

    /// Exact, case-sensitive match on the selector.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExportFormat::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| TriviaError::InvalidFormat(s!(s)))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Console,
            out_dir: PathBuf::from("."),
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> Option<PathBuf> {
        self.format.file_name().map(|name| self.out_dir.join(name))
    }
}

/// How the table view stores fetched questions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OrderPolicy {
    /// As received from the API.
    #[default]
    Insertion,
    /// Stable sort by category, case-insensitive, ascending.
    #[value(name = "category")]
    CategoryAsc,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewOptions {
    pub order: OrderPolicy,
    pub download_dir: PathBuf,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            order: OrderPolicy::Insertion,
            download_dir: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_selector_is_exact() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("console".parse::<ExportFormat>().unwrap(), ExportFormat::Console);
        assert!(matches!("JSON".parse::<ExportFormat>(), Err(TriviaError::InvalidFormat(_))));
        assert!(matches!("xml".parse::<ExportFormat>(), Err(TriviaError::InvalidFormat(s)) if s == "xml"));
    }

    #[test]
    fn out_path_only_for_files() {
        let mut opts = ExportOptions { format: ExportFormat::Csv, out_dir: PathBuf::from("out") };
        assert_eq!(opts.out_path(), Some(PathBuf::from("out").join("questions.csv")));
        opts.format = ExportFormat::Console;
        assert_eq!(opts.out_path(), None);
    }

    #[test]
    fn default_count_is_one() {
        assert_eq!(FetchOptions::default().count.get(), 1);
    }
}
