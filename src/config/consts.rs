// src/config/consts.rs

// Net config
pub const API_URL: &str = "https://opentdb.com/api.php";
pub const USER_AGENT: &str = concat!("trivia_export/", env!("CARGO_PKG_VERSION"));
/// Open Trivia DB refuses more than this many questions per request.
pub const API_MAX_AMOUNT: u32 = 50;

// Fetch
pub const DEFAULT_COUNT: u32 = 1;
pub const DEFAULT_GUI_COUNT: u32 = 15;

// CLI export sinks (written to the working directory)
pub const JSON_FILE: &str = "questions.json";
pub const CSV_FILE: &str = "questions.csv";

// GUI downloads
pub const DOWNLOAD_JSON_FILE: &str = "trivia_questions.json";
pub const DOWNLOAD_CSV_FILE: &str = "trivia_questions.csv";

// Flattening
pub const ANSWER_SEP: &str = ", ";

// Local store / logs
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
