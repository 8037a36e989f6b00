// src/gui/args.rs
use std::num::NonZeroU32;
use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    consts::{API_URL, DEFAULT_GUI_COUNT},
    options::{AppOptions, FetchOptions, OrderPolicy, ViewOptions},
    state::AppState,
};

/// Browse trivia questions in a filterable table.
#[derive(Debug, Parser)]
#[command(name = "trivia_gui", version)]
pub struct GuiArgs {
    /// Questions to fetch when the window opens
    #[arg(long, default_value_t = NonZeroU32::new(DEFAULT_GUI_COUNT).unwrap_or(NonZeroU32::MIN))]
    pub amount: NonZeroU32,

    /// Stored order of the fetched questions
    #[arg(long, value_enum, default_value_t = OrderPolicy::Insertion)]
    pub order: OrderPolicy,

    /// Where the download buttons save files
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    #[arg(long, env = "TRIVIA_API_URL", default_value = API_URL)]
    pub api_url: String,
}

impl GuiArgs {
    pub fn into_state(self) -> AppState {
        AppState {
            options: AppOptions {
                fetch: FetchOptions {
                    api_url: self.api_url,
                    count: self.amount,
                    ..FetchOptions::default()
                },
                view: ViewOptions {
                    order: self.order,
                    download_dir: self.out_dir,
                },
                ..AppOptions::default()
            },
            ..AppState::default()
        }
    }
}
