// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod csv;
pub mod export;
pub mod fetch;
pub mod file;
pub mod gui;
pub mod normalize;
pub mod presenter;
pub mod progress;
pub mod question;
pub mod runner;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{FetchError, TriviaError};
pub use question::{Question, RawQuestion};
