// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{fetch, poll_fetch, download, print}.

mod download; // src/gui/actions/download.rs
mod fetch;    // src/gui/actions/fetch.rs
mod print;    // src/gui/actions/print.rs

pub use download::download;
pub use fetch::{fetch, poll_fetch};
pub use print::print;
