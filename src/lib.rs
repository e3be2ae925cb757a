//! bikestats library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod data;
pub mod errors;
pub mod models;
pub mod stats;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use config::Config;
use errors::AppResult;

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once, then apply command-line overrides
    let mut cfg = Config::load()?;
    if let Some(data_dir) = &cli.data_dir {
        cfg.data_dir = data_dir.clone();
    }
    if let Some(page_size) = cli.page_size {
        cfg.page_size = page_size.max(1);
    }

    let stdin = std::io::stdin();
    cli::session::run_session(&mut stdin.lock(), &cfg)
}
