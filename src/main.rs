//! Wikie - A static wiki generator that uses markdown for formatting.

mod build;
mod cli;
mod compiler;
mod config;
mod discover;
mod error;
mod utils;
mod writer;

use anyhow::Result;
use build::{BuildContext, build_site};
use cli::Cli;
use compiler::Templates;
use config::WikiConfig;
use std::process::ExitCode;
use utils::date::LocalClock;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let config = WikiConfig::from_cli(&cli);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            utils::log::log_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Load the layouts, then build the whole wiki.
fn run(config: &WikiConfig) -> Result<()> {
    let templates = Templates::locate()?;
    let clock = LocalClock;

    let summary = build_site(&BuildContext {
        config,
        templates: &templates,
        clock: &clock,
    })?;

    let readme = if summary.has_readme { " and README" } else { "" };
    log!("build"; "done, {} pages{readme}", summary.entries.len());
    Ok(())
}
