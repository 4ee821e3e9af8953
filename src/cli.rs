//! Command-line interface definitions.
//!
//! Defines all CLI arguments using clap.

use crate::config::defaults;
use clap::{Arg, ArgAction, Command, CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;

/// Static wiki generator that uses markdown for formatting.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// url that will be used for the link in navbar
    #[arg(short, long, default_value = defaults::DOMAIN)]
    pub domain: String,

    /// path to directory which contains the pages (default $PWD)
    #[arg(short, long = "input_dir", default_value = defaults::INPUT_DIR)]
    pub input_dir: PathBuf,

    /// path to directory where html files should be outputted to (default $PWD/out)
    #[arg(short, long = "output_dir", default_value = defaults::OUTPUT_DIR)]
    pub output_dir: PathBuf,
}

impl Cli {
    /// Full command definition, with `-v`/`--version` in place of clap's `-V`.
    pub fn build_command() -> Command {
        Cli::command().arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Print version and exit")
                .action(ArgAction::Version),
        )
    }

    /// Parse process arguments, exiting with usage text on error.
    pub fn parse_args() -> Self {
        let matches = Self::build_command().get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    /// Parse an explicit argument list.
    #[cfg(test)]
    pub(crate) fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::build_command().try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }
}
