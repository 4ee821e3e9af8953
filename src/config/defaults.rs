//! Default values for configuration fields.
//!
//! Shared by the CLI definition and `WikiConfig::default()`.

use std::path::PathBuf;

pub const DOMAIN: &str = "example.com";
pub const INPUT_DIR: &str = ".";
pub const OUTPUT_DIR: &str = "./out";

pub fn domain() -> String {
    DOMAIN.into()
}

pub fn input_dir() -> PathBuf {
    INPUT_DIR.into()
}

pub fn output_dir() -> PathBuf {
    OUTPUT_DIR.into()
}
