//! Run configuration resolved from the command line.
//!
//! # Layout
//!
//! ```text
//! <input_dir>/
//!   README.md        (optional, rendered into the index)
//!   pages/*.md       (one output page each)
//!
//! <output_dir>/
//!   index.html
//!   pages/<stem>.html
//! ```

pub mod defaults;

use crate::cli::Cli;
use educe::Educe;
use std::path::{Path, PathBuf};

/// Version string shown by `--version` and passed to every template.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subdirectory of both input and output that holds the pages.
pub const PAGES_DIR: &str = "pages";

/// Markdown file extension picked up from the pages directory.
pub const SOURCE_EXT: &str = "md";

/// Optional front-page document, relative to the input directory.
pub const README_FILE: &str = "README.md";

/// Generated index, relative to the output directory.
pub const INDEX_FILE: &str = "index.html";

/// Immutable configuration for a single run.
#[derive(Debug, Clone, PartialEq, Eq, Educe)]
#[educe(Default)]
pub struct WikiConfig {
    /// Used verbatim in page and index links.
    #[educe(Default = defaults::domain())]
    pub domain: String,

    /// Directory containing `pages/` and the optional README.
    #[educe(Default = defaults::input_dir())]
    pub input_dir: PathBuf,

    /// Directory receiving the generated files.
    #[educe(Default = defaults::output_dir())]
    pub output_dir: PathBuf,
}

impl WikiConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            domain: cli.domain.clone(),
            input_dir: cli.input_dir.clone(),
            output_dir: cli.output_dir.clone(),
        }
    }

    pub fn pages_dir(&self) -> PathBuf {
        self.input_dir.join(PAGES_DIR)
    }

    pub fn readme_path(&self) -> PathBuf {
        self.input_dir.join(README_FILE)
    }

    pub fn output_pages_dir(&self) -> PathBuf {
        self.output_dir.join(PAGES_DIR)
    }

    pub fn index_path(&self) -> PathBuf {
        self.output_dir.join(INDEX_FILE)
    }

    /// Absolute form of `path` for messages; falls back to the path as given.
    pub fn display_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }
}
