//! Input discovery.
//!
//! Validates `<input>/pages`, lists the Markdown documents directly inside it
//! and locates the optional README.

use crate::config::{PAGES_DIR, SOURCE_EXT, WikiConfig};
use crate::error::WikiError;
use std::{
    borrow::Cow,
    ffi::OsString,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// A Markdown document found in the pages directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePage {
    /// File stem with percent-escapes decoded, e.g. `My Page`.
    pub title: String,
    /// File stem exactly as on disk, e.g. `My%20Page`.
    ///
    /// Kept as an `OsString` so the output file name has the same bytes as
    /// the source, even when they are not UTF-8.
    pub stem: OsString,
    /// Path of the `.md` file.
    pub source: PathBuf,
}

impl SourcePage {
    pub fn from_path(source: PathBuf) -> Option<Self> {
        let stem = source.file_stem()?.to_os_string();
        Some(Self {
            title: decode_title(&stem.to_string_lossy()),
            stem,
            source,
        })
    }

    /// Output file name inside `<output>/pages`, e.g. `My%20Page.html`.
    pub fn output_file_name(&self) -> OsString {
        let mut name = self.stem.clone();
        name.push(".html");
        name
    }

    /// Output location relative to the output root, e.g. `pages/My%20Page.html`.
    ///
    /// This is the index link, so a non-UTF-8 stem shows up lossily here
    /// while the file itself keeps its bytes.
    pub fn output_relative_path(&self) -> String {
        format!("{PAGES_DIR}/{}.html", self.stem.to_string_lossy())
    }
}

/// Decode `%XX` escapes in a file stem for display.
///
/// Sequences that do not form valid UTF-8 are decoded lossily.
pub fn decode_title(stem: &str) -> String {
    match urlencoding::decode(stem) {
        Ok(title) => title.into_owned(),
        Err(_) => match urlencoding::decode_binary(stem.as_bytes()) {
            Cow::Borrowed(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            Cow::Owned(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        },
    }
}

/// List the Markdown documents in `<input>/pages`.
///
/// Only regular files directly inside the directory are considered; the
/// result is in filesystem order.
pub fn discover_pages(config: &WikiConfig) -> Result<Vec<SourcePage>, WikiError> {
    let pages_dir = config.pages_dir();
    if !pages_dir.is_dir() {
        return Err(WikiError::MissingPages(WikiConfig::display_path(&pages_dir)));
    }

    let mut pages = Vec::new();
    for entry in WalkDir::new(&pages_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(pages_dir.as_path()).to_path_buf();
            WikiError::Io(path, e.into())
        })?;
        if !entry.file_type().is_file() || !is_markdown(entry.path()) {
            continue;
        }
        if let Some(page) = SourcePage::from_path(entry.into_path()) {
            pages.push(page);
        }
    }

    Ok(pages)
}

/// `<input>/README.md` if it exists as a file.
pub fn find_readme(config: &WikiConfig) -> Option<PathBuf> {
    let readme = config.readme_path();
    readme.is_file().then_some(readme)
}

#[inline]
fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SOURCE_EXT)
}
