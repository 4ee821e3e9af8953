//! Output writing.
//!
//! Files are written in place; an existing file with the same name is
//! replaced and files from earlier runs are never removed.

use crate::compiler::Page;
use crate::config::WikiConfig;
use crate::error::WikiError;
use crate::log;
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Ensure `<output>` and `<output>/pages` exist.
///
/// Only these two levels are created; the parent of `<output>` must exist.
pub fn prepare_output(config: &WikiConfig) -> Result<(), WikiError> {
    create_dir(&config.output_dir)?;
    create_dir(&config.output_pages_dir())
}

/// Write a rendered page to `<output>/pages/<stem>.html`.
pub fn write_page(config: &WikiConfig, page: &Page) -> Result<PathBuf, WikiError> {
    let path = config.output_pages_dir().join(&page.file_name);
    write_file(&path, &page.html)?;
    log!("page"; "{}", page.entry.path);
    Ok(path)
}

/// Write the rendered index to `<output>/index.html`.
pub fn write_index(config: &WikiConfig, html: &str) -> Result<PathBuf, WikiError> {
    let path = config.index_path();
    write_file(&path, html)?;
    Ok(path)
}

fn create_dir(path: &Path) -> Result<(), WikiError> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(err) => Err(WikiError::OutputWrite(path.to_path_buf(), err)),
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), WikiError> {
    fs::write(path, content).map_err(|err| WikiError::OutputWrite(path.to_path_buf(), err))
}
