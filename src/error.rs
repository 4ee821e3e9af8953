//! Pipeline error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a wiki build.
///
/// Every variant is terminal: there are no retries and no partial-success
/// reporting. Files written before the failure stay on disk.
#[derive(Debug, Error)]
pub enum WikiError {
    #[error("Pages directory `{}` does not exist.", .0.display())]
    MissingPages(PathBuf),

    #[error("Failed to read source `{}`", .0.display())]
    SourceRead(PathBuf, #[source] std::io::Error),

    #[error("Template `{}` could not be read", .0.display())]
    TemplateLoad(PathBuf, #[source] std::io::Error),

    #[error("Template directory not found, searched: {}", display_paths(.0))]
    TemplateDirNotFound(Vec<PathBuf>),

    #[error("Template `{0}` has invalid syntax")]
    TemplateParse(&'static str, #[source] tera::Error),

    #[error("Failed to render `{0}`")]
    Render(String, #[source] tera::Error),

    #[error("Failed to write `{}`", .0.display())]
    OutputWrite(PathBuf, #[source] std::io::Error),

    #[error("IO error when reading `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("`{}`", p.display()))
        .collect::<Vec<_>>()
        .join(", ")
}
