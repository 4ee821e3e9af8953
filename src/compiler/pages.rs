use super::markdown::render_markdown;
use super::templates::{PAGE, Templates};
use super::{PageEntry, RenderMeta};
use crate::discover::SourcePage;
use crate::error::WikiError;
use std::{ffi::OsString, fs};
use tera::Context;

/// A fully rendered page, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub entry: PageEntry,
    /// Name of the output file inside `<output>/pages`.
    pub file_name: OsString,
    pub html: String,
}

/// Read a source document, convert it and fill the `page` layout.
pub fn render_page(
    templates: &Templates,
    source: &SourcePage,
    meta: &RenderMeta,
) -> Result<Page, WikiError> {
    let markdown = fs::read_to_string(&source.source)
        .map_err(|err| WikiError::SourceRead(source.source.clone(), err))?;

    let html = render_page_html(templates, &source.title, &markdown, meta)?;

    Ok(Page {
        entry: PageEntry {
            title: source.title.clone(),
            path: source.output_relative_path(),
        },
        file_name: source.output_file_name(),
        html,
    })
}

/// Convert `markdown` and substitute it into the `page` layout.
pub fn render_page_html(
    templates: &Templates,
    title: &str,
    markdown: &str,
    meta: &RenderMeta,
) -> Result<String, WikiError> {
    let mut context = Context::new();
    context.insert("content", &render_markdown(markdown));
    context.insert("title", title);
    meta.insert_into(&mut context);

    templates.render(PAGE, &context)
}
