use super::markdown::render_markdown;
use super::templates::{INDEX, Templates};
use super::{PageEntry, RenderMeta};
use crate::error::WikiError;
use std::{fs, path::Path};
use tera::Context;

/// Read and convert the README shown on the index page.
pub fn read_readme(path: &Path) -> Result<String, WikiError> {
    let markdown =
        fs::read_to_string(path).map_err(|err| WikiError::SourceRead(path.to_path_buf(), err))?;
    Ok(render_markdown(&markdown))
}

/// Sort `entries` by title in place, then fill the `index` layout with them.
///
/// `readme` is already-converted HTML; pass an empty string when there is
/// no README so the layout can leave its section out.
pub fn render_index(
    templates: &Templates,
    entries: &mut [PageEntry],
    readme: &str,
    meta: &RenderMeta,
) -> Result<String, WikiError> {
    entries.sort();

    let mut context = Context::new();
    context.insert("pages", &*entries);
    context.insert("readme", readme);
    meta.insert_into(&mut context);

    templates.render(INDEX, &context)
}
