//! Site building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── discover_pages()  ──► SourcePage[]   (fails before any write)
//!     │
//!     ├── prepare_output()  ──► <output>/, <output>/pages/
//!     │
//!     ├── for each page: render_page() ──► write_page()
//!     │
//!     └── read_readme() + render_index() ──► write_index()
//! ```

use crate::{
    compiler::{self, PageEntry, RenderMeta, Templates},
    config::WikiConfig,
    discover::{discover_pages, find_readme},
    log,
    utils::date::Clock,
    writer,
};
use anyhow::Result;

/// Everything a build needs, created once at startup.
pub struct BuildContext<'a> {
    pub config: &'a WikiConfig,
    pub templates: &'a Templates,
    pub clock: &'a dyn Clock,
}

/// What a finished build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Index entries, sorted by title.
    pub entries: Vec<PageEntry>,
    pub has_readme: bool,
}

/// Build the wiki: every page under `<input>/pages` plus the index.
///
/// Pages are rendered and written one at a time, so a failure part-way
/// through leaves the pages written so far on disk.
pub fn build_site(ctx: &BuildContext<'_>) -> Result<BuildSummary> {
    let config = ctx.config;

    let sources = discover_pages(config)?;
    log!("build"; "found {} pages", sources.len());
    if sources.is_empty() {
        log!("warn"; "no .md files in `{}`", config.pages_dir().display());
    }

    writer::prepare_output(config)?;

    // one timestamp for the whole run
    let meta = RenderMeta::new(config, ctx.clock);

    let mut entries = Vec::with_capacity(sources.len());
    for source in &sources {
        let page = compiler::render_page(ctx.templates, source, &meta)?;
        writer::write_page(config, &page)?;
        entries.push(page.entry);
    }

    let readme_path = find_readme(config);
    let readme = match &readme_path {
        Some(path) => {
            log!("build"; "including {}", path.display());
            compiler::read_readme(path)?
        }
        None => String::new(),
    };

    let index = compiler::render_index(ctx.templates, &mut entries, &readme, &meta)?;
    let index_path = writer::write_index(config, &index)?;
    log!("build"; "wrote {}", index_path.display());

    Ok(BuildSummary {
        entries,
        has_readme: readme_path.is_some(),
    })
}
