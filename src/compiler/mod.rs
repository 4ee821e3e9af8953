//! Rendering for static wiki generation.
//!
//! - **markdown**: Convert Markdown documents to HTML fragments
//! - **templates**: Load and parse the `index` and `page` layouts
//! - **pages**: Render one document into a full page
//! - **index**: Render the sorted page listing plus README
//!
//! # Render Flow
//!
//! ```text
//! SourcePage ──► render_page() ──► Page { entry, html }
//!                                      │
//!                      entries ◄───────┘
//!                         │
//! README.md ──► read_readme() ──► render_index() ──► index html
//! ```

pub mod index;
pub mod markdown;
pub mod pages;
pub mod templates;

use crate::config::{VERSION, WikiConfig};
use crate::utils::date::{Clock, format_timestamp};
use serde::Serialize;

pub use index::{read_readme, render_index};
pub use pages::{Page, render_page};
pub use templates::Templates;

/// Values shared by every template render in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderMeta {
    pub domain: String,
    pub version: &'static str,
    pub last_updated: String,
}

impl RenderMeta {
    pub fn new(config: &WikiConfig, clock: &dyn Clock) -> Self {
        Self {
            domain: config.domain.clone(),
            version: VERSION,
            last_updated: format_timestamp(&clock.now()),
        }
    }

    fn insert_into(&self, context: &mut tera::Context) {
        context.insert("domain", &self.domain);
        context.insert("version", self.version);
        context.insert("last_updated", &self.last_updated);
    }
}

/// One line of the index listing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct PageEntry {
    /// Decoded title shown as link text.
    pub title: String,
    /// Link target relative to the output root.
    pub path: String,
}
