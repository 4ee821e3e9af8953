//! Markdown → HTML conversion.
//!
//! Plain CommonMark through pulldown-cmark. Every document goes through the
//! same parser options; there is no per-document configuration.

use pulldown_cmark::{Options, Parser, html::push_html};

/// Render a whole Markdown document to an HTML fragment.
///
/// Raw HTML blocks pass through unchanged.
pub fn render_markdown(content: &str) -> String {
    let parser = Parser::new_ext(content, Options::empty());

    let mut html = String::with_capacity(content.len() * 3 / 2);
    push_html(&mut html, parser);
    html
}
