//! Page and index layouts.
//!
//! Both templates are read and parsed once, before any document is touched,
//! and then shared by reference for every render in the run.

use crate::error::WikiError;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tera::{Context, Tera};

pub const INDEX: &str = "index";
pub const PAGE: &str = "page";

/// (template name, file name) pairs expected in the template directory.
const TEMPLATE_FILES: &[(&str, &str)] = &[(INDEX, "index.html.j2"), (PAGE, "page.html.j2")];

/// Template directory name next to the executable / in the crate root.
const TEMPLATE_DIR: &str = "templates";

/// The two parsed layouts.
#[derive(Debug)]
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Load `index.html.j2` and `page.html.j2` from the installation's
    /// template directory.
    pub fn locate() -> Result<Self, WikiError> {
        let candidates = candidate_dirs();
        if let Some(dir) = candidates.iter().find(|dir| has_all_templates(dir)) {
            return Self::load(dir);
        }
        Err(WikiError::TemplateDirNotFound(candidates))
    }

    /// Load both templates from `dir`.
    pub fn load(dir: &Path) -> Result<Self, WikiError> {
        let mut sources = Vec::with_capacity(TEMPLATE_FILES.len());
        for (name, file) in TEMPLATE_FILES {
            let path = dir.join(file);
            let source =
                fs::read_to_string(&path).map_err(|err| WikiError::TemplateLoad(path, err))?;
            sources.push((*name, source));
        }
        Self::parse(&sources)
    }

    /// Parse templates from in-memory sources.
    #[cfg(test)]
    pub(crate) fn from_sources(index: &str, page: &str) -> Result<Self, WikiError> {
        Self::parse(&[(INDEX, index.to_owned()), (PAGE, page.to_owned())])
    }

    fn parse(sources: &[(&'static str, String)]) -> Result<Self, WikiError> {
        let mut tera = Tera::default();
        // substitution is literal; page bodies are already HTML
        tera.autoescape_on(vec![]);
        for (name, source) in sources {
            tera.add_raw_template(name, source)
                .map_err(|err| WikiError::TemplateParse(*name, err))?;
        }
        Ok(Self { tera })
    }

    /// Render the named template with `context`.
    pub fn render(&self, name: &str, context: &Context) -> Result<String, WikiError> {
        self.tera
            .render(name, context)
            .map_err(|err| WikiError::Render(name.to_owned(), err))
    }
}

/// Places an installed `templates/` directory may live, in search order.
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir.join(TEMPLATE_DIR));
        dirs.push(exe_dir.join("../share/wikie").join(TEMPLATE_DIR));
    }
    dirs.push(Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATE_DIR));
    dirs
}

fn has_all_templates(dir: &Path) -> bool {
    TEMPLATE_FILES
        .iter()
        .all(|(_, file)| dir.join(file).is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_templates(dir: &Path, index: &str, page: &str) {
        fs::write(dir.join("index.html.j2"), index).unwrap();
        fs::write(dir.join("page.html.j2"), page).unwrap();
    }

    #[test]
    fn test_locate_finds_shipped_templates() {
        let templates = Templates::locate().unwrap();
        let mut ctx = Context::new();
        ctx.insert("content", "<p>x</p>");
        ctx.insert("title", "T");
        ctx.insert("domain", "example.com");
        ctx.insert("version", "1.0.0");
        ctx.insert("last_updated", "now");
        assert!(templates.render(PAGE, &ctx).unwrap().contains("<p>x</p>"));
    }

    #[test]
    fn test_load_from_dir() {
        let dir = TempDir::new().unwrap();
        write_templates(dir.path(), "I:{{ domain }}", "P:{{ title }}");

        let templates = Templates::load(dir.path()).unwrap();
        let mut ctx = Context::new();
        ctx.insert("domain", "d");
        ctx.insert("title", "t");
        assert_eq!(templates.render(INDEX, &ctx).unwrap(), "I:d");
        assert_eq!(templates.render(PAGE, &ctx).unwrap(), "P:t");
    }

    #[test]
    fn test_missing_template_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html.j2"), "{{ domain }}").unwrap();

        let err = Templates::load(dir.path()).unwrap_err();
        assert!(matches!(err, WikiError::TemplateLoad(ref p, _) if p.ends_with("page.html.j2")));
    }

    #[test]
    fn test_syntax_error_rejected() {
        let err = Templates::from_sources("{% for page in pages %}", "{{ title }}").unwrap_err();
        assert!(matches!(err, WikiError::TemplateParse(INDEX, _)));
    }

    #[test]
    fn test_no_autoescape() {
        let templates = Templates::from_sources("", "{{ content }}").unwrap();
        let mut ctx = Context::new();
        ctx.insert("content", "<em>&</em>");
        assert_eq!(templates.render(PAGE, &ctx).unwrap(), "<em>&</em>");
    }

    #[test]
    fn test_loop_and_conditional() {
        let templates = Templates::from_sources(
            "{% for p in pages %}[{{ p }}]{% endfor %}{% if readme %}R{% endif %}",
            "",
        )
        .unwrap();

        let mut ctx = Context::new();
        ctx.insert("pages", &["a", "b"]);
        ctx.insert("readme", "");
        assert_eq!(templates.render(INDEX, &ctx).unwrap(), "[a][b]");

        ctx.insert("readme", "<h1>x</h1>");
        assert_eq!(templates.render(INDEX, &ctx).unwrap(), "[a][b]R");
    }

    #[test]
    fn test_render_error_names_template() {
        let templates = Templates::from_sources("{{ missing }}", "").unwrap();
        let err = templates.render(INDEX, &Context::new()).unwrap_err();
        assert!(matches!(err, WikiError::Render(ref name, _) if name == INDEX));
    }
}
