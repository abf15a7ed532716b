//! Renderer module — trait-based format dispatch.

pub mod html;
pub mod json;
pub mod markdown;

use crate::model::NamespacePage;
use anyhow::{anyhow, Result};
use jsdoctor_syntax::linkify;
use std::collections::BTreeSet;

/// Trait for rendering a namespace page into a specific output format.
pub trait Renderer {
    fn render(&self, page: &NamespacePage, known: &BTreeSet<String>) -> Result<String>;

    fn file_extension(&self) -> &str;

    /// Render several pages into one stream (stdout mode).
    fn render_all(&self, pages: &[NamespacePage], known: &BTreeSet<String>) -> Result<String> {
        let mut out = String::new();
        for page in pages {
            out.push_str(&self.render(page, known)?);
            out.push('\n');
        }
        Ok(out)
    }
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "html" => Ok(Box::new(html::HtmlRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use markdown, html, or json",
            format
        )),
    }
}

/// Link bare URLs and known namespace references.
pub(crate) fn link_text(text: &str, known: &BTreeSet<String>) -> String {
    linkify::linkify(text, known)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_format_is_rejected() {
        let err = create_renderer("xml").err().unwrap();
        assert!(err.to_string().contains("unknown format: xml"));
        assert_eq!(create_renderer("md").unwrap().file_extension(), "md");
    }

    #[test]
    fn linkify_symbols_and_urls() {
        let known: BTreeSet<String> = ["goog.dom".to_string()].into_iter().collect();
        assert_eq!(
            link_text("See goog.dom and https://example.com now", &known),
            "See <a href=\"goog.dom.html\">goog.dom</a> and \
             <a href=\"https://example.com\">https://example.com</a> now"
        );
    }

    #[test]
    fn namespace_inside_url_is_not_relinked() {
        let known: BTreeSet<String> = ["goog.dom".to_string()].into_iter().collect();
        assert_eq!(
            link_text("see https://example.org/goog.dom now", &known),
            "see <a href=\"https://example.org/goog.dom\">https://example.org/goog.dom</a> now"
        );
    }
}
