//! HTML renderer — standalone HTML page with semantic markup.

use crate::model::{NamespacePage, SymbolDoc};
use crate::render::{link_text, Renderer};
use anyhow::Result;
use std::collections::BTreeSet;

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, page: &NamespacePage, known: &BTreeSet<String>) -> Result<String> {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", html_escape(&page.name)));
        out.push_str("<style>\n");
        out.push_str("body { font-family: system-ui, sans-serif; max-width: 48em; margin: 2em auto; padding: 0 1em; }\n");
        out.push_str("code { background: #f4f4f4; padding: 0.15em 0.3em; border-radius: 3px; }\n");
        out.push_str("dt { font-weight: bold; margin-top: 0.5em; }\n");
        out.push_str("dd { margin-left: 1.5em; }\n");
        out.push_str(".tag { display: inline-block; font-size: 0.75em; padding: 0.1em 0.4em; border-radius: 3px; margin-left: 0.5em; background: #e0e0e0; }\n");
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");

        out.push_str(&format!("<h1>{}</h1>\n", html_escape(&page.name)));

        if let Some(ref overview) = page.overview {
            out.push_str(&format!("<p>{}</p>\n", rich_text(overview, known)));
        }

        // Index
        let members: Vec<&SymbolDoc> = page
            .static_members
            .iter()
            .chain(&page.instance_members)
            .collect();
        if !members.is_empty() {
            out.push_str("<h2>Index</h2>\n<ul>\n");
            for symbol in &members {
                out.push_str(&format!(
                    "  <li><a href=\"#{}\">{}</a></li>\n",
                    html_escape(&anchor(&symbol.identifier)),
                    html_escape(&symbol.identifier)
                ));
            }
            out.push_str("</ul>\n");
        }

        if !page.static_members.is_empty() {
            out.push_str("<h2>Static members</h2>\n");
            for symbol in &page.static_members {
                out.push_str(&render_symbol_html(symbol, known));
            }
        }

        if !page.instance_members.is_empty() {
            out.push_str("<h2>Instance members</h2>\n");
            for symbol in &page.instance_members {
                out.push_str(&render_symbol_html(symbol, known));
            }
        }

        out.push_str("</body>\n</html>\n");
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn render_symbol_html(symbol: &SymbolDoc, known: &BTreeSet<String>) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "<h3 id=\"{}\">{}",
        html_escape(&anchor(&symbol.identifier)),
        html_escape(&symbol.identifier)
    ));
    out.push_str(&format!(" <span class=\"tag\">{}</span>", symbol.kind));
    if symbol.visibility != "public" {
        out.push_str(&format!(" <span class=\"tag\">{}</span>", symbol.visibility));
    }
    out.push_str("</h3>\n");

    if let Some(ref type_expr) = symbol.type_expr {
        out.push_str(&format!("<p><code>{}</code></p>\n", html_escape(type_expr)));
    }

    if let Some(ref desc) = symbol.description {
        for paragraph in desc.split("\n\n") {
            out.push_str(&format!("<p>{}</p>\n", rich_text(paragraph, known)));
        }
    }

    if !symbol.params.is_empty() {
        out.push_str("<h4>Parameters</h4>\n<dl>\n");
        for param in &symbol.params {
            out.push_str(&format!(
                "  <dt><code>{}</code> <code>{}</code></dt>\n",
                html_escape(&param.name),
                html_escape(&param.type_expr)
            ));
            if !param.description.is_empty() {
                out.push_str(&format!("  <dd>{}</dd>\n", rich_text(&param.description, known)));
            }
        }
        out.push_str("</dl>\n");
    }

    if let Some(ref ret) = symbol.returns {
        out.push_str("<h4>Returns</h4>\n");
        out.push_str(&format!("<p><code>{}</code>", html_escape(&ret.type_expr)));
        if !ret.description.is_empty() {
            out.push(' ');
            out.push_str(&rich_text(&ret.description, known));
        }
        out.push_str("</p>\n");
    }

    out
}

/// Escape, then link.
fn rich_text(text: &str, known: &BTreeSet<String>) -> String {
    link_text(&html_escape(text), known)
}

fn anchor(identifier: &str) -> String {
    identifier
        .to_lowercase()
        .replace(|c: char| !c.is_alphanumeric() && c != '-' && c != '.', "")
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_before_linking() {
        let known: BTreeSet<String> = ["goog.dom".to_string()].into_iter().collect();
        assert_eq!(
            rich_text("a <b> goog.dom", &known),
            "a &lt;b&gt; <a href=\"goog.dom.html\">goog.dom</a>"
        );
    }
}
