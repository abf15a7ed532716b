//! GitHub-flavored markdown renderer.

use crate::model::{NamespacePage, SymbolDoc};
use crate::render::{link_text, Renderer};
use anyhow::Result;
use std::collections::BTreeSet;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, page: &NamespacePage, known: &BTreeSet<String>) -> Result<String> {
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("# {}\n", page.name));

        if let Some(ref overview) = page.overview {
            lines.push(link_text(overview, known));
            lines.push(String::new());
        }

        // Index
        let members: Vec<&SymbolDoc> = page
            .static_members
            .iter()
            .chain(&page.instance_members)
            .collect();
        if !members.is_empty() {
            lines.push("## Index\n".to_string());
            for symbol in &members {
                lines.push(format!(
                    "* [{}](#{})",
                    symbol.identifier,
                    github_slug(&symbol.identifier)
                ));
            }
            lines.push(String::new());
        }

        if !page.static_members.is_empty() {
            lines.push("## Static members\n".to_string());
            for symbol in &page.static_members {
                lines.push(render_symbol(symbol, known));
            }
        }

        if !page.instance_members.is_empty() {
            lines.push("## Instance members\n".to_string());
            for symbol in &page.instance_members {
                lines.push(render_symbol(symbol, known));
            }
        }

        let mut out = lines.join("\n");
        if !out.ends_with('\n') {
            out.push('\n');
        }
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Render a single symbol's documentation block.
fn render_symbol(symbol: &SymbolDoc, known: &BTreeSet<String>) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("### {}\n", symbol.identifier));

    // Badges: kind, non-public visibility, type
    let mut badges = vec![format!("`{}`", symbol.kind)];
    if symbol.visibility != "public" {
        badges.push(format!("`{}`", symbol.visibility));
    }
    if let Some(ref type_expr) = symbol.type_expr {
        badges.push(format!("`{{{}}}`", type_expr));
    }
    lines.push(badges.join(" "));
    lines.push(String::new());

    if let Some(ref desc) = symbol.description {
        lines.push(link_text(desc, known));
        lines.push(String::new());
    }

    if !symbol.params.is_empty() {
        lines.push("#### Parameters\n".to_string());
        for param in &symbol.params {
            let mut item = format!("* **{}** `{}`", param.name, param.type_expr);
            if !param.description.is_empty() {
                item.push_str(": ");
                item.push_str(&link_text(&param.description, known));
            }
            lines.push(item);
        }
        lines.push(String::new());
    }

    if let Some(ref ret) = symbol.returns {
        lines.push("#### Returns\n".to_string());
        let mut item = format!("`{}`", ret.type_expr);
        if !ret.description.is_empty() {
            item.push(' ');
            item.push_str(&link_text(&ret.description, known));
        }
        lines.push(item);
        lines.push(String::new());
    }

    lines.join("\n")
}

/// GitHub heading anchor slug: lowercase, keep alphanumerics, spaces and
/// hyphens, spaces become hyphens. Dots are dropped.
fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}
