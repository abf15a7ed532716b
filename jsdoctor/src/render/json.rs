//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the page model directly. Free text is left unlinked.

use crate::model::NamespacePage;
use crate::render::Renderer;
use anyhow::{Context, Result};
use std::collections::BTreeSet;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, page: &NamespacePage, _known: &BTreeSet<String>) -> Result<String> {
        let mut out = serde_json::to_string_pretty(page)
            .with_context(|| format!("failed to serialize {}", page.name))?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }

    /// A JSON array of pages, so stdout stays one valid document.
    fn render_all(&self, pages: &[NamespacePage], _known: &BTreeSet<String>) -> Result<String> {
        let mut out = serde_json::to_string_pretty(pages).context("failed to serialize pages")?;
        out.push('\n');
        Ok(out)
    }
}
