//! Page model — scanned symbols grouped by the namespace that owns them.

use anyhow::{Context, Result};
use jsdoctor_syntax::{Source, SourceSymbol, Visibility};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// One output page: everything documented under a declared namespace.
#[derive(Debug, Serialize)]
pub struct NamespacePage {
    pub name: String,
    /// Description of the `@fileoverview` of the file declaring this namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    /// Files that contributed symbols to this page.
    pub sources: Vec<String>,
    pub static_members: Vec<SymbolDoc>,
    pub instance_members: Vec<SymbolDoc>,
}

impl NamespacePage {
    fn new(name: &str) -> Self {
        NamespacePage {
            name: name.to_string(),
            overview: None,
            sources: Vec::new(),
            static_members: Vec::new(),
            instance_members: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SymbolDoc {
    pub identifier: String,
    /// Last segment of the identifier.
    pub name: String,
    pub kind: &'static str,
    pub visibility: &'static str,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_expr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<ParamDoc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<ReturnDoc>,
}

#[derive(Debug, Serialize)]
pub struct ParamDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub type_expr: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct ReturnDoc {
    #[serde(rename = "type")]
    pub type_expr: String,
    pub description: String,
}

/// Every namespace declared by any source. Used to link references.
pub fn known_namespaces(sources: &[Source]) -> BTreeSet<String> {
    sources
        .iter()
        .flat_map(|source| source.provides().iter().cloned())
        .collect()
}

/// Group the symbols of all sources into one page per namespace.
///
/// Private symbols are dropped unless `show_private` is set. Namespaces
/// left without symbols get no page.
pub fn assemble(sources: &[Source], show_private: bool) -> Result<Vec<NamespacePage>> {
    let mut pages: BTreeMap<String, NamespacePage> = BTreeMap::new();

    for source in sources {
        let label = source.to_string();
        for symbol in source.symbols() {
            if symbol.visibility() == Visibility::Private && !show_private {
                continue;
            }

            let doc = symbol_doc(&symbol)
                .with_context(|| format!("failed to decode comment of {}", symbol))?;
            let page = pages
                .entry(symbol.namespace.clone())
                .or_insert_with(|| NamespacePage::new(&symbol.namespace));

            if !page.sources.contains(&label) {
                page.sources.push(label.clone());
            }
            if symbol.is_static {
                page.static_members.push(doc);
            } else {
                page.instance_members.push(doc);
            }
        }
    }

    for page in pages.values_mut() {
        page.overview = overview_for(sources, &page.name);
        page.static_members.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        page.instance_members.sort_by(|a, b| a.identifier.cmp(&b.identifier));
    }

    Ok(pages.into_values().collect())
}

fn symbol_doc(symbol: &SourceSymbol<'_>) -> Result<SymbolDoc> {
    let comment = &symbol.comment;

    let params = comment
        .params()
        .map(|p| {
            p.map(|p| ParamDoc {
                name: p.name.to_string(),
                type_expr: p.type_expr.to_string(),
                description: p.description.to_string(),
            })
        })
        .collect::<jsdoctor_syntax::Result<Vec<_>>>()?;

    let returns = comment
        .returns()
        .transpose()?
        .map(|r| ReturnDoc {
            type_expr: r.type_expr.to_string(),
            description: r.description.to_string(),
        });

    let description = comment.description();

    Ok(SymbolDoc {
        identifier: symbol.identifier.clone(),
        name: symbol
            .property
            .clone()
            .unwrap_or_else(|| last_segment(&symbol.identifier).to_string()),
        kind: symbol.kind.as_str(),
        visibility: symbol.visibility().as_str(),
        type_expr: symbol.type_expr().map(str::to_string),
        description: (!description.is_empty()).then_some(description),
        params,
        returns,
    })
}

/// Overview text of the first source that declares `namespace`.
fn overview_for(sources: &[Source], namespace: &str) -> Option<String> {
    sources
        .iter()
        .filter(|source| source.provides().contains(namespace))
        .filter_map(|source| source.file_comment())
        .find_map(|comment| {
            comment
                .flags
                .iter()
                .find(|f| f.is(jsdoctor_syntax::flags::FILEOVERVIEW))
                .map(|f| f.text().to_string())
                .filter(|text| !text.is_empty())
        })
}

fn last_segment(identifier: &str) -> &str {
    identifier.rsplit('.').next().unwrap_or(identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsdoctor_syntax::scan;

    const SCRIPT: &str = r#"/**
 * @fileoverview Event helpers.
 */
goog.provide('ev');
goog.provide('ev.Target');

/**
 * Listen for an event.
 * @param {string} type Event type.
 * @param {Function} fn Handler.
 * @return {number} Listener key.
 */
ev.listen = function(type, fn) {};

/** @private {number} */
ev.counter_ = 0;

/**
 * Dispatch.
 * @return {boolean}
 */
ev.Target.prototype.dispatch = function() {};
"#;

    #[test]
    fn groups_by_namespace() {
        let sources = vec![scan(SCRIPT, Some("ev.js")).unwrap()];
        let pages = assemble(&sources, false).unwrap();

        let names: Vec<_> = pages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["ev", "ev.Target"]);

        let ev = &pages[0];
        assert_eq!(ev.overview.as_deref(), Some("Event helpers."));
        assert_eq!(ev.sources, vec!["ev.js"]);
        assert_eq!(ev.static_members.len(), 1);
        let listen = &ev.static_members[0];
        assert_eq!(listen.name, "listen");
        assert_eq!(listen.kind, "function");
        assert_eq!(listen.description.as_deref(), Some("Listen for an event."));
        assert_eq!(listen.params.len(), 2);
        assert_eq!(listen.params[1].name, "fn");
        assert_eq!(listen.returns.as_ref().unwrap().type_expr, "number");

        let target = &pages[1];
        assert!(target.static_members.is_empty());
        assert_eq!(target.instance_members[0].name, "dispatch");
        assert_eq!(target.overview.as_deref(), Some("Event helpers."));
    }

    #[test]
    fn private_symbols_are_opt_in() {
        let sources = vec![scan(SCRIPT, None).unwrap()];

        let pages = assemble(&sources, false).unwrap();
        assert!(pages[0].static_members.iter().all(|s| s.name != "counter_"));

        let pages = assemble(&sources, true).unwrap();
        let counter = pages[0]
            .static_members
            .iter()
            .find(|s| s.name == "counter_")
            .unwrap();
        assert_eq!(counter.visibility, "private");
        assert_eq!(counter.type_expr.as_deref(), Some("number"));
    }

    #[test]
    fn known_namespaces_span_sources() {
        let sources = vec![
            scan("goog.provide('a.b');", None).unwrap(),
            scan("goog.provide('c');", None).unwrap(),
        ];
        let known: Vec<_> = known_namespaces(&sources).into_iter().collect();
        assert_eq!(known, vec!["a.b", "c"]);
    }
}
