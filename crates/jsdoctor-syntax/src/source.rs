//! Build a [`Source`] and its documented [`Symbol`]s from one script.

use crate::comment::Comment;
use crate::error::{Error, Result};
use crate::flags::{self, Visibility};
use crate::kind::{self, SymbolKind};
use crate::namespace;
use crate::scanner::{self, Token};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Deref;
use tracing::debug;

/// Identifiers with this prefix document instance state set up inside a
/// constructor. Not supported yet.
const INSTANCE_PREFIX: &str = "this.";

/// Result of scanning one script. Built once by [`scan`], never mutated.
#[derive(Debug, Clone)]
pub struct Source {
    script: String,
    path: Option<String>,
    provides: BTreeSet<String>,
    requires: BTreeSet<String>,
    symbols: Vec<Symbol>,
    file_comment: Option<Comment>,
}

/// A documented declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Whitespace-free dot path, e.g. `goog.dom.getElement`.
    pub identifier: String,
    pub start: usize,
    pub end: usize,
    pub comment: Comment,
    /// Nearest declared namespace that strictly contains `identifier`.
    pub namespace: String,
    /// Member name for `X.prototype.Y`; `None` for static symbols.
    pub property: Option<String>,
    pub kind: SymbolKind,
    pub is_static: bool,
}

impl Symbol {
    pub fn visibility(&self) -> Visibility {
        self.comment.visibility()
    }

    pub fn type_expr(&self) -> Option<&str> {
        self.comment.type_expr()
    }
}

/// A symbol borrowed together with the source that owns it.
#[derive(Debug, Clone, Copy)]
pub struct SourceSymbol<'a> {
    pub source: &'a Source,
    pub symbol: &'a Symbol,
}

impl Deref for SourceSymbol<'_> {
    type Target = Symbol;

    fn deref(&self) -> &Symbol {
        self.symbol
    }
}

impl Source {
    pub fn script(&self) -> &str {
        &self.script
    }

    /// Display label given to [`scan`]. Never read from disk.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Declared namespaces.
    pub fn provides(&self) -> &BTreeSet<String> {
        &self.provides
    }

    /// Depended-on namespaces.
    pub fn requires(&self) -> &BTreeSet<String> {
        &self.requires
    }

    /// Retained symbols in source order, each paired with this source.
    pub fn symbols(&self) -> impl Iterator<Item = SourceSymbol<'_>> + '_ {
        self.symbols
            .iter()
            .map(move |symbol| SourceSymbol { source: self, symbol })
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// The `@fileoverview` comment, if the script has one.
    pub fn file_comment(&self) -> Option<&Comment> {
        self.file_comment.as_ref()
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path.as_deref().unwrap_or("<script>"))
    }
}

impl fmt::Display for SourceSymbol<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol.identifier, self.source)
    }
}

/// Scan a script for documented declarations.
///
/// Comments whose target is not a documentable declaration are skipped.
/// A malformed comment, or a documented declared namespace with no declared
/// ancestor, aborts the whole scan and no `Source` is returned.
pub fn scan(script: &str, path: Option<&str>) -> Result<Source> {
    let label = path.unwrap_or("<script>");
    let provides: BTreeSet<String> = scanner::declared(script).map(str::to_string).collect();
    let requires: BTreeSet<String> = scanner::depended_on(script).map(str::to_string).collect();

    let mut symbols = Vec::new();
    let mut file_comment: Option<Comment> = None;

    for pair in scanner::extract_documented_pairs(script) {
        let comment = Comment::parse(pair.comment.text, pair.comment.start, pair.comment.end)?;

        if comment.has_flag(flags::FILEOVERVIEW) {
            if file_comment.is_none() {
                file_comment = Some(comment);
            } else {
                debug!(path = label, offset = pair.comment.start, "ignoring extra @fileoverview comment");
            }
            continue;
        }

        let Some(target) = pair.target else {
            debug!(path = label, offset = pair.comment.start, "skipping comment with no target");
            continue;
        };

        // Call or bracket access, most likely a cast of a return value.
        if scanner::is_ignorable_target(script, &target) {
            continue;
        }
        if target.is_cast_marker() {
            continue;
        }

        let identifier = scanner::normalize_token(target.text);

        if identifier.starts_with(INSTANCE_PREFIX) {
            debug!(path = label, %identifier, "skipping instance property");
            continue;
        }

        if !provides
            .iter()
            .any(|ns| namespace::is_descendant_of(&identifier, ns))
        {
            debug!(path = label, %identifier, "skipping identifier outside declared namespaces");
            continue;
        }

        symbols.push(build_symbol(identifier, target, comment, &provides)?);
    }

    Ok(Source {
        script: script.to_string(),
        path: path.map(str::to_string),
        provides,
        requires,
        symbols,
        file_comment,
    })
}

fn build_symbol(
    identifier: String,
    target: Token<'_>,
    comment: Comment,
    provides: &BTreeSet<String>,
) -> Result<Symbol> {
    let kind = kind::classify(&comment);

    let namespace = namespace::nearest_ancestor_namespace(
        &identifier,
        provides.iter().map(String::as_str),
    )
    .ok_or_else(|| Error::NamespaceNotFound {
        identifier: identifier.clone(),
    })?
    .to_string();

    let (property, is_static) = if namespace::is_prototype_property(&identifier) {
        let member = namespace::prototype_member_name(&identifier)?.to_string();
        (Some(member), false)
    } else {
        (None, true)
    };

    Ok(Symbol {
        identifier,
        start: target.start,
        end: target.end,
        comment,
        namespace,
        property,
        kind,
        is_static,
    })
}
