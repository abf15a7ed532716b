//! Namespace path operations.
//!
//! A namespace path is a dot-delimited sequence of segments (`goog.dom.TagName`).
//! Every relation here compares whole segments, never substrings, so
//! `goog.domx` is not inside `goog.dom`.

use crate::error::{Error, Result};

const SEPARATOR: char = '.';

/// Split a path into its segments.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split(SEPARATOR).collect()
}

/// Inverse of [`split_path`].
pub fn join_path(segments: &[&str]) -> String {
    segments.join(".")
}

/// `a.prototype.b` — at least three segments with `prototype` second to last.
pub fn is_prototype_property(path: &str) -> bool {
    let segments = split_path(path);
    segments.len() >= 3 && segments[segments.len() - 2] == "prototype"
}

/// Member name of a prototype property (`foo` for `Bar.prototype.foo`).
pub fn prototype_member_name(path: &str) -> Result<&str> {
    if !is_prototype_property(path) {
        return Err(Error::NotPrototypeProperty {
            path: path.to_string(),
        });
    }
    Ok(path.rsplit(SEPARATOR).next().unwrap_or(path))
}

/// True when every segment of `namespace` matches `symbol` position by position.
/// A path is a descendant of itself.
pub fn is_descendant_of(symbol: &str, namespace: &str) -> bool {
    let mut symbol_segments = symbol.split(SEPARATOR);
    namespace
        .split(SEPARATOR)
        .all(|segment| symbol_segments.next() == Some(segment))
}

/// Like [`is_descendant_of`] but excludes the namespace itself.
pub fn is_strict_descendant_of(symbol: &str, namespace: &str) -> bool {
    is_descendant_of(symbol, namespace) && segment_count(symbol) > segment_count(namespace)
}

/// Pick the deepest candidate that is a strict ancestor of `symbol`.
///
/// Candidates equal to `symbol` never qualify. Candidates matching the same
/// number of segments are ordered lexicographically and the smallest wins.
pub fn nearest_ancestor_namespace<'a, I>(symbol: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .filter(|ns| is_strict_descendant_of(symbol, ns))
        .map(|ns| (segment_count(ns), ns))
        .max_by(|a, b| a.0.cmp(&b.0).then_with(|| b.1.cmp(a.1)))
        .map(|(_, ns)| ns)
}

fn segment_count(path: &str) -> usize {
    path.split(SEPARATOR).count()
}
