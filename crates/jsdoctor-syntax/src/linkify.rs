//! Turn bare URLs and known namespace references in free text into HTML links.

use regex::{Captures, Regex};
use std::collections::BTreeSet;
use std::sync::LazyLock;

static RE_WEB_URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S*").unwrap());

// `goog.dom` or `goog.dom#getElement`
static RE_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+(?:\.\w+)*)(#\w+)?").unwrap());

// A URL or a symbol reference. URLs come first so that a namespace inside
// a URL stays part of the URL.
static RE_URL_OR_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S*|(\w+(?:\.\w+)*)(#\w+)?").unwrap());

fn url_anchor(url: &str) -> String {
    format!("<a href=\"{url}\">{url}</a>")
}

fn symbol_anchor(caps: &Captures, known: &BTreeSet<String>) -> String {
    let full = &caps[0];
    let symbol = &caps[1];
    if !known.contains(symbol) {
        return full.to_string();
    }
    let href = format!("{symbol}.html");
    format!("<a href=\"{href}\">{full}</a>")
}

/// Wrap every `http://` / `https://` URL in an anchor.
pub fn linkify_web_urls(content: &str) -> String {
    RE_WEB_URL
        .replace_all(content, |caps: &Captures| url_anchor(&caps[0]))
        .into_owned()
}

/// Link every reference to a known namespace to that namespace's page.
///
/// `ns#member` links to `ns.html`; the `#member` part is kept in the link
/// text but not carried into the href.
pub fn linkify_symbols(content: &str, known: &BTreeSet<String>) -> String {
    RE_SYMBOL
        .replace_all(content, |caps: &Captures| symbol_anchor(caps, known))
        .into_owned()
}

/// Link URLs and known namespace references in one pass.
///
/// Text inside a URL is never linked as a namespace.
pub fn linkify(content: &str, known: &BTreeSet<String>) -> String {
    RE_URL_OR_SYMBOL
        .replace_all(content, |caps: &Captures| match caps.get(1) {
            Some(_) => symbol_anchor(caps, known),
            None => url_anchor(&caps[0]),
        })
        .into_owned()
}
