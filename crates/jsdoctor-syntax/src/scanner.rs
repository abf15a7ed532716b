//! Lexical scanning over raw JavaScript text.
//!
//! Nothing here parses JavaScript. Directives, doc comments and their
//! targets are found with regular expressions, which keeps the scanner
//! tolerant of partial or non-standard code.

use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

// Directive arguments must be dot paths with non-empty segments.
static RE_DECLARE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"goog\.(?:provide|module)\(\s*['"]([A-Za-z0-9_$]+(?:\.[A-Za-z0-9_$]+)*)['"]\s*\)"#,
    )
    .unwrap()
});

static RE_DEPEND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"goog\.require(?:Type)?\(\s*['"]([A-Za-z0-9_$]+(?:\.[A-Za-z0-9_$]+)*)['"]\s*\)"#,
    )
    .unwrap()
});

// "/**" opens a doc comment; a plain "/*" does not.
static RE_DOC_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*\*.*?\*/").unwrap());

// Either a lone "(" or a dotted identifier whose dots may be surrounded by
// whitespace and newlines.
static RE_TARGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A\s*(\(|[A-Za-z0-9_$]+(?:\s*\.\s*[A-Za-z0-9_$]+)*)").unwrap()
});

static RE_NON_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S").unwrap());

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

// Per-line decoration: indentation, one leading "*", one following space.
static RE_LINE_DECORATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*\*?[ \t]?").unwrap());

// -- Types --------------------------------------------------------------------

/// A slice of the scanned text with its absolute byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

impl<'a> Token<'a> {
    fn from_match(m: regex::Match<'a>, offset: usize) -> Self {
        Token {
            text: m.as_str(),
            start: m.start() + offset,
            end: m.end() + offset,
        }
    }

    /// The target is a lone "(", meaning the comment documents an inline
    /// expression or cast.
    pub fn is_cast_marker(&self) -> bool {
        self.text == "("
    }
}

/// A doc comment and the token it documents, if any was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentedPair<'a> {
    pub comment: Token<'a>,
    pub target: Option<Token<'a>>,
}

// -- Public API ---------------------------------------------------------------

/// Namespaces a script declares, in order of first appearance. May repeat.
pub fn declared(script: &str) -> impl Iterator<Item = &str> + '_ {
    capture_paths(&RE_DECLARE, script)
}

/// Namespaces a script depends on, in order of first appearance. May repeat.
pub fn depended_on(script: &str) -> impl Iterator<Item = &str> + '_ {
    capture_paths(&RE_DEPEND, script)
}

fn capture_paths<'a>(re: &'static Regex, script: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    re.captures_iter(script)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Every `/** ... */` block in the script.
pub fn find_doc_comments(script: &str) -> impl Iterator<Item = Token<'_>> + '_ {
    RE_DOC_COMMENT
        .find_iter(script)
        .map(|m| Token::from_match(m, 0))
}

/// Find the token a comment documents, starting at byte offset `from`.
///
/// Leading whitespace is skipped. The result is either a dotted identifier
/// (possibly with embedded whitespace, see [`normalize_token`]) or a lone
/// `(`. `None` when nothing plausible follows.
pub fn find_comment_target(text: &str, from: usize) -> Option<Token<'_>> {
    let rest = text.get(from..)?;
    RE_TARGET
        .captures(rest)
        .and_then(|caps| caps.get(1))
        .map(|m| Token::from_match(m, from))
}

/// True when the first non-whitespace character after `target` is `(` or
/// `[`: a call or bracket access, typically a cast of a return value.
pub fn is_ignorable_target(text: &str, target: &Token<'_>) -> bool {
    text.get(target.end..)
        .and_then(|rest| RE_NON_SPACE.find(rest))
        .is_some_and(|m| matches!(m.as_str(), "(" | "["))
}

/// Strip comment delimiters and per-line decoration. Blank lines survive
/// as paragraph separators; the result is trimmed.
pub fn extract_comment_text(comment: &str) -> String {
    let body = comment.strip_prefix("/**").unwrap_or(comment);
    let body = body.strip_suffix("*/").unwrap_or(body);

    body.lines()
        .map(|line| RE_LINE_DECORATION.replace(line, "").trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Pair each doc comment with the target that follows it.
pub fn extract_documented_pairs(script: &str) -> impl Iterator<Item = DocumentedPair<'_>> + '_ {
    find_doc_comments(script).map(move |comment| DocumentedPair {
        comment,
        target: find_comment_target(script, comment.end),
    })
}

/// Remove all whitespace, joining dot paths split across lines.
pub fn normalize_token(token: &str) -> String {
    RE_WHITESPACE.replace_all(token, "").into_owned()
}
