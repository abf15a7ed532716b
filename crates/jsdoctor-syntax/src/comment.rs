//! Doc-comment body: free-text paragraphs followed by tagged flags.

use crate::error::Result;
use crate::flags::{self, Flag, ParamDescription, ReturnDescription, Visibility};
use crate::scanner;
use regex::Regex;
use std::sync::LazyLock;

// A tag marker opens a line: "@param ...", " @return ...".
static RE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(@[A-Za-z]+)").unwrap());

static RE_PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n").unwrap());

/// A parsed doc comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Comment exactly as it appears in the source, delimiters included.
    pub raw: String,
    /// Delimiters and per-line decoration stripped.
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub description_sections: Vec<String>,
    /// In declaration order, so `@param` order matches the signature.
    pub flags: Vec<Flag>,
}

impl Comment {
    /// Build a comment from its raw source span.
    ///
    /// Fails on a tag outside the flag vocabulary, and on `@param` /
    /// `@return` text that lacks its `{type}` block.
    pub fn parse(raw: &str, start: usize, end: usize) -> Result<Self> {
        let text = scanner::extract_comment_text(raw);
        let (description_sections, pairs) = process_comment(&text);

        let flags = pairs
            .into_iter()
            .map(|(name, body)| Flag::new(name, body))
            .collect::<Result<Vec<_>>>()?;

        let comment = Comment {
            raw: raw.to_string(),
            text,
            start,
            end,
            description_sections,
            flags,
        };
        comment.validate()?;
        Ok(comment)
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.iter().any(|f| f.is(name))
    }

    pub fn has_return(&self) -> bool {
        self.flags.iter().any(Flag::is_return)
    }

    /// Decoded `@param` flags, in declaration order.
    pub fn params(&self) -> impl Iterator<Item = Result<ParamDescription<'_>>> {
        self.flags
            .iter()
            .filter(|f| f.is(flags::PARAM))
            .map(|f| flags::parse_parameter_description(f.text()))
    }

    /// Decoded first `@return` / `@returns` flag.
    pub fn returns(&self) -> Option<Result<ReturnDescription<'_>>> {
        self.flags
            .iter()
            .find(|f| f.is_return())
            .map(|f| flags::parse_return_description(f.text()))
    }

    pub fn visibility(&self) -> Visibility {
        flags::visibility(&self.flags)
    }

    pub fn type_expr(&self) -> Option<&str> {
        flags::symbol_type(&self.flags)
    }

    /// Description paragraphs joined by blank lines.
    pub fn description(&self) -> String {
        self.description_sections.join("\n\n")
    }

    fn validate(&self) -> Result<()> {
        for param in self.params() {
            param?;
        }
        if let Some(ret) = self.returns() {
            ret?;
        }
        Ok(())
    }
}

/// Split cleaned comment text into description paragraphs and
/// `(tag, text)` pairs. Tag names are not checked here.
pub fn process_comment(text: &str) -> (Vec<String>, Vec<(String, String)>) {
    let markers: Vec<_> = RE_TAG
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .collect();

    let description_end = markers.first().map_or(text.len(), |m| m.start());
    let paragraphs = RE_PARAGRAPH_BREAK
        .split(&text[..description_end])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    let pairs = markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let body_end = markers.get(i + 1).map_or(text.len(), |next| next.start());
            (
                marker.as_str().to_string(),
                text[marker.end()..body_end].trim().to_string(),
            )
        })
        .collect();

    (paragraphs, pairs)
}
