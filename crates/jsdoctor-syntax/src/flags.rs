//! Doc-comment flags: the closed tag vocabulary and the parsers that decode
//! a flag's trailing text.

use crate::error::{Error, Result};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Every tag name a doc comment may carry.
pub static ALL_FLAGS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "@author",
        "@const",
        "@constructor",
        "@define",
        "@deprecated",
        "@desc",
        "@dict",
        "@enum",
        "@export",
        "@extends",
        "@externs",
        "@final",
        "@fileoverview",
        "@implements",
        "@inheritDoc",
        "@interface",
        "@license",
        "@lends",
        "@modifies",
        "@noalias",
        "@nocollapse",
        "@nocompile",
        "@nosideeffects",
        "@override",
        "@package",
        "@param",
        "@preserve",
        "@private",
        "@protected",
        "@public",
        "@record",
        "@return",
        "@returns",
        "@see",
        "@struct",
        "@suppress",
        "@template",
        "@this",
        "@throws",
        "@type",
        "@typedef",
        "@unrestricted",
    ]
    .into_iter()
    .collect()
});

pub const CONSTRUCTOR: &str = "@constructor";
pub const INTERFACE: &str = "@interface";
pub const ENUM: &str = "@enum";
pub const PARAM: &str = "@param";
pub const RETURN_MARKERS: &[&str] = &["@return", "@returns"];
pub const PRIVATE: &str = "@private";
pub const PROTECTED: &str = "@protected";
pub const FILEOVERVIEW: &str = "@fileoverview";

/// Order in which const-like tags are consulted by [`symbol_type`].
pub const CONST_LIKE_FLAGS: &[&str] = &[
    "@const",
    "@define",
    "@type",
    "@enum",
    "@private",
    "@protected",
    "@package",
    "@public",
];

/// One tag-introduced annotation inside a doc comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    name: String,
    text: String,
}

impl Flag {
    /// Fails with [`Error::UnknownFlag`] when `name` is not in [`ALL_FLAGS`].
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !ALL_FLAGS.contains(name.as_str()) {
            return Err(Error::UnknownFlag { name });
        }
        Ok(Flag {
            name,
            text: text.into(),
        })
    }

    /// Tag name including the leading `@`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw text following the tag, trimmed.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    pub fn is_return(&self) -> bool {
        RETURN_MARKERS.contains(&self.name.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Visibility {
    Private,
    Protected,
    Public,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Protected => "protected",
            Visibility::Public => "public",
        }
    }
}

/// Decoded `@param {type} name description`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDescription<'a> {
    pub name: &'a str,
    pub type_expr: &'a str,
    /// Empty when no prose follows the name.
    pub description: &'a str,
}

/// Decoded `@return {type} description`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnDescription<'a> {
    pub type_expr: &'a str,
    pub description: &'a str,
}

/// Parse `{typeExpr} name description…`.
pub fn parse_parameter_description(text: &str) -> Result<ParamDescription<'_>> {
    let (type_expr, rest) = split_leading_type(text).ok_or_else(|| Error::MissingType {
        tag: PARAM,
        text: text.to_string(),
    })?;

    let rest = rest.trim_start();
    let name_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let name = &rest[..name_end];
    if name.is_empty() {
        return Err(Error::MissingName {
            text: text.to_string(),
        });
    }

    Ok(ParamDescription {
        name,
        type_expr,
        description: rest[name_end..].trim(),
    })
}

/// Parse `{typeExpr} description…`.
pub fn parse_return_description(text: &str) -> Result<ReturnDescription<'_>> {
    let (type_expr, rest) = split_leading_type(text).ok_or_else(|| Error::MissingType {
        tag: "@return",
        text: text.to_string(),
    })?;

    Ok(ReturnDescription {
        type_expr,
        description: rest.trim(),
    })
}

/// Contents of a leading `{…}` block, if the trimmed text opens with one.
pub fn maybe_parse_leading_type(text: &str) -> Option<&str> {
    split_leading_type(text).map(|(type_expr, _)| type_expr)
}

/// Private wins over protected, which wins over the public default.
pub fn visibility(flags: &[Flag]) -> Visibility {
    if flags.iter().any(|f| f.is(PRIVATE)) {
        Visibility::Private
    } else if flags.iter().any(|f| f.is(PROTECTED)) {
        Visibility::Protected
    } else {
        Visibility::Public
    }
}

/// Type carried by the first const-like flag in [`CONST_LIKE_FLAGS`] order
/// that has a leading `{type}` block.
pub fn symbol_type(flags: &[Flag]) -> Option<&str> {
    CONST_LIKE_FLAGS.iter().find_map(|tag| {
        flags
            .iter()
            .filter(|f| f.is(tag))
            .find_map(|f| maybe_parse_leading_type(f.text()))
    })
}

/// Split `  {type} rest` into (`type`, ` rest`). Braces nest, so record
/// types such as `{{a: number}}` stay intact. Unbalanced braces yield `None`.
fn split_leading_type(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    let body = text.strip_prefix('{')?;

    let mut depth = 1usize;
    for (i, c) in body.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&body[..i], &body[i + 1..]));
                }
            }
            _ => {}
        }
    }
    None
}
