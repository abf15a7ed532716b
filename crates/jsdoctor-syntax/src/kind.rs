//! Symbol kind classification from a comment's flags.

use crate::comment::Comment;
use crate::flags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SymbolKind {
    Constructor,
    Interface,
    Enum,
    Function,
    Property,
}

impl SymbolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Constructor => "constructor",
            SymbolKind::Interface => "interface",
            SymbolKind::Enum => "enum",
            SymbolKind::Function => "function",
            SymbolKind::Property => "property",
        }
    }
}

/// First matching rule wins: constructor, interface, enum, then anything
/// with `@param` or `@return` is a function.
///
/// A function with no parameters and no return value is indistinguishable
/// from a property here and is classified as one.
pub fn classify(comment: &Comment) -> SymbolKind {
    if comment.has_flag(flags::CONSTRUCTOR) {
        SymbolKind::Constructor
    } else if comment.has_flag(flags::INTERFACE) {
        SymbolKind::Interface
    } else if comment.has_flag(flags::ENUM) {
        SymbolKind::Enum
    } else if comment.has_flag(flags::PARAM) || comment.has_return() {
        SymbolKind::Function
    } else {
        SymbolKind::Property
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(raw: &str) -> SymbolKind {
        classify(&Comment::parse(raw, 0, raw.len()).unwrap())
    }

    #[test]
    fn single_markers() {
        assert_eq!(kind_of("/** @constructor */"), SymbolKind::Constructor);
        assert_eq!(kind_of("/** @interface */"), SymbolKind::Interface);
        assert_eq!(kind_of("/** @enum {string} */"), SymbolKind::Enum);
        assert_eq!(kind_of("/** @param {string} a */"), SymbolKind::Function);
        assert_eq!(kind_of("/** @return {string} */"), SymbolKind::Function);
        assert_eq!(kind_of("/** @returns {string} */"), SymbolKind::Function);
        assert_eq!(kind_of("/** @type {number} */"), SymbolKind::Property);
        assert_eq!(kind_of("/** Just text. */"), SymbolKind::Property);
    }

    #[test]
    fn first_rule_wins() {
        assert_eq!(
            kind_of("/**\n * @constructor\n * @param {string} a\n */"),
            SymbolKind::Constructor
        );
        assert_eq!(
            kind_of("/**\n * @enum {number}\n * @interface\n */"),
            SymbolKind::Interface
        );
        assert_eq!(
            kind_of("/**\n * @return {number}\n * @enum {number}\n */"),
            SymbolKind::Enum
        );
    }
}
