//! Hard failures. Any of these aborts a scan; soft rejections are only logged.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A `@param` / `@return` flag whose text does not open with `{type}`.
    #[error("{tag} text is missing its leading {{type}} block: {text:?}")]
    MissingType { tag: &'static str, text: String },

    /// A `@param` flag with a type but no parameter name after it.
    #[error("@param text is missing a name after the type: {text:?}")]
    MissingName { text: String },

    /// Tag name outside the closed flag vocabulary.
    #[error("unrecognized flag: {name}")]
    UnknownFlag { name: String },

    /// Member name requested for a path with no `prototype` segment.
    #[error("not a prototype property: {path}")]
    NotPrototypeProperty { path: String },

    /// A documented declared namespace with no declared strict ancestor.
    #[error("no namespace found for {identifier}")]
    NamespaceNotFound { identifier: String },
}
