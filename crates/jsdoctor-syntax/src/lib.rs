//! jsdoctor-syntax — extract documented declarations from JavaScript source.
//!
//! A lexical scanner, not a parser: doc comments and the identifiers they
//! document are found by pattern matching, so partial or non-standard code
//! is tolerated. [`scan`] drives the whole pipeline:
//!
//! - [`scanner`] finds `goog.provide` / `goog.require` directives, doc
//!   comments and the token each comment documents;
//! - [`comment`] and [`flags`] split a comment into paragraphs and flags and
//!   decode `@param` / `@return` / visibility / const-style types;
//! - [`namespace`] resolves each identifier to its nearest declared namespace;
//! - [`kind`] classifies each symbol.

pub mod comment;
pub mod error;
pub mod flags;
pub mod kind;
pub mod linkify;
pub mod namespace;
pub mod scanner;
pub mod source;

pub use comment::Comment;
pub use error::{Error, Result};
pub use flags::{Flag, ParamDescription, ReturnDescription, Visibility};
pub use kind::SymbolKind;
pub use source::{scan, Source, SourceSymbol, Symbol};
