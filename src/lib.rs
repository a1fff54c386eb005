//! Parser, serializer and path queries for nested key-value text.
//!
//! ```text
//! "Item"
//! {
//!     "Type"  "ITEM_BUTTON"   // comments run to end of line
//!     Exporting { Inputs {} }
//! }
//! ```
//!
//! A document is a forest of [`Property`] nodes. Each node is either a
//! leaf holding one string or a block holding ordered children; names may
//! repeat among siblings.

pub mod ast;
pub mod config;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;
pub mod query;

pub use ast::{Payload, Property};
pub use config::KvConfig;
pub use error::{KvError, ParseError};
pub use export::serialize;
pub use parser::{ParseOptions, Parser, DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING};
pub use query::find_all;

/// Parse text lines into a forest using the default options.
pub fn parse<L>(lines: L) -> Result<Vec<Property>, ParseError>
where
    L: IntoIterator,
    L::Item: AsRef<str>,
{
    Parser::new(lines).parse_document()
}

/// Parse text lines into a forest with explicit depth and escape settings.
pub fn parse_with<L>(lines: L, options: &ParseOptions) -> Result<Vec<Property>, ParseError>
where
    L: IntoIterator,
    L::Item: AsRef<str>,
{
    Parser::with_options(lines, options).parse_document()
}

/// Parse a whole document held in one string.
pub fn parse_str(text: &str) -> Result<Vec<Property>, ParseError> {
    parse(text.lines())
}
