use crate::ast::Property;
use crate::error::ParseError;
use crate::lexer::{Lexer, Token};

mod document;

/// Deepest block nesting accepted by default.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Hard ceiling on `ParseOptions::max_depth`. The tree builder recurses once
/// per level, so larger limits are clamped to this.
pub const MAX_DEPTH_CEILING: usize = 512;

/// Knobs for the tokenizer and tree builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Blocks nested deeper than this fail with `ParseError::TooDeep`.
    /// Top-level blocks are at depth 1. Clamped to [`MAX_DEPTH_CEILING`].
    pub max_depth: usize,
    /// Resolve `\"`, `\\`, `\n` and `\t` inside quoted strings.
    pub allow_escapes: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_escapes: true,
        }
    }
}

impl ParseOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH_CEILING);
        self
    }

    pub fn with_escapes(mut self, allow_escapes: bool) -> Self {
        self.allow_escapes = allow_escapes;
        self
    }
}

/// Recursive-descent tree builder over a token stream.
pub struct Parser<I> {
    lexer: Lexer<I>,
    max_depth: usize,
}

impl<I> Parser<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    pub fn new<L>(lines: L) -> Self
    where
        L: IntoIterator<IntoIter = I>,
    {
        Self::with_options(lines, &ParseOptions::default())
    }

    pub fn with_options<L>(lines: L, options: &ParseOptions) -> Self
    where
        L: IntoIterator<IntoIter = I>,
    {
        Parser {
            lexer: Lexer::new(lines).with_escapes(options.allow_escapes),
            max_depth: options.max_depth.min(MAX_DEPTH_CEILING),
        }
    }

    /// Next token together with the line it came from.
    pub(crate) fn bump(&mut self) -> Result<(Token, usize), ParseError> {
        let token = self.lexer.next_token()?;
        Ok((token, self.lexer.line()))
    }

    pub(crate) fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Consume the whole input and build the top-level forest.
    pub fn parse_document(&mut self) -> Result<Vec<Property>, ParseError> {
        document::parse_document(self)
    }
}
