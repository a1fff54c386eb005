// Author: Dustin Pilgrim
// License: MIT

use std::collections::VecDeque;
use std::str::Chars;

use crate::error::ParseError;

mod scanner;
mod tokenizer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // --- literals ---
    /// A name or a value, quoted or bare. Quotes are removed and escapes
    /// resolved.
    Text(String),

    // --- structure ---
    BlockOpen,
    BlockClose,

    // --- layout ---
    Eof,
}

/// Character cursor over a single input line.
struct Cursor<'a> {
    input: Chars<'a>,
    peek: Option<char>,
    line: usize,
    allow_escapes: bool,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str, line: usize, allow_escapes: bool) -> Self {
        let mut input = text.chars();
        let peek = input.next();
        Cursor {
            input,
            peek,
            line,
            allow_escapes,
        }
    }
}

/// Splits a sequence of text lines into tokens.
///
/// Tokens never span lines. Comments (`//` outside quotes) run to the end
/// of their line.
pub struct Lexer<I> {
    lines: I,
    pending: VecDeque<(Token, usize)>,
    lines_read: usize,
    line: usize,
    allow_escapes: bool,
}

impl<I> Lexer<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    pub fn new<L>(lines: L) -> Self
    where
        L: IntoIterator<IntoIter = I>,
    {
        Lexer {
            lines: lines.into_iter(),
            pending: VecDeque::new(),
            lines_read: 0,
            line: 0,
            allow_escapes: true,
        }
    }

    /// Toggle backslash escapes inside quoted strings (on by default).
    pub fn with_escapes(mut self, allow_escapes: bool) -> Self {
        self.allow_escapes = allow_escapes;
        self
    }

    /// 1-based line of the token most recently returned.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        loop {
            if let Some((token, line)) = self.pending.pop_front() {
                self.line = line;
                return Ok(token);
            }

            let Some(text) = self.lines.next() else {
                self.line = self.lines_read;
                return Ok(Token::Eof);
            };
            self.lines_read += 1;
            let line = self.lines_read;

            let tokens = tokenize_line(text.as_ref(), line, self.allow_escapes)?;
            self.pending.extend(tokens.into_iter().map(|t| (t, line)));
        }
    }
}

/// Tokenize one line. `line` is only used for error reporting.
pub fn tokenize_line(text: &str, line: usize, allow_escapes: bool) -> Result<Vec<Token>, ParseError> {
    let mut cursor = Cursor::new(text, line, allow_escapes);
    tokenizer::tokenize(&mut cursor)
}
