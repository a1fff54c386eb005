use thiserror::Error;

/// Failure while turning text lines into a property tree.
///
/// Every variant carries the 1-based line number where the problem was
/// detected. A parse either produces a complete forest or one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A quote was opened but not closed before the end of the line.
    #[error("[KV] Unterminated string at line {line}")]
    UnterminatedString { line: usize },

    /// A name was read but neither a value nor a block followed.
    #[error("[KV] Missing value for '{name}' at line {line}")]
    MissingValue { name: String, line: usize },

    /// A `{` appeared where a property name was expected.
    #[error("[KV] Unexpected '{{' at line {line} Hint: a block needs a name before it")]
    UnexpectedBlockOpen { line: usize },

    /// A `}` appeared with no matching open block at this level.
    #[error("[KV] Unexpected '}}' at line {line}")]
    UnexpectedBlockClose { line: usize },

    /// Input ended while the block opened at `line` was still open.
    #[error("[KV] Block opened at line {line} is never closed")]
    UnterminatedBlock { line: usize },

    #[error("[KV] Nesting deeper than {max_depth} levels at line {line}")]
    TooDeep { line: usize, max_depth: usize },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnterminatedString { line }
            | ParseError::MissingValue { line, .. }
            | ParseError::UnexpectedBlockOpen { line }
            | ParseError::UnexpectedBlockClose { line }
            | ParseError::UnterminatedBlock { line }
            | ParseError::TooDeep { line, .. } => *line,
        }
    }

    /// Stable diagnostic code. 1xx are lexer errors, 2xx parser errors.
    pub fn code(&self) -> u32 {
        match self {
            ParseError::UnterminatedString { .. } => 103,
            ParseError::MissingValue { .. } => 201,
            ParseError::UnexpectedBlockOpen { .. } => 202,
            ParseError::UnexpectedBlockClose { .. } => 203,
            ParseError::UnterminatedBlock { .. } => 204,
            ParseError::TooDeep { .. } => 205,
        }
    }
}

/// The crate-wide error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KvError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("[KV] Path '{path}' not found")]
    PathNotFound { path: String },

    #[error("[KV] '{name}' is a leaf and cannot hold children")]
    NotABlock { name: String },

    #[error("[KV] '{name}' is a block and has no scalar value")]
    NotALeaf { name: String },

    #[error("[KV] Type Error: {message}{}", .hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)))]
    TypeError {
        message: String,
        hint: Option<String>,
        code: u32,
    },

    #[error("[KV] Validation Error: {message}{}", .hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)))]
    ValidationError {
        message: String,
        hint: Option<String>,
        code: u32,
    },
}

impl KvError {
    pub fn code(&self) -> u32 {
        match self {
            KvError::Parse(e) => e.code(),
            KvError::PathNotFound { .. } => 304,
            KvError::NotABlock { .. } => 306,
            KvError::NotALeaf { .. } => 307,
            KvError::TypeError { code, .. } | KvError::ValidationError { code, .. } => *code,
        }
    }

    /// Line number for parse errors, `None` for everything else.
    pub fn line(&self) -> Option<usize> {
        match self {
            KvError::Parse(e) => Some(e.line()),
            _ => None,
        }
    }

    pub(crate) fn type_error(message: String, hint: &str, code: u32) -> Self {
        KvError::TypeError {
            message,
            hint: Some(hint.into()),
            code,
        }
    }
}
