use super::Column;
use thiserror::Error;

/// Either failure a single tokenize-and-parse pass can end with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl Error {
    pub fn column(&self) -> Option<Column> {
        match self {
            Error::Lex(e) => Some(e.column.clone()),
            Error::Syntax(e) => e.column.clone(),
        }
    }
}

/// No tokenizer rule matched at `column`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("LEX ERROR IN {}..{}; UNRECOGNIZED INPUT {context:?}", .column.start, .column.end)]
pub struct LexError {
    pub column: Column,
    /// At most 10 characters of the unmatched remainder.
    pub context: String,
}

impl LexError {
    pub const CONTEXT_CHARS: usize = 10;

    pub fn new(offset: usize, remainder: &str) -> LexError {
        let width = remainder.chars().next().map_or(0, char::len_utf8);
        LexError {
            column: offset..offset + width,
            context: remainder.chars().take(Self::CONTEXT_CHARS).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub column: Option<Column>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($kind:ident { $($field:ident: $value:expr),* $(,)? }) => {
        $crate::lang::SyntaxError::new($crate::lang::SyntaxErrorKind::$kind {
            $($field: $value.into()),*
        })
    };
    ($kind:ident { $($field:ident: $value:expr),* $(,)? }, ..$col:expr) => {
        $crate::error!($kind { $($field: $value),* }).in_column($col)
    };
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError { kind, column: None }
    }

    pub fn in_column(self, column: Option<Column>) -> SyntaxError {
        debug_assert!(self.column.is_none());
        SyntaxError {
            kind: self.kind,
            column,
        }
    }
}

impl std::error::Error for SyntaxError {}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.column {
            Some(column) => write!(
                f,
                "SYNTAX ERROR IN {}..{}; {}",
                column.start, column.end, self.kind
            ),
            None => write!(f, "SYNTAX ERROR; {}", self.kind),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    #[error("expected {expected}, found {found}")]
    Expected { expected: String, found: String },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: String },

    #[error("unknown statement starting with {found}")]
    UnknownStatement { found: String },

    #[error("expected a value, found {found}")]
    ExpectedValue { found: String },

    #[error("unexpected {found} outside of a block")]
    UnexpectedEndKeyword { found: String },

    #[error("nesting deeper than {limit} levels")]
    TooDeep { limit: usize },
}
