/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the BASIC language.

Source text becomes a sequence of [`token::Token`] values, which the parser
turns into [`ast::Statement`] trees. Both steps stop at the first error.

*/

pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod cursor;
mod lex;
mod options;
mod parse;
mod program;

pub use cursor::Cursor;
pub use error::{Error, LexError, SyntaxError, SyntaxErrorKind};
pub use lex::{tokenize, tokenize_with};
pub use options::Options;
pub use parse::{parse, parse_with, Parser};
pub use program::Program;

pub mod ast;
pub mod token;
