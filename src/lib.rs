//! # BASIC front end
//!
//! Tokenizer and parser for a small structured BASIC. Programs use
//! `DEF`/`ENDDEF` functions, `IF`/`ENDIF` and `WHILE`/`ENDWHILE` blocks,
//! `:=` assignment and `REM` comments. Statements may share a line when
//! separated by `:`.
//! ```text
//! REM greatest common divisor
//! DEF gcd(a, b)
//!   WHILE b <> 0 DO t := b : b := a - b * (a / b) : a := t ENDWHILE
//!   RETURN a
//! ENDDEF
//! PRINT "gcd is "; gcd(12, 18)
//! ```
//!
//! ```
//! use basic::lang::{ast::*, parse, tokenize};
//!
//! let tokens = tokenize("x := 5").unwrap();
//! let tree = parse(&tokens).unwrap();
//! assert_eq!(
//!     tree,
//!     vec![Statement::Assign("x".to_string(), Expression::Integer("5".to_string()))]
//! );
//! ```

pub mod lang;
