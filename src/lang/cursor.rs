use super::{error::SyntaxError, token::*};

type Result<T> = std::result::Result<T, SyntaxError>;

/// Forward-only read position into a token slice. `Remark` tokens are
/// invisible to every read except `next_remark`.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Cursor<'a> {
        Cursor {
            tokens,
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.peek().is_none()
    }

    fn past_remarks(&self) -> usize {
        let mut position = self.position;
        while matches!(self.tokens.get(position), Some(t) if t.kind == Kind::Remark) {
            position += 1;
        }
        position
    }

    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.past_remarks())
    }

    pub fn next(&mut self) -> Option<&'a Token> {
        self.position = self.past_remarks();
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    /// Consumes a remark sitting directly at the read position.
    pub fn next_remark(&mut self) -> Option<&'a Token> {
        let token = self
            .tokens
            .get(self.position)
            .filter(|t| t.kind == Kind::Remark)?;
        self.position += 1;
        Some(token)
    }

    pub fn next_is_kind(&self, kind: Kind) -> bool {
        matches!(self.peek(), Some(t) if t.kind == kind)
    }

    pub fn next_is_keyword(&self, word: &str) -> bool {
        matches!(self.peek(), Some(t) if t.is_keyword(word))
    }

    /// Consumes a token of `kind` or fails naming what was there instead.
    pub fn require_kind(&mut self, kind: Kind) -> Result<&'a Token> {
        self.require(&kind.to_string(), |t| t.kind == kind)
    }

    pub fn require_keyword(&mut self, word: &str) -> Result<&'a Token> {
        self.require(word, |t| t.is_keyword(word))
    }

    fn require(&mut self, expected: &str, accept: impl Fn(&Token) -> bool) -> Result<&'a Token> {
        match self.peek() {
            Some(t) if accept(t) => {
                self.next();
                Ok(t)
            }
            Some(t) => Err(error!(
                Expected { expected: expected, found: t.to_string() },
                ..Some(t.column.clone())
            )),
            None => Err(error!(UnexpectedEnd { expected: expected }, ..self.end_column())),
        }
    }

    /// Empty column just past the last token, if there was one.
    pub fn end_column(&self) -> Option<super::Column> {
        self.tokens.last().map(|t| t.column.end..t.column.end)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{lex::tokenize, lex::tokenize_with, Options, SyntaxErrorKind};
    use super::*;

    #[test]
    fn test_require() {
        let tokens = tokenize("x := 5").unwrap();
        let mut cursor = Cursor::new(&tokens);
        assert_eq!(cursor.require_kind(Kind::Id).unwrap().lexeme, "x");
        let e = cursor.require_kind(Kind::LParen).unwrap_err();
        assert_eq!(
            e.kind,
            SyntaxErrorKind::Expected {
                expected: "lparen".to_string(),
                found: "assign \":=\"".to_string()
            }
        );
        assert_eq!(e.column, Some(2..4));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_require_at_end() {
        let tokens = tokenize("if").unwrap();
        let mut cursor = Cursor::new(&tokens);
        cursor.require_keyword("if").unwrap();
        assert!(cursor.is_exhausted());
        let e = cursor.require_keyword("then").unwrap_err();
        assert_eq!(
            e.kind,
            SyntaxErrorKind::UnexpectedEnd {
                expected: "then".to_string()
            }
        );
        assert_eq!(e.column, Some(2..2));
    }

    #[test]
    fn test_remarks_are_skipped() {
        let options = Options::default().keep_remarks(true);
        let tokens = tokenize_with("rem a\nif rem b\nthen rem c", &options).unwrap();
        let mut cursor = Cursor::new(&tokens);
        assert_eq!(cursor.peek().unwrap().lexeme, "if");
        assert_eq!(cursor.next_remark().unwrap().lexeme, "a");
        assert!(cursor.next_remark().is_none());
        cursor.require_keyword("if").unwrap();
        cursor.require_keyword("then").unwrap();
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.next_remark().unwrap().lexeme, "c");
        assert!(cursor.next().is_none());
    }
}
