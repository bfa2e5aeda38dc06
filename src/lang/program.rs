use super::ast::*;
use super::lex::*;
use super::parse::*;
use super::token::*;
use super::{Error, Options};

/// One source buffer, tokenized and parsed.
#[derive(Debug, PartialEq)]
pub struct Program {
    tokens: Vec<Token>,
    statements: Vec<Statement>,
}

impl Program {
    pub fn new(s: &str, options: &Options) -> Result<Program, Error> {
        let tokens = tokenize_with(s, options)?;
        let statements = parse_with(&tokens, options)?;
        Ok(Program { tokens, statements })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn visit<V: Visitor>(&self, visitor: &mut V) {
        for statement in &self.statements {
            statement.accept(visitor);
        }
    }
}

impl std::str::FromStr for Program {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Program::new(s, &Options::default())
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: Vec<String> = self
            .tokens
            .iter()
            .map(|t| match t.kind {
                Kind::String => format!("\"{}\"", t.lexeme),
                Kind::Remark => format!("rem {}\n", t.lexeme),
                _ => t.lexeme.clone(),
            })
            .collect();
        write!(f, "{}", s.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let p: Program = "WHILE i<10 DO print \"hi\"; i ENDWHILE".parse().unwrap();
        assert_eq!(p.to_string(), "while i < 10 do print \"hi\" ; i endwhile");
        assert_eq!(p.tokens().len(), 10);
        assert_eq!(p.statements().len(), 1);
    }

    #[test]
    fn test_display_reparses() {
        let source = "Def f(a, b) return a*b EndDef : y := f(2, -3.5) >= 1";
        let p: Program = source.parse().unwrap();
        let again: Program = p.to_string().parse().unwrap();
        assert_eq!(p.statements(), again.statements());
    }
}
