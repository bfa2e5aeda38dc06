use super::{ast::*, cursor::Cursor, token::*, Column, Error, Options, SyntaxError};
use tracing::debug;

type Result<T> = std::result::Result<T, SyntaxError>;
type Binary = fn(Box<Expression>, Box<Expression>) -> Expression;

/// Parses a whole program with default options.
pub fn parse(tokens: &[Token]) -> std::result::Result<Vec<Statement>, Error> {
    parse_with(tokens, &Options::default())
}

pub fn parse_with(
    tokens: &[Token],
    options: &Options,
) -> std::result::Result<Vec<Statement>, Error> {
    let mut parser = Parser::new(tokens, options);
    let statements = parser.statements()?;
    // Only an end-keyword can stop the top-level sequence early.
    if let Some(t) = parser.cursor.peek() {
        let e = error!(
            UnexpectedEndKeyword { found: t.to_string() },
            ..Some(t.column.clone())
        );
        return Err(e.into());
    }
    debug!(statements = statements.len(), "parsed");
    Ok(statements)
}

pub struct Parser<'a> {
    cursor: Cursor<'a>,
    options: &'a Options,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], options: &'a Options) -> Parser<'a> {
        Parser {
            cursor: Cursor::new(tokens),
            options,
            depth: 0,
        }
    }

    fn column(&self) -> Option<Column> {
        match self.cursor.peek() {
            Some(t) => Some(t.column.clone()),
            None => self.cursor.end_column(),
        }
    }

    fn nested<T>(&mut self, levels: usize, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let limit = self.options.max_depth;
        if self.depth + levels > limit {
            return Err(error!(TooDeep { limit: limit }, ..self.column()));
        }
        self.depth += levels;
        let result = f(self);
        self.depth -= levels;
        result
    }

    /// Statements up to the end of input or an end-keyword, which is left unconsumed.
    /// Remarks are only picked up here, between statements; anywhere else the
    /// cursor steps over them.
    pub fn statements(&mut self) -> Result<Vec<Statement>> {
        let mut v: Vec<Statement> = vec![];
        loop {
            while let Some(t) = self.cursor.next_remark() {
                v.push(Statement::Remark(t.lexeme.clone()));
            }
            match self.cursor.peek() {
                None => return Ok(v),
                Some(t) if t.is_end_keyword() => return Ok(v),
                _ => {}
            }
            v.push(self.statement()?);
            if self.cursor.next_is_kind(Kind::Colon) {
                self.cursor.next();
            }
        }
    }

    fn body(&mut self) -> Result<Vec<Statement>> {
        self.nested(1, Self::statements)
    }

    pub fn statement(&mut self) -> Result<Statement> {
        let token = match self.cursor.next() {
            Some(t) => t,
            None => {
                return Err(error!(
                    UnexpectedEnd { expected: "a statement" },
                    ..self.cursor.end_column()
                ))
            }
        };
        match token.kind {
            Kind::Keyword => Statement::for_keyword(self, token),
            Kind::Id => Statement::for_ident(self, token),
            _ => Err(unknown_statement(token)),
        }
    }

    /// Or-expression, the loosest level of the cascade.
    pub fn expression(&mut self) -> Result<Expression> {
        self.nested(1, |this| {
            let lhs = this.and_expr()?;
            if this.cursor.next_is_keyword("or") {
                this.cursor.next();
                let rhs = this.expression()?;
                return Ok(Expression::Or(Box::new(lhs), Box::new(rhs)));
            }
            Ok(lhs)
        })
    }

    fn and_expr(&mut self) -> Result<Expression> {
        let lhs = self.not_expr()?;
        if self.cursor.next_is_keyword("and") {
            self.cursor.next();
            let rhs = self.nested(1, Self::and_expr)?;
            return Ok(Expression::And(Box::new(lhs), Box::new(rhs)));
        }
        Ok(lhs)
    }

    fn not_expr(&mut self) -> Result<Expression> {
        if self.cursor.next_is_keyword("not") {
            self.cursor.next();
            return Ok(Expression::Not(Box::new(self.compare_expr()?)));
        }
        self.compare_expr()
    }

    fn compare_expr(&mut self) -> Result<Expression> {
        let lhs = self.add_expr()?;
        let op = self
            .cursor
            .peek()
            .filter(|t| t.kind == Kind::Operator)
            .and_then(|t| CompareOp::from_lexeme(&t.lexeme));
        if let Some(op) = op {
            self.cursor.next();
            let rhs = self.add_expr()?;
            return Ok(Expression::Compare(Box::new(lhs), op, Box::new(rhs)));
        }
        Ok(lhs)
    }

    fn add_expr(&mut self) -> Result<Expression> {
        let mut lhs = self.mult_expr()?;
        loop {
            let build: Binary = match self.cursor.peek() {
                Some(t) if t.kind == Kind::Plus => Expression::Add,
                Some(t) if t.kind == Kind::Minus => Expression::Sub,
                _ => return Ok(lhs),
            };
            self.cursor.next();
            let rhs = self.mult_expr()?;
            lhs = build(Box::new(lhs), Box::new(rhs));
        }
    }

    fn mult_expr(&mut self) -> Result<Expression> {
        let mut lhs = self.negate_expr()?;
        loop {
            let build: Binary = match self.cursor.peek() {
                Some(t) if t.kind == Kind::Times => Expression::Mult,
                Some(t) if t.kind == Kind::Divide => Expression::Divide,
                _ => return Ok(lhs),
            };
            self.cursor.next();
            let rhs = self.negate_expr()?;
            lhs = build(Box::new(lhs), Box::new(rhs));
        }
    }

    fn negate_expr(&mut self) -> Result<Expression> {
        let mut count = 0;
        while self.cursor.next_is_kind(Kind::Minus) {
            self.cursor.next();
            count += 1;
        }
        self.nested(count, |this| {
            let mut expr = this.value()?;
            for _ in 0..count {
                expr = Expression::Negate(Box::new(expr));
            }
            Ok(expr)
        })
    }

    fn value(&mut self) -> Result<Expression> {
        let token = match self.cursor.next() {
            Some(t) => t,
            None => {
                return Err(error!(
                    UnexpectedEnd { expected: "a value" },
                    ..self.cursor.end_column()
                ))
            }
        };
        match token.kind {
            Kind::LParen => {
                let expr = self.expression()?;
                self.cursor.require_kind(Kind::RParen)?;
                Ok(expr)
            }
            Kind::Id => {
                if self.cursor.next_is_kind(Kind::LParen) {
                    self.cursor.next();
                    let args = self.expression_list()?;
                    self.cursor.require_kind(Kind::RParen)?;
                    return Ok(Expression::Call(token.lexeme.clone(), args));
                }
                Ok(Expression::Id(token.lexeme.clone()))
            }
            Kind::Integer => Ok(Expression::Integer(token.lexeme.clone())),
            Kind::Real => Ok(Expression::Real(token.lexeme.clone())),
            Kind::String => Ok(Expression::String(token.lexeme.clone())),
            _ => Err(error!(
                ExpectedValue { found: token.to_string() },
                ..Some(token.column.clone())
            )),
        }
    }

    /// One or more identifiers separated by commas.
    pub fn identifier_list(&mut self) -> Result<Vec<String>> {
        let mut v: Vec<String> = vec![];
        loop {
            v.push(self.cursor.require_kind(Kind::Id)?.lexeme.clone());
            if !self.cursor.next_is_kind(Kind::Comma) {
                return Ok(v);
            }
            self.cursor.next();
        }
    }

    /// One or more expressions separated by commas.
    pub fn expression_list(&mut self) -> Result<Vec<Expression>> {
        let mut v: Vec<Expression> = vec![];
        loop {
            v.push(self.expression()?);
            if !self.cursor.next_is_kind(Kind::Comma) {
                return Ok(v);
            }
            self.cursor.next();
        }
    }

    /// Zero or more expressions separated by semicolons. The list ends at the
    /// end of input, a colon, or a keyword that cannot start an expression.
    pub fn print_list(&mut self) -> Result<Vec<Expression>> {
        let mut v: Vec<Expression> = vec![];
        loop {
            match self.cursor.peek() {
                None => return Ok(v),
                Some(t) if t.kind == Kind::Keyword && t.lexeme != "not" => return Ok(v),
                Some(t) if t.kind == Kind::Colon => return Ok(v),
                _ => {}
            }
            v.push(self.expression()?);
            if !self.cursor.next_is_kind(Kind::Semicolon) {
                return Ok(v);
            }
            self.cursor.next();
        }
    }
}

fn unknown_statement(token: &Token) -> SyntaxError {
    error!(
        UnknownStatement { found: token.to_string() },
        ..Some(token.column.clone())
    )
}

impl Statement {
    fn for_keyword(parse: &mut Parser, token: &Token) -> Result<Statement> {
        match token.lexeme.as_str() {
            "def" => Self::r#def(parse),
            "end" => Ok(Statement::End),
            "if" => Self::r#if(parse),
            "while" => Self::r#while(parse),
            "print" => Ok(Statement::Print(parse.print_list()?)),
            "return" => Ok(Statement::Return(parse.expression()?)),
            _ => Err(unknown_statement(token)),
        }
    }

    fn for_ident(parse: &mut Parser, token: &Token) -> Result<Statement> {
        let name = token.lexeme.clone();
        match parse.cursor.peek() {
            Some(t) if t.kind == Kind::Assign => {
                parse.cursor.next();
                Ok(Statement::Assign(name, parse.expression()?))
            }
            Some(t) if t.kind == Kind::LParen => {
                parse.cursor.next();
                let args = parse.expression_list()?;
                parse.cursor.require_kind(Kind::RParen)?;
                Ok(Statement::Call(name, args))
            }
            Some(t) => Err(error!(
                Expected { expected: "assign or lparen", found: t.to_string() },
                ..Some(t.column.clone())
            )),
            None => Err(error!(
                UnexpectedEnd { expected: "assign or lparen" },
                ..parse.cursor.end_column()
            )),
        }
    }

    fn r#def(parse: &mut Parser) -> Result<Statement> {
        let name = parse.cursor.require_kind(Kind::Id)?.lexeme.clone();
        parse.cursor.require_kind(Kind::LParen)?;
        let params = parse.identifier_list()?;
        parse.cursor.require_kind(Kind::RParen)?;
        let body = parse.body()?;
        parse.cursor.require_keyword("enddef")?;
        Ok(Statement::Def(name, params, body))
    }

    fn r#if(parse: &mut Parser) -> Result<Statement> {
        let predicate = parse.expression()?;
        parse.cursor.require_keyword("then")?;
        let body = parse.body()?;
        parse.cursor.require_keyword("endif")?;
        Ok(Statement::If(predicate, body))
    }

    fn r#while(parse: &mut Parser) -> Result<Statement> {
        let predicate = parse.expression()?;
        parse.cursor.require_keyword("do")?;
        let body = parse.body()?;
        parse.cursor.require_keyword("endwhile")?;
        Ok(Statement::While(predicate, body))
    }
}
