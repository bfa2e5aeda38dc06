#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Def(String, Vec<String>, Vec<Statement>),
    End,
    If(Expression, Vec<Statement>),
    While(Expression, Vec<Statement>),
    Print(Vec<Expression>),
    Return(Expression),
    Remark(String),
    Assign(String, Expression),
    Call(String, Vec<Expression>),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CompareOp {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl CompareOp {
    /// Maps an `operator` lexeme; `<>` and `><` are the same operator.
    pub fn from_lexeme(s: &str) -> Option<CompareOp> {
        use CompareOp::*;
        Some(match s {
            "=" => Equal,
            "<>" | "><" => NotEqual,
            "<" => Less,
            "<=" => LessEqual,
            ">" => Greater,
            ">=" => GreaterEqual,
            _ => return None,
        })
    }
}

impl std::fmt::Display for CompareOp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use CompareOp::*;
        match self {
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Or(Box<Expression>, Box<Expression>),
    And(Box<Expression>, Box<Expression>),
    Not(Box<Expression>),
    Compare(Box<Expression>, CompareOp, Box<Expression>),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mult(Box<Expression>, Box<Expression>),
    Divide(Box<Expression>, Box<Expression>),
    Negate(Box<Expression>),
    Call(String, Vec<Expression>),
    Id(String),
    Integer(String),
    Real(String),
    String(String),
}

pub trait Visitor {
    fn visit_statement(&mut self, _: &Statement) {}
    fn visit_expression(&mut self, _: &Expression) {}
}

pub trait AcceptVisitor {
    fn accept<V: Visitor>(&self, visitor: &mut V);
}

impl AcceptVisitor for Statement {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Statement::*;
        match self {
            End | Remark(_) => {}
            Def(_, _, body) => {
                for stmt in body {
                    stmt.accept(visitor);
                }
            }
            If(predicate, body) | While(predicate, body) => {
                predicate.accept(visitor);
                for stmt in body {
                    stmt.accept(visitor);
                }
            }
            Print(vec_expr) | Call(_, vec_expr) => {
                for expr in vec_expr {
                    expr.accept(visitor);
                }
            }
            Return(expr) | Assign(_, expr) => {
                expr.accept(visitor);
            }
        }
        visitor.visit_statement(self)
    }
}

impl AcceptVisitor for Expression {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Expression::*;
        match self {
            Id(_) | Integer(_) | Real(_) | String(_) => {}
            Call(_, vec_expr) => {
                for expr in vec_expr {
                    expr.accept(visitor);
                }
            }
            Not(expr) | Negate(expr) => expr.accept(visitor),
            Compare(expr1, _, expr2)
            | Or(expr1, expr2)
            | And(expr1, expr2)
            | Add(expr1, expr2)
            | Sub(expr1, expr2)
            | Mult(expr1, expr2)
            | Divide(expr1, expr2) => {
                expr1.accept(visitor);
                expr2.accept(visitor);
            }
        }
        visitor.visit_expression(self)
    }
}
