use basic::lang::{ast::*, parse, tokenize, Error, SyntaxError, SyntaxErrorKind};

fn parse_str(s: &str) -> Vec<Statement> {
    let tokens = tokenize(s).unwrap();
    match parse(&tokens) {
        Ok(v) => v,
        Err(e) => panic!("{} : {:?}", e, e),
    }
}

fn parse_err(s: &str) -> SyntaxError {
    let tokens = tokenize(s).unwrap();
    match parse(&tokens) {
        Err(Error::Syntax(e)) => e,
        other => panic!("{:?}", other),
    }
}

fn int(s: &str) -> Expression {
    Expression::Integer(s.to_string())
}

fn var(s: &str) -> Expression {
    Expression::Id(s.to_string())
}

fn assign(name: &str, expr: Expression) -> Statement {
    Statement::Assign(name.to_string(), expr)
}

#[test]
fn test_empty_program() {
    assert!(parse_str("").is_empty());
    assert!(parse_str("REM only a comment").is_empty());
}

#[test]
fn test_assign() {
    assert_eq!(parse_str("x := 5"), vec![assign("x", int("5"))]);
}

#[test]
fn test_precedence() {
    let answer = Expression::Add(
        Box::new(int("2")),
        Box::new(Expression::Mult(Box::new(int("3")), Box::new(int("4")))),
    );
    assert_eq!(parse_str("x := 2 + 3 * 4"), vec![assign("x", answer)]);
}

#[test]
fn test_colon_separated() {
    assert_eq!(
        parse_str("x := 1 : y := 2"),
        vec![assign("x", int("1")), assign("y", int("2"))]
    );
}

#[test]
fn test_colon_is_optional() {
    assert_eq!(
        parse_str("x := 1 y := 2\nz := 3 :"),
        vec![assign("x", int("1")), assign("y", int("2")), assign("z", int("3"))]
    );
}

#[test]
fn test_if() {
    let answer = Statement::If(
        Expression::Compare(Box::new(var("x")), CompareOp::Greater, Box::new(int("0"))),
        vec![assign("y", int("1"))],
    );
    assert_eq!(parse_str("IF x > 0 THEN y := 1 ENDIF"), vec![answer]);
}

#[test]
fn test_missing_endif() {
    let e = parse_err("IF x THEN");
    assert_eq!(
        e.kind,
        SyntaxErrorKind::UnexpectedEnd {
            expected: "endif".to_string()
        }
    );
    assert!(e.to_string().contains("expected endif"));
}

#[test]
fn test_wrong_end_keyword() {
    let e = parse_err("WHILE x DO y := 1 ENDIF");
    assert_eq!(
        e.kind,
        SyntaxErrorKind::Expected {
            expected: "endwhile".to_string(),
            found: "keyword \"endif\"".to_string()
        }
    );
    assert_eq!(e.column, Some(18..23));
}

#[test]
fn test_empty_print() {
    assert_eq!(parse_str("PRINT"), vec![Statement::Print(vec![])]);
}

#[test]
fn test_error_aborts_whole_parse() {
    let tokens = tokenize("x := 1 : y := : z := 3").unwrap();
    assert!(parse(&tokens).is_err());
}

#[test]
fn test_unknown_statement() {
    let e = parse_err("x := 1 : 5");
    assert_eq!(
        e.kind,
        SyntaxErrorKind::UnknownStatement {
            found: "integer \"5\"".to_string()
        }
    );
    assert_eq!(e.column, Some(9..10));
    let e = parse_err("THEN");
    assert_eq!(
        e.kind,
        SyntaxErrorKind::UnknownStatement {
            found: "keyword \"then\"".to_string()
        }
    );
}

#[test]
fn test_id_needs_assign_or_call() {
    let e = parse_err("x = 1");
    assert_eq!(
        e.kind,
        SyntaxErrorKind::Expected {
            expected: "assign or lparen".to_string(),
            found: "operator \"=\"".to_string()
        }
    );
    let e = parse_err("x");
    assert_eq!(
        e.kind,
        SyntaxErrorKind::UnexpectedEnd {
            expected: "assign or lparen".to_string()
        }
    );
}

#[test]
fn test_top_level_end_keyword() {
    let e = parse_err("ENDIF");
    assert_eq!(
        e.kind,
        SyntaxErrorKind::UnexpectedEndKeyword {
            found: "keyword \"endif\"".to_string()
        }
    );
}

#[test]
fn test_sample_program() {
    let source = include_str!("../demos/sample.bas");
    let tree = parse_str(source);
    assert_eq!(tree.len(), 8);
    match &tree[0] {
        Statement::Def(name, params, body) => {
            assert_eq!(name, "fact");
            assert_eq!(params, &["n"]);
            assert_eq!(body.len(), 2);
        }
        other => panic!("{:?}", other),
    }
    assert_eq!(tree[6], Statement::Print(vec![]));
    assert_eq!(tree[7], Statement::End);
}
