use crate::parser::{ParseError, Parser, Sexpr};

#[test]
fn test_parse_nested() {
    let p = Parser::parse_str("(mult 3 (add 2 3))");
    let r = Sexpr::List(vec![Sexpr::List(vec![
        Sexpr::Symbol(format!("mult")),
        Sexpr::Number(3),
        Sexpr::List(vec![
            Sexpr::Symbol(format!("add")),
            Sexpr::Number(2),
            Sexpr::Number(3),
        ]),
    ])]);
    assert_eq!(p.unwrap(), r);
}

#[test]
fn test_parse_let_pairs() {
    let p = Parser::parse_str("(let x 2 (mult x 5))");
    let r = Sexpr::List(vec![Sexpr::List(vec![
        Sexpr::Symbol(format!("let")),
        Sexpr::Symbol(format!("x")),
        Sexpr::Number(2),
        Sexpr::List(vec![
            Sexpr::Symbol(format!("mult")),
            Sexpr::Symbol(format!("x")),
            Sexpr::Number(5),
        ]),
    ])]);
    assert_eq!(p.unwrap(), r);
}

#[test]
fn test_parse_signed_numbers() {
    let p = Parser::parse_str("(add -1 +2)");
    let r = Sexpr::List(vec![Sexpr::List(vec![
        Sexpr::Symbol(format!("add")),
        Sexpr::Number(-1),
        Sexpr::Number(2),
    ])]);
    assert_eq!(p.unwrap(), r);
}

#[test]
fn test_parse_empty_input() {
    assert_eq!(Parser::parse_str(""), Ok(Sexpr::List(Vec::new())));
    assert_eq!(Parser::parse_str("  "), Ok(Sexpr::List(Vec::new())));
}

#[test]
fn test_parse_alnum_symbols() {
    // a1/b2 don't parse as numbers so they stay symbols
    let p = Parser::parse_str("(let a1 3 b2 4)");
    let r = Sexpr::List(vec![Sexpr::List(vec![
        Sexpr::Symbol(format!("let")),
        Sexpr::Symbol(format!("a1")),
        Sexpr::Number(3),
        Sexpr::Symbol(format!("b2")),
        Sexpr::Number(4),
    ])]);
    assert_eq!(p.unwrap(), r);
}

#[test]
fn test_parse_unbalanced() {
    // stray closer at the top level
    assert_eq!(Parser::parse_str("(add 1 2))"), Err(ParseError::UnexpectedCParen));
    // dangling opener whose tail ends on a delimiter
    assert_eq!(Parser::parse_str("(add (x) "), Err(ParseError::UnexpectedEOF));
    // truncated input surfaces the scan position instead
    assert_eq!(Parser::parse_str("(add 1 2"), Err(ParseError::MalformedInput(8)));
    assert_eq!(Parser::parse_str("42"), Err(ParseError::MalformedInput(2)));
}
