use lexers::{Scanner, SexprTokenizer};
use std::str::FromStr;

#[derive(PartialEq, Debug)]
pub enum ParseError {
    // the scan read past the end of the input, carries the position
    MalformedInput(usize),
    UnexpectedCParen,
    UnexpectedEOF,
}

#[derive(Clone, PartialEq, Debug)]
pub enum Sexpr {
    List(Vec<Sexpr>),
    Symbol(String),
    Number(i64),
}

pub struct Parser;

impl Parser {
    // The whole input parses into one outer List wrapping every top-level
    // form, so the evaluator always starts from a sequence. Empty input is
    // just an empty wrap.
    pub fn parse_str(expr: &str) -> Result<Sexpr, ParseError> {
        let mut lex = SexprTokenizer::scanner(expr);
        let mut seq = Vec::new();
        loop {
            match lex.next() {
                None => return Ok(Sexpr::List(seq)),
                Some(Err(err)) => return Err(ParseError::MalformedInput(err.pos)),
                Some(Ok(tok)) if tok == ")" => return Err(ParseError::UnexpectedCParen),
                Some(Ok(tok)) => seq.push(Self::parse(tok, &mut lex)?),
            }
        }
    }

    fn parse(tok: String, lex: &mut Scanner<SexprTokenizer>) -> Result<Sexpr, ParseError> {
        if tok != "(" {
            return Ok(Self::atom(&tok));
        }
        let mut list = Vec::new();
        loop {
            match lex.next() {
                None => return Err(ParseError::UnexpectedEOF),
                Some(Err(err)) => return Err(ParseError::MalformedInput(err.pos)),
                Some(Ok(tok)) if tok == ")" => return Ok(Sexpr::List(list)),
                Some(Ok(tok)) => list.push(Self::parse(tok, lex)?),
            }
        }
    }

    fn atom(tok: &str) -> Sexpr {
        match i64::from_str(tok) {
            Ok(num) => Sexpr::Number(num),
            Err(_) => Sexpr::Symbol(tok.to_string()),
        }
    }
}
