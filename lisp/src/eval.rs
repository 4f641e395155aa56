use crate::parser::{ParseError, Parser, Sexpr};
use std::collections::HashMap;

macro_rules! check {
    ($argcheck:expr, $err:expr) => {
        if !$argcheck {
            return Err($err);
        }
    };
}

#[derive(PartialEq, Debug)]
pub enum EvalErr {
    ParseError(ParseError),
    UnboundSymbol(String),
    UnrecognizedOperator(String),
    InvalidExpr,
}

// A scope in the chain: local bindings plus a borrow of the enclosing
// scope. Children never outlive their parent, so a whole chain is built
// and torn down within a single interpret() call.
pub struct Environment<'p> {
    vars: HashMap<String, i64>,
    outer: Option<&'p Environment<'p>>,
}

impl<'p> Environment<'p> {
    pub fn new() -> Self {
        Environment {
            vars: HashMap::new(),
            outer: None,
        }
    }

    pub fn child(&self) -> Environment<'_> {
        Environment {
            vars: HashMap::new(),
            outer: Some(self),
        }
    }

    // insert or overwrite in this scope only, ancestors are never touched
    pub fn define(&mut self, name: String, value: i64) {
        self.vars.insert(name, value);
    }

    // innermost scope first, then up the chain
    pub fn lookup(&self, sym: &str) -> Option<i64> {
        match self.vars.get(sym) {
            Some(value) => Some(*value),
            None => self.outer.and_then(|outer| outer.lookup(sym)),
        }
    }
}

enum Op {
    Add,
    Mult,
    Let,
}

impl Op {
    fn from_symbol(sym: &str) -> Option<Op> {
        match sym {
            "add" => Some(Op::Add),
            "mult" => Some(Op::Mult),
            "let" => Some(Op::Let),
            _ => None,
        }
    }
}

pub fn interpret(expr: &str) -> Result<i64, EvalErr> {
    match Parser::parse_str(expr) {
        Ok(ref expr) => eval(expr, &mut Environment::new()),
        Err(err) => Err(EvalErr::ParseError(err)),
    }
}

/// Reduce an expression to an integer under `env`. Arithmetic is native
/// `i64`: overflow panics in debug builds and wraps in release.
pub fn eval(expr: &Sexpr, env: &mut Environment) -> Result<i64, EvalErr> {
    match expr {
        Sexpr::Number(num) => Ok(*num),
        Sexpr::Symbol(sym) => env
            .lookup(sym)
            .ok_or_else(|| EvalErr::UnboundSymbol(sym.clone())),
        Sexpr::List(list) => match list.split_first() {
            None => Err(EvalErr::InvalidExpr),
            // a bare group, eg the outer wrap around "(add 1 2)"
            Some((only, [])) => scoped(only, env),
            Some((Sexpr::Symbol(op), args)) => match Op::from_symbol(op) {
                Some(Op::Add) => {
                    check!(args.len() == 2, EvalErr::InvalidExpr);
                    Ok(scoped(&args[0], env)? + scoped(&args[1], env)?)
                }
                Some(Op::Mult) => {
                    check!(args.len() == 2, EvalErr::InvalidExpr);
                    Ok(scoped(&args[0], env)? * scoped(&args[1], env)?)
                }
                Some(Op::Let) => eval_let(args, env),
                None => Err(EvalErr::UnrecognizedOperator(op.clone())),
            },
            Some(_) => Err(EvalErr::InvalidExpr),
        },
    }
}

// Operands and nested groups run under a throwaway child scope so any
// bindings they create stay invisible to the caller and to sibling
// operands.
fn scoped(expr: &Sexpr, env: &Environment) -> Result<i64, EvalErr> {
    eval(expr, &mut env.child())
}

// Sequential let*-style pairs: each value expression sees the bindings
// made by earlier pairs because those are defined into the current scope.
// An odd tail ends in a body expression; with an even tail the last
// pair is still bound and its value is the result.
fn eval_let(args: &[Sexpr], env: &mut Environment) -> Result<i64, EvalErr> {
    // only reached from multi-element forms, args holds at least one element
    let mut rest = args;
    loop {
        if let [body] = rest {
            return scoped(body, env);
        }
        let name = match &rest[0] {
            Sexpr::Symbol(sym) => sym.clone(),
            _ => return Err(EvalErr::InvalidExpr),
        };
        let value = scoped(&rest[1], env)?;
        env.define(name, value);
        if rest.len() == 2 {
            return Ok(value);
        }
        rest = &rest[2..];
    }
}
