mod eval;
mod parser;

pub use crate::eval::{eval, interpret, Environment, EvalErr};
pub use crate::parser::{ParseError, Parser, Sexpr};

#[cfg(test)]
mod parser_test;
