mod scanner;
mod sexpr_tokenizer;

pub use crate::scanner::Scanner;
pub use crate::sexpr_tokenizer::{tokenize, ScanError, SexprTokenizer};
