#![deny(warnings)]

use crate::scanner::Scanner;

// The scan faulted reading past the end of the input, `pos` is the
// character index the read was attempted at. Truncated/unbalanced
// expressions end up here, eg: "(add 1 2"
#[derive(Clone, PartialEq, Debug)]
pub struct ScanError {
    pub pos: usize,
}

// Splits s-expression text into string tokens: "(", ")", or a literal
// run of anything else. Only plain spaces separate tokens and a run
// must stop at a delimiter, never at end of input.
pub struct SexprTokenizer<'a>(Scanner<std::str::Chars<'a>>);

impl<'a> SexprTokenizer<'a> {
    pub fn new(source: &'a str) -> SexprTokenizer<'a> {
        SexprTokenizer(Scanner::new(source.chars()))
    }

    pub fn scanner(source: &'a str) -> Scanner<SexprTokenizer<'a>> {
        Scanner::new(SexprTokenizer::new(source))
    }
}

impl Iterator for SexprTokenizer<'_> {
    type Item = Result<String, ScanError>;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.skip_all(&[' ']);
        self.0.ignore();
        if self.0.accept_any(&['(', ')']).is_some() {
            Some(Ok(self.0.extract_string()))
        } else if self.0.until_any(&['(', ')', ' ']) {
            if self.0.peek().is_none() {
                // ran off the end mid-run instead of hitting a delimiter
                return Some(Err(ScanError {
                    pos: self.0.src_pos(),
                }));
            }
            Some(Ok(self.0.extract_string()))
        } else {
            None
        }
    }
}

// Collect all tokens eagerly, handy for tests and embedders
pub fn tokenize(source: &str) -> Result<Vec<String>, ScanError> {
    SexprTokenizer::new(source).collect()
}

///////////////////////////////////////////////////////////////////////////////
