#![deny(warnings)]

pub struct Scanner<I: Iterator>
where
    I::Item: Clone,
{
    src: I,
    buf: Vec<I::Item>,
    pos: isize,
    discarded: usize,
}

impl<I> Iterator for Scanner<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.pos += 1;
        self.prep_buffer();
        let blen = self.buf.len() as isize;
        if self.pos >= blen {
            self.pos = blen;
        }
        self.curr()
    }
}

impl<I> Scanner<I>
where
    I: Iterator,
    I::Item: Clone,
{
    pub fn new(source: I) -> Scanner<I> {
        Scanner {
            src: source,
            buf: Vec::new(),
            pos: -1,
            discarded: 0,
        }
    }

    // position within the retained buffer, -1 before the first item
    pub fn pos(&self) -> isize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: isize) -> bool {
        if pos < -1 || pos > (self.buf.len() as isize) {
            return false;
        }
        self.pos = pos;
        true
    }

    // absolute position in the source, including items already discarded
    // by ignore()/extract(). Saturates at the end of a drained source
    pub fn src_pos(&self) -> usize {
        let consumed = std::cmp::min((self.pos + 1) as usize, self.buf.len());
        self.discarded + consumed
    }

    pub fn curr(&self) -> Option<I::Item> {
        let pos = self.pos as usize;
        if self.pos < 0 || pos >= self.buf.len() {
            return None;
        }
        Some(self.buf[pos].clone())
    }

    // pull enough items from the source to back self.pos
    fn prep_buffer(&mut self) {
        while self.pos >= (self.buf.len() as isize) {
            if let Some(item) = self.src.next() {
                self.buf.push(item);
            } else {
                break;
            }
        }
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        let backtrack = self.pos;
        let peeked = self.next();
        self.pos = backtrack;
        peeked
    }

    // drop everything consumed so far, the scanner restarts at whatever
    // comes next
    pub fn ignore(&mut self) {
        if self.pos >= 0 {
            let n = (self.pos + 1) as usize;
            self.discarded += n;
            self.buf = if self.buf.len() > n {
                self.buf[n..].to_vec()
            } else {
                Vec::new()
            }
        }
        self.pos = -1;
    }

    // hand back the consumed run and drop it from the buffer
    pub fn extract(&mut self) -> Vec<I::Item> {
        let n = (self.pos + 1) as usize;
        let run = self.buf[..n].to_vec();
        self.ignore();
        run
    }
}

impl<I> Scanner<I>
where
    I: Iterator,
    I::Item: Clone + PartialEq,
{
    // Advance the scanner only if the next item is in the 'any' set,
    // self.curr() will return the matched item if accept matched any
    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        let backtrack = self.pos();
        if let Some(next) = self.next() {
            if any.contains(&next) {
                return Some(next);
            }
        }
        self.set_pos(backtrack);
        None
    }

    // Skip over the 'over' set, result is if the scanner was advanced,
    // after skip a call to self.curr() will return the last matching item
    pub fn skip_all(&mut self, over: &[I::Item]) -> bool {
        let mut advanced = false;
        while self.accept_any(over).is_some() {
            advanced = true;
        }
        advanced
    }

    // Consume up to an item in the 'any' set or EOF, return if the scanner
    // advanced. The delimiter itself is not consumed
    pub fn until_any(&mut self, any: &[I::Item]) -> bool {
        let mut advanced = false;
        while let Some(next) = self.peek() {
            if any.contains(&next) {
                break;
            }
            self.next();
            advanced = true;
        }
        advanced
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }
}
